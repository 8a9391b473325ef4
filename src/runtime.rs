//! Background task wiring.
//!
//! The two recurring tasks (reminder loop, verse rotator) run on a tokio
//! runtime owned by the binary; the UI keeps only channel ends.

use crate::config::AppConfig;
use crate::notify::Notifier;
use crate::reminders::{ReminderChecker, run_reminder_loop};
use crate::shaping::TextShaper;
use crate::verses::{VerseBook, VerseUpdate, run_verse_rotator};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Channel ends and join handles for the recurring tasks.
pub struct BackgroundTasks {
    /// Latest verse selection, updated by the rotator.
    pub verse_rx: watch::Receiver<VerseUpdate>,
    /// Manual verse refresh trigger.
    pub refresh_tx: mpsc::UnboundedSender<()>,
    /// Handles for the spawned loops.
    pub handles: Vec<JoinHandle<()>>,
}

/// Spawn the reminder loop and verse rotator on the given runtime handle.
pub fn spawn_background(
    handle: &Handle,
    config: &AppConfig,
    notifier: Arc<dyn Notifier>,
    shaper: Arc<dyn TextShaper>,
) -> BackgroundTasks {
    let checker = ReminderChecker::from_config(&config.reminders);
    let tick = Duration::from_secs(config.reminders.tick_secs.max(1));
    let reminder_handle = handle.spawn(run_reminder_loop(checker, tick, notifier));

    let (verse_tx, verse_rx) = watch::channel(VerseUpdate::default());
    let (refresh_tx, refresh_rx) = mpsc::unbounded_channel();
    let book = VerseBook::new(config.verses.verses.clone());
    let rotate = Duration::from_secs(config.verses.rotate_secs.max(1));
    let verse_handle = handle.spawn(run_verse_rotator(book, rotate, shaper, verse_tx, refresh_rx));

    BackgroundTasks {
        verse_rx,
        refresh_tx,
        handles: vec![reminder_handle, verse_handle],
    }
}
