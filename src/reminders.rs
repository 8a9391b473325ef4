//! Lecture reminder checking and the background reminder loop.
//!
//! [`ReminderChecker::due`] is a pure function of the wall-clock time so
//! it can be tested with fixed instants; [`run_reminder_loop`] wraps it in
//! a tokio interval that reads the local clock once per tick and pushes
//! every due event into the [`Notifier`].
//!
//! The window rule is deliberately the historical one: a reminder fires
//! whenever `now` is on the entry's calendar date and the time of day is
//! at or past `starts_at - lookahead`. There is no upper bound and no
//! fired-flag, so an open window keeps producing the same event on every
//! tick until midnight. See DESIGN.md for why this is kept as-is.

use crate::config::ReminderConfig;
use crate::notify::Notifier;
use crate::schedule::ScheduleEntry;
use chrono::{Duration, Local, NaiveDateTime};
use std::sync::Arc;
use tracing::{info, warn};

/// A single notification handed to the sink. Transient; no identity
/// beyond one `notify` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    /// Short notification title.
    pub title: String,
    /// Notification body.
    pub message: String,
}

/// Decides which schedule entries deserve a reminder at a given instant.
pub struct ReminderChecker {
    title: String,
    lookahead: Duration,
    entries: Vec<ScheduleEntry>,
}

impl ReminderChecker {
    /// Create a checker with an explicit title, lookahead and entry list.
    pub fn new(title: impl Into<String>, lookahead_mins: i64, entries: Vec<ScheduleEntry>) -> Self {
        Self {
            title: title.into(),
            lookahead: Duration::minutes(lookahead_mins),
            entries,
        }
    }

    /// Create a checker from the reminder section of the config.
    pub fn from_config(config: &ReminderConfig) -> Self {
        Self::new(
            config.title.clone(),
            config.lookahead_mins,
            config.entries.clone(),
        )
    }

    /// Number of entries under watch.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when there is nothing to remind about.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns one event per entry whose reminder window is open at `now`.
    ///
    /// An entry's window is open when `now` shares its calendar date and
    /// `now`'s time of day is at or past `(starts_at - lookahead)`'s time
    /// of day. Because only times of day are compared, a window that
    /// opens before midnight (entries earlier than the lookahead past
    /// midnight) does not fire until that wall-clock time recurs on the
    /// entry's own date.
    pub fn due(&self, now: NaiveDateTime) -> Vec<NotificationEvent> {
        self.entries
            .iter()
            .filter(|entry| {
                let window_start = entry.starts_at - self.lookahead;
                now.date() == entry.starts_at.date() && now.time() >= window_start.time()
            })
            .map(|entry| NotificationEvent {
                title: self.title.clone(),
                message: entry.message.clone(),
            })
            .collect()
    }
}

/// Background reminder loop: once per `tick`, compare the local clock
/// against the schedule and push due events into the notifier.
///
/// Delivery is best effort; a sink failure is logged and the loop keeps
/// going. Runs until the owning runtime shuts down.
pub async fn run_reminder_loop(
    checker: ReminderChecker,
    tick: std::time::Duration,
    notifier: Arc<dyn Notifier>,
) {
    info!("reminder loop started with {} entries", checker.len());
    let mut interval = tokio::time::interval(tick);

    loop {
        interval.tick().await;
        let now = Local::now().naive_local();
        for event in checker.due(now) {
            info!(reminder = %event.message, "reminder window open");
            if let Err(e) = notifier.notify(&event) {
                warn!("cannot deliver notification: {e}");
            }
        }
    }
}
