//! Conference companion terminal app.
//!
//! Logs go to a rolling file because stdout hosts the TUI. Set `RUST_LOG`
//! to adjust verbosity.

use confera::config::AppConfig;
use confera::notify::{self, Notifier};
use confera::runtime::spawn_background;
use confera::shaping::{BidiShaper, TextShaper};
use confera::ui::{self, UiState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let _log_guard = init_logging();

    let config = AppConfig::load_or_default()?;
    info!(
        "confera starting with {} reminder entries",
        config.reminders.entries.len()
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let notifier: Arc<dyn Notifier> = Arc::from(notify::create_notifier(
        config.reminders.icon_path.clone(),
        config.reminders.timeout_secs,
    ));
    let shaper: Arc<dyn TextShaper> = Arc::new(BidiShaper);

    let tasks = spawn_background(runtime.handle(), &config, notifier, Arc::clone(&shaper));
    let (paul_life, hymns) = confera::content::load_panels(&config.content, shaper.as_ref())?;

    let mut terminal = ratatui::init();
    let mut state = UiState::new(
        &config,
        paul_life,
        hymns,
        tasks.verse_rx.clone(),
        tasks.refresh_tx.clone(),
    );
    let result = ui::run(&mut terminal, &mut state);
    ratatui::restore();

    runtime.shutdown_background();
    info!("confera shut down cleanly");
    result.map_err(Into::into)
}

/// Route logs to a daily-rolling file under the per-user state directory.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let log_dir = dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("confera");
    let appender = tracing_appender::rolling::daily(log_dir, "confera.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("confera=info")),
        )
        .init();

    guard
}
