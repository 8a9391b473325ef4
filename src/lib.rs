//! Confera: conference companion with agenda tabs and lecture reminders.
//!
//! # Architecture
//!
//! Independent stages connected by channels:
//! - **Reminder loop**: tokio interval → schedule window check → desktop
//!   notifier (`notify-send`/`osascript`)
//! - **Verse rotator**: hourly tick or manual refresh → watch channel → UI
//! - **UI**: ratatui tab view on the main thread (Home, Schedule, Verses,
//!   Paul's Life, Hymns)
//!
//! The reading panels are loaded once at startup; RTL text is reordered
//! for display by the `shaping` module.

pub mod config;
pub mod content;
pub mod error;
pub mod notify;
pub mod reminders;
pub mod runtime;
pub mod schedule;
pub mod shaping;
pub mod theme;
pub mod ui;
pub mod verses;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use reminders::{NotificationEvent, ReminderChecker};
pub use schedule::ScheduleEntry;
