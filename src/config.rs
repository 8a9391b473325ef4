//! Configuration types for the conference companion.
//!
//! Every field has a default carrying the built-in conference data, so
//! the TOML file is optional. Dates inside `starts_at` values are written
//! as quoted strings, e.g. `starts_at = "2024-09-23T09:45:00"`.

use crate::schedule::{AgendaDay, ScheduleEntry};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Lecture reminder settings.
    pub reminders: ReminderConfig,
    /// Verse rotation settings.
    pub verses: VerseConfig,
    /// Static reading panel sources.
    pub content: ContentConfig,
    /// Home/Schedule tab display data.
    pub agenda: AgendaConfig,
}

/// Lecture reminder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// Seconds between checker ticks.
    pub tick_secs: u64,
    /// Minutes before a talk at which the reminder window opens.
    pub lookahead_mins: i64,
    /// Fixed notification title.
    pub title: String,
    /// Optional icon passed to the OS notifier.
    pub icon_path: Option<PathBuf>,
    /// Notification display timeout in seconds.
    pub timeout_secs: u32,
    /// Talks to remind about.
    pub entries: Vec<ScheduleEntry>,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            tick_secs: 60,
            lookahead_mins: 15,
            title: "Lecture Reminder".to_owned(),
            icon_path: None,
            timeout_secs: 10,
            entries: ScheduleEntry::conference_defaults(),
        }
    }
}

/// Verse rotation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerseConfig {
    /// Seconds between automatic verse rotations.
    pub rotate_secs: u64,
    /// Verse list to draw from.
    pub verses: Vec<String>,
}

impl Default for VerseConfig {
    fn default() -> Self {
        Self {
            rotate_secs: 3600,
            verses: vec![
                "For the message of the cross is foolishness to those who are perishing, \
                 but to us who are being saved it is the power of God."
                    .to_owned(),
                "انا هو الراعي الصالح.".to_owned(),
            ],
        }
    }
}

/// Static reading panel sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Path to the Paul's-life text file.
    pub paul_life_path: PathBuf,
    /// Path to the hymns text file.
    pub hymns_path: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        let dir = default_app_dir();
        Self {
            paul_life_path: dir.join("pauls_life.txt"),
            hymns_path: dir.join("hymns.txt"),
        }
    }
}

/// Display data for the Home and Schedule tabs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgendaConfig {
    /// Conference title shown on the Home tab.
    pub title: String,
    /// One-line description under the title.
    pub subtitle: String,
    /// Day-by-day programme for the Schedule tab.
    pub days: Vec<AgendaDay>,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            title: "Conference \"Why?\"".to_owned(),
            subtitle: "About Paul's life".to_owned(),
            days: AgendaDay::conference_defaults(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults for
    /// missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::error::AppError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config
    /// cannot be serialized.
    pub fn save_to_file(&self, path: &std::path::Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load the config from the default path when present, otherwise use
    /// the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error only when a config file exists but cannot be
    /// read or parsed.
    pub fn load_or_default() -> crate::error::Result<Self> {
        let path = Self::default_config_path();
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path: `~/.config/confera/config.toml`.
    pub fn default_config_path() -> PathBuf {
        default_app_dir().join("config.toml")
    }
}

/// Returns the per-user app directory (`~/.config/confera`), XDG aware.
fn default_app_dir() -> PathBuf {
    if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(config).join("confera")
    } else if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".config").join("confera")
    } else {
        PathBuf::from("/tmp/confera-config")
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.reminders.tick_secs, 60);
        assert_eq!(config.reminders.lookahead_mins, 15);
        assert_eq!(config.reminders.title, "Lecture Reminder");
        assert_eq!(config.reminders.entries.len(), 4);
        assert_eq!(config.verses.rotate_secs, 3600);
        assert_eq!(config.verses.verses.len(), 2);
        assert_eq!(config.agenda.days.len(), 3);
        assert!(config.content.paul_life_path.ends_with("pauls_life.txt"));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.reminders.tick_secs = 30;
        config.reminders.icon_path = Some(PathBuf::from("/tmp/icon.ico"));
        config.verses.verses.push("a third verse".to_owned());

        config.save_to_file(&path).expect("save");
        let loaded = AppConfig::from_file(&path).expect("load");

        assert_eq!(loaded.reminders.tick_secs, 30);
        assert_eq!(loaded.reminders.icon_path, Some(PathBuf::from("/tmp/icon.ico")));
        assert_eq!(loaded.verses.verses.len(), 3);
        assert_eq!(loaded.reminders.entries, config.reminders.entries);
        assert_eq!(loaded.agenda.days, config.agenda.days);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config: AppConfig = toml::from_str("[reminders]\ntick_secs = 5\n").expect("parse");
        assert_eq!(config.reminders.tick_secs, 5);
        // Everything else keeps its default.
        assert_eq!(config.reminders.lookahead_mins, 15);
        assert_eq!(config.verses.verses.len(), 2);
    }

    #[test]
    fn entries_parse_from_quoted_datetime_strings() {
        let config: AppConfig = toml::from_str(
            "[[reminders.entries]]\n\
             starts_at = \"2024-09-23T09:45:00\"\n\
             message = \"Lecture\"\n",
        )
        .expect("parse");
        assert_eq!(config.reminders.entries.len(), 1);
        assert_eq!(config.reminders.entries[0].message, "Lecture");
    }

    #[test]
    fn from_file_nonexistent_returns_error() {
        let result = AppConfig::from_file(std::path::Path::new("/nonexistent/path/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn from_file_invalid_toml_returns_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").expect("write");
        assert!(matches!(
            AppConfig::from_file(&path),
            Err(crate::error::AppError::Config(_))
        ));
    }

    #[test]
    fn default_path_is_under_confera_dir() {
        let path = AppConfig::default_config_path();
        assert!(path.ends_with("confera/config.toml") || path.ends_with("config.toml"));
    }
}
