//! One-shot loading of the static reading panels.
//!
//! The Paul's-life and Hymns tabs render text files read once at startup.
//! A missing file is expected (fresh install) and yields a placeholder; any
//! other read failure is a real error.

use crate::config::ContentConfig;
use crate::error::{AppError, Result};
use crate::shaping::{self, TextShaper};
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

/// Placeholder shown when the Paul's-life file is missing.
pub const PAUL_LIFE_PLACEHOLDER: &str = "Paul's life information not found.";

/// Placeholder shown when the hymns file is missing.
pub const HYMNS_PLACEHOLDER: &str = "Hymns information not found.";

/// A static text panel, loaded once at startup and never refreshed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPanel {
    /// Panel heading.
    pub title: String,
    /// Display-ready body text (already shaped when RTL).
    pub body: String,
    /// Whether the body is right-to-left; drives alignment in the UI.
    pub rtl: bool,
}

/// Load one panel from `path`, substituting `placeholder` when the file
/// does not exist.
pub fn load_panel(
    title: &str,
    path: &Path,
    placeholder: &str,
    shaper: &dyn TextShaper,
) -> Result<ContentPanel> {
    let raw = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("{title} file missing at {}, using placeholder", path.display());
            placeholder.to_owned()
        }
        Err(e) => {
            return Err(AppError::Content(format!(
                "cannot read {}: {e}",
                path.display()
            )));
        }
    };

    let rtl = shaping::contains_rtl(&raw);
    let body = if rtl { shaper.shape(&raw) } else { raw };

    Ok(ContentPanel {
        title: title.to_owned(),
        body,
        rtl,
    })
}

/// Load both reading panels from the configured paths.
pub fn load_panels(
    config: &ContentConfig,
    shaper: &dyn TextShaper,
) -> Result<(ContentPanel, ContentPanel)> {
    let paul_life = load_panel(
        "Paul's Life",
        &config.paul_life_path,
        PAUL_LIFE_PLACEHOLDER,
        shaper,
    )?;
    let hymns = load_panel("Hymns", &config.hymns_path, HYMNS_PLACEHOLDER, shaper)?;
    Ok((paul_life, hymns))
}
