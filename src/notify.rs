//! Local desktop notification sink.
//!
//! Provides a cross-platform [`Notifier`] trait for posting best-effort
//! OS notifications. On Linux this shells out to `notify-send`, on macOS
//! to `osascript`; everywhere else a no-op sink is used. Delivery is
//! fire-and-forget: the call reports whether the tool ran, nothing more.

use crate::reminders::NotificationEvent;
use std::path::PathBuf;
use tracing::debug;

/// Fire-and-forget local notification sink.
pub trait Notifier: Send + Sync {
    /// Post one notification. Best effort; no delivery confirmation.
    fn notify(&self, event: &NotificationEvent) -> anyhow::Result<()>;
}

/// Notifier backed by the platform notification tool.
#[cfg(any(target_os = "linux", target_os = "macos"))]
pub struct DesktopNotifier {
    icon_path: Option<PathBuf>,
    timeout_secs: u32,
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
impl DesktopNotifier {
    /// Create a desktop notifier with an optional icon and a display
    /// timeout in seconds.
    pub fn new(icon_path: Option<PathBuf>, timeout_secs: u32) -> Self {
        Self {
            icon_path,
            timeout_secs,
        }
    }
}

#[cfg(target_os = "linux")]
impl Notifier for DesktopNotifier {
    fn notify(&self, event: &NotificationEvent) -> anyhow::Result<()> {
        let mut cmd = std::process::Command::new("notify-send");
        cmd.arg("--expire-time")
            .arg((u64::from(self.timeout_secs) * 1000).to_string());
        if let Some(icon) = &self.icon_path {
            cmd.arg("--icon").arg(icon);
        }
        let status = cmd.arg(&event.title).arg(&event.message).status()?;
        if !status.success() {
            anyhow::bail!("notify-send exited with {status}");
        }
        Ok(())
    }
}

#[cfg(target_os = "macos")]
impl Notifier for DesktopNotifier {
    fn notify(&self, event: &NotificationEvent) -> anyhow::Result<()> {
        // osascript has no icon/timeout knobs; they are accepted and ignored.
        let _ = (&self.icon_path, self.timeout_secs);
        let script = format!(
            "display notification \"{}\" with title \"{}\"",
            escape_osascript(&event.message),
            escape_osascript(&event.title)
        );
        let status = std::process::Command::new("osascript")
            .arg("-e")
            .arg(script)
            .status()?;
        if !status.success() {
            anyhow::bail!("osascript exited with {status}");
        }
        Ok(())
    }
}

#[cfg(target_os = "macos")]
fn escape_osascript(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// No-op sink for unsupported platforms and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, event: &NotificationEvent) -> anyhow::Result<()> {
        debug!(title = %event.title, "discarding notification (no desktop notifier)");
        Ok(())
    }
}

/// Create the platform-appropriate notifier.
///
/// Returns the desktop implementation on Linux and macOS, or the no-op
/// sink on all other platforms.
pub fn create_notifier(icon_path: Option<PathBuf>, timeout_secs: u32) -> Box<dyn Notifier> {
    #[cfg(any(target_os = "linux", target_os = "macos"))]
    {
        Box::new(DesktopNotifier::new(icon_path, timeout_secs))
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        let _ = (icon_path, timeout_secs);
        Box::new(NullNotifier)
    }
}
