//! Color palette and styles for the tab views.

use ratatui::style::{Color, Modifier, Style};

/// App-wide palette: teal window background, white body text, blue day
/// headers, dimmed locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Window background.
    pub background: Color,
    /// Body text.
    pub body: Color,
    /// Day headers and other accents.
    pub accent: Color,
    /// De-emphasized text (locations, hints).
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(0x00, 0x80, 0x80),
            body: Color::White,
            accent: Color::Rgb(0x00, 0x00, 0xFF),
            muted: Color::Rgb(0x88, 0x88, 0x88),
        }
    }
}

impl Theme {
    /// Base style for all tab content.
    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.body)
    }

    /// Large title style (Home tab heading).
    pub fn title(&self) -> Style {
        self.base().add_modifier(Modifier::BOLD)
    }

    /// Day header style on the Schedule tab.
    pub fn day_header(&self) -> Style {
        Style::default()
            .bg(self.background)
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for event locations and key hints.
    pub fn muted(&self) -> Style {
        Style::default().bg(self.background).fg(self.muted)
    }

    /// Highlight style for the selected tab label.
    pub fn tab_highlight(&self) -> Style {
        Style::default()
            .bg(self.background)
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }
}
