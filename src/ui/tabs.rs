//! Tab identifiers and ordering for the main view.

/// The five fixed tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Conference title and description.
    Home,
    /// Day-by-day programme.
    Schedule,
    /// Rotating devotional verse.
    Verses,
    /// Biographical reading.
    PaulsLife,
    /// Hymn lyrics.
    Hymns,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 5] = [
        Tab::Home,
        Tab::Schedule,
        Tab::Verses,
        Tab::PaulsLife,
        Tab::Hymns,
    ];

    /// Tab label.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Schedule => "Schedule",
            Tab::Verses => "Verses",
            Tab::PaulsLife => "Paul's Life",
            Tab::Hymns => "Hymns",
        }
    }

    /// Position in [`Tab::ALL`].
    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Schedule => 1,
            Tab::Verses => 2,
            Tab::PaulsLife => 3,
            Tab::Hymns => 4,
        }
    }

    /// The next tab, wrapping around.
    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    /// The previous tab, wrapping around.
    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}
