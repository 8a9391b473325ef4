//! Terminal UI: the five-tab view and its key loop.
//!
//! Runs synchronously on the main thread. Live data arrives over
//! channels: verse updates through a watch receiver read once per frame,
//! manual refreshes sent back over an unbounded sender.

pub mod tabs;

use crate::config::AppConfig;
use crate::content::ContentPanel;
use crate::schedule::AgendaDay;
use crate::theme::Theme;
use crate::verses::VerseUpdate;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::{DefaultTerminal, Frame};
use self::tabs::Tab;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// How long to wait for a key before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Everything the view needs: immutable panels plus live channel ends.
pub struct UiState {
    /// Currently selected tab.
    pub tab: Tab,
    /// Color palette.
    pub theme: Theme,
    /// Conference title (Home tab).
    pub title: String,
    /// Conference description (Home tab).
    pub subtitle: String,
    /// Day-by-day programme (Schedule tab).
    pub days: Vec<AgendaDay>,
    /// Biographical reading panel.
    pub paul_life: ContentPanel,
    /// Hymn lyrics panel.
    pub hymns: ContentPanel,
    /// Latest verse selection.
    pub verse: VerseUpdate,
    /// Scroll offset on the Schedule tab.
    pub schedule_scroll: u16,
    verse_rx: watch::Receiver<VerseUpdate>,
    refresh_tx: mpsc::UnboundedSender<()>,
}

impl UiState {
    /// Build the initial UI state from config, loaded panels and the
    /// background task channels.
    pub fn new(
        config: &AppConfig,
        paul_life: ContentPanel,
        hymns: ContentPanel,
        verse_rx: watch::Receiver<VerseUpdate>,
        refresh_tx: mpsc::UnboundedSender<()>,
    ) -> Self {
        Self {
            tab: Tab::Home,
            theme: Theme::default(),
            title: config.agenda.title.clone(),
            subtitle: config.agenda.subtitle.clone(),
            days: config.agenda.days.clone(),
            paul_life,
            hymns,
            verse: VerseUpdate::default(),
            schedule_scroll: 0,
            verse_rx,
            refresh_tx,
        }
    }

    /// Ask the rotator for a new verse. Ignores a closed channel; the
    /// stale verse simply stays on screen.
    fn request_verse_refresh(&self) {
        let _ = self.refresh_tx.send(());
    }

    /// Pull the latest verse selection, if any.
    fn pull_verse(&mut self) {
        self.verse = self.verse_rx.borrow().clone();
    }
}

/// Run the blocking UI loop until the user quits with `q` or Esc.
pub fn run(terminal: &mut DefaultTerminal, state: &mut UiState) -> crate::error::Result<()> {
    loop {
        state.pull_verse();
        terminal.draw(|frame| draw(frame, state))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Tab | KeyCode::Right => state.tab = state.tab.next(),
            KeyCode::BackTab | KeyCode::Left => state.tab = state.tab.prev(),
            KeyCode::Char('r') => state.request_verse_refresh(),
            KeyCode::Up => state.schedule_scroll = state.schedule_scroll.saturating_sub(1),
            KeyCode::Down => state.schedule_scroll = state.schedule_scroll.saturating_add(1),
            KeyCode::Char(c @ '1'..='5') => {
                state.tab = Tab::ALL[c as usize - '1' as usize];
            }
            _ => {}
        }
    }
}

fn draw(frame: &mut Frame, state: &UiState) {
    let [tab_bar, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

    let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.title())).collect();
    let tabs = Tabs::new(titles)
        .select(state.tab.index())
        .style(state.theme.base())
        .highlight_style(state.theme.tab_highlight());
    frame.render_widget(tabs, tab_bar);

    match state.tab {
        Tab::Home => draw_home(frame, state, body),
        Tab::Schedule => draw_schedule(frame, state, body),
        Tab::Verses => draw_verses(frame, state, body),
        Tab::PaulsLife => draw_panel(frame, state, &state.paul_life, body),
        Tab::Hymns => draw_panel(frame, state, &state.hymns, body),
    }
}

fn draw_home(frame: &mut Frame, state: &UiState, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::styled(state.title.clone(), state.theme.title()),
        Line::from(""),
        Line::styled(state.subtitle.clone(), state.theme.base()),
    ];
    let home = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(state.theme.base())
        .block(Block::default().borders(Borders::ALL).style(state.theme.base()));
    frame.render_widget(home, area);
}

fn draw_schedule(frame: &mut Frame, state: &UiState, area: Rect) {
    let mut lines = Vec::new();
    for day in &state.days {
        lines.push(Line::styled(day.title.clone(), state.theme.day_header()));
        for event in &day.events {
            lines.push(Line::styled(
                format!("  {} - {}", event.time, event.name),
                state.theme.base(),
            ));
            lines.push(Line::styled(
                format!("    {}", event.location),
                state.theme.muted(),
            ));
        }
        lines.push(Line::from(""));
    }

    let schedule = Paragraph::new(lines)
        .style(state.theme.base())
        .scroll((state.schedule_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Programme")
                .style(state.theme.base()),
        );
    frame.render_widget(schedule, area);
}

fn draw_verses(frame: &mut Frame, state: &UiState, area: Rect) {
    let alignment = if state.verse.rtl {
        Alignment::Right
    } else {
        Alignment::Center
    };
    let lines = vec![
        Line::from(""),
        Line::styled(state.verse.text.clone(), state.theme.base()),
        Line::from(""),
        Line::styled("r: new verse".to_owned(), state.theme.muted()),
    ];
    let verses = Paragraph::new(lines)
        .alignment(alignment)
        .wrap(Wrap { trim: false })
        .style(state.theme.base())
        .block(Block::default().borders(Borders::ALL).style(state.theme.base()));
    frame.render_widget(verses, area);
}

fn draw_panel(frame: &mut Frame, state: &UiState, panel: &ContentPanel, area: Rect) {
    let alignment = if panel.rtl {
        Alignment::Right
    } else {
        Alignment::Left
    };
    let text = Paragraph::new(panel.body.clone())
        .alignment(alignment)
        .wrap(Wrap { trim: false })
        .style(state.theme.base())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(panel.title.clone())
                .style(state.theme.base()),
        );
    frame.render_widget(text, area);
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::content::ContentPanel;

    fn make_state() -> UiState {
        let (_verse_tx, verse_rx) = watch::channel(VerseUpdate::default());
        let (refresh_tx, _refresh_rx) = mpsc::unbounded_channel();
        UiState::new(
            &AppConfig::default(),
            ContentPanel {
                title: "Paul's Life".to_owned(),
                body: "body".to_owned(),
                rtl: false,
            },
            ContentPanel {
                title: "Hymns".to_owned(),
                body: "body".to_owned(),
                rtl: false,
            },
            verse_rx,
            refresh_tx,
        )
    }

    #[test]
    fn initial_state_shows_home_tab() {
        let state = make_state();
        assert_eq!(state.tab, Tab::Home);
        assert_eq!(state.title, "Conference \"Why?\"");
        assert_eq!(state.days.len(), 3);
    }

    #[test]
    fn pull_verse_takes_latest_published_value() {
        let (verse_tx, verse_rx) = watch::channel(VerseUpdate::default());
        let (refresh_tx, _refresh_rx) = mpsc::unbounded_channel();
        let mut state = UiState::new(
            &AppConfig::default(),
            ContentPanel {
                title: "Paul's Life".to_owned(),
                body: String::new(),
                rtl: false,
            },
            ContentPanel {
                title: "Hymns".to_owned(),
                body: String::new(),
                rtl: false,
            },
            verse_rx,
            refresh_tx,
        );

        verse_tx
            .send(VerseUpdate {
                text: "a verse".to_owned(),
                rtl: false,
            })
            .expect("receiver alive");
        state.pull_verse();
        assert_eq!(state.verse.text, "a verse");
    }

    #[test]
    fn refresh_request_reaches_rotator_channel() {
        let (_verse_tx, verse_rx) = watch::channel(VerseUpdate::default());
        let (refresh_tx, mut refresh_rx) = mpsc::unbounded_channel();
        let state = UiState::new(
            &AppConfig::default(),
            ContentPanel {
                title: "Paul's Life".to_owned(),
                body: String::new(),
                rtl: false,
            },
            ContentPanel {
                title: "Hymns".to_owned(),
                body: String::new(),
                rtl: false,
            },
            verse_rx,
            refresh_tx,
        );

        state.request_verse_refresh();
        assert!(refresh_rx.try_recv().is_ok());
    }

    #[test]
    fn draw_renders_every_tab_without_panicking() {
        let mut state = make_state();
        state.verse = VerseUpdate {
            text: "a verse".to_owned(),
            rtl: false,
        };
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).expect("terminal");
        for tab in Tab::ALL {
            state.tab = tab;
            terminal.draw(|frame| draw(frame, &state)).expect("draw");
        }
    }
}
