//! Devotional verse selection and the rotator loop.
//!
//! A [`VerseBook`] holds the static verse list; the rotator re-picks on a
//! fixed interval or whenever the UI asks for a refresh, publishing the
//! shaped result over a watch channel.

use crate::shaping::{self, TextShaper};
use rand::seq::SliceRandom;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::debug;

/// A verse selection pushed to the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerseUpdate {
    /// Display-ready verse text (already shaped when RTL).
    pub text: String,
    /// Whether the verse is right-to-left; drives alignment in the UI.
    pub rtl: bool,
}

/// Static verse list with uniform random selection.
#[derive(Debug, Clone)]
pub struct VerseBook {
    verses: Vec<String>,
}

impl VerseBook {
    /// Create a book from a verse list.
    pub fn new(verses: Vec<String>) -> Self {
        Self { verses }
    }

    /// Pick one verse uniformly at random, shaping it when it contains
    /// RTL text. An empty book yields an empty update.
    pub fn pick(&self, shaper: &dyn TextShaper) -> VerseUpdate {
        let Some(verse) = self.verses.choose(&mut rand::thread_rng()) else {
            return VerseUpdate::default();
        };
        let rtl = shaping::contains_rtl(verse);
        let text = if rtl { shaper.shape(verse) } else { verse.clone() };
        VerseUpdate { text, rtl }
    }
}

/// Background rotator loop: publish a fresh pick on every interval tick
/// or manual refresh message. The first tick fires immediately, so the UI
/// has a verse from startup.
///
/// Returns when either channel end closes.
pub async fn run_verse_rotator(
    book: VerseBook,
    rotate: std::time::Duration,
    shaper: Arc<dyn TextShaper>,
    tx: watch::Sender<VerseUpdate>,
    mut refresh_rx: mpsc::UnboundedReceiver<()>,
) {
    let mut interval = tokio::time::interval(rotate);

    loop {
        tokio::select! {
            _ = interval.tick() => {}
            msg = refresh_rx.recv() => {
                if msg.is_none() {
                    debug!("refresh channel closed, stopping verse rotator");
                    return;
                }
            }
        }

        if tx.send(book.pick(shaper.as_ref())).is_err() {
            debug!("verse channel closed, stopping verse rotator");
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::shaping::BidiShaper;
    use std::collections::HashSet;
    use std::time::Duration;

    #[test]
    fn pick_from_two_eventually_selects_both() {
        let book = VerseBook::new(vec!["first".to_owned(), "second".to_owned()]);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(book.pick(&BidiShaper).text);
            if seen.len() == 2 {
                break;
            }
        }
        assert_eq!(seen.len(), 2, "both verses should appear over 200 draws");
    }

    #[test]
    fn empty_book_yields_default_update() {
        let book = VerseBook::new(Vec::new());
        assert_eq!(book.pick(&BidiShaper), VerseUpdate::default());
    }

    #[test]
    fn ltr_verse_passes_through_unshaped() {
        let book = VerseBook::new(vec!["the power of God".to_owned()]);
        let update = book.pick(&BidiShaper);
        assert_eq!(update.text, "the power of God");
        assert!(!update.rtl);
    }

    #[test]
    fn rtl_verse_is_flagged_and_shaped() {
        let book = VerseBook::new(vec!["انا هو الراعي الصالح.".to_owned()]);
        let update = book.pick(&BidiShaper);
        assert!(update.rtl);
        assert_eq!(
            update.text.chars().count(),
            "انا هو الراعي الصالح.".chars().count()
        );
    }

    #[tokio::test]
    async fn rotator_publishes_initial_selection() {
        let (tx, mut rx) = watch::channel(VerseUpdate::default());
        let (_refresh_tx, refresh_rx) = mpsc::unbounded_channel();
        let book = VerseBook::new(vec!["only".to_owned()]);

        let handle = tokio::spawn(run_verse_rotator(
            book,
            Duration::from_secs(3600),
            Arc::new(BidiShaper),
            tx,
            refresh_rx,
        ));

        tokio::time::timeout(Duration::from_secs(2), rx.changed())
            .await
            .expect("initial pick within timeout")
            .expect("sender alive");
        assert_eq!(rx.borrow().text, "only");

        handle.abort();
    }

    #[tokio::test]
    async fn manual_refresh_publishes_again() {
        let (tx, mut rx) = watch::channel(VerseUpdate::default());
        let (refresh_tx, refresh_rx) = mpsc::unbounded_channel();
        let book = VerseBook::new(vec!["only".to_owned()]);

        let handle = tokio::spawn(run_verse_rotator(
            book,
            Duration::from_secs(3600),
            Arc::new(BidiShaper),
            tx,
            refresh_rx,
        ));

        tokio::time::timeout(Duration::from_secs(2), rx.changed())
            .await
            .expect("initial pick within timeout")
            .expect("sender alive");

        refresh_tx.send(()).expect("rotator alive");
        tokio::time::timeout(Duration::from_secs(2), rx.changed())
            .await
            .expect("refresh pick within timeout")
            .expect("sender alive");

        handle.abort();
    }

    #[tokio::test]
    async fn rotator_stops_when_refresh_channel_closes() {
        let (tx, mut rx) = watch::channel(VerseUpdate::default());
        let (refresh_tx, refresh_rx) = mpsc::unbounded_channel();
        let book = VerseBook::new(vec!["only".to_owned()]);

        let handle = tokio::spawn(run_verse_rotator(
            book,
            Duration::from_secs(3600),
            Arc::new(BidiShaper),
            tx,
            refresh_rx,
        ));

        tokio::time::timeout(Duration::from_secs(2), rx.changed())
            .await
            .expect("initial pick within timeout")
            .expect("sender alive");

        drop(refresh_tx);
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("rotator exits within timeout")
            .expect("rotator task completes");
    }
}
