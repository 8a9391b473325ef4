//! Text shaping for right-to-left scripts.
//!
//! Verses and reading panels may contain Arabic text stored in logical
//! order. Before display the text is reordered into visual order with the
//! Unicode Bidirectional Algorithm.

use unicode_bidi::BidiInfo;

/// Reorders logical text into display-ready visual order.
pub trait TextShaper: Send + Sync {
    /// Shape `text` for display. Pure LTR input comes back unchanged.
    fn shape(&self, text: &str) -> String;
}

/// [`TextShaper`] backed by the `unicode-bidi` crate.
///
/// Only the logical-to-visual reordering half of shaping is done here;
/// contextual Arabic glyph joining is left to the terminal emulator.
#[derive(Debug, Clone, Copy, Default)]
pub struct BidiShaper;

impl TextShaper for BidiShaper {
    fn shape(&self, text: &str) -> String {
        let bidi = BidiInfo::new(text, None);
        let mut display = String::with_capacity(text.len());
        for para in &bidi.paragraphs {
            display.push_str(&bidi.reorder_line(para, para.range.clone()));
        }
        display
    }
}

/// Returns `true` when `text` contains characters from the Arabic block
/// (U+0600..=U+06FF), the range that selects the RTL rendering path.
pub fn contains_rtl(text: &str) -> bool {
    text.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn contains_rtl_detects_arabic() {
        assert!(contains_rtl("انا هو الراعي الصالح."));
    }

    #[test]
    fn contains_rtl_is_false_for_latin() {
        assert!(!contains_rtl("For the message of the cross"));
    }

    #[test]
    fn contains_rtl_is_false_for_empty() {
        assert!(!contains_rtl(""));
    }

    #[test]
    fn ltr_text_is_unchanged() {
        let shaper = BidiShaper;
        assert_eq!(shaper.shape("hello world"), "hello world");
    }

    #[test]
    fn pure_rtl_run_is_reversed() {
        // A paragraph of Arabic letters is a single RTL run, so visual
        // order is the exact reverse of logical order.
        let shaper = BidiShaper;
        assert_eq!(shaper.shape("سلام"), "مالس");
    }

    #[test]
    fn shaping_preserves_character_count() {
        let shaper = BidiShaper;
        let input = "قال: hello";
        let shaped = shaper.shape(input);
        assert_eq!(shaped.chars().count(), input.chars().count());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let shaper = BidiShaper;
        assert_eq!(shaper.shape(""), "");
    }
}
