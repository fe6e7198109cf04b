//! The paragraph store and the editing commands that operate on it.
//!
//! A paragraph's position in the document is its identity. Positions are
//! zero-based and always contiguous; inserting or deleting shifts every later
//! paragraph by one slot.

use crate::cmd_result::{CmdFailure, CmdResult};

/// Placeholder text inserted by the `DUMMY` command.
pub const DUMMY_PARAGRAPH: &str = "42 is the Answer to the Ultimate Question of Life, \
the Universe, and Everything in The Hitchhiker's Guide to the Galaxy books. \
It was computed by Deep Thought, the second greatest computer ever. \
The descendants of Deep Thought's creators are upset by the numeric nature of the answer, \
not understanding what to do with it or what to tell the people who had commissioned \
the 7.5-million year project.";

/// An ordered sequence of paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    paragraphs: Vec<String>,
}

// Constructors
impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
        }
    }

    pub fn from_paragraphs<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paragraphs: paragraphs.into_iter().map(Into::into).collect(),
        }
    }
}

// Accessors
impl Document {
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn paragraph(&self, position: usize) -> Option<&str> {
        self.paragraphs.get(position).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Position of the last paragraph, if any.
    pub fn last_position(&self) -> Option<usize> {
        self.paragraphs.len().checked_sub(1)
    }
}

// Editor commands
impl Document {
    /// Insert `text` as a new paragraph at `position` (`0..=len`).
    pub fn cmd_insert(&mut self, position: usize, text: &str) -> CmdResult {
        if position > self.paragraphs.len() {
            return CmdResult::Failure(CmdFailure::InvalidArgument);
        }
        self.paragraphs.insert(position, text.to_string());
        CmdResult::Success
    }

    /// Insert [`DUMMY_PARAGRAPH`] at `position` (`0..=len`).
    pub fn cmd_insert_dummy(&mut self, position: usize) -> CmdResult {
        self.cmd_insert(position, DUMMY_PARAGRAPH)
    }

    /// Remove the paragraph at `position` (`0..len`).
    pub fn cmd_delete(&mut self, position: usize) -> CmdResult {
        if position >= self.paragraphs.len() {
            return CmdResult::Failure(CmdFailure::InvalidArgument);
        }
        self.paragraphs.remove(position);
        CmdResult::Success
    }

    /// Replace the first occurrence of `search` in the paragraph at `position`.
    ///
    /// A paragraph that does not contain `search` is left untouched and the
    /// command still succeeds.
    pub fn cmd_replace(&mut self, position: usize, search: &str, replacement: &str) -> CmdResult {
        if search.is_empty() {
            return CmdResult::Failure(CmdFailure::InvalidArgument);
        }
        let Some(paragraph) = self.paragraphs.get_mut(position) else {
            return CmdResult::Failure(CmdFailure::InvalidArgument);
        };
        if let Some(start) = paragraph.find(search) {
            paragraph.replace_range(start..start + search.len(), replacement);
        }
        CmdResult::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(paragraphs: &[&str]) -> Document {
        Document::from_paragraphs(paragraphs.iter().copied())
    }

    #[test]
    fn test_new_document_is_empty() {
        let document = Document::new();
        assert!(document.is_empty());
        assert_eq!(document.len(), 0);
        assert_eq!(document.last_position(), None);
    }

    #[test]
    fn test_insert_at_end() {
        let mut document = doc(&["one"]);
        assert!(document.cmd_insert(1, "two").is_success());
        assert_eq!(document.paragraphs(), ["one", "two"]);
    }

    #[test]
    fn test_insert_shifts_later_paragraphs() {
        let mut document = doc(&["one", "three"]);
        assert!(document.cmd_insert(1, "two").is_success());
        assert_eq!(document.paragraphs(), ["one", "two", "three"]);
        assert!(document.cmd_insert(0, "zero").is_success());
        assert_eq!(document.paragraph(0), Some("zero"));
        assert_eq!(document.last_position(), Some(3));
    }

    #[test]
    fn test_insert_out_of_range_is_rejected() {
        let mut document = doc(&["one"]);
        assert_eq!(
            document.cmd_insert(2, "two"),
            CmdResult::Failure(CmdFailure::InvalidArgument)
        );
        assert_eq!(document.paragraphs(), ["one"]);
    }

    #[test]
    fn test_insert_empty_paragraph() {
        let mut document = Document::new();
        assert!(document.cmd_insert(0, "").is_success());
        assert_eq!(document.paragraphs(), [""]);
    }

    #[test]
    fn test_insert_dummy() {
        let mut document = doc(&["first"]);
        assert!(document.cmd_insert_dummy(0).is_success());
        assert_eq!(document.paragraph(0), Some(DUMMY_PARAGRAPH));
        assert_eq!(document.paragraph(1), Some("first"));
    }

    #[test]
    fn test_insert_dummy_out_of_range() {
        let mut document = Document::new();
        assert!(document.cmd_insert_dummy(1).is_failure());
        assert!(document.is_empty());
    }

    #[test]
    fn test_delete_shifts_later_paragraphs() {
        let mut document = doc(&["one", "two", "three"]);
        assert!(document.cmd_delete(1).is_success());
        assert_eq!(document.paragraphs(), ["one", "three"]);
    }

    #[test]
    fn test_delete_out_of_range_is_rejected() {
        let mut document = doc(&["one"]);
        assert_eq!(
            document.cmd_delete(1),
            CmdResult::Failure(CmdFailure::InvalidArgument)
        );
        assert_eq!(document.paragraphs(), ["one"]);

        let mut empty = Document::new();
        assert!(empty.cmd_delete(0).is_failure());
    }

    #[test]
    fn test_insert_then_delete_round_trip() {
        let original = doc(&["alpha", "beta", "gamma"]);
        for position in 0..=original.len() {
            let mut document = original.clone();
            assert!(document.cmd_insert(position, "inserted").is_success());
            assert!(document.cmd_delete(position).is_success());
            assert_eq!(document, original);
        }
    }

    #[test]
    fn test_replace_first_occurrence_only() {
        let mut document = doc(&["the cat and the dog"]);
        assert!(document.cmd_replace(0, "the", "a").is_success());
        assert_eq!(document.paragraph(0), Some("a cat and the dog"));
    }

    #[test]
    fn test_replace_absent_search_leaves_paragraph_unchanged() {
        let mut document = doc(&["Red and Blue"]);
        assert!(document.cmd_replace(0, "Green", "Yellow").is_success());
        assert_eq!(document.paragraph(0), Some("Red and Blue"));
    }

    #[test]
    fn test_replace_with_umlauts() {
        let mut document = doc(&["Grüße aus Köln"]);
        assert!(document.cmd_replace(0, "Köln", "Düsseldorf").is_success());
        assert_eq!(document.paragraph(0), Some("Grüße aus Düsseldorf"));
    }

    #[test]
    fn test_replace_only_touches_target_paragraph() {
        let mut document = doc(&["x y", "x y"]);
        assert!(document.cmd_replace(1, "x", "z").is_success());
        assert_eq!(document.paragraphs(), ["x y", "z y"]);
    }

    #[test]
    fn test_replace_rejects_empty_search_and_bad_position() {
        let mut document = doc(&["text"]);
        assert_eq!(
            document.cmd_replace(0, "", "x"),
            CmdResult::Failure(CmdFailure::InvalidArgument)
        );
        assert_eq!(
            document.cmd_replace(1, "text", "x"),
            CmdResult::Failure(CmdFailure::InvalidArgument)
        );
        assert_eq!(document.paragraphs(), ["text"]);
    }
}
