//! Word index: which capitalised words occur in which paragraphs.
//!
//! Tokens are whitespace-delimited and reduced to their letters before the
//! eligibility check, so `"(Berlin),"` counts as `Berlin`. Keys are ordered by
//! `String`'s `Ord`, i.e. byte-wise UTF-8. Uppercase ASCII therefore sorts
//! before lowercase ASCII, and umlauts sort after both.

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::document::Document;

/// A word must occur in at least this many paragraphs to be indexed.
pub const MIN_OCCURRENCES: usize = 4;

/// Sorted mapping from word to the ascending positions of the paragraphs
/// containing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordIndex {
    entries: BTreeMap<String, Vec<usize>>,
}

impl WordIndex {
    /// Build the index for a sequence of paragraphs.
    pub fn build<S: AsRef<str>>(paragraphs: &[S]) -> Self {
        let mut entries: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (position, paragraph) in paragraphs.iter().enumerate() {
            for word in eligible_words(paragraph.as_ref()).unique() {
                // Paragraphs are scanned in order, so each list stays sorted.
                entries.entry(word).or_default().push(position);
            }
        }
        entries.retain(|_, positions| positions.len() >= MIN_OCCURRENCES);
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, word: &str) -> Option<&[usize]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.entries
            .iter()
            .map(|(word, positions)| (word.as_str(), positions.as_slice()))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Build the word index of `document`.
///
/// # Panics
///
/// Panics if `document` is `None`. Asking for the index of a document that
/// does not exist is a caller bug; an empty document yields an empty index.
pub fn word_index(document: Option<&Document>) -> WordIndex {
    let Some(document) = document else {
        panic!("word index requested without a document");
    };
    WordIndex::build(document.paragraphs())
}

/// Characters that survive filtering: ASCII letters and the German umlauts.
pub fn is_index_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || matches!(ch, 'ä' | 'ö' | 'ü' | 'Ä' | 'Ö' | 'Ü')
}

/// Letters-only words of `paragraph` whose first letter is uppercase.
fn eligible_words(paragraph: &str) -> impl Iterator<Item = String> + '_ {
    paragraph
        .split_whitespace()
        .map(|token| token.chars().filter(|&ch| is_index_letter(ch)).collect::<String>())
        .filter(|word| word.chars().next().is_some_and(char::is_uppercase))
}
