//! Line formatter: raw display or reflow to a fixed maximum line length.

use log::warn;

use crate::cmd_result::{CmdFailure, CmdResult};
use crate::document::Document;

/// A paragraph shown verbatim in raw mode, with its 1-based number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedParagraph<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Display lines produced for one print request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendering<'a> {
    /// Width 0: one entry per paragraph.
    Raw(Vec<NumberedParagraph<'a>>),
    /// Reflowed lines of all paragraphs, in document order.
    Fixed(Vec<String>),
}

/// Holds the maximum line length. A width of 0 is raw mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineFormatter {
    max_line_length: usize,
}

impl LineFormatter {
    pub fn new() -> Self {
        Self { max_line_length: 0 }
    }

    pub fn with_width(max_line_length: usize) -> Self {
        Self { max_line_length }
    }

    pub fn width(&self) -> usize {
        self.max_line_length
    }

    pub fn is_raw(&self) -> bool {
        self.max_line_length == 0
    }

    pub fn set_raw(&mut self) {
        self.max_line_length = 0;
    }

    /// Set the maximum line length. Negative widths are rejected and the
    /// current width is kept.
    pub fn set_width(&mut self, max_line_length: i64) -> CmdResult {
        match usize::try_from(max_line_length) {
            Ok(width) => {
                self.max_line_length = width;
                CmdResult::Success
            }
            Err(_) => {
                warn!(
                    "{} is not a valid line length, keeping {}",
                    max_line_length, self.max_line_length
                );
                CmdResult::Failure(CmdFailure::InvalidArgument)
            }
        }
    }

    pub fn render<'a>(&self, document: &'a Document) -> Rendering<'a> {
        if self.is_raw() {
            let paragraphs = document
                .paragraphs()
                .iter()
                .enumerate()
                .map(|(i, text)| NumberedParagraph {
                    number: i + 1,
                    text: text.as_str(),
                })
                .collect();
            return Rendering::Raw(paragraphs);
        }
        let mut lines = Vec::new();
        for paragraph in document.paragraphs() {
            self.reflow_into(paragraph, &mut lines);
        }
        Rendering::Fixed(lines)
    }

    /// Reflow a single paragraph. In raw mode the paragraph comes back as is.
    pub fn reflow(&self, paragraph: &str) -> Vec<String> {
        if self.is_raw() {
            return vec![paragraph.to_string()];
        }
        let mut lines = Vec::new();
        self.reflow_into(paragraph, &mut lines);
        lines
    }

    fn reflow_into(&self, paragraph: &str, lines: &mut Vec<String>) {
        let width = self.max_line_length;
        let mut line = String::new();
        let mut line_len = 0;

        for mut word in paragraph.split_whitespace() {
            let mut word_len = word.chars().count();
            let needed = if line.is_empty() {
                word_len
            } else {
                line_len + 1 + word_len
            };

            if needed > width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                // Over-long words are cut into full-width chunks; what is
                // left (at most `width` chars) starts the next line.
                while word_len > width {
                    let (chunk, rest) = split_at_char(word, width);
                    lines.push(chunk.to_string());
                    word = rest;
                    word_len -= width;
                }
            }

            if !line.is_empty() {
                line.push(' ');
                line_len += 1;
            }
            line.push_str(word);
            line_len += word_len;
        }

        lines.push(line);
    }
}

/// Split `s` after its first `n` characters.
fn split_at_char(s: &str, n: usize) -> (&str, &str) {
    let index = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    s.split_at(index)
}

#[cfg(test)]
mod tests;
