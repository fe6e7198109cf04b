//! Input clean-up for command lines and paragraph text.

use itertools::Itertools;

/// Punctuation accepted in paragraph text.
pub const ALLOWED_PUNCTUATION: &str = ".,:;-!?’()\"%@+*[]{}/\\&#$";

/// Whether `ch` may appear in paragraph text.
pub fn is_allowed_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
        || matches!(ch, 'ä' | 'ö' | 'ü' | 'Ä' | 'Ö' | 'Ü')
        || ALLOWED_PUNCTUATION.contains(ch)
}

/// Drop every character that is not allowed in paragraph text.
pub fn filter_illegal_chars(text: &str) -> String {
    text.chars().filter(|&ch| is_allowed_char(ch)).collect()
}

/// Trim a command line and collapse runs of spaces and tabs into one space.
pub fn normalize_command_line(line: &str) -> String {
    line.split([' ', '\t'])
        .filter(|token| !token.is_empty())
        .join(" ")
}
