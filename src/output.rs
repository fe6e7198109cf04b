//! Everything the editor shows the user.

use anyhow::Result;
use itertools::Itertools;

use crate::cmd_result::CmdFailure;
use crate::console::Console;
use crate::formatter::Rendering;
use crate::index::WordIndex;

pub const GREETING: &str = "Welcome to text processing";
pub const EXIT_MESSAGE: &str = "Text processing is closed";
pub const EMPTY_INDEX_MESSAGE: &str = "The index is empty";

pub const COMMAND_PROMPT: &str = "> ";
pub const TEXT_PROMPT: &str = ": ";
pub const SEARCH_PROMPT: &str = "find: ";
pub const REPLACEMENT_PROMPT: &str = "replacement: ";

/// Print paragraphs or formatted lines.
pub fn print_rendering(console: &mut dyn Console, rendering: &Rendering<'_>) -> Result<()> {
    match rendering {
        Rendering::Raw(paragraphs) => {
            for paragraph in paragraphs {
                console.write_line(&format!("{}: {}", paragraph.number, paragraph.text))?;
            }
        }
        Rendering::Fixed(lines) => {
            for line in lines {
                console.write_line(line)?;
            }
        }
    }
    Ok(())
}

/// Print one `word 1,2,3` line per entry, with 1-based paragraph numbers.
pub fn print_index(console: &mut dyn Console, index: &WordIndex) -> Result<()> {
    if index.is_empty() {
        return console.write_line(EMPTY_INDEX_MESSAGE);
    }
    for (word, positions) in index.iter() {
        console.write_line(&index_line(word, positions))?;
    }
    Ok(())
}

pub fn index_line(word: &str, positions: &[usize]) -> String {
    format!("{} {}", word, positions.iter().map(|p| p + 1).join(","))
}

pub fn print_failure(console: &mut dyn Console, failure: CmdFailure) -> Result<()> {
    console.write_error(&failure.to_string())
}
