//! A console paragraph editor with reflow and word indexing.
//!
//! # Example
//!
//! ```rust
//! use pared::{Document, LineFormatter, Rendering, word_index};
//!
//! let mut document = Document::new();
//! for _ in 0..4 {
//!     document.cmd_insert(document.len(), "Red and Blue");
//! }
//!
//! // Words starting with an uppercase letter that occur in more than
//! // three paragraphs are indexed.
//! let index = word_index(Some(&document));
//! assert_eq!(index.get("Red"), Some(&[0, 1, 2, 3][..]));
//! assert_eq!(index.get("and"), None);
//!
//! // Reflow to at most 8 characters per line.
//! let formatter = LineFormatter::with_width(8);
//! assert_eq!(formatter.reflow("Red and Blue"), ["Red and", "Blue"]);
//! assert!(matches!(formatter.render(&document), Rendering::Fixed(lines) if lines.len() == 8));
//! ```

mod app;
mod cmd_result;
pub mod command;
mod config;
mod console;
mod document;
mod formatter;
mod index;
pub mod output;
pub mod parse_cmd;
pub mod sanitize;

pub use app::App;
pub use cmd_result::{CmdFailure, CmdResult};
pub use command::{Command, Operand};
pub use config::Config;
pub use console::{Console, StdConsole};
pub use document::{DUMMY_PARAGRAPH, Document};
pub use formatter::{LineFormatter, NumberedParagraph, Rendering};
pub use index::{MIN_OCCURRENCES, WordIndex, is_index_letter, word_index};
pub use parse_cmd::parse_command;
