//! Command loop for the interactive editor.
//!
//! The `App` struct ties together the Document, the LineFormatter and a
//! Console into the read-command / execute / report loop. Argument
//! validation happens here, before any core operation runs, so a rejected
//! command never leaves the document half-modified.

use anyhow::Result;
use log::{debug, info};

use crate::cmd_result::{CmdFailure, CmdResult};
use crate::command::{Command, Operand};
use crate::config::Config;
use crate::console::Console;
use crate::document::Document;
use crate::formatter::LineFormatter;
use crate::index::word_index;
use crate::output;
use crate::parse_cmd::parse_command;
use crate::sanitize::filter_illegal_chars;

/// The editing session state.
pub struct App {
    pub document: Document,
    pub formatter: LineFormatter,
    pub config: Config,
    pub running: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            document: Document::new(),
            formatter: LineFormatter::with_width(config.width),
            config,
            running: true,
        }
    }

    /// Run the command loop until `EXIT` or end of input.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        info!(
            "session started (width {}, batch {})",
            self.formatter.width(),
            self.config.batch
        );
        if self.config.interactive() {
            console.write_line(output::GREETING)?;
        }

        while self.running {
            if self.config.interactive() {
                console.prompt(output::COMMAND_PROMPT)?;
            }
            let Some(line) = console.read_line()? else {
                debug!("end of input");
                self.quit(console)?;
                break;
            };
            let command = parse_command(&line);
            self.handle_command(command, console)?;
            console.flush()?;
        }

        info!("session closed with {} paragraph(s)", self.document.len());
        Ok(())
    }

    /// Execute one parsed command and report its failure, if any.
    pub fn handle_command(&mut self, command: Command, console: &mut dyn Console) -> Result<()> {
        debug!("executing {:?}", command);
        let result = match command {
            Command::Print => {
                let rendering = self.formatter.render(&self.document);
                output::print_rendering(console, &rendering)?;
                CmdResult::Success
            }
            Command::Add(operand) => self.handle_add(&operand, console)?,
            Command::Dummy(operand) => match self.insertion_position(&operand) {
                Some(position) => self.document.cmd_insert_dummy(position),
                None => CmdResult::Failure(CmdFailure::InvalidArgument),
            },
            Command::Del(operand) => match self.existing_position(&operand) {
                Some(position) => self.document.cmd_delete(position),
                None => CmdResult::Failure(CmdFailure::InvalidArgument),
            },
            Command::Replace(operand) => self.handle_replace(&operand, console)?,
            Command::Index => {
                let index = word_index(Some(&self.document));
                output::print_index(console, &index)?;
                CmdResult::Success
            }
            Command::FormatRaw => {
                self.formatter.set_raw();
                CmdResult::Success
            }
            Command::FormatFix(operand) => match operand {
                Operand::Number(width) if width > 0 => self.formatter.set_width(width),
                _ => CmdResult::Failure(CmdFailure::InvalidArgument),
            },
            Command::Exit => {
                self.quit(console)?;
                CmdResult::Success
            }
            Command::Error => CmdResult::Failure(CmdFailure::InvalidCommand),
        };

        if let CmdResult::Failure(failure) = result {
            debug!("command failed: {:?}", failure);
            output::print_failure(console, failure)?;
        }
        Ok(())
    }

    fn handle_add(&mut self, operand: &Operand, console: &mut dyn Console) -> Result<CmdResult> {
        let Some(position) = self.insertion_position(operand) else {
            return Ok(CmdResult::Failure(CmdFailure::InvalidArgument));
        };
        let Some(text) = self.read_text(output::TEXT_PROMPT, console)? else {
            return Ok(CmdResult::Success);
        };
        Ok(self.document.cmd_insert(position, &text))
    }

    fn handle_replace(
        &mut self,
        operand: &Operand,
        console: &mut dyn Console,
    ) -> Result<CmdResult> {
        if self.document.is_empty() {
            return Ok(CmdResult::Failure(CmdFailure::NothingToReplace));
        }
        let Some(position) = self.existing_position(operand) else {
            return Ok(CmdResult::Failure(CmdFailure::InvalidArgument));
        };
        let Some(search) = self.read_text(output::SEARCH_PROMPT, console)? else {
            return Ok(CmdResult::Success);
        };
        if search.is_empty() {
            return Ok(CmdResult::Failure(CmdFailure::InvalidArgument));
        }
        let Some(replacement) = self.read_text(output::REPLACEMENT_PROMPT, console)? else {
            return Ok(CmdResult::Success);
        };
        Ok(self.document.cmd_replace(position, &search, &replacement))
    }

    /// Prompt for and read one line of paragraph text, filtered to the
    /// allowed characters. End of input ends the session and yields `None`.
    fn read_text(&mut self, prompt: &str, console: &mut dyn Console) -> Result<Option<String>> {
        if self.config.interactive() {
            console.prompt(prompt)?;
        }
        match console.read_line()? {
            Some(line) => Ok(Some(filter_illegal_chars(&line))),
            None => {
                debug!("end of input while waiting for text");
                self.quit(console)?;
                Ok(None)
            }
        }
    }

    /// Position for inserting a paragraph: `1..=len + 1`, default after the
    /// last paragraph.
    fn insertion_position(&self, operand: &Operand) -> Option<usize> {
        match operand {
            Operand::Omitted => Some(self.document.len()),
            Operand::Number(number) => {
                user_number_to_position(*number).filter(|&p| p <= self.document.len())
            }
            Operand::Malformed(_) => None,
        }
    }

    /// Position of an existing paragraph: `1..=len`, default the last one.
    fn existing_position(&self, operand: &Operand) -> Option<usize> {
        match operand {
            Operand::Omitted => self.document.last_position(),
            Operand::Number(number) => {
                user_number_to_position(*number).filter(|&p| p < self.document.len())
            }
            Operand::Malformed(_) => None,
        }
    }

    fn quit(&mut self, console: &mut dyn Console) -> Result<()> {
        console.write_line(output::EXIT_MESSAGE)?;
        self.running = false;
        Ok(())
    }
}

/// Convert a 1-based paragraph number to a 0-based position.
fn user_number_to_position(number: i64) -> Option<usize> {
    usize::try_from(number).ok()?.checked_sub(1)
}
