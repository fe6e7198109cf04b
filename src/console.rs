//! Console abstraction layer.
//!
//! Provides a `Console` trait for line-oriented I/O and two implementations:
//! - `StdConsole` for the real stdin/stdout/stderr
//! - `MockConsole` for testing

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use crossterm::style::Stylize;

/// Abstraction over line-oriented console operations.
pub trait Console {
    /// Block until a line is read. Returns `None` at end of input.
    /// The trailing newline is not included.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Write a prompt without a newline and flush it.
    fn prompt(&mut self, text: &str) -> Result<()>;

    /// Write a line of regular output.
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Write a line to the error stream.
    fn write_error(&mut self, message: &str) -> Result<()>;

    /// Flush pending output.
    fn flush(&mut self) -> Result<()>;
}

/// Console on the process's standard streams.
pub struct StdConsole {
    stdin: io::StdinLock<'static>,
    stdout: io::Stdout,
    stderr: io::Stderr,
    color_errors: bool,
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new(true)
    }
}

impl StdConsole {
    /// Errors are styled only when `color` is set and stderr is a terminal.
    pub fn new(color: bool) -> Self {
        let stderr = io::stderr();
        let color_errors = color && stderr.is_terminal();
        Self {
            stdin: io::stdin().lock(),
            stdout: io::stdout(),
            stderr,
            color_errors,
        }
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .stdin
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.stdout, "{}", text)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.stdout, "{}", line)?;
        Ok(())
    }

    fn write_error(&mut self, message: &str) -> Result<()> {
        // Keep stdout ahead of stderr so prompts and errors interleave
        // in the order they were produced.
        self.stdout.flush()?;
        if self.color_errors {
            writeln!(self.stderr, "{}", message.red())?;
        } else {
            writeln!(self.stderr, "{}", message)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        self.stderr.flush()?;
        Ok(())
    }
}

/// Mock console for testing. Replays queued input and records all output.
#[cfg(test)]
pub struct MockConsole {
    pub input: std::collections::VecDeque<String>,
    pub ops: Vec<MockOp>,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum MockOp {
    Prompt(String),
    Line(String),
    Error(String),
    Flush,
}

#[cfg(test)]
impl MockConsole {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            ops: Vec::new(),
        }
    }

    /// Regular output lines, in order.
    pub fn lines(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                MockOp::Line(line) => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Error lines, in order.
    pub fn errors(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                MockOp::Error(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Prompts, in order.
    pub fn prompts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                MockOp::Prompt(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl Console for MockConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        self.ops.push(MockOp::Prompt(text.to_string()));
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.ops.push(MockOp::Line(line.to_string()));
        Ok(())
    }

    fn write_error(&mut self, message: &str) -> Result<()> {
        self.ops.push(MockOp::Error(message.to_string()));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.ops.push(MockOp::Flush);
        Ok(())
    }
}
