use std::fmt;

/// The result of executing an editor command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmdResult {
    Success,
    Failure(CmdFailure),
}

/// The reason a command failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmdFailure {
    /// Missing, malformed or out-of-range argument.
    InvalidArgument,
    /// Unrecognised command word or malformed command shape.
    InvalidCommand,
    /// Replace was requested on an empty document.
    NothingToReplace,
}

impl CmdResult {
    pub fn is_success(&self) -> bool {
        matches!(self, CmdResult::Success)
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }
}

impl fmt::Display for CmdFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            CmdFailure::InvalidArgument => "InvalidArgument",
            CmdFailure::InvalidCommand => "InvalidCommand",
            CmdFailure::NothingToReplace => "There is no text",
        };
        f.write_str(message)
    }
}
