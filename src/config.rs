//! Session settings, filled in from the command line by the binary.

/// Editor settings fixed for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Initial maximum line length; 0 starts in raw mode.
    pub width: usize,
    /// Batch mode: no greeting, no prompts.
    pub batch: bool,
}

impl Config {
    pub fn new(width: usize, batch: bool) -> Self {
        Self { width, batch }
    }

    /// Whether prompts and the greeting are shown.
    pub fn interactive(&self) -> bool {
        !self.batch
    }
}
