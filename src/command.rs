//! Parsed representation of one line of user input.

/// The numeric argument following a command word, exactly as typed.
///
/// Numbers are kept 1-based and unchecked; range validation happens when the
/// command is executed against the current document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// No argument given.
    Omitted,
    /// A (possibly negative) integer.
    Number(i64),
    /// Something that is not an integer.
    Malformed(String),
}

/// A command recognised by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// PRINT
    Print,
    /// ADD [n]
    Add(Operand),
    /// DUMMY [n]
    Dummy(Operand),
    /// DEL [n]
    Del(Operand),
    /// REPLACE [n]
    Replace(Operand),
    /// INDEX
    Index,
    /// FORMAT RAW
    FormatRaw,
    /// FORMAT FIX <width>
    FormatFix(Operand),
    /// EXIT
    Exit,
    /// Unknown command word or malformed command shape.
    Error,
}
