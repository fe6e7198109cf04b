//! Command line parser.
//!
//! Turns one line of user input into a [`Command`]. Parsing never fails:
//! anything that does not match a known command shape becomes
//! [`Command::Error`]. Argument *values* are not validated here; a
//! non-numeric position is carried as [`Operand::Malformed`] so that the
//! command loop can report it as an invalid argument rather than an invalid
//! command.

use log::debug;
use phf::{Map, phf_map};

use crate::command::{Command, Operand};
use crate::sanitize::normalize_command_line;

/// Which command a keyword introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CmdKind {
    Print,
    Add,
    Dummy,
    Del,
    Replace,
    Index,
    Format,
    Exit,
}

/// What may follow the keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgShape {
    /// Nothing.
    None,
    /// An optional paragraph number.
    OptionalNumber,
    /// `RAW` or `FIX <width>`.
    FormatMode,
}

struct CmdInfo {
    kind: CmdKind,
    shape: ArgShape,
}

/// Map of command keywords to their kind and argument shape.
/// Please keep names sorted alphabetically.
const NAME_TO_CMD_MAP: Map<&'static str, CmdInfo> = phf_map! {
    "ADD" => CmdInfo { kind: CmdKind::Add, shape: ArgShape::OptionalNumber },
    "DEL" => CmdInfo { kind: CmdKind::Del, shape: ArgShape::OptionalNumber },
    "DUMMY" => CmdInfo { kind: CmdKind::Dummy, shape: ArgShape::OptionalNumber },
    "EXIT" => CmdInfo { kind: CmdKind::Exit, shape: ArgShape::None },
    "FORMAT" => CmdInfo { kind: CmdKind::Format, shape: ArgShape::FormatMode },
    "INDEX" => CmdInfo { kind: CmdKind::Index, shape: ArgShape::None },
    "PRINT" => CmdInfo { kind: CmdKind::Print, shape: ArgShape::None },
    "REPLACE" => CmdInfo { kind: CmdKind::Replace, shape: ArgShape::OptionalNumber },
};

/// Parse one line of user input. Keywords are case-insensitive and tokens
/// may be separated by any run of spaces or tabs.
pub fn parse_command(line: &str) -> Command {
    let normalized = normalize_command_line(line);
    let mut tokens = normalized.split(' ');
    let name = tokens.next().unwrap_or_default().to_uppercase();
    let args: Vec<&str> = tokens.collect();

    let Some(info) = NAME_TO_CMD_MAP.get(name.as_str()) else {
        debug!("unknown command {:?}", name);
        return Command::Error;
    };

    let command = match info.shape {
        ArgShape::None if args.is_empty() => simple_command(info.kind),
        ArgShape::None => None,
        ArgShape::OptionalNumber => match args.as_slice() {
            [] => numbered_command(info.kind, Operand::Omitted),
            [arg] => numbered_command(info.kind, parse_operand(arg)),
            _ => None,
        },
        ArgShape::FormatMode => parse_format_mode(&args),
    };

    command.unwrap_or_else(|| {
        debug!("malformed {} command: {:?}", name, args);
        Command::Error
    })
}

fn simple_command(kind: CmdKind) -> Option<Command> {
    match kind {
        CmdKind::Print => Some(Command::Print),
        CmdKind::Index => Some(Command::Index),
        CmdKind::Exit => Some(Command::Exit),
        _ => None,
    }
}

fn numbered_command(kind: CmdKind, operand: Operand) -> Option<Command> {
    match kind {
        CmdKind::Add => Some(Command::Add(operand)),
        CmdKind::Dummy => Some(Command::Dummy(operand)),
        CmdKind::Del => Some(Command::Del(operand)),
        CmdKind::Replace => Some(Command::Replace(operand)),
        _ => None,
    }
}

fn parse_format_mode(args: &[&str]) -> Option<Command> {
    let (mode, rest) = args.split_first()?;
    if mode.eq_ignore_ascii_case("RAW") && rest.is_empty() {
        return Some(Command::FormatRaw);
    }
    if !mode.eq_ignore_ascii_case("FIX") {
        return None;
    }
    match rest {
        [] => Some(Command::FormatFix(Operand::Omitted)),
        [width] => Some(Command::FormatFix(parse_operand(width))),
        _ => None,
    }
}

fn parse_operand(arg: &str) -> Operand {
    match arg.parse::<i64>() {
        Ok(n) => Operand::Number(n),
        Err(_) => Operand::Malformed(arg.to_string()),
    }
}
