//! The command grammar.
//!
//! Parsing is a lookup against a fixed table of verb phrases rather than a
//! chain of string comparisons: each entry names its phrase and how it
//! consumes the rest of the line. Input is trimmed and case-folded once up
//! front, so `"  GO East "` and `"go east"` parse identically.

use crate::item::ItemKind;
use log::debug;
use std::fmt;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Look,
    Inventory,
    Status,
    Go(String),
    GetTool,
    UseTool,
    GetCrystal,
    Examine(ItemKind),
    Win,
    Quit,
}

/// Why a raw input line failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A movement verb with no direction argument.
    EmptyDirection,
    /// Input matches nothing in the grammar.
    Unrecognized(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyDirection => {
                write!(f, "Go where? Give a direction, like 'go east'.")
            }
            ParseError::Unrecognized(_) => write!(
                f,
                "I don't understand that command. Type 'help' for a list of commands."
            ),
        }
    }
}

/// How a grammar entry consumes the text after its phrase.
#[derive(Debug, Clone, Copy)]
enum ArgRule {
    /// The phrase must match the whole line.
    None,
    /// The remainder of the line is a required direction argument.
    Direction,
}

/// A grammar entry: verb phrase, argument rule, and the command built from
/// a successful match (the direction argument is filled in by the parser).
struct CommandSpec {
    phrase: &'static str,
    arg: ArgRule,
    command: fn(&str) -> Command,
}

lazy_static! {
    /// The whole grammar. Exact phrases first; the two movement verbs are
    /// the only entries that take an argument.
    static ref GRAMMAR: Vec<CommandSpec> = vec![
        CommandSpec { phrase: "help", arg: ArgRule::None, command: |_| Command::Help },
        CommandSpec { phrase: "look", arg: ArgRule::None, command: |_| Command::Look },
        CommandSpec { phrase: "inventory", arg: ArgRule::None, command: |_| Command::Inventory },
        CommandSpec { phrase: "status", arg: ArgRule::None, command: |_| Command::Status },
        CommandSpec { phrase: "go", arg: ArgRule::Direction, command: |dir| Command::Go(dir.to_string()) },
        CommandSpec { phrase: "move", arg: ArgRule::Direction, command: |dir| Command::Go(dir.to_string()) },
        CommandSpec { phrase: "get tool", arg: ArgRule::None, command: |_| Command::GetTool },
        CommandSpec { phrase: "pick up tool", arg: ArgRule::None, command: |_| Command::GetTool },
        CommandSpec { phrase: "use tool", arg: ArgRule::None, command: |_| Command::UseTool },
        CommandSpec { phrase: "get crystal", arg: ArgRule::None, command: |_| Command::GetCrystal },
        CommandSpec { phrase: "pick up crystal", arg: ArgRule::None, command: |_| Command::GetCrystal },
        CommandSpec { phrase: "examine tool", arg: ArgRule::None, command: |_| Command::Examine(ItemKind::DiagnosticTool) },
        CommandSpec { phrase: "examine crystal", arg: ArgRule::None, command: |_| Command::Examine(ItemKind::EnergyCrystal) },
        CommandSpec { phrase: "win", arg: ArgRule::None, command: |_| Command::Win },
        CommandSpec { phrase: "quit", arg: ArgRule::None, command: |_| Command::Quit },
        CommandSpec { phrase: "exit", arg: ArgRule::None, command: |_| Command::Quit },
    ];
}

/// Parses one raw input line into a command.
pub fn parse(raw: &str) -> Result<Command, ParseError> {
    let line = raw.trim().to_lowercase();

    for spec in GRAMMAR.iter() {
        match spec.arg {
            ArgRule::None => {
                if line == spec.phrase {
                    let command = (spec.command)("");
                    debug!("parsed {:?} from {raw:?}", command);
                    return Ok(command);
                }
            }
            ArgRule::Direction => {
                if line == spec.phrase {
                    // Bare movement verb: an explicit error, not a no-op.
                    return Err(ParseError::EmptyDirection);
                }
                if let Some(rest) = line.strip_prefix(spec.phrase) {
                    if rest.starts_with(' ') {
                        // `line` is already trimmed, so the remainder has
                        // a real argument in it.
                        let command = (spec.command)(rest.trim());
                        debug!("parsed {:?} from {raw:?}", command);
                        return Ok(command);
                    }
                }
            }
        }
    }

    debug!("unrecognized command: {raw:?}");
    Err(ParseError::Unrecognized(line))
}
