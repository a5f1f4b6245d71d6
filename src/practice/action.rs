//! Commands accepted by the practice table.

use std::fmt;

/// A discrete command dispatched to the table controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Fold the hand.
    Fold,
    /// Call the outstanding bet, or check when nothing is owed.
    Call,
    /// Raise to a total bet of `to` big blinds.
    Raise { to: f64 },
    /// Reset the table and deal a new hand.
    NewHand,
    /// Ask the coach a question about the current spot.
    Ask { question: String },
}

impl Command {
    /// Check if this command is a betting action on the current hand.
    pub fn is_betting_action(&self) -> bool {
        matches!(self, Command::Fold | Command::Call | Command::Raise { .. })
    }

    /// Parse a command line such as "raise 3", "check" or "ask should I fold?".
    pub fn parse(line: &str) -> Result<Self, ParseCommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "fold" | "f" => Ok(Command::Fold),
            "call" | "check" | "c" => Ok(Command::Call),
            "raise" | "r" => {
                let amount = rest.trim_end_matches(|c: char| c.is_alphabetic()).trim();
                amount
                    .parse::<f64>()
                    .map(|to| Command::Raise { to })
                    .map_err(|_| ParseCommandError::InvalidAmount(rest.to_string()))
            }
            "new" | "n" => Ok(Command::NewHand),
            "ask" | "?" => Ok(Command::Ask { question: rest.to_string() }),
            "" => Err(ParseCommandError::Empty),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Fold => write!(f, "Fold"),
            Command::Call => write!(f, "Call"),
            Command::Raise { to } => write!(f, "Raise to {:.1}bb", to),
            Command::NewHand => write!(f, "New hand"),
            Command::Ask { question } => write!(f, "Ask \"{}\"", question),
        }
    }
}

/// Errors from parsing a typed command.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("invalid raise amount '{0}'")]
    InvalidAmount(String),
}
