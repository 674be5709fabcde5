//! User actions, as read from the command line

use std::str::FromStr;

/// Something the user asked the session to do.
///
/// Field values are kept as raw text and coerced when the action is
/// dispatched, so an empty field behaves the same as a blank form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Log in as `username`
    Login {
        /// The derived username to log in as
        username: String,
        /// The pin, as typed
        pin: String,
    },

    /// Move money from the current account to another
    Transfer {
        /// The recipient's username
        to: String,
        /// The amount, as typed
        amount: String,
    },

    /// Ask the bank for a loan
    Loan {
        /// The amount, as typed
        amount: String,
    },

    /// Close the current account
    Close {
        /// Must match the current account's username
        username: String,
        /// Must match the current account's pin
        pin: String,
    },

    /// Toggle the ordering of the movement list
    Sort,
}

/// Errors returned when a line cannot be read as an [`Action`]
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// The line was blank
    #[error("no command given")]
    Empty,

    /// The first word is not a known command
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// More words were given than the command has fields
    #[error("'{command}' takes at most {expected} argument(s)")]
    TooManyArguments {
        /// The command
        command: &'static str,
        /// Its number of fields
        expected: usize,
    },
}

impl Action {
    /// The command word for this action
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login { .. } => "login",
            Self::Transfer { .. } => "transfer",
            Self::Loan { .. } => "loan",
            Self::Close { .. } => "close",
            Self::Sort => "sort",
        }
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or(ParseError::Empty)?;
        let args: Vec<&str> = words.collect();

        let (command, expected): (&'static str, usize) = match command.to_lowercase().as_str() {
            "login" => ("login", 2),
            "transfer" => ("transfer", 2),
            "loan" => ("loan", 1),
            "close" => ("close", 2),
            "sort" => ("sort", 0),
            _ => return Err(ParseError::UnknownCommand(command.to_string())),
        };

        if args.len() > expected {
            return Err(ParseError::TooManyArguments { command, expected });
        }

        let field = |i: usize| args.get(i).copied().unwrap_or_default().to_string();

        let action = match command {
            "login" => Self::Login {
                username: field(0),
                pin: field(1),
            },
            "transfer" => Self::Transfer {
                to: field(0),
                amount: field(1),
            },
            "loan" => Self::Loan { amount: field(0) },
            "close" => Self::Close {
                username: field(0),
                pin: field(1),
            },
            _ => Self::Sort,
        };

        Ok(action)
    }
}
