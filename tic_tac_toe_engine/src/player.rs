use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the two marks a player can put on the board.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    #[display("X")]
    X,
    #[display("O")]
    O,
}

impl Symbol {
    pub fn other(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// Input that is neither `X` nor `O`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("expected X or O, got {input:?}")]
pub struct ParseSymbolError {
    #[error(not(source))]
    input: String,
}

impl FromStr for Symbol {
    type Err = ParseSymbolError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "X" | "x" => Ok(Symbol::X),
            "O" | "o" => Ok(Symbol::O),
            other => Err(ParseSymbolError {
                input: other.to_string(),
            }),
        }
    }
}

/// A named participant. Fields are private so a player can't change once
/// the session has been created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    symbol: Symbol,
}

impl Player {
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Self {
        Player {
            name: name.into(),
            symbol,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}
