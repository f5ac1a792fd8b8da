use derive_more::{Display, Error};

use crate::player::Symbol;

/// Failures the engine reports to its caller. State is left untouched
/// whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Cell index outside `0..9`.
    #[display("Cell index {_0} is out of range (expected 0..=8)")]
    InvalidIndex(#[error(not(source))] usize),

    /// Both players were given the same symbol.
    #[display("Both players use symbol {_0}")]
    DuplicateSymbol(#[error(not(source))] Symbol),
}
