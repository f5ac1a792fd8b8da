//! Rules engine for a two-player tic-tac-toe session on a fixed 3x3 grid.
//!
//! The engine never renders anything. Each [`GameEngine::play`] returns a
//! value describing what changed and the caller decides how to show it.

pub mod board;
pub mod engine;
pub mod error;
pub mod player;

pub use board::{Board, CELL_COUNT, WINNING_LINES};
pub use engine::{GameEngine, GameStatus, Ignored, MoveResult, PlacedCell, Play};
pub use error::EngineError;
pub use player::{ParseSymbolError, Player, Symbol};
