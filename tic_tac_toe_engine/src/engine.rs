use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, CELL_COUNT};
use crate::error::EngineError;
use crate::player::{Player, Symbol};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// The cell written by a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCell {
    pub index: usize,
    pub symbol: Symbol,
}

/// What a successful move changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub cell: PlacedCell,
    pub status: GameStatus,
    /// Whose turn it is now. `None` once the game has ended.
    pub next_player: Option<Player>,
}

/// Why a move was accepted but had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    CellOccupied(usize),
    GameOver,
}

/// Outcome of [`GameEngine::play`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Play {
    Moved(MoveResult),
    Ignored(Ignored),
}

impl Play {
    pub fn moved(self) -> Option<MoveResult> {
        match self {
            Play::Moved(result) => Some(result),
            Play::Ignored(_) => None,
        }
    }
}

/// A single game session: the board, the two players and whose turn it is.
///
/// The same engine is reused across rounds; [`GameEngine::reset`] clears it
/// back to an empty board with the first player to move. Once a round is
/// won or drawn, further [`GameEngine::play`] calls are ignored and report
/// [`Ignored::GameOver`] until the next reset.
#[derive(Debug, Clone)]
pub struct GameEngine {
    players: [Player; 2],
    // Slot into `players`, so the current player is always one of the two.
    current: usize,
    board: Board,
    status: GameStatus,
}

impl GameEngine {
    pub fn new(first: Player, second: Player) -> Result<Self, EngineError> {
        if first.symbol() == second.symbol() {
            debug!("Engine rejected: both players use {}.", first.symbol());
            return Err(EngineError::DuplicateSymbol(first.symbol()));
        }

        debug!(
            "New game: {} ({}) vs {} ({}).",
            first.name(),
            first.symbol(),
            second.name(),
            second.symbol()
        );

        Ok(GameEngine {
            players: [first, second],
            current: 0,
            board: Board::new(),
            status: GameStatus::InProgress,
        })
    }

    /// Puts the current player's symbol on `index` and evaluates the board.
    ///
    /// A win is checked before a draw, so filling the last cell with a
    /// winning line ends as [`GameStatus::Won`].
    pub fn play(&mut self, index: usize) -> Result<Play, EngineError> {
        if index >= CELL_COUNT {
            debug!("Move rejected: index {} out of bounds.", index);
            return Err(EngineError::InvalidIndex(index));
        }
        if self.status.is_over() {
            debug!("Move ignored: game is already over.");
            return Ok(Play::Ignored(Ignored::GameOver));
        }

        let player = self.players[self.current].clone();
        if !self.board.place(index, player.symbol()) {
            debug!("Move ignored: cell {} already taken.", index);
            return Ok(Play::Ignored(Ignored::CellOccupied(index)));
        }

        let cell = PlacedCell {
            index,
            symbol: player.symbol(),
        };

        if self.board.winner().is_some() {
            debug!("Game over: {} wins.\n{}", player.name(), self.board);
            self.status = GameStatus::Won(player);
        } else if self.board.is_full() {
            debug!("Game over: it's a draw.\n{}", self.board);
            self.status = GameStatus::Draw;
        } else {
            self.current = 1 - self.current;
            debug!("Turn switched: now it's {}'s turn.", self.current_player().name());
        }

        let next_player = (!self.status.is_over()).then(|| self.current_player().clone());

        Ok(Play::Moved(MoveResult {
            cell,
            status: self.status.clone(),
            next_player,
        }))
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.current = 0;
        self.status = GameStatus::InProgress;

        debug!("Game reset. First player: {}.", self.first_player().name());
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn first_player(&self) -> &Player {
        &self.players[0]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn moves_played(&self) -> usize {
        self.board.occupied()
    }
}
