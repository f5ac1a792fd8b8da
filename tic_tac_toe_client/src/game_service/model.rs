use tic_tac_toe_engine::{GameEngine, GameStatus, MoveResult, Player, Symbol, CELL_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Outcome::Winner(player) => format!("🏆 {} wins!", player.name()),
            Outcome::Draw => "It's a draw!".to_string(),
        }
    }
}

/// What the window shows. Built from the engine once, then kept in step
/// with the [`MoveResult`] of every applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub cells: [Option<Symbol>; CELL_COUNT],
    pub current_player: Player,
    pub outcome: Option<Outcome>,
}

impl GameView {
    pub fn from_engine(engine: &GameEngine) -> Self {
        GameView {
            cells: *engine.board().cells(),
            current_player: engine.current_player().clone(),
            outcome: outcome_of(engine.status()),
        }
    }

    pub fn apply(&mut self, result: &MoveResult) {
        self.cells[result.cell.index] = Some(result.cell.symbol);
        if let Some(next) = &result.next_player {
            self.current_player = next.clone();
        }
        self.outcome = outcome_of(&result.status);
    }
}

fn outcome_of(status: &GameStatus) -> Option<Outcome> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won(player) => Some(Outcome::Winner(player.clone())),
        GameStatus::Draw => Some(Outcome::Draw),
    }
}
