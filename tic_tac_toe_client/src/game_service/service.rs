use crate::game_service::model::GameView;

use tic_tac_toe_engine::{EngineError, GameEngine, Play};
use tracing::{debug, error, info};

/// Result of a click on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No round is running yet; the engine was not consulted.
    NotStarted,
    Played(Play),
}

/// Sits between the window and the engine: forwards clicks, keeps the
/// [`GameView`] current and resets the engine once an outcome has been seen.
pub struct GameService {
    engine: GameEngine,
    view: GameView,
    started: bool,
}

impl GameService {
    pub fn new(engine: GameEngine) -> Self {
        let view = GameView::from_engine(&engine);
        Self {
            engine,
            view,
            started: false,
        }
    }

    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        info!(
            "🎮 Game started. {} ({}) plays first.",
            self.view.current_player.name(),
            self.view.current_player.symbol()
        );
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Whether clicking `index` can change anything right now.
    pub fn can_play(&self, index: usize) -> bool {
        self.started
            && self.view.outcome.is_none()
            && self.view.cells.get(index).is_some_and(Option::is_none)
    }

    pub fn click(&mut self, index: usize) -> Result<ClickOutcome, EngineError> {
        if !self.started {
            debug!("Click on cell {} ignored: game not started.", index);
            return Ok(ClickOutcome::NotStarted);
        }

        let play = self.engine.play(index).map_err(|err| {
            error!("❌ Move failed: {}", err);
            err
        })?;

        match &play {
            Play::Moved(result) => {
                info!(
                    "✅ {} placed at cell {}.",
                    result.cell.symbol, result.cell.index
                );
                self.view.apply(result);
                if let Some(outcome) = &self.view.outcome {
                    info!("Round over: {}", outcome.message());
                }
            }
            Play::Ignored(reason) => debug!("Click on cell {} ignored: {:?}.", index, reason),
        }

        Ok(ClickOutcome::Played(play))
    }

    /// Dismisses the outcome dialog and starts the next round.
    pub fn acknowledge_outcome(&mut self) {
        if self.view.outcome.is_none() {
            return;
        }
        self.engine.reset();
        self.view = GameView::from_engine(&self.engine);
        info!("🔄 Board reset. {} plays first.", self.view.current_player.name());
    }
}
