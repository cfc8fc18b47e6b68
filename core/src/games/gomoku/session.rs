use crate::error::GameError;
use crate::storage::{KeyValueStore, SessionStore, Serializer, YamlSerializer};
use crate::{log, log_debug, log_warn};
use super::game_state::GomokuGameState;
use super::snapshot::GameSnapshot;
use super::types::{GameMode, Move, MoveOutcome};

#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Mode used when no saved game is restored.
    pub default_mode: GameMode,
    pub autosave: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            default_mode: GameMode::TwoHuman,
            autosave: true,
        }
    }
}

pub struct GomokuSession<TStore, TSerializer = YamlSerializer>
where
    TStore: KeyValueStore,
    TSerializer: Serializer<GameSnapshot>,
{
    state: GomokuGameState,
    store: SessionStore<TStore, TSerializer>,
    autosave: bool,
}

impl<TStore, TSerializer> GomokuSession<TStore, TSerializer>
where
    TStore: KeyValueStore,
    TSerializer: Serializer<GameSnapshot>,
{
    /// Resumes the saved game if there is a valid one, otherwise starts fresh.
    pub fn open(store: SessionStore<TStore, TSerializer>, options: SessionOptions) -> Self {
        let state = match store.load().and_then(|saved| saved.map(|s| s.restore()).transpose()) {
            Ok(Some(state)) => {
                log!(
                    "Resumed game with {} moves in {:?} mode",
                    state.ledger().len(),
                    state.mode()
                );
                state
            }
            Ok(None) => GomokuGameState::new(options.default_mode),
            Err(e) => {
                log_warn!("Discarding saved game: {}", e);
                if let Err(e) = store.clear() {
                    log_warn!("Failed to clear saved game: {}", e);
                }
                GomokuGameState::new(options.default_mode)
            }
        };

        Self {
            state,
            store,
            autosave: options.autosave,
        }
    }

    pub fn state(&self) -> &GomokuGameState {
        &self.state
    }

    pub fn is_computer_turn(&self) -> bool {
        self.state.is_computer_turn()
    }

    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, GameError> {
        let outcome = self.state.submit_move(row, col)?;
        log_debug!(
            "{} played ({}, {}) as move {}",
            outcome.applied.side,
            row,
            col,
            outcome.applied.sequence_number
        );
        self.after_move(&outcome);
        Ok(outcome)
    }

    /// Plays the computer's reply; `Ok(None)` when there was no cell left.
    pub fn play_computer_turn(&mut self) -> Result<Option<MoveOutcome>, GameError> {
        let outcome = self.state.play_computer_move()?;
        if let Some(ref outcome) = outcome {
            log_debug!(
                "Computer played ({}, {}) as move {}",
                outcome.applied.row,
                outcome.applied.col,
                outcome.applied.sequence_number
            );
            self.after_move(outcome);
        }
        Ok(outcome)
    }

    pub fn undo(&mut self) -> Vec<Move> {
        let undone = self.state.undo();
        if !undone.is_empty() {
            log_debug!("Undid {} move(s)", undone.len());
            self.persist();
        }
        undone
    }

    pub fn reset(&mut self) {
        self.state.reset();
        log!("Game reset");
        self.clear_saved();
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.state.set_mode(mode);
        log!("Switched to {:?} mode", mode);
        self.persist();
    }

    fn after_move(&self, outcome: &MoveOutcome) {
        if outcome.status.is_terminal() {
            log!("Game over: {:?} after {} moves", outcome.status, self.state.ledger().len());
        }
        self.persist();
    }

    /// Saves an in-progress game; a finished game is removed instead so it is never resumed.
    fn persist(&self) {
        if !self.autosave {
            return;
        }
        if self.state.status().is_terminal() {
            self.clear_saved();
            return;
        }
        if let Err(e) = self.store.save(&GameSnapshot::capture(&self.state)) {
            log_warn!("Failed to save game: {}", e);
        }
    }

    fn clear_saved(&self) {
        if !self.autosave {
            return;
        }
        if let Err(e) = self.store.clear() {
            log_warn!("Failed to clear saved game: {}", e);
        }
    }
}
