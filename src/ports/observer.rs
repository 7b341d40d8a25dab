//! Observer port - receives session events

use crate::{
    Error, Result,
    tictactoe::{BoardState, Move, Outcome, Player},
};

/// Observer trait for following a game
///
/// The console renderer is an observer; tests use recording observers.
///
/// # Event Sequence
///
/// 1. `on_game_start(board, first)` - once, before the first move
/// 2. For each turn, any number of `on_invalid_move(...)` followed by
///    one `on_move(...)`
/// 3. `on_game_end(board, outcome, winner_name)` - once, as soon as the
///    outcome is terminal
pub trait Observer {
    /// Called before the first move.
    fn on_game_start(&mut self, _board: &BoardState, _first: Player) -> Result<()> {
        Ok(())
    }

    /// Called after a move was accepted. `board` already contains it.
    fn on_move(&mut self, _board: &BoardState, _mv: Move) -> Result<()> {
        Ok(())
    }

    /// Called when the board rejected a proposed position.
    fn on_invalid_move(&mut self, _position: usize, _error: &Error) -> Result<()> {
        Ok(())
    }

    /// Called once the game is over.
    ///
    /// `winner_name` is the name of the winning contestant, `None` on a draw.
    fn on_game_end(
        &mut self,
        _board: &BoardState,
        _outcome: Outcome,
        _winner_name: Option<&str>,
    ) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl Observer for NullObserver {}
