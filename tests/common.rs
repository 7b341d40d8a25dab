//! Shared helpers for the noughts integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use noughts::{
    Error, Result,
    ports::{Contestant, Observer},
    tictactoe::{BoardState, Move, Outcome, Player},
};

/// Parse a board literal, panicking on typos in the test itself.
pub fn board(s: &str) -> BoardState {
    BoardState::from_string(s).unwrap_or_else(|e| panic!("bad board literal {s:?}: {e}"))
}

/// Contestant replaying a fixed list of positions, then reporting closed input.
pub struct ScriptedContestant {
    name: String,
    moves: VecDeque<usize>,
}

impl ScriptedContestant {
    pub fn new(name: &str, moves: &[usize]) -> Self {
        Self {
            name: name.to_string(),
            moves: moves.iter().copied().collect(),
        }
    }

    pub fn boxed(name: &str, moves: &[usize]) -> Box<dyn Contestant> {
        Box::new(Self::new(name, moves))
    }
}

impl Contestant for ScriptedContestant {
    fn select_move(&mut self, _board: &BoardState, _mark: Player) -> Result<usize> {
        self.moves.pop_front().ok_or(Error::InputClosed)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Event as seen by [`RecordingObserver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start(Player),
    Move(Move),
    Invalid(usize),
    End(Outcome, Option<String>),
}

/// Observer keeping every event in order
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<Event>,
}

impl RecordingObserver {
    pub fn invalid_positions(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Invalid(position) => Some(*position),
                _ => None,
            })
            .collect()
    }

    pub fn moves(&self) -> Vec<Move> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Move(mv) => Some(*mv),
                _ => None,
            })
            .collect()
    }
}

impl Observer for RecordingObserver {
    fn on_game_start(&mut self, _board: &BoardState, first: Player) -> Result<()> {
        self.events.push(Event::Start(first));
        Ok(())
    }

    fn on_move(&mut self, _board: &BoardState, mv: Move) -> Result<()> {
        self.events.push(Event::Move(mv));
        Ok(())
    }

    fn on_invalid_move(&mut self, position: usize, _error: &Error) -> Result<()> {
        self.events.push(Event::Invalid(position));
        Ok(())
    }

    fn on_game_end(
        &mut self,
        _board: &BoardState,
        outcome: Outcome,
        winner_name: Option<&str>,
    ) -> Result<()> {
        self.events
            .push(Event::End(outcome, winner_name.map(str::to_string)));
        Ok(())
    }
}
