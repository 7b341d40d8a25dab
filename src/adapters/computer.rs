//! Computer contestants: minimax search and a random baseline.

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use tracing::debug;

use crate::{
    Error, Result,
    minimax::{Minimax, Scoring},
    ports::Contestant,
    tictactoe::{BoardState, Player},
};

/// Plays the move chosen by a fresh exhaustive minimax search each turn.
pub struct MinimaxContestant {
    name: String,
    scoring: Scoring,
}

impl MinimaxContestant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scoring: Scoring::default(),
        }
    }

    /// Set the terminal scoring policy used by the search.
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }
}

impl Contestant for MinimaxContestant {
    fn select_move(&mut self, board: &BoardState, mark: Player) -> Result<usize> {
        let mut search = Minimax::new(mark).with_scoring(self.scoring);
        let position = search.best_move(board)?;
        debug!(
            player = %self.name,
            position,
            nodes = search.nodes_visited(),
            "computer chose move"
        );
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Plays a uniformly random empty position.
pub struct RandomContestant {
    name: String,
    rng: StdRng,
}

impl RandomContestant {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a random contestant with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Contestant for RandomContestant {
    fn select_move(&mut self, board: &BoardState, _mark: Player) -> Result<usize> {
        let moves = board.empty_positions();
        if moves.is_empty() || board.is_terminal() {
            return Err(Error::GameOver);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }
}
