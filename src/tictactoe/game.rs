//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{BoardState, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a board, derived from its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
    Ongoing,
}

impl Outcome {
    /// Check whether the game has ended
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// The winning player, if any
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::Draw | Outcome::Ongoing => None,
        }
    }
}

/// A live game: the board, whose turn it is, and the moves so far.
///
/// X always moves first; turns alternate after every accepted move.
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    board: BoardState,
    to_move: Player,
    moves: Vec<Move>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Game {
            board: BoardState::new(),
            to_move: Player::X,
            moves: Vec::new(),
        }
    }

    /// Current board
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Player whose mark goes down next
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Accepted moves in order
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Outcome of the current board
    pub fn outcome(&self) -> Outcome {
        self.board.evaluate_outcome()
    }

    /// Play a move for the player to move and return the resulting outcome.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has ended, and
    /// [`crate::Error::InvalidMove`] if the board rejects the position. In
    /// both cases the game is unchanged.
    pub fn play(&mut self, position: usize) -> Result<Outcome, crate::Error> {
        if self.outcome().is_terminal() {
            return Err(crate::Error::GameOver);
        }

        self.board.place_mark(position, self.to_move)?;
        self.moves.push(Move {
            position,
            player: self.to_move,
        });
        self.to_move = self.to_move.opponent();

        Ok(self.outcome())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
