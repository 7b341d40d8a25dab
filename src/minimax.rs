//! Exhaustive minimax search for the computer's move.
//!
//! The search walks the whole remaining game tree on every call. Each
//! explored move is played on a fresh copy of the board, so sibling branches
//! never share state and no undo is needed. There is no pruning and no
//! memoization; a 3x3 board has at most 9! move orders.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    Error, Result,
    tictactoe::{BoardState, Outcome, Player},
};

/// Score of a finished game the maximizer won
pub const WIN_SCORE: i32 = 10;

/// Score of a finished game the maximizer lost
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Score of a drawn game
pub const DRAW_SCORE: i32 = 0;

/// How terminal positions are scored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scoring {
    /// Wins and losses score the same whatever their depth. Any winning
    /// line may be chosen, not necessarily the shortest.
    #[default]
    Flat,
    /// Wins score `10 - depth` and losses `depth - 10`, preferring the
    /// fastest win and the slowest loss.
    DepthAdjusted,
}

impl fmt::Display for Scoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scoring::Flat => write!(f, "flat"),
            Scoring::DepthAdjusted => write!(f, "depth-adjusted"),
        }
    }
}

impl FromStr for Scoring {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Scoring::Flat),
            "depth-adjusted" | "depth" => Ok(Scoring::DepthAdjusted),
            _ => Err(Error::ParseScoring {
                input: s.to_string(),
            }),
        }
    }
}

/// Minimax searcher playing for `maximizer`.
///
/// # Examples
///
/// ```
/// use noughts::{
///     minimax::{Minimax, Scoring},
///     tictactoe::{BoardState, Player},
/// };
///
/// // O to move completes the middle column at 8. Blocking at 4 also wins
/// // two moves later, so only depth-adjusted scoring prefers 8.
/// let board = BoardState::from_string("XOX .O. X..").unwrap();
/// let mut search = Minimax::new(Player::O).with_scoring(Scoring::DepthAdjusted);
/// assert_eq!(search.best_move(&board).unwrap(), 8);
///
/// let mut flat = Minimax::new(Player::O);
/// assert_eq!(flat.best_move(&board).unwrap(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Minimax {
    maximizer: Player,
    scoring: Scoring,
    nodes: u64,
}

impl Minimax {
    /// Create a searcher that maximizes `maximizer`'s result
    pub fn new(maximizer: Player) -> Self {
        Self {
            maximizer,
            scoring: Scoring::default(),
            nodes: 0,
        }
    }

    /// Set the terminal scoring policy.
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// States expanded since this searcher was created
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    /// Choose the maximizer's move on `state`.
    ///
    /// The first position (in ascending order) reaching the best score
    /// wins ties.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] if `state` is already won or drawn.
    pub fn best_move(&mut self, state: &BoardState) -> Result<usize> {
        let scored = self.evaluate_moves(state)?;

        let mut best: Option<(usize, i32)> = None;
        for (position, score) in scored {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((position, score));
            }
        }

        let (position, score) = best.ok_or(Error::GameOver)?;
        debug!(
            board = %state.encode(),
            maximizer = %self.maximizer,
            position,
            score,
            nodes = self.nodes,
            "minimax selected move"
        );
        Ok(position)
    }

    /// Score every legal move on `state` for the maximizer, in ascending
    /// position order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] if `state` is already won or drawn.
    pub fn evaluate_moves(&mut self, state: &BoardState) -> Result<Vec<(usize, i32)>> {
        if state.is_terminal() {
            return Err(Error::GameOver);
        }

        let mut scored = Vec::new();
        for position in state.empty_positions() {
            let mut next = *state;
            next.place_mark(position, self.maximizer)?;
            let score = self.score(&next, 1, false)?;
            trace!(position, score, "root move scored");
            scored.push((position, score));
        }
        Ok(scored)
    }

    /// Minimax value of `state` at `depth`, with `is_maximizing` telling
    /// whose mark goes down next.
    pub fn score(&mut self, state: &BoardState, depth: u32, is_maximizing: bool) -> Result<i32> {
        self.nodes += 1;

        if let Some(score) = self.terminal_score(state.evaluate_outcome(), depth) {
            return Ok(score);
        }

        let mark = if is_maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };

        let mut best = if is_maximizing { i32::MIN } else { i32::MAX };
        for position in state.empty_positions() {
            let mut next = *state;
            next.place_mark(position, mark)?;
            let value = self.score(&next, depth + 1, !is_maximizing)?;
            best = if is_maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        Ok(best)
    }

    fn terminal_score(&self, outcome: Outcome, depth: u32) -> Option<i32> {
        let depth = depth as i32;
        match outcome {
            Outcome::Ongoing => None,
            Outcome::Draw => Some(DRAW_SCORE),
            Outcome::Win(winner) => {
                let base = if winner == self.maximizer {
                    WIN_SCORE
                } else {
                    LOSS_SCORE
                };
                Some(match self.scoring {
                    Scoring::Flat => base,
                    Scoring::DepthAdjusted => base - base.signum() * depth,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> BoardState {
        BoardState::from_string(s).unwrap()
    }

    #[test]
    fn terminal_positions_score_from_maximizer_view() {
        let mut search = Minimax::new(Player::X);
        assert_eq!(search.score(&board("XXX OO. ..."), 3, true).unwrap(), WIN_SCORE);
        assert_eq!(search.score(&board("OOO XX. X.."), 3, true).unwrap(), LOSS_SCORE);
        assert_eq!(search.score(&board("XOX XOO OXX"), 9, false).unwrap(), DRAW_SCORE);
    }

    #[test]
    fn depth_adjusted_scores_shrink_with_depth() {
        let search = Minimax::new(Player::X).with_scoring(Scoring::DepthAdjusted);
        assert_eq!(search.terminal_score(Outcome::Win(Player::X), 3), Some(7));
        assert_eq!(search.terminal_score(Outcome::Win(Player::O), 3), Some(-7));
        assert_eq!(search.terminal_score(Outcome::Draw, 3), Some(0));
        assert_eq!(search.terminal_score(Outcome::Ongoing, 3), None);
    }

    #[test]
    fn takes_the_immediate_win() {
        // X X .
        // O O .
        // . . .
        let mut search = Minimax::new(Player::X);
        assert_eq!(search.best_move(&board("XX. OO. ...")).unwrap(), 3);
    }

    #[test]
    fn blocks_the_only_threat() {
        // X X .
        // . O .
        // . . .
        let mut search = Minimax::new(Player::O);
        assert_eq!(search.best_move(&board("XX. .O. ...")).unwrap(), 3);
    }

    #[test]
    fn subtree_score_matches_the_root_evaluation() {
        // X X .
        // . O .
        // . . .
        let state = board("XX. .O. ...");
        let mut search = Minimax::new(Player::O);
        let scored = search.evaluate_moves(&state).unwrap();

        let mut blocked = state;
        blocked.place_mark(3, Player::O).unwrap();
        let subtree = search.score(&blocked, 1, false).unwrap();
        assert!(scored.contains(&(3, subtree)));
    }

    #[test]
    fn terminal_root_is_rejected() {
        let mut search = Minimax::new(Player::O);
        assert!(matches!(
            search.best_move(&board("XXX OO. ...")),
            Err(Error::GameOver)
        ));
        assert!(matches!(
            search.evaluate_moves(&board("XOX XOO OXX")),
            Err(Error::GameOver)
        ));
    }

    #[test]
    fn perfect_play_from_empty_board_is_a_draw() {
        let mut search = Minimax::new(Player::X);
        let scores = search.evaluate_moves(&BoardState::new()).unwrap();
        assert_eq!(scores.len(), 9);
        assert!(scores.iter().all(|&(_, score)| score == DRAW_SCORE));
        // All moves tie, so the first position wins.
        assert_eq!(search.best_move(&BoardState::new()).unwrap(), 1);
        assert!(search.nodes_visited() > 0);
    }

    #[test]
    fn scoring_parses_from_cli_tokens() {
        assert_eq!("flat".parse::<Scoring>().unwrap(), Scoring::Flat);
        assert_eq!(
            "Depth-Adjusted".parse::<Scoring>().unwrap(),
            Scoring::DepthAdjusted
        );
        assert!("fast".parse::<Scoring>().is_err());
        assert_eq!(Scoring::DepthAdjusted.to_string(), "depth-adjusted");
    }
}
