//! Contestant port - abstraction over where moves come from

use crate::{
    Result,
    tictactoe::{BoardState, Player},
};

/// Contestant trait - anything that can supply a move for one side
///
/// A contestant proposes a position; it does not apply it. The session
/// hands the position to the board, and if the board rejects it the session
/// asks the same contestant again. Human contestants therefore do not need
/// to range-check their input.
///
/// # Examples
///
/// ```
/// use noughts::{
///     ports::Contestant,
///     tictactoe::{BoardState, Player},
/// };
///
/// struct FirstFree;
///
/// impl Contestant for FirstFree {
///     fn select_move(&mut self, board: &BoardState, _mark: Player) -> noughts::Result<usize> {
///         board
///             .empty_positions()
///             .first()
///             .copied()
///             .ok_or(noughts::Error::GameOver)
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
///
/// let mut contestant = FirstFree;
/// assert_eq!(contestant.select_move(&BoardState::new(), Player::X).unwrap(), 1);
/// ```
pub trait Contestant {
    /// Propose a 1-based position for `mark` on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced at all, e.g. the input
    /// source closed ([`crate::Error::InputClosed`]) or the board is
    /// terminal ([`crate::Error::GameOver`]). The session stops on these.
    fn select_move(&mut self, board: &BoardState, mark: Player) -> Result<usize>;

    /// Name used in prompts, logs, and the end-of-game message.
    fn name(&self) -> &str;
}
