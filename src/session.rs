//! Turn loop driving one game between two contestants.
//!
//! The session asks the contestant whose turn it is for a position, applies
//! it, and checks the outcome after every accepted move. A position the
//! board rejects is reported to the observer and the same contestant is
//! asked again; any other error ends the session.

use tracing::{debug, info, warn};

use crate::{
    Result,
    ports::{Contestant, Observer},
    tictactoe::{Game, Move, Outcome, Player},
};

/// One game between the X and O contestants.
pub struct Session<'a> {
    game: Game,
    x: Box<dyn Contestant + 'a>,
    o: Box<dyn Contestant + 'a>,
    rejected_moves: usize,
}

impl<'a> Session<'a> {
    /// Create a session where `x` moves first.
    pub fn new(x: Box<dyn Contestant + 'a>, o: Box<dyn Contestant + 'a>) -> Self {
        Self {
            game: Game::new(),
            x,
            o,
            rejected_moves: 0,
        }
    }

    /// The game so far
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consume the session and keep the finished game
    pub fn into_game(self) -> Game {
        self.game
    }

    /// Number of positions the board has rejected so far
    pub fn rejected_moves(&self) -> usize {
        self.rejected_moves
    }

    /// Name of the contestant playing `player`
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::X => self.x.name(),
            Player::O => self.o.name(),
        }
    }

    fn contestant_mut(&mut self, player: Player) -> &mut (dyn Contestant + 'a) {
        match player {
            Player::X => self.x.as_mut(),
            Player::O => self.o.as_mut(),
        }
    }

    /// Play until the game is won or drawn and return the outcome.
    ///
    /// # Errors
    ///
    /// Returns the first error a contestant or the observer reports, e.g.
    /// [`crate::Error::InputClosed`]. Rejected positions are not errors.
    pub fn run(&mut self, observer: &mut dyn Observer) -> Result<Outcome> {
        info!(x = %self.x.name(), o = %self.o.name(), "game started");
        observer.on_game_start(self.game.board(), self.game.to_move())?;

        let mut outcome = self.game.outcome();
        while !outcome.is_terminal() {
            outcome = self.play_turn(observer)?;
        }

        let winner_name = outcome.winner().map(|player| self.name_of(player));
        info!(?outcome, winner = ?winner_name, moves = self.game.moves().len(), "game over");
        observer.on_game_end(self.game.board(), outcome, winner_name)?;
        Ok(outcome)
    }

    /// Ask the player to move until the board accepts a position.
    fn play_turn(&mut self, observer: &mut dyn Observer) -> Result<Outcome> {
        let player = self.game.to_move();
        loop {
            let board = *self.game.board();
            let position = self.contestant_mut(player).select_move(&board, player)?;

            match self.game.play(position) {
                Ok(outcome) => {
                    debug!(%player, position, board = %self.game.board().encode(), "move applied");
                    observer.on_move(self.game.board(), Move { position, player })?;
                    return Ok(outcome);
                }
                Err(err) if err.is_invalid_move() => {
                    warn!(%player, position, %err, "move rejected");
                    self.rejected_moves += 1;
                    observer.on_invalid_move(position, &err)?;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Error,
        adapters::MinimaxContestant,
        ports::observer::NullObserver,
        tictactoe::BoardState,
    };

    struct Scripted {
        moves: Vec<usize>,
    }

    impl Contestant for Scripted {
        fn select_move(&mut self, _board: &BoardState, _mark: Player) -> Result<usize> {
            if self.moves.is_empty() {
                return Err(Error::InputClosed);
            }
            Ok(self.moves.remove(0))
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    fn scripted(moves: &[usize]) -> Box<dyn Contestant> {
        Box::new(Scripted {
            moves: moves.to_vec(),
        })
    }

    #[test]
    fn stops_as_soon_as_a_line_is_complete() {
        let mut session = Session::new(scripted(&[1, 2, 3, 9]), scripted(&[4, 5, 6]));
        let outcome = session.run(&mut NullObserver).unwrap();
        assert_eq!(outcome, Outcome::Win(Player::X));
        assert_eq!(session.game().moves().len(), 5);
    }

    #[test]
    fn rejected_positions_are_asked_again() {
        let mut session = Session::new(scripted(&[5, 1, 9]), scripted(&[5, 0, 2, 3]));
        let outcome = session.run(&mut NullObserver).unwrap();
        assert_eq!(outcome, Outcome::Win(Player::X));
        assert_eq!(session.rejected_moves(), 2);
    }

    #[test]
    fn contestant_errors_end_the_session() {
        let mut session = Session::new(scripted(&[5]), scripted(&[]));
        assert!(matches!(
            session.run(&mut NullObserver),
            Err(Error::InputClosed)
        ));
    }

    #[test]
    fn computer_answers_a_corner_and_blocks() {
        let mut session = Session::new(scripted(&[1, 2]), Box::new(MinimaxContestant::new("cpu")));
        // The script runs out on X's third turn.
        assert!(matches!(
            session.run(&mut NullObserver),
            Err(Error::InputClosed)
        ));
        let o_moves: Vec<usize> = session
            .game()
            .moves()
            .iter()
            .filter(|m| m.player == Player::O)
            .map(|m| m.position)
            .collect();
        // The center is the only reply to a corner that does not lose, and
        // X's 1-2 then forces the block at 3.
        assert_eq!(o_moves, vec![5, 3]);
    }
}
