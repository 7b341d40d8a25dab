//! Text rendering of a session.

use std::io::Write;

use crate::{
    Error, Result,
    ports::Observer,
    tictactoe::{BoardState, Move, Outcome, Player, format_board},
};

/// Prints the board after every move and announces the result.
pub struct ConsoleObserver<W: Write> {
    out: W,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_board(&mut self, board: &BoardState) -> Result<()> {
        write!(self.out, "{}", format_board(board)).map_err(|e| Error::io("render board", e))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}").map_err(|e| Error::io("write message", e))
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn on_game_start(&mut self, board: &BoardState, first: Player) -> Result<()> {
        self.write_line(&format!("{first} moves first"))?;
        self.write_board(board)
    }

    fn on_move(&mut self, board: &BoardState, _mv: Move) -> Result<()> {
        self.write_board(board)
    }

    fn on_invalid_move(&mut self, _position: usize, error: &Error) -> Result<()> {
        self.write_line(&format!("{error}. Try again."))
    }

    fn on_game_end(
        &mut self,
        _board: &BoardState,
        outcome: Outcome,
        winner_name: Option<&str>,
    ) -> Result<()> {
        match (outcome, winner_name) {
            (Outcome::Win(_), Some(name)) => self.write_line(&format!("{name} wins!")),
            (Outcome::Win(player), None) => self.write_line(&format!("Player {player} wins!")),
            _ => self.write_line("Draw!"),
        }
    }
}
