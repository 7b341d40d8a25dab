//! Human contestant reading positions from a line-based input.

use std::{
    cell::RefCell,
    io::{BufRead, Write},
    rc::Rc,
};

use tracing::debug;

use crate::{
    Error, Result,
    ports::Contestant,
    tictactoe::{BoardState, Player},
};

/// Input shared by every reader of one terminal.
///
/// Both humans of a two-player game and the mode menu read the same stdin,
/// which can only be locked once.
pub type SharedInput<R> = Rc<RefCell<R>>;

/// Wrap a reader for sharing between contestants.
pub fn shared_input<R: BufRead>(reader: R) -> SharedInput<R> {
    Rc::new(RefCell::new(reader))
}

/// Write `prompt`, then read one line and return it trimmed.
///
/// # Errors
///
/// Returns [`Error::InputClosed`] at end of input and [`Error::Io`] if
/// reading or writing fails.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &RefCell<R>,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(output, "{prompt}").map_err(|e| Error::io("write prompt", e))?;
    output.flush().map_err(|e| Error::io("flush prompt", e))?;

    let mut line = String::new();
    let read = input
        .borrow_mut()
        .read_line(&mut line)
        .map_err(|e| Error::io("read input", e))?;
    if read == 0 {
        return Err(Error::InputClosed);
    }
    Ok(line.trim().to_string())
}

/// Read a typed integer as a position.
///
/// Integers no cell can have (negative, or too large for `usize`) become 0,
/// which the board rejects as out of range. Anything else is `None`.
fn parse_position(line: &str) -> Option<usize> {
    if let Ok(position) = line.parse::<usize>() {
        return Some(position);
    }
    let digits = line.strip_prefix(&['-', '+'][..]).unwrap_or(line);
    let is_integer = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
    is_integer.then_some(0)
}

/// A person typing position numbers.
///
/// Lines that are not an integer are answered with a message and a fresh
/// prompt. Integers are handed to the board, which decides whether the
/// position is playable.
pub struct HumanContestant<R: BufRead, W: Write> {
    name: String,
    input: SharedInput<R>,
    output: W,
}

impl<R: BufRead, W: Write> HumanContestant<R, W> {
    pub fn new(name: impl Into<String>, input: SharedInput<R>, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Contestant for HumanContestant<R, W> {
    fn select_move(&mut self, _board: &BoardState, mark: Player) -> Result<usize> {
        let prompt = format!("{} ({mark}) select a number: ", self.name);
        loop {
            let line = prompt_line(&*self.input, &mut self.output, &prompt)?;
            match parse_position(&line) {
                Some(position) => return Ok(position),
                None => {
                    debug!(player = %self.name, input = %line, "unparsable move input");
                    writeln!(self.output, "Invalid input '{line}': enter a number from 1 to 9")
                        .map_err(|e| Error::io("write input error", e))?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
