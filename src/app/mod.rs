//! Application layer: configuration and session wiring.

pub mod config;
pub mod container;

use std::{
    cell::RefCell,
    io::{BufRead, Write},
};

pub use config::{FirstMove, GameMode, SessionConfig};
pub use container::{App, COMPUTER_NAME};

use crate::{Error, Result, adapters::prompt_line};

/// Prompt until the user names a game mode.
///
/// # Errors
///
/// Returns [`Error::InputClosed`] at end of input and [`Error::Io`] on I/O
/// failure. Unknown modes are answered with a message and a new prompt.
pub fn select_mode<R: BufRead, W: Write>(input: &RefCell<R>, output: &mut W) -> Result<GameMode> {
    loop {
        let line = prompt_line(input, output, "Select mode: (2player) or (computer) ")?;
        match line.parse::<GameMode>() {
            Ok(mode) => return Ok(mode),
            Err(_) => writeln!(output, "Invalid mode: please try again")
                .map_err(|e| Error::io("write mode error", e))?,
        }
    }
}
