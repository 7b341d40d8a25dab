//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod render;

pub use board::{BOARD_SIZE, BoardState, CELL_COUNT, Cell, Player};
pub use game::{Game, Move, Outcome};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use render::format_board;
