//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{game::Outcome, lines::LineAnalyzer};
use crate::error::{Error, MoveRejection};

/// Side length of the board
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player whose mark fills this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X is player one and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(Error::ParsePlayer {
                input: other.to_string(),
            }),
        }
    }
}

/// The 3x3 grid plus the number of marks placed on it.
///
/// Positions are 1-based (1..=9, row-major). `move_count` always equals the
/// number of non-empty cells; both fields are private so that `place_mark`
/// is the only way to change them.
///
/// This type implements `Copy`: the search takes a fresh copy for every
/// hypothetical move instead of undoing moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BoardState {
    cells: [Cell; CELL_COUNT],
    move_count: usize,
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl BoardState {
    /// Create a new empty board
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; CELL_COUNT],
            move_count: 0,
        }
    }

    /// Helper: Parse 9 cells from a slice of characters.
    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; CELL_COUNT], Error> {
        if chars.len() != CELL_COUNT {
            return Err(Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i + 1,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    /// Helper: Count pieces on the board.
    fn count_pieces(cells: &[Cell; CELL_COUNT]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain exactly 9 cell characters in row-major order.
    /// Whitespace and `|` separators are ignored, so `"X.O/...|..."`-style
    /// layouts need no preprocessing beyond the separators listed.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board does not have exactly 9 cell characters
    /// - Any character is not a valid cell representation
    /// - The piece counts differ by more than one
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::tictactoe::{BoardState, Cell};
    ///
    /// let board = BoardState::from_string("XO. .X. ..O").unwrap();
    /// assert_eq!(board.get(1), Some(Cell::X));
    /// assert_eq!(board.move_count(), 4);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();
        let cells = Self::parse_cells(&chars, s)?;
        let count = Self::count_pieces(&cells);

        if count.x.abs_diff(count.o) > 1 {
            return Err(Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(BoardState {
            cells,
            move_count: count.x + count.o,
        })
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of marks placed so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Get the cell at a 1-based position, or `None` when out of range
    pub fn get(&self, position: usize) -> Option<Cell> {
        Self::index_of(position).map(|idx| self.cells[idx])
    }

    /// Check whether every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.move_count == CELL_COUNT
    }

    /// Position for zero-based `(row, column)` coordinates
    pub fn position_at(row: usize, column: usize) -> Option<usize> {
        (row < BOARD_SIZE && column < BOARD_SIZE).then(|| row * BOARD_SIZE + column + 1)
    }

    /// Zero-based `(row, column)` coordinates of a 1-based position
    pub fn coordinates(position: usize) -> Option<(usize, usize)> {
        Self::index_of(position).map(|idx| (idx / BOARD_SIZE, idx % BOARD_SIZE))
    }

    fn index_of(position: usize) -> Option<usize> {
        (1..=CELL_COUNT).contains(&position).then(|| position - 1)
    }

    /// Place `player`'s mark at a 1-based position.
    ///
    /// On failure the board is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] if the position is outside 1..=9 or
    /// the cell is already occupied.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::tictactoe::{BoardState, Cell, Player};
    ///
    /// let mut board = BoardState::new();
    /// board.place_mark(5, Player::X).unwrap();
    /// assert!(board.place_mark(5, Player::O).is_err());
    /// assert_eq!(board.get(5), Some(Cell::X));
    /// ```
    pub fn place_mark(&mut self, position: usize, player: Player) -> Result<(), Error> {
        let idx = Self::index_of(position).ok_or(Error::InvalidMove {
            position,
            reason: MoveRejection::OutOfRange,
        })?;

        if self.cells[idx] != Cell::Empty {
            return Err(Error::InvalidMove {
                position,
                reason: MoveRejection::Occupied,
            });
        }

        self.cells[idx] = player.to_cell();
        self.move_count += 1;
        Ok(())
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Determine the outcome from the cells.
    ///
    /// Rows are scanned first, then columns, then the two diagonals. A full
    /// line wins; otherwise a full board is a draw.
    pub fn evaluate_outcome(&self) -> Outcome {
        if let Some(winner) = LineAnalyzer::line_winner(&self.cells) {
            Outcome::Win(winner)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::line_winner(&self.cells)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.evaluate_outcome().is_terminal()
    }

    /// Compact nine-character form, e.g. `"XO..X...O"`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(BOARD_SIZE) && i < CELL_COUNT - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
