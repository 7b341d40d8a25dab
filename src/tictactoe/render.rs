//! Console rendering of the board

use super::{BoardState, Cell, board::BOARD_SIZE};

const ROW_SEPARATOR: &str = "----------------";

/// Render the board as a spaced grid.
///
/// Empty cells show their position number so a human can type it:
///
/// ```text
///      |     |
///   1  |  2  |  X
///      |     |
/// ----------------
/// ```
pub fn format_board(board: &BoardState) -> String {
    let mut out = String::new();
    for (row, cells) in board.cells().chunks(BOARD_SIZE).enumerate() {
        let symbols: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(column, &cell)| match cell {
                Cell::Empty => (row * BOARD_SIZE + column + 1).to_string(),
                mark => mark.to_char().to_string(),
            })
            .collect();

        out.push_str("     |     |\n");
        out.push_str(&format!("  {}\n", symbols.join("  |  ")));
        out.push_str("     |     |\n");
        if row + 1 < BOARD_SIZE {
            out.push_str(ROW_SEPARATOR);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cells_show_their_position() {
        let rendered = format_board(&BoardState::new());
        assert!(rendered.contains("  1  |  2  |  3\n"));
        assert!(rendered.contains("  7  |  8  |  9\n"));
        assert_eq!(rendered.matches(ROW_SEPARATOR).count(), 2);
        assert_eq!(rendered.lines().count(), 11);
    }

    #[test]
    fn marks_replace_position_numbers() {
        let board = BoardState::from_string("X.. .O. ...").unwrap();
        let rendered = format_board(&board);
        assert!(rendered.contains("  X  |  2  |  3\n"));
        assert!(rendered.contains("  4  |  O  |  6\n"));
    }
}
