//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player, board::CELL_COUNT};

/// Winning line indices on the 3x3 board (zero-based cell indices)
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; CELL_COUNT], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Owner of the first full line in rows, columns, diagonals order
    pub fn line_winner(cells: &[Cell; CELL_COUNT]) -> Option<Player> {
        WINNING_LINES.iter().find_map(|line| {
            let owner = cells[line[0]].player()?;
            line.iter()
                .all(|&idx| cells[idx] == cells[line[0]])
                .then_some(owner)
        })
    }

    /// Positions (1-based, ascending) that would immediately win for the player
    pub fn winning_moves(cells: &[Cell; CELL_COUNT], player: Player) -> Vec<usize> {
        let mut moves: Vec<usize> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .map(|idx| idx + 1)
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    /// Find the winning move index in a specific line, if one exists
    fn winning_move_in_line(
        cells: &[Cell; CELL_COUNT],
        player: Player,
        line: &[usize; 3],
    ) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_idx = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_idx.is_some() {
                        return None;
                    }
                    empty_idx = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None, // Opponent piece in line
            }
        }

        if count == 2 { empty_idx } else { None }
    }
}
