//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three cells that win when uniformly occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// The cells of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Checks if `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// All winning lines in scan order: rows, columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Finds the first completed line in [`LINES`] order.
///
/// Returns the owner of the line together with the line itself.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let owner = board.at(a).player()?;
        (board.at(a) == board.at(b) && board.at(a) == board.at(c)).then_some((owner, *line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for &(pos, mark) in marks {
            board.set(pos, mark);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(winning_line(&board), Some((Player::X, LINES[0])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomLeft, Mark::O),
        ]);
        let (player, line) = winning_line(&board).unwrap();
        assert_eq!(player, Player::O);
        assert_eq!(line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_scan_order_reports_first_line() {
        // Column 0 and the main diagonal both complete; column 0 comes first.
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::MiddleLeft, Mark::X),
            (Position::BottomLeft, Mark::X),
            (Position::Center, Mark::X),
            (Position::BottomRight, Mark::X),
        ]);
        assert_eq!(winning_line(&board), Some((Player::X, LINES[3])));
    }

    #[test]
    fn test_line_indices_match_table() {
        let expected = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];
        for (line, indices) in LINES.iter().zip(expected) {
            assert_eq!(line.indices(), indices);
        }
    }
}
