//! Draw detection logic for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::win::winning_line;
    use super::*;
    use crate::{Mark, Position};

    fn is_draw(board: &Board) -> bool {
        is_full(board) && winning_line(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Mark::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / X O O / O X X
        let marks = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::X,
        ];
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, mark);
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Mark::X);
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
