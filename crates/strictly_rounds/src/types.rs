//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (opens every match).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Unoccupied.
    #[default]
    Empty,
    /// Occupied by X.
    X,
    /// Occupied by O.
    O,
}

impl Mark {
    /// Returns the player owning this mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
        }
    }

    /// Checks if the cell is unoccupied.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Mark; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the mark at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Gets the mark at the given position.
    pub fn at(&self, pos: Position) -> Mark {
        self.cells[pos.to_index()]
    }

    /// Sets the mark at the given position.
    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.to_index()] = mark;
    }

    /// Checks if a position is unoccupied.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.at(pos).is_empty()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Mark; 9] {
        &self.cells
    }

    /// Empties every cell.
    pub(crate) fn clear(&mut self) {
        self.cells = [Mark::Empty; 9];
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their 1-based number so players can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Mark::Empty => (index + 1).to_string(),
                    Mark::X => "X".to_string(),
                    Mark::O => "O".to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Whether the current round accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GameStatus {
    /// Round is ongoing.
    Active,
    /// Round ended in a win or draw; moves are ignored until the board is cleared.
    Finished,
}

/// Win counts for both players within a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Scores {
    x: u32,
    o: u32,
}

impl Scores {
    /// Returns the number of rounds won by `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    pub(crate) fn increment(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  O: {}", self.x, self.o)
    }
}
