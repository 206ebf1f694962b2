//! Results reported back to the presentation layer.

use super::rules::Line;
use super::types::{Player, Scores};
use serde::{Deserialize, Serialize};

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The mover completed `line`.
    Win {
        /// Player credited with the round.
        winner: Player,
        /// First completed line in scan order.
        line: Line,
    },
    /// The board filled up with no completed line.
    Draw,
    /// Play continues with the given player.
    Continue(Player),
}

impl Outcome {
    /// Checks if this outcome ends the round.
    pub fn is_round_over(&self) -> bool {
        !matches!(self, Outcome::Continue(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win { winner, line } => write!(f, "Player {} wins on {}", winner, line),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Continue(next) => write!(f, "Player {}'s turn", next),
        }
    }
}

/// An accepted move's outcome together with the rounds left afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// What the move did to the round.
    pub outcome: Outcome,
    /// Rounds left in the match after this move.
    pub rounds_remaining: u32,
}

/// What a finished round asks the presentation layer to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Clear the board and start the next round.
    NextRound,
    /// The match is over; show the final scores.
    MatchSummary(Scores),
}
