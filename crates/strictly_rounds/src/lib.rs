//! Strictly Rounds - tic-tac-toe matches played over a fixed number of rounds.
//!
//! # Architecture
//!
//! - **Types**: board, marks, players, scores
//! - **Rules**: pure win and draw detection
//! - **Engine**: turn order, round and score bookkeeping
//! - **Schedule**: delayed round transitions for front ends
//!
//! # Example
//!
//! ```
//! use strictly_rounds::{GameEngine, Outcome, Player};
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 3, 1, 4] {
//!     engine.play_move(cell);
//! }
//! let report = engine.play_move(2).unwrap();
//! assert_eq!(report.outcome.winner(), Some(Player::X));
//! assert_eq!(report.rounds_remaining, 2);
//! assert!(matches!(report.outcome, Outcome::Win { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod engine;
mod outcome;
mod position;
pub mod rules;
mod schedule;
mod types;

// Crate-level exports - Configuration
pub use config::{ConfigurationError, ConfigurationErrorKind, TotalRounds};

// Crate-level exports - Engine
pub use engine::{GameEngine, Snapshot};
pub use outcome::{MoveReport, Outcome, Transition};

// Crate-level exports - Board types
pub use position::Position;
pub use rules::{LINES, Line};
pub use types::{Board, GameStatus, Mark, Player, Scores};

// Crate-level exports - Deferred transitions
pub use schedule::{ScheduledTransition, TransitionDelays, TransitionScheduler};
