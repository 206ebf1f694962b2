//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from the engine's
//! round and score bookkeeping.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, winning_line};
