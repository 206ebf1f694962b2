//! Match engine: one board, two players, a fixed number of rounds.

use super::config::{ConfigurationError, TotalRounds};
use super::outcome::{MoveReport, Outcome, Transition};
use super::position::Position;
use super::rules::{self, Line};
use super::types::{Board, GameStatus, Mark, Player, Scores};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine tracking scores across the rounds of a match.
///
/// All state is owned here; a presentation layer drives it through
/// [`play_move`](Self::play_move), [`configure`](Self::configure),
/// [`start_match`](Self::start_match) and [`next_round`](Self::next_round),
/// and renders from the read-only queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    scores: Scores,
    total_rounds: TotalRounds,
    rounds_remaining: u32,
    winning_line: Option<Line>,
}

/// Read-only view of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells of the current round.
    pub board: Board,
    /// Player to move (or who moved last, once the round is finished).
    pub current_player: Player,
    /// Whether moves are accepted.
    pub status: GameStatus,
    /// Match scores.
    pub scores: Scores,
    /// Rounds left in the match.
    pub rounds_remaining: u32,
    /// Configured rounds per match.
    pub total_rounds: u32,
    /// Line to highlight if the round was won.
    pub winning_line: Option<Line>,
}

impl GameEngine {
    /// Creates an engine for a match of [`TotalRounds::DEFAULT`] rounds.
    #[instrument]
    pub fn new() -> Self {
        Self::with_total_rounds(TotalRounds::DEFAULT)
    }

    /// Creates an engine for a match of `total_rounds` rounds.
    #[instrument]
    pub fn with_total_rounds(total_rounds: TotalRounds) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::Active,
            scores: Scores::default(),
            total_rounds,
            rounds_remaining: total_rounds.get(),
            winning_line: None,
        }
    }

    /// Sets the number of rounds and starts a fresh round. Scores are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if `total_rounds` is below 1. The
    /// engine has already fallen back to the default when this happens.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn configure(&mut self, total_rounds: i64) -> Result<TotalRounds, ConfigurationError> {
        self.apply_configuration(TotalRounds::new(total_rounds))
    }

    /// Like [`configure`](Self::configure), for raw text from an input field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if `input` is not a positive integer.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn configure_from_input(&mut self, input: &str) -> Result<TotalRounds, ConfigurationError> {
        self.apply_configuration(TotalRounds::parse(input))
    }

    fn apply_configuration(
        &mut self,
        requested: Result<TotalRounds, ConfigurationError>,
    ) -> Result<TotalRounds, ConfigurationError> {
        self.total_rounds = match &requested {
            Ok(rounds) => *rounds,
            Err(e) => e.fallback,
        };
        info!(total_rounds = %self.total_rounds, "Configured match length");
        self.reset_rounds();
        requested
    }

    /// Zeroes both scores and restarts the match from round one.
    #[instrument(skip(self))]
    pub fn start_match(&mut self) {
        info!(total_rounds = %self.total_rounds, "Starting new match");
        self.scores = Scores::default();
        self.reset_rounds();
    }

    fn reset_rounds(&mut self) {
        self.rounds_remaining = self.total_rounds.get();
        self.current_player = Player::X;
        self.clear_board();
    }

    fn clear_board(&mut self) {
        self.board.clear();
        self.winning_line = None;
        self.status = GameStatus::Active;
    }

    /// Places the current player's mark at `cell_index` (0-8).
    ///
    /// Returns `None` without touching any state if the round is finished,
    /// the cell is occupied, or the index is off the board.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play_move(&mut self, cell_index: usize) -> Option<MoveReport> {
        let Some(pos) = Position::from_index(cell_index) else {
            debug!("Ignoring move off the board");
            return None;
        };
        self.play_position(pos)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Same rules as [`play_move`](Self::play_move).
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play_position(&mut self, pos: Position) -> Option<MoveReport> {
        if self.status == GameStatus::Finished {
            debug!("Ignoring move after round end");
            return None;
        }
        if !self.board.is_empty(pos) {
            debug!("Ignoring move on occupied cell");
            return None;
        }

        let mover = self.current_player;
        self.board.set(pos, Mark::from(mover));

        let outcome = if let Some((winner, line)) = rules::winning_line(&self.board) {
            Outcome::Win { winner, line }
        } else if rules::is_full(&self.board) {
            Outcome::Draw
        } else {
            self.current_player = mover.opponent();
            Outcome::Continue(self.current_player)
        };

        if outcome.is_round_over() {
            self.finish_round(&outcome);
        }

        debug!(%outcome, rounds_remaining = self.rounds_remaining, "Move applied");
        Some(MoveReport {
            outcome,
            rounds_remaining: self.rounds_remaining,
        })
    }

    fn finish_round(&mut self, outcome: &Outcome) {
        self.status = GameStatus::Finished;
        if let Outcome::Win { winner, line } = outcome {
            self.scores.increment(*winner);
            self.winning_line = Some(*line);
        }
        self.rounds_remaining = self.rounds_remaining.saturating_sub(1);
        info!(
            %outcome,
            scores = %self.scores,
            rounds_remaining = self.rounds_remaining,
            "Round finished"
        );
        if self.is_match_over() {
            info!(scores = %self.scores, "Match over");
        }
    }

    /// Checks if every round of the match has been played.
    pub fn is_match_over(&self) -> bool {
        self.rounds_remaining == 0
    }

    /// Clears the board for the next round of the match.
    ///
    /// Only applies to a finished round with rounds left; returns whether it
    /// did anything. The current player carries over from the last round.
    #[instrument(skip(self))]
    pub fn next_round(&mut self) -> bool {
        if self.status != GameStatus::Finished || self.is_match_over() {
            debug!(status = %self.status, rounds_remaining = self.rounds_remaining, "No round to advance to");
            return false;
        }
        self.clear_board();
        debug!(player = %self.current_player, "Next round started");
        true
    }

    /// Transition a finished round calls for, or `None` while it is active.
    pub fn pending_transition(&self) -> Option<Transition> {
        match self.status {
            GameStatus::Active => None,
            GameStatus::Finished if self.is_match_over() => {
                Some(Transition::MatchSummary(self.scores))
            }
            GameStatus::Finished => Some(Transition::NextRound),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next move places.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the match scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Returns the rounds left in the match.
    pub fn rounds_remaining(&self) -> u32 {
        self.rounds_remaining
    }

    /// Returns the configured match length.
    pub fn total_rounds(&self) -> TotalRounds {
        self.total_rounds
    }

    /// Returns the completed line of a won round.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Captures all queryable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            status: self.status,
            scores: self.scores,
            rounds_remaining: self.rounds_remaining,
            total_rounds: self.total_rounds.get(),
            winning_line: self.winning_line,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
