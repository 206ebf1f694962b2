//! Deferred round transitions.
//!
//! A finished round is shown for a moment before the board clears, and the
//! final scores appear shortly after the last round. The delays belong to the
//! presentation layer: the scheduler only delivers a [`Transition`] on a
//! channel once its delay has elapsed, and never touches the engine itself.

use super::outcome::Transition;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// How long to wait before each kind of transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TransitionDelays {
    /// Pause between a finished round and the cleared board.
    next_round: Duration,
    /// Pause between the last round and the final scores.
    match_summary: Duration,
}

impl TransitionDelays {
    /// Creates delays from explicit durations.
    pub fn new(next_round: Duration, match_summary: Duration) -> Self {
        Self {
            next_round,
            match_summary,
        }
    }

    /// Delay that applies to `transition`.
    pub fn delay_for(&self, transition: &Transition) -> Duration {
        match transition {
            Transition::NextRound => self.next_round,
            Transition::MatchSummary(_) => self.match_summary,
        }
    }
}

impl Default for TransitionDelays {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500), Duration::from_millis(500))
    }
}

/// A transition whose delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTransition {
    /// What to do.
    pub transition: Transition,
    /// Scheduling generation; see [`TransitionScheduler::is_current`].
    pub epoch: u64,
}

/// Runs at most one delayed transition at a time.
///
/// Scheduling a new transition or calling [`cancel`](Self::cancel) aborts the
/// pending one. Must be used inside a tokio runtime.
#[derive(Debug)]
pub struct TransitionScheduler {
    delays: TransitionDelays,
    tx: mpsc::UnboundedSender<ScheduledTransition>,
    pending: Option<JoinHandle<()>>,
    epoch: u64,
}

impl TransitionScheduler {
    /// Creates a scheduler and the receiver its transitions arrive on.
    #[instrument]
    pub fn new(
        delays: TransitionDelays,
    ) -> (Self, mpsc::UnboundedReceiver<ScheduledTransition>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            delays,
            tx,
            pending: None,
            epoch: 0,
        };
        (scheduler, rx)
    }

    /// Returns the configured delays.
    pub fn delays(&self) -> &TransitionDelays {
        &self.delays
    }

    /// Delivers `transition` after its delay, replacing any pending one.
    #[instrument(skip(self))]
    pub fn schedule(&mut self, transition: Transition) {
        self.cancel();
        let delay = self.delays.delay_for(&transition);
        let fired = ScheduledTransition {
            transition,
            epoch: self.epoch,
        };
        let tx = self.tx.clone();
        debug!(?delay, epoch = self.epoch, "Transition scheduled");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the front end is shutting down.
            let _ = tx.send(fired);
        }));
    }

    /// Aborts the pending transition. Returns whether one was still waiting.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) -> bool {
        self.epoch += 1;
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                debug!("Pending transition cancelled");
                true
            }
            _ => false,
        }
    }

    /// Checks if `fired` belongs to the latest scheduling.
    ///
    /// A transition can reach the channel just before a cancel; such a
    /// transition is stale and should be dropped.
    pub fn is_current(&self, fired: &ScheduledTransition) -> bool {
        fired.epoch == self.epoch
    }

    /// Checks if a scheduled transition has not yet been acknowledged.
    ///
    /// Stays true after the timer fires until [`acknowledge`](Self::acknowledge)
    /// consumes the delivery, so a caller draining the channel knows whether
    /// to keep waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Marks `fired` as handled if it is current. Returns whether it was.
    #[instrument(skip(self))]
    pub fn acknowledge(&mut self, fired: &ScheduledTransition) -> bool {
        if !self.is_current(fired) {
            return false;
        }
        self.pending = None;
        true
    }
}

impl Drop for TransitionScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
