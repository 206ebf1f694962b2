//! Application state: the engine plus its pending round transition.

use crate::command::{Command, HELP};
use crate::render;
use strictly_rounds::{
    ConfigurationError, GameEngine, ScheduledTransition, Transition, TransitionDelays,
    TransitionScheduler,
};
use tokio::sync::mpsc;
use tracing::{debug, instrument, warn};

/// Whether the input loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Exit.
    Quit,
}

/// Text to print and what to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Output for stdout, possibly empty.
    pub output: String,
    /// Loop control.
    pub flow: Flow,
}

impl Response {
    fn show(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            flow: Flow::Continue,
        }
    }

    fn quiet() -> Self {
        Self::show(String::new())
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    scheduler: TransitionScheduler,
}

impl App {
    /// Creates the app and the channel its delayed transitions arrive on.
    ///
    /// Must be called inside a tokio runtime.
    #[instrument]
    pub fn new(delays: TransitionDelays) -> (Self, mpsc::UnboundedReceiver<ScheduledTransition>) {
        let (scheduler, rx) = TransitionScheduler::new(delays);
        let app = Self {
            engine: GameEngine::new(),
            scheduler,
        };
        (app, rx)
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Checks if a delayed transition is still owed to the player.
    pub fn has_pending_transition(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Applies a round count from the settings file.
    #[instrument(skip(self))]
    pub fn configure(&mut self, total_rounds: i64) -> Response {
        self.scheduler.cancel();
        let result = self.engine.configure(total_rounds);
        self.after_configure(result)
    }

    /// Handles one line of input.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> Response {
        match line.parse::<Command>() {
            Ok(command) => self.handle_command(command),
            Err(e) => Response::show(e.to_string()),
        }
    }

    /// Runs a parsed command against the engine.
    #[instrument(skip(self))]
    pub fn handle_command(&mut self, command: Command) -> Response {
        match command {
            Command::Play(pos) => {
                let Some(report) = self.engine.play_position(pos) else {
                    return Response::show(render::unavailable(&self.engine, pos));
                };
                let mut output = render::render(&self.engine);
                if let Some(announcement) = render::announce(&report.outcome) {
                    output.push('\n');
                    output.push_str(&announcement);
                }
                if let Some(transition) = self.engine.pending_transition() {
                    self.scheduler.schedule(transition);
                }
                Response::show(output)
            }
            Command::Rounds(input) => {
                self.scheduler.cancel();
                let result = self.engine.configure_from_input(&input);
                self.after_configure(result)
            }
            Command::Restart => {
                self.scheduler.cancel();
                self.engine.start_match();
                Response::show(format!("New match.\n{}", render::render(&self.engine)))
            }
            Command::Show => Response::show(render::render(&self.engine)),
            Command::Json => match serde_json::to_string_pretty(&self.engine.snapshot()) {
                Ok(json) => Response::show(json),
                Err(e) => {
                    warn!(error = %e, "Failed to serialize snapshot");
                    Response::show(format!("Could not produce JSON: {}", e))
                }
            },
            Command::Help => Response::show(HELP),
            Command::Quit => Response {
                output: "Bye.".to_string(),
                flow: Flow::Quit,
            },
        }
    }

    /// Applies a transition whose delay has elapsed.
    #[instrument(skip(self))]
    pub fn handle_transition(&mut self, fired: ScheduledTransition) -> Response {
        if !self.scheduler.acknowledge(&fired) {
            debug!("Dropping stale transition");
            return Response::quiet();
        }
        match fired.transition {
            Transition::NextRound => {
                if self.engine.next_round() {
                    Response::show(format!("Next round.\n{}", render::render(&self.engine)))
                } else {
                    Response::quiet()
                }
            }
            Transition::MatchSummary(scores) => Response::show(render::summary(&scores)),
        }
    }

    fn after_configure(
        &mut self,
        result: Result<strictly_rounds::TotalRounds, ConfigurationError>,
    ) -> Response {
        let board = render::render(&self.engine);
        match result {
            Ok(_) => Response::show(board),
            Err(e) => Response::show(format!(
                "Please enter a valid number of rounds (minimum 1): {}. Using {}.\n{}",
                e.kind, e.fallback, board
            )),
        }
    }
}
