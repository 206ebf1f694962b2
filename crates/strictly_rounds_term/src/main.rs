//! Terminal front end for Strictly Rounds.

#![warn(missing_docs)]

mod app;
mod cli;
mod command;
mod render;
mod settings;

use anyhow::Result;
use app::{App, Flow, Response};
use clap::Parser;
use cli::Cli;
use settings::MatchSettings;
use std::io::Write;
use strictly_rounds::ScheduledTransition;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they don't interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Strictly Rounds");

    let settings = MatchSettings::load_or_default(&cli.config)?
        .with_delays(cli.round_delay_ms, cli.summary_delay_ms);
    debug!(?settings, "Resolved settings");

    run(cli, settings).await
}

/// Sets up the app and plays until quit, or until stdin closes and no
/// transition is owed.
#[instrument(skip_all)]
async fn run(cli: Cli, settings: MatchSettings) -> Result<()> {
    let (mut app, transitions) = App::new(settings.delays());

    let opening = match cli.rounds {
        Some(input) => app.handle_command(command::Command::Rounds(input)),
        None => app.configure(*settings.total_rounds()),
    };
    let mut out = std::io::stdout();
    writeln!(out, "Strictly Rounds. Type 'help' for commands.\n")?;
    write_response(&mut out, &opening)?;

    let input = BufReader::new(tokio::io::stdin());
    drive(&mut app, transitions, input, &mut out).await?;

    info!(scores = %app.engine().scores(), "Shutting down");
    Ok(())
}

/// Feeds input lines and fired transitions to `app`, writing every response.
///
/// Closed input stops reading but not waiting: a transition already
/// scheduled (such as the final scores) is still delivered before returning.
#[instrument(skip_all)]
async fn drive<R, W>(
    app: &mut App,
    mut transitions: mpsc::UnboundedReceiver<ScheduledTransition>,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut input_open = true;
    loop {
        if !input_open && !app.has_pending_transition() {
            break;
        }
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    info!("Input closed");
                    input_open = false;
                    continue;
                };
                let response = app.handle_line(&line);
                write_response(out, &response)?;
                if response.flow == Flow::Quit {
                    break;
                }
            }
            fired = transitions.recv() => {
                let Some(fired) = fired else {
                    break;
                };
                write_response(out, &app.handle_transition(fired))?;
            }
        }
    }
    Ok(())
}

fn write_response(out: &mut impl Write, response: &Response) -> std::io::Result<()> {
    if !response.output.is_empty() {
        writeln!(out, "{}\n", response.output)?;
    }
    out.flush()
}
