//! Text rendering of engine state.

use strictly_rounds::{GameEngine, GameStatus, Outcome, Position, Scores};

/// Board followed by turn, score and rounds-left lines.
pub fn render(engine: &GameEngine) -> String {
    let mut out = engine.board().display();
    out.push('\n');

    if let Some(line) = engine.winning_line() {
        let cells: Vec<&str> = line.positions().iter().map(Position::label).collect();
        out.push_str(&format!("Winning line: {}\n", cells.join(", ")));
    }

    match engine.status() {
        GameStatus::Active => {
            out.push_str(&format!("Turn: Player {}\n", engine.current_player()));
        }
        GameStatus::Finished => out.push_str("Round over\n"),
    }
    out.push_str(&format!("Score  {}\n", engine.scores()));
    out.push_str(&format!(
        "Rounds left: {} of {}",
        engine.rounds_remaining(),
        engine.total_rounds()
    ));
    out
}

/// Announcement for a finished round.
pub fn announce(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Win { winner, .. } => Some(format!("Player {} wins the round!", winner)),
        Outcome::Draw => Some("The round is a draw.".to_string()),
        Outcome::Continue(_) => None,
    }
}

/// Notice for a move the engine ignored.
pub fn unavailable(engine: &GameEngine, pos: Position) -> String {
    let open = Position::valid_moves(engine.board());
    if engine.status() == GameStatus::Finished || open.is_empty() {
        return format!("{} is not available.", pos);
    }
    let numbers: Vec<String> = open.iter().map(|p| (p.to_index() + 1).to_string()).collect();
    format!("{} is not available. Open cells: {}", pos, numbers.join(", "))
}

/// Final scores once the match is over.
pub fn summary(scores: &Scores) -> String {
    format!(
        "Game over! Final scores:\n{}\nType 'restart' to play again.",
        scores
    )
}
