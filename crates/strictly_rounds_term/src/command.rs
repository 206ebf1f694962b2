//! Parsing of typed commands.

use derive_more::{Display, Error};
use std::str::FromStr;
use strictly_rounds::Position;

/// Something the player typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place a mark.
    Play(Position),
    /// Change the number of rounds; the raw text goes to the engine.
    Rounds(String),
    /// Zero the scores and start over.
    Restart,
    /// Redraw the board.
    Show,
    /// Print the engine state as JSON.
    Json,
    /// List commands.
    Help,
    /// Leave.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Blank line.
    #[display("Type a cell number (1-9) or 'help'")]
    Empty,
    /// A number outside 1-9.
    #[display("There is no cell {}; use 1-9", _0)]
    NoSuchCell(#[error(not(source))] u64),
    /// Anything else.
    #[display("Unknown command {:?}; type 'help'", _0)]
    Unknown(#[error(not(source))] String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "rounds" => return Ok(Command::Rounds(rest.to_string())),
            "restart" => return Ok(Command::Restart),
            "show" => return Ok(Command::Show),
            "json" => return Ok(Command::Json),
            "help" | "?" => return Ok(Command::Help),
            "quit" | "exit" | "q" => return Ok(Command::Quit),
            _ => {}
        }

        // Cells are numbered 1-9 on screen.
        if let Ok(number) = line.parse::<u64>() {
            return usize::try_from(number)
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(Position::from_index)
                .map(Command::Play)
                .ok_or(CommandError::NoSuchCell(number));
        }

        Position::from_label(line)
            .map(Command::Play)
            .ok_or_else(|| CommandError::Unknown(line.to_string()))
    }
}

/// Help text for the prompt.
pub const HELP: &str = "\
Commands:
  1-9 or a label    place your mark (e.g. 5 or center)
  rounds <n>        set rounds per match and start a new round
  restart           reset scores and start a new match
  show              redraw the board
  json              print the game state as JSON
  help              show this text
  quit              leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_one_based() {
        assert_eq!("1".parse(), Ok(Command::Play(Position::TopLeft)));
        assert_eq!(" 9 ".parse(), Ok(Command::Play(Position::BottomRight)));
        assert_eq!("0".parse::<Command>(), Err(CommandError::NoSuchCell(0)));
        assert_eq!("10".parse::<Command>(), Err(CommandError::NoSuchCell(10)));
    }

    #[test]
    fn test_labels_select_cells() {
        assert_eq!("center".parse(), Ok(Command::Play(Position::Center)));
        assert_eq!(
            "bottom left".parse(),
            Ok(Command::Play(Position::BottomLeft))
        );
    }

    #[test]
    fn test_rounds_keeps_raw_argument() {
        assert_eq!("rounds 5".parse(), Ok(Command::Rounds("5".to_string())));
        assert_eq!("ROUNDS abc".parse(), Ok(Command::Rounds("abc".to_string())));
        assert_eq!("rounds".parse(), Ok(Command::Rounds(String::new())));
    }

    #[test]
    fn test_keywords() {
        assert_eq!("restart".parse(), Ok(Command::Restart));
        assert_eq!("Quit".parse(), Ok(Command::Quit));
        assert_eq!("?".parse(), Ok(Command::Help));
        assert_eq!("json".parse(), Ok(Command::Json));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert!(matches!(
            "jump".parse::<Command>(),
            Err(CommandError::Unknown(_))
        ));
    }
}
