//! Line commands typed at the prompt.

use todo_core::{Action, Gesture};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Gesture(Gesture),
    Show,
    Json,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  tap N      toggle task N done / not done
  hold N     edit task N (long press)
  type TEXT  set the input field (everything after the first space)
  add        add the input as a new task
  save       save the edit (only offered once the text changed)
  cancel     leave edit mode
  show       redraw
  json       print the screen as JSON
  quit";

/// Parse one input line. Row numbers are the 1-based ordinals on screen.
pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.trim_start().split_once(' ') {
        Some((word, rest)) => (word, Some(rest)),
        None => (line.trim(), None),
    };

    match word {
        "tap" => row(rest).map(|i| Command::Gesture(Gesture::Tap(i))),
        "hold" => row(rest).map(|i| Command::Gesture(Gesture::LongPress(i))),
        "type" => Ok(Command::Gesture(Gesture::TextChange(
            rest.unwrap_or_default().to_string(),
        ))),
        "add" => Ok(Command::Gesture(Gesture::Press(Action::Add))),
        "save" => Ok(Command::Gesture(Gesture::Press(Action::Save))),
        "cancel" => Ok(Command::Gesture(Gesture::Press(Action::Cancel))),
        "show" | "" => Ok(Command::Show),
        "json" => Ok(Command::Json),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command {other:?}; try `help`")),
    }
}

fn row(arg: Option<&str>) -> Result<usize, String> {
    let arg = arg.map(str::trim).unwrap_or_default();
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("expected a row number (1, 2, ...), got {arg:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("tap 1", Command::Gesture(Gesture::Tap(0)))]
    #[case("hold 3", Command::Gesture(Gesture::LongPress(2)))]
    #[case("add", Command::Gesture(Gesture::Press(Action::Add)))]
    #[case("save", Command::Gesture(Gesture::Press(Action::Save)))]
    #[case("cancel", Command::Gesture(Gesture::Press(Action::Cancel)))]
    #[case("", Command::Show)]
    #[case("json", Command::Json)]
    #[case("q", Command::Quit)]
    fn parses_commands(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(parse(line), Ok(expected));
    }

    #[test]
    fn type_keeps_text_verbatim() {
        assert_eq!(
            parse("type   walk  dog \n"),
            Ok(Command::Gesture(Gesture::TextChange("  walk  dog ".into())))
        );
        assert_eq!(
            parse("type"),
            Ok(Command::Gesture(Gesture::TextChange(String::new())))
        );
    }

    #[rstest]
    #[case("tap")]
    #[case("tap 0")]
    #[case("hold x")]
    #[case("dance")]
    fn rejects_bad_input(#[case] line: &str) {
        assert!(parse(line).is_err());
    }
}
