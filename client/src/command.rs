use std::str::FromStr;

use gomoku_core::games::gomoku::GameMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    Place { row: usize, col: usize },
    Undo,
    Reset,
    SetMode(GameMode),
    Show,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  <row> <col>            place a stone (also: place <row> <col>)
  undo                   take back the last move (and the computer's reply)
  reset                  start a new game
  mode two|computer      switch mode; starts a new game
  show                   print the board
  help                   this text
  quit                   leave (the game is saved)";

impl FromStr for ClientCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let lowered: Vec<String> = words.iter().map(|w| w.to_ascii_lowercase()).collect();
        let parts: Vec<&str> = lowered.iter().map(String::as_str).collect();

        match parts.as_slice() {
            [] => Err("Empty command".to_string()),
            ["undo" | "u"] => Ok(ClientCommand::Undo),
            ["reset" | "new"] => Ok(ClientCommand::Reset),
            ["show" | "s"] => Ok(ClientCommand::Show),
            ["help" | "h" | "?"] => Ok(ClientCommand::Help),
            ["quit" | "exit" | "q"] => Ok(ClientCommand::Quit),
            ["mode", mode] => parse_mode(mode).map(ClientCommand::SetMode),
            ["place" | "p", row, col] | [row, col] => Ok(ClientCommand::Place {
                row: parse_coordinate(row)?,
                col: parse_coordinate(col)?,
            }),
            _ => Err(format!("Unknown command: {}", line.trim())),
        }
    }
}

fn parse_mode(mode: &str) -> Result<GameMode, String> {
    match mode {
        "two" | "human" | "pvp" => Ok(GameMode::TwoHuman),
        "computer" | "cpu" | "ai" => Ok(GameMode::HumanVsComputer),
        other => Err(format!("Unknown mode '{}', expected 'two' or 'computer'", other)),
    }
}

fn parse_coordinate(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a board coordinate", value))
}
