use std::io::Write;
use std::time::Duration;

use gomoku_core::games::gomoku::{GameSnapshot, GomokuSession};
use gomoku_core::storage::{KeyValueStore, Serializer};
use gomoku_core::{log, log_warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::command::{ClientCommand, HELP_TEXT};
use crate::render::{render_board, status_line};

/// Reads commands line by line until `quit` or end of input.
/// The computer's reply is played after `computer_delay`; input typed meanwhile waits in the buffer.
pub async fn run_game<TStore, TSerializer, R, W>(
    session: &mut GomokuSession<TStore, TSerializer>,
    computer_delay: Duration,
    input: R,
    out: &mut W,
) -> std::io::Result<()>
where
    TStore: KeyValueStore,
    TSerializer: Serializer<GameSnapshot>,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    writeln!(out, "{}", render_board(session.state()))?;

    loop {
        if session.is_computer_turn() {
            tokio::time::sleep(computer_delay).await;
            match session.play_computer_turn() {
                Ok(Some(outcome)) => {
                    writeln!(
                        out,
                        "Computer plays {} {}",
                        outcome.applied.row, outcome.applied.col
                    )?;
                    writeln!(out, "{}", render_board(session.state()))?;
                }
                Ok(None) => {}
                Err(e) => log_warn!("Computer could not move: {}", e),
            }
            continue;
        }

        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ClientCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "! {} (type 'help')", e)?;
                continue;
            }
        };

        match command {
            ClientCommand::Place { row, col } => match session.submit_move(row, col) {
                Ok(_) => writeln!(out, "{}", render_board(session.state()))?,
                Err(e) => writeln!(out, "! {}", e)?,
            },
            ClientCommand::Undo => {
                if session.undo().is_empty() {
                    writeln!(out, "! Nothing to undo")?;
                } else {
                    writeln!(out, "{}", render_board(session.state()))?;
                }
            }
            ClientCommand::Reset => {
                session.reset();
                writeln!(out, "{}", render_board(session.state()))?;
            }
            ClientCommand::SetMode(mode) => {
                session.set_mode(mode);
                writeln!(out, "{}", render_board(session.state()))?;
            }
            ClientCommand::Show => writeln!(out, "{}", render_board(session.state()))?,
            ClientCommand::Help => writeln!(out, "{}", HELP_TEXT)?,
            ClientCommand::Quit => break,
        }
    }

    log!("Leaving game: {}", status_line(session.state()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomoku_core::games::gomoku::{GameMode, GameStatus, SessionOptions, Side};
    use gomoku_core::storage::{MemoryKeyValueStore, SessionStore};

    fn session(mode: GameMode) -> GomokuSession<MemoryKeyValueStore> {
        GomokuSession::open(
            SessionStore::new(MemoryKeyValueStore::new()),
            SessionOptions {
                default_mode: mode,
                autosave: true,
            },
        )
    }

    async fn run(session: &mut GomokuSession<MemoryKeyValueStore>, script: &str) -> String {
        let mut out = Vec::new();
        run_game(session, Duration::ZERO, script.as_bytes(), &mut out)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_two_players_take_turns() {
        let mut session = session(GameMode::TwoHuman);
        run(&mut session, "7 7\nplace 8 8\n").await;
        assert_eq!(session.state().ledger().len(), 2);
        assert_eq!(session.state().side_to_move(), Side::Black);
    }

    #[tokio::test]
    async fn test_computer_replies_after_human_move() {
        let mut session = session(GameMode::HumanVsComputer);
        let output = run(&mut session, "7 7\nquit\n").await;
        assert_eq!(session.state().ledger().len(), 2);
        assert!(output.contains("Computer plays 6 7"));
    }

    #[tokio::test]
    async fn test_undo_against_computer_restores_start() {
        let mut session = session(GameMode::HumanVsComputer);
        run(&mut session, "7 7\nundo\n").await;
        assert!(session.state().ledger().is_empty());
        assert_eq!(session.state().side_to_move(), Side::Black);
    }

    #[tokio::test]
    async fn test_errors_are_reported_and_ignored() {
        let mut session = session(GameMode::TwoHuman);
        let output = run(&mut session, "7 7\n7 7\n99 1\nfly\nundo\nundo\n").await;
        assert!(output.contains("! Invalid move: cell is already occupied"));
        assert!(output.contains("! Position (99, 1) is out of bounds"));
        assert!(output.contains("! Unknown command: fly"));
        assert!(output.contains("! Nothing to undo"));
        assert_eq!(session.state().status(), GameStatus::InProgress);
    }

    #[tokio::test]
    async fn test_mode_switch_starts_new_game() {
        let mut session = session(GameMode::TwoHuman);
        run(&mut session, "7 7\nmode computer\n").await;
        assert_eq!(session.state().mode(), GameMode::HumanVsComputer);
        assert!(session.state().ledger().is_empty());
    }
}
