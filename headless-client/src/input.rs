use std::str::FromStr;

use common::games::snake::Direction;
use common::log;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    Turn(Direction),
    Restart,
    Quit,
}

impl FromStr for PlayerCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "w" => Ok(PlayerCommand::Turn(Direction::Up)),
            "down" | "s" => Ok(PlayerCommand::Turn(Direction::Down)),
            "left" | "a" => Ok(PlayerCommand::Turn(Direction::Left)),
            "right" | "d" => Ok(PlayerCommand::Turn(Direction::Right)),
            "restart" | "r" => Ok(PlayerCommand::Restart),
            "quit" | "q" | "exit" => Ok(PlayerCommand::Quit),
            other => Err(format!("Unknown command '{}'", other)),
        }
    }
}

/// Reads one command per stdin line until EOF or the receiver goes away.
pub async fn stdin_command_task(command_tx: mpsc::UnboundedSender<PlayerCommand>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log!("Failed to read input: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<PlayerCommand>() {
            Ok(command) => {
                if command_tx.send(command).is_err() {
                    break;
                }
            }
            Err(e) => log!("{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directions() {
        assert_eq!("up".parse::<PlayerCommand>(), Ok(PlayerCommand::Turn(Direction::Up)));
        assert_eq!("S".parse::<PlayerCommand>(), Ok(PlayerCommand::Turn(Direction::Down)));
        assert_eq!(" left ".parse::<PlayerCommand>(), Ok(PlayerCommand::Turn(Direction::Left)));
        assert_eq!("d".parse::<PlayerCommand>(), Ok(PlayerCommand::Turn(Direction::Right)));
    }

    #[test]
    fn test_parse_session_commands() {
        assert_eq!("r".parse::<PlayerCommand>(), Ok(PlayerCommand::Restart));
        assert_eq!("QUIT".parse::<PlayerCommand>(), Ok(PlayerCommand::Quit));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "jump".parse::<PlayerCommand>(),
            Err("Unknown command 'jump'".to_string())
        );
    }
}
