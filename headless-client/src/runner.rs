use tokio::sync::mpsc;
use tokio::time::{interval, Instant, MissedTickBehavior};

use common::games::snake::{SnakeObserver, SnakeSession, SnakeSessionSettings, StepResult, TickOutput};
use common::log;

use crate::config::Config;
use crate::input::PlayerCommand;
use crate::presenter::TextPresenter;
use crate::status::StatusBoard;

pub struct GameSummary {
    pub best_score: u32,
    pub games_finished: u32,
}

/// Ticks the session and draws the interpolated frame if any cell changed.
fn advance_frame<O: SnakeObserver>(
    session: &mut SnakeSession<O>,
    presenter: &mut TextPresenter,
    delta_seconds: f64,
) -> (TickOutput, Option<String>) {
    let output = session.tick(delta_seconds);
    let frame = presenter.frame_if_changed(&output.render);
    (output, frame)
}

fn show(frame: Option<String>) {
    if let Some(text) = frame {
        println!("{}", text);
    }
}

/// Runs the frame loop until a quit command arrives or input closes after game over.
pub async fn run_snake_game(
    config: &Config,
    seed: u64,
    render_board: bool,
    command_rx: &mut mpsc::UnboundedReceiver<PlayerCommand>,
) -> GameSummary {
    let settings = SnakeSessionSettings::from(&config.snake);
    let mut presenter = TextPresenter::new(config.board.layout(settings.field_size()));
    let mut session = SnakeSession::create(&settings, seed, StatusBoard::new(config.history_size));

    let mut frame_timer = interval(config.frame_interval());
    frame_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

    session.start();
    if render_board {
        show(presenter.frame_if_changed(&session.render()));
    }

    let mut last_frame = Instant::now();
    let mut input_open = true;

    loop {
        tokio::select! {
            _ = frame_timer.tick() => {
                let now = Instant::now();
                let delta = now.duration_since(last_frame).as_secs_f64();
                last_frame = now;

                let (output, frame) = advance_frame(&mut session, &mut presenter, delta);
                if render_board {
                    show(frame);
                }
                if let Some(StepResult::GameOver(snapshot)) = output.step {
                    log!(
                        "Snake died ({:?}) at length {}, type 'r' to restart or 'q' to quit",
                        snapshot.death_reason,
                        snapshot.length()
                    );
                }

                if !input_open && session.game_over() {
                    break;
                }
            }
            command = command_rx.recv(), if input_open => {
                match command {
                    Some(PlayerCommand::Turn(direction)) => session.change_direction(direction),
                    Some(PlayerCommand::Restart) => {
                        session.restart();
                        log!("Restarted");
                        if render_board {
                            show(presenter.frame_if_changed(&session.render()));
                        }
                    }
                    Some(PlayerCommand::Quit) => break,
                    None => {
                        log!("Input closed, playing until the snake dies");
                        input_open = false;
                    }
                }
            }
        }
    }

    session.stop();

    let status = session.observer();
    let recent: Vec<String> = status
        .history()
        .map(|event| {
            let marker = if event.game_over { " (dead)" } else { "" };
            format!("{} {}{}", event.at.format("%H:%M:%S"), event.score, marker)
        })
        .collect();
    log!(
        "Last score {}, recent updates: [{}]",
        status.current_score(),
        recent.join(", ")
    );

    GameSummary {
        best_score: status.best_score(),
        games_finished: status.games_finished(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::{NoopObserver, Point};

    const FRAME: f64 = 1.0 / 60.0;

    fn create() -> (SnakeSession<NoopObserver>, TextPresenter) {
        let config = Config::default();
        let settings = SnakeSessionSettings::from(&config.snake);
        let presenter = TextPresenter::new(config.board.layout(settings.field_size()));
        (SnakeSession::create(&settings, 1, NoopObserver), presenter)
    }

    #[test]
    fn test_drawn_head_follows_logical_head() {
        let (mut session, mut presenter) = create();
        let mut drawn_heads: Vec<Point> = Vec::new();

        // 190 ms steps at 60 Hz land on frames 12, 24, 36, 48 and 60
        for _ in 0..70 {
            let (output, frame) = advance_frame(&mut session, &mut presenter, FRAME);
            let Some(text) = frame else { continue };
            assert!(text.contains('@'));

            let logical = session.snapshot().head().unwrap();
            let drawn = output.render.segments[0].to_cell();
            assert!(drawn == logical || drawn == Point::new(logical.x - 1, logical.y));
            if drawn_heads.last() != Some(&drawn) {
                drawn_heads.push(drawn);
            }
        }

        let expected: Vec<Point> = (10..=15).map(|x| Point::new(x, 10)).collect();
        assert_eq!(drawn_heads, expected);
        assert_eq!(drawn_heads.last().copied(), session.snapshot().head());
    }

    #[test]
    fn test_mid_step_frame_shows_current_cell() {
        let (mut session, mut presenter) = create();
        let mut caught_up = false;
        for _ in 0..24 {
            let (output, frame) = advance_frame(&mut session, &mut presenter, FRAME);
            // the tick that runs the step draws the pre-step cell
            let fraction = output.render.step_fraction;
            if frame.is_some() && session.snapshot().steps == 1 && fraction > 0.0 && fraction < 1.0 {
                caught_up |= output.render.segments[0].to_cell() == session.snapshot().head().unwrap();
            }
        }
        assert!(caught_up);
    }
}
