mod config;
mod input;
mod presenter;
mod runner;
mod status;

use std::time::Duration;

use clap::Parser;
use common::config::Validate;
use common::version::VERSION;
use common::{log, logger};
use tokio::sync::mpsc;

use config::{get_config_manager, Config};
use input::stdin_command_task;
use runner::run_snake_game;

#[derive(Parser)]
#[command(name = "snake_headless", version)]
struct Args {
    /// Path to the YAML config; defaults to the file next to the executable.
    #[arg(long)]
    config: Option<String>,
    /// Food placement seed, overrides the config.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
    /// Only log events, do not print the board.
    #[arg(long)]
    no_render: bool,
    /// Write the default config if the file does not exist yet, then exit.
    #[arg(long)]
    write_default_config: bool,
}

const SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(200);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.as_deref());

    if args.write_default_config {
        if config_manager.write_default_if_missing()? {
            log!("Default config written");
        } else {
            log!("Config already exists, left untouched");
        }
        return Ok(());
    }

    let config: Config = config_manager.get_config()?;
    config.validate()?;

    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    let render_board = config.render_board && !args.no_render;

    log!(
        "snake_headless {} starting: {}x{} board, {} ms per step, {} fps, seed {}",
        VERSION,
        config.snake.columns,
        config.snake.rows,
        config.snake.step_duration_ms,
        config.frame_rate,
        seed
    );
    log!("Commands: up/down/left/right (w/s/a/d), restart (r), quit (q)");

    let runtime = tokio::runtime::Runtime::new()?;
    let summary = runtime.block_on(async {
        let (command_tx, mut command_rx) = mpsc::unbounded_channel();
        let input_handle = tokio::spawn(stdin_command_task(command_tx));

        let summary = run_snake_game(&config, seed, render_board, &mut command_rx).await;
        input_handle.abort();
        summary
    });
    // a pending stdin read would otherwise hold the runtime open
    runtime.shutdown_timeout(SHUTDOWN_TIMEOUT);

    log!(
        "Finished: best score {}, games played {}",
        summary.best_score,
        summary.games_finished
    );

    Ok(())
}
