use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use connect_four::config::AppConfig;
use connect_four::game::{GameController, Input};
use connect_four::logging;
use connect_four::ui::TextRenderer;

/// Replay a sequence of moves and print the resulting position.
#[derive(Parser)]
#[command(name = "replay", about = "Replay Connect Four moves without the terminal UI")]
struct Cli {
    /// Comma-separated columns (0-6), played alternately starting with player A
    #[arg(long, value_delimiter = ',', required = true)]
    moves: Vec<usize>,

    /// Print the final snapshot as JSON instead of a text board
    #[arg(long)]
    json: bool,

    /// Print every frame, not just the final one (text mode only)
    #[arg(long)]
    each: bool,

    /// Path to TOML configuration file (player names)
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Log level written to stderr
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_stderr_logger(cli.log_level);

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let keep_frames = cli.each && !cli.json;
    let mut controller = GameController::new(TextRenderer::new(config.players, keep_frames));
    for &column in &cli.moves {
        controller.dispatch(Input::DropToken { column });
    }

    let renderer = controller.renderer();
    let last = renderer.last().copied().unwrap_or_default();
    if cli.json {
        let json = serde_json::to_string_pretty(&last).context("serializing snapshot")?;
        println!("{json}");
    } else if keep_frames {
        for (i, frame) in renderer.frames().iter().enumerate() {
            println!("-- frame {i}");
            print!("{frame}");
        }
    } else {
        print!("{}", renderer.draw(&last));
    }

    Ok(())
}
