use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use pixel_snake::game::GameConfig;
use pixel_snake::modes::HumanMode;
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "pixel_snake")]
#[command(version, about = "Grid snake with continuous sub-grid movement")]
struct Cli {
    /// Playfield width in pixels
    #[arg(long, default_value = "1250")]
    width: i32,

    /// Playfield height in pixels
    #[arg(long, default_value = "700")]
    height: i32,

    /// Head speed in pixels per second
    #[arg(long, default_value = "100.0")]
    speed: f32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so logs go to a file.
    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("pixel_snake.log").context("Failed to create log file")?,
    )
    .context("Failed to initialize logger")?;

    let config = GameConfig {
        speed: cli.speed,
        ..GameConfig::new(cli.width, cli.height)
    };

    info!(
        "Starting pixel_snake, playfield {}x{}",
        config.width, config.height
    );

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
