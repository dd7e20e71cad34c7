mod app;
mod error;
mod keys;
mod render;
mod terminal;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use game_core::{Config, Game, GameRng, Playfield, Scene};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::{App, SystemClock, TerminalEvents};
use crate::error::HostError;
use crate::render::display_size;
use crate::terminal::TerminalGuard;

#[derive(Parser)]
#[command(name = "pong", about = "Two-player Pong in the terminal")]
struct Cli {
    /// Seed for serve directions (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Write logs to this file; RUST_LOG sets the level
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<(), HostError> {
    let file = File::create(path).map_err(|source| HostError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| HostError::Logger(e.to_string()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The terminal is the display, so logs only ever go to a file
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let (cols, rows) = crossterm::terminal::size().context("reading terminal size")?;
    let (width, height) = display_size(cols, rows);
    let field = Playfield::from_display(width, height);
    let config = Config::new();
    if !field.fits(&config) {
        return Err(HostError::TerminalTooSmall { cols, rows }.into());
    }

    let rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!(
        cols,
        rows,
        width = field.width,
        height = field.height,
        seed = ?cli.seed,
        "starting pong"
    );

    let game = Game::new(Scene::new(), field, config, rng);
    let mut app = App::new(game, cols, rows);

    let mut terminal = TerminalGuard::enter().context("preparing terminal")?;
    app.run(terminal.out(), &mut TerminalEvents, &SystemClock)?;
    Ok(())
}
