use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use dungeon_engine::{
    ConsoleChoices, EventSink, GameState, GameStatus, JsonSink, TextSink, TurnLoop,
};
use dungeon_rules::{RngDice, WorldConfig};
use tracing_subscriber::EnvFilter;

/// Explore the dungeons of Lord Object Orientus.
#[derive(Debug, Parser)]
#[command(name = "dungeon", version, about)]
struct Cli {
    /// World description in TOML. Defaults to the built-in dungeon.
    #[arg(long)]
    world: Option<PathBuf>,

    /// Seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Print events as JSON lines; menus go to stderr.
    #[arg(long)]
    json: bool,
}

fn load_world(path: Option<&PathBuf>) -> Result<WorldConfig> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            WorldConfig::from_toml_str(&text)
                .with_context(|| format!("invalid world file {}", path.display()))
        }
        None => WorldConfig::reference().context("built-in world is invalid"),
    }
}

fn play<W: Write, S: EventSink>(
    state: &mut GameState,
    dice: RngDice,
    menu: W,
    sink: S,
) -> Result<GameStatus> {
    let choices = ConsoleChoices::new(io::stdin().lock(), menu);
    let status = TurnLoop::new(choices, dice, sink).run(state)?;
    Ok(status)
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let setup = load_world(cli.world.as_ref())?
        .build()
        .context("invalid world configuration")?;
    let mut state = GameState::from_setup(setup);
    let dice = match cli.seed {
        Some(seed) => RngDice::seeded(seed),
        None => RngDice::from_entropy(),
    };
    tracing::debug!(seed = ?cli.seed, rooms = state.world().len(), "world loaded");

    let status = if cli.json {
        play(&mut state, dice, io::stderr(), JsonSink::new(io::stdout()))?
    } else {
        println!("WELCOME TO THE DUNGEONS OF LORD OBJECT ORIENTUS!");
        println!("================================================");
        println!("You walk down the stairs to the dungeons");
        play(&mut state, dice, io::stdout(), TextSink::new(io::stdout()))?
    };

    Ok(match status {
        GameStatus::Lost => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
