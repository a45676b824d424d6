//! # Delve Main Entry Point
//!
//! A line-oriented terminal game on top of the simulation core. Each line of
//! input is parsed into commands, moves are applied in order, and a fresh
//! frame is printed after every line.

use clap::Parser;
use delve::{
    apply_move, init_game, Command, DelveResult, GameState, InputHandler, Renderer, HELP_TEXT,
};
#[cfg(not(feature = "dev-tools"))]
use log::{info, warn};
#[cfg(feature = "dev-tools")]
use tracing::{info, warn};
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, BufRead, Write};

/// Command line arguments for Delve.
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(about = "A ten-level dungeon crawl in the terminal")]
#[command(version)]
struct Args {
    /// Random seed for dungeon generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print a JSON snapshot of the game after every turn instead of the map
    #[arg(long)]
    json: bool,

    /// Start with the minimap hidden
    #[arg(long)]
    no_minimap: bool,
}

fn main() -> DelveResult<()> {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Starting Delve v{} with seed {}", delve::VERSION, seed);

    let mut rng = StdRng::seed_from_u64(seed);
    run_game(&args, &mut rng)
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        let filter = tracing_subscriber::EnvFilter::try_new(log_level)
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .target(env_logger::Target::Stderr)
            .init();
    }
}

/// Reads commands from stdin until `q` or end of input.
fn run_game(args: &Args, rng: &mut StdRng) -> DelveResult<()> {
    let input = InputHandler::new();
    let mut renderer = Renderer::new();
    renderer.show_minimap = !args.no_minimap;

    let mut state = init_game(rng);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    draw(&mut out, args, &renderer, &state)?;

    for line in stdin.lock().lines() {
        let line = line?;

        let commands = match input.parse_line(&line) {
            Ok(commands) => commands,
            Err(err) => {
                warn!("{}", err);
                writeln!(out, "{} (type ? for help)", err)?;
                continue;
            }
        };

        for command in commands {
            match command {
                Command::Move(direction) => {
                    state = apply_move(&state, direction, rng);
                }
                Command::ToggleMinimap => renderer.show_minimap = !renderer.show_minimap,
                Command::ToggleInventory => renderer.show_inventory = !renderer.show_inventory,
                Command::Restart => state = state.restart(rng),
                Command::Help => writeln!(out, "{}", HELP_TEXT)?,
                Command::Quit => {
                    info!(
                        "Quit after {} turns, {} enemies defeated",
                        state.turn_number, state.statistics.enemies_defeated
                    );
                    return Ok(());
                }
            }
        }

        draw(&mut out, args, &renderer, &state)?;
    }

    Ok(())
}

fn draw(out: &mut impl Write, args: &Args, renderer: &Renderer, state: &GameState) -> DelveResult<()> {
    if args.json {
        writeln!(out, "{}", state.to_json()?)?;
    } else {
        write!(out, "{}", renderer.render_frame(state))?;
    }
    out.flush()?;
    Ok(())
}
