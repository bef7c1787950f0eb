//! Hex in the terminal.
//!
//! ## Usage
//!
//! - `hex-game` - Play through the text front-end (default)
//! - `hex-game play` - Same as above
//! - `hex-game demo [--seed N]` - Run one random playout and show the result

use std::io;

use clap::{Parser, Subcommand};

use hex_game::board::str_coord;
use hex_game::game::Game;
use hex_game::playout::random_playout;
use hex_game::shell::Shell;

/// Hex: connect your two edges of the board
#[derive(Parser)]
#[command(name = "hex-game")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin and play a game
    Play,
    /// Fill the board randomly until someone connects
    Demo {
        /// Seed for reproducible playouts
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Some(Commands::Play) | None => {
            let mut shell = Shell::new();
            shell.run(io::stdin().lock(), io::stdout())?;
        }
        Some(Commands::Demo { seed }) => run_demo(seed),
    }
    Ok(())
}

fn run_demo(seed: Option<u64>) {
    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    log::info!("random playout with seed {}", rng.get_seed());

    let mut game = Game::new();
    let Some(result) = random_playout(&mut game, &mut rng) else {
        return;
    };
    println!("{}", game.board());
    println!("{} wins after {} moves", result.winner, result.moves);
    if let Some(path) = game.winning_path() {
        let coords: Vec<String> = path.into_iter().map(str_coord).collect();
        println!("Winning chain: {}", coords.join(" "));
    }
}
