//! Gridentify-Rust: a deterministic chain-merge puzzle engine and bot.
//!
//! ## Usage
//!
//! - `gridentify-rust` - Run a short demo game
//! - `gridentify-rust demo` - Same as above
//! - `gridentify-rust bot --seed 123 --depth 3` - Headless bot self-play

use anyhow::bail;
use clap::{Parser, Subcommand};

use gridentify_rust::game::{Game, Status};
use gridentify_rust::rng::Seed;
use gridentify_rust::search::Bot;

/// Gridentify-Rust: deterministic chain-merge engine and search bot
#[derive(Parser)]
#[command(name = "gridentify-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a short demo game with the bot
    Demo,
    /// Let the bot play a full game by itself
    Bot {
        /// Game seed; random when omitted
        #[arg(long)]
        seed: Option<Seed>,
        /// Search depth
        #[arg(long, default_value_t = 3)]
        depth: u8,
        /// Stop after this many moves (0 = play until game over)
        #[arg(long, default_value_t = 0)]
        max_moves: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Bot {
            seed,
            depth,
            max_moves,
        }) => run_bot(seed, depth, max_moves),
        Some(Commands::Demo) | None => run_bot(None, 2, 25),
    }
}

fn run_bot(seed: Option<Seed>, depth: u8, max_moves: usize) -> anyhow::Result<()> {
    if depth == 0 {
        bail!("search depth must be at least 1");
    }

    let mut game = Game::new(5, seed);
    println!("seed: {}", game.seed);

    let bot = Bot::new(depth);
    let mut played = 0;
    while game.status == Status::Running {
        if max_moves > 0 && played >= max_moves {
            break;
        }
        let (eval, best) = bot.best_move(&game.board, game.seed);
        let Some(mv) = best else { break };
        let delta = game.make_move(&mv)?;
        played += 1;
        println!(
            "move {played}: merged {} tiles into {delta}, score {} (eval {eval})",
            mv.len(),
            game.score
        );
    }

    match game.status {
        Status::Ended => println!("game over after {played} moves, final score {}", game.score),
        Status::Running => println!("stopped after {played} moves, score {}", game.score),
    }
    Ok(())
}
