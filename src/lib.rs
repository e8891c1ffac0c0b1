//! Gridentify-Rust: a deterministic chain-merge puzzle engine and bot.
//!
//! This crate implements the Gridentify board game core: exhaustive
//! enumeration of chain-merge moves, deterministic move application with
//! seed-replayable tile refills, and a depth-limited heuristic tree
//! search that picks strong moves without human input.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, PRNG arithmetic, and bot parameters
//! - [`rng`] - The legacy seed-compatible tile generator
//! - [`board`] - Grid storage and same-value neighbor queries
//! - [`moves`] - Recursive chain discovery with global deduplication
//! - [`game`] - Move application, scoring, and game status
//! - [`eval`] - Static board evaluation (neighbor pressure + positional)
//! - [`search`] - Depth-limited best-first tree search
//!
//! ## Example
//!
//! ```
//! use gridentify_rust::board::Board;
//! use gridentify_rust::game::apply_move;
//! use gridentify_rust::moves::valid_moves;
//! use gridentify_rust::search::Bot;
//!
//! // Start a seeded 5x5 game; the same seed always deals the same board.
//! let (mut board, mut seed) = Board::new(5, Some(123));
//!
//! // Ask the bot for a move and play it.
//! let bot = Bot::new(2);
//! let (_eval, best) = bot.best_move(&board, seed);
//! if let Some(mv) = best {
//!     assert!(valid_moves(&board).contains(&mv));
//!     let (next_seed, score_delta) = apply_move(&mut board, seed, &mv).unwrap();
//!     seed = next_seed;
//!     println!("merged {} tiles for {score_delta} points", mv.len());
//! }
//! # let _ = seed;
//! ```

pub mod board;
pub mod constants;
pub mod eval;
pub mod game;
pub mod moves;
pub mod rng;
pub mod search;
