//! Move application and game state.
//!
//! Applying a move merges the chain into its endpoint (`value * length`)
//! and refills every other consumed tile from the legacy generator, in
//! reverse discovery order. The refill order is part of the seed-replay
//! contract: drawing in any other order produces a different board from
//! the same seed.
//!
//! Invalid moves are contract violations, rejected before any mutation
//! and never coerced to a nearby valid move. Running out of moves is not
//! an error; callers detect it through an empty [`valid_moves`] result or
//! [`Status::Ended`].

use std::fmt;

use crate::board::Board;
use crate::moves::{Move, valid_moves};
use crate::rng::{Seed, next_value};

/// Error raised when a move fails structural validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Fewer than two tiles; single tiles are never produced by the
    /// enumerator and merge nothing.
    TooShort,
    /// The endpoint is not one of the consumed tiles.
    EndNotInChain,
    /// A consumed tile index is outside the board.
    OutOfBounds(usize),
    /// The same tile appears twice in the chain.
    DuplicateCell(usize),
    /// Two consecutive tiles of the chain are not orthogonal neighbors.
    NotAdjacent(usize, usize),
    /// A consumed tile does not share the chain's value.
    ValueMismatch { cell: usize, expected: u32, found: u32 },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::TooShort => write!(f, "chain must use at least two tiles"),
            MoveError::EndNotInChain => write!(f, "endpoint is not part of the chain"),
            MoveError::OutOfBounds(i) => write!(f, "tile {i} is outside the board"),
            MoveError::DuplicateCell(i) => write!(f, "tile {i} is used twice"),
            MoveError::NotAdjacent(a, b) => write!(f, "tiles {a} and {b} are not adjacent"),
            MoveError::ValueMismatch {
                cell,
                expected,
                found,
            } => write!(f, "tile {cell} holds {found}, chain value is {expected}"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Check that a move is a chain the enumerator could have produced on this
/// board: at least two distinct in-bounds tiles of one value, consecutive
/// tiles adjacent, endpoint last. Rejection happens before any mutation.
pub fn validate_move(board: &Board, mv: &Move) -> Result<(), MoveError> {
    if mv.used.len() < 2 {
        return Err(MoveError::TooShort);
    }
    if !mv.used.contains(&mv.end) {
        return Err(MoveError::EndNotInChain);
    }
    for (i, &cell) in mv.used.iter().enumerate() {
        if cell >= board.cell_count() {
            return Err(MoveError::OutOfBounds(cell));
        }
        if mv.used[..i].contains(&cell) {
            return Err(MoveError::DuplicateCell(cell));
        }
    }
    let value = board.get(mv.used[0]);
    for &cell in &mv.used {
        let found = board.get(cell);
        if found != value {
            return Err(MoveError::ValueMismatch {
                cell,
                expected: value,
                found,
            });
        }
    }
    for pair in mv.used.windows(2) {
        if !board.adjacent(pair[0], pair[1]) {
            return Err(MoveError::NotAdjacent(pair[0], pair[1]));
        }
    }
    Ok(())
}

/// Apply `mv` to the board in place. Returns the generator state after the
/// refill and the score delta, which is the merged tile's new value.
pub fn apply_move(board: &mut Board, seed: Seed, mv: &Move) -> Result<(Seed, u32), MoveError> {
    validate_move(board, mv)?;

    let merged = board.get(mv.end) * mv.used.len() as u32;
    board.set(mv.end, merged);

    // Refill consumed tiles last-selected first, one draw per tile. The
    // endpoint keeps the merge result and draws nothing.
    let mut seed = seed;
    for &cell in mv.used.iter().rev() {
        if cell == mv.end {
            continue;
        }
        let (next, value) = next_value(seed);
        seed = next;
        board.set(cell, value);
    }

    Ok((seed, merged))
}

/// Pure variant of [`apply_move`]: leaves the input board untouched and
/// returns the successor state.
pub fn apply_move_cloned(
    board: &Board,
    seed: Seed,
    mv: &Move,
) -> Result<(Board, Seed, u32), MoveError> {
    let mut next = board.clone();
    let (next_seed, delta) = apply_move(&mut next, seed, mv)?;
    Ok((next, next_seed, delta))
}

/// Whether the game can continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Ended,
}

/// A running game: board, generator state, and accumulated score.
#[derive(Debug, Clone)]
pub struct Game {
    pub board: Board,
    pub seed: Seed,
    pub score: u64,
    pub status: Status,
}

impl Game {
    /// Start a game on a freshly filled board.
    pub fn new(size: usize, seed: Option<Seed>) -> Game {
        let (board, seed) = Board::new(size, seed);
        Game::from_board(board, seed)
    }

    /// Resume from an existing board and generator state.
    pub fn from_board(board: Board, seed: Seed) -> Game {
        let status = if board.has_adjacent_pair() {
            Status::Running
        } else {
            Status::Ended
        };
        Game {
            board,
            seed,
            score: 0,
            status,
        }
    }

    /// All legal moves in the current position.
    pub fn valid_moves(&self) -> Vec<Move> {
        valid_moves(&self.board)
    }

    /// Apply a move, accumulate its score delta, and refresh the status.
    pub fn make_move(&mut self, mv: &Move) -> Result<u32, MoveError> {
        let (seed, delta) = apply_move(&mut self.board, self.seed, mv)?;
        self.seed = seed;
        self.score += u64::from(delta);
        self.status = if self.board.has_adjacent_pair() {
            Status::Running
        } else {
            Status::Ended
        };
        Ok(delta)
    }
}
