//! Static board evaluation for the search bot.
//!
//! Two ingredients, combined linearly:
//!
//! - neighbor pressure: the total count of same-value adjacencies, which
//!   rewards boards with merge potential;
//! - positional weighting: a fixed corner-heavy weight matrix dotted with
//!   the board, taken as the maximum over all 8 board symmetries so that
//!   the heuristic has no preferred orientation (the puzzle has no
//!   intrinsic "up").
//!
//! The symmetry variants of the weight matrix are precomputed once at
//! evaluator construction rather than living as module globals. All
//! evaluation is deterministic and side-effect-free; it only ranks
//! simulated futures and never mutates state.

use crate::board::Board;
use crate::constants::{CORNER_WEIGHTS, DEFAULT_SIZE, NEIGHBOR_WEIGHT};

/// Sum over all cells of the number of equal-valued orthogonal neighbors.
pub fn neighbor_pressure(board: &Board) -> i64 {
    board
        .neighbor_map()
        .iter()
        .map(|neighbors| neighbors.len() as i64)
        .sum()
}

/// Positional evaluator holding the 8 symmetry variants of its weight
/// matrix (4 rotations, each plain and mirrored).
#[derive(Debug, Clone)]
pub struct Evaluator {
    size: usize,
    tables: Vec<Vec<i64>>,
}

impl Evaluator {
    /// Evaluator for the standard 5x5 board with the built-in weights.
    pub fn new() -> Evaluator {
        Evaluator::from_weights(DEFAULT_SIZE, &CORNER_WEIGHTS)
    }

    /// Build an evaluator from an arbitrary `size * size` weight matrix.
    /// Panics if the matrix does not match the size.
    pub fn from_weights(size: usize, weights: &[i64]) -> Evaluator {
        assert_eq!(weights.len(), size * size, "weight matrix size mismatch");
        let mut tables = Vec::with_capacity(8);
        let mut current = weights.to_vec();
        for _ in 0..4 {
            tables.push(current.clone());
            tables.push(mirrored(&current, size));
            current = rotated(&current, size);
        }
        Evaluator { size, tables }
    }

    /// Weighted board sum, maximized over all 8 symmetries. Panics if the
    /// board size does not match the evaluator's.
    pub fn positional(&self, board: &Board) -> i64 {
        assert_eq!(board.size(), self.size, "board size mismatch");
        self.tables
            .iter()
            .map(|table| {
                table
                    .iter()
                    .zip(board.cells())
                    .map(|(&w, &v)| w * i64::from(v))
                    .sum::<i64>()
            })
            .max()
            .unwrap_or(0)
    }

    /// Combined heuristic: neighbor pressure dominates, the positional
    /// term breaks ties toward corner-stacked boards.
    pub fn evaluate(&self, board: &Board) -> i64 {
        NEIGHBOR_WEIGHT * neighbor_pressure(board) + self.positional(board)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new()
    }
}

/// Rotate a square matrix a quarter turn.
fn rotated(weights: &[i64], size: usize) -> Vec<i64> {
    (0..weights.len())
        .map(|i| {
            let x = i % size;
            let y = i / size;
            weights[(size - 1 - x) * size + y]
        })
        .collect()
}

/// Mirror a square matrix horizontally.
fn mirrored(weights: &[i64], size: usize) -> Vec<i64> {
    (0..weights.len())
        .map(|i| {
            let x = i % size;
            let y = i / size;
            weights[y * size + (size - 1 - x)]
        })
        .collect()
}
