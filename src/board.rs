//! Board state and neighbor queries.
//!
//! The board is a runtime-sized square grid stored as a flat vector.
//! Cell index `i` maps to coordinates `(i % size, i / size)`. Cells hold
//! small positive integers, initially in 1..=3 and growing without bound
//! as merges compound. The board owns no game logic beyond storage and
//! adjacency queries; merging lives in [`crate::game`].

use std::fmt;

use crate::rng::{Seed, next_value, random_seed};

/// Error raised when constructing a board from raw cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The cell vector does not hold `size * size` entries.
    WrongCellCount { expected: usize, found: usize },
    /// A cell holds zero; every tile must be a positive value.
    ZeroCell { index: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::WrongCellCount { expected, found } => {
                write!(f, "expected {expected} cells, found {found}")
            }
            BoardError::ZeroCell { index } => write!(f, "cell {index} is zero"),
        }
    }
}

impl std::error::Error for BoardError {}

/// A square grid of valued tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Create a freshly filled board, drawing every tile from the legacy
    /// generator. When `seed` is `None` a random one is picked. Returns the
    /// board together with the generator state after the fill, which the
    /// caller threads into subsequent moves.
    pub fn new(size: usize, seed: Option<Seed>) -> (Board, Seed) {
        let mut seed = seed.unwrap_or_else(random_seed);
        let mut cells = Vec::with_capacity(size * size);
        for _ in 0..size * size {
            let (next, value) = next_value(seed);
            seed = next;
            cells.push(value);
        }
        (Board { size, cells }, seed)
    }

    /// Build a board from raw cells, failing fast on a malformed grid so
    /// that bad boards never reach the move enumerator.
    pub fn from_cells(size: usize, cells: Vec<u32>) -> Result<Board, BoardError> {
        if cells.len() != size * size {
            return Err(BoardError::WrongCellCount {
                expected: size * size,
                found: cells.len(),
            });
        }
        if let Some(index) = cells.iter().position(|&v| v == 0) {
            return Err(BoardError::ZeroCell { index });
        }
        Ok(Board { size, cells })
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size * size`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Value of the cell at `index`. Panics if out of bounds.
    pub fn get(&self, index: usize) -> u32 {
        self.cells[index]
    }

    pub(crate) fn set(&mut self, index: usize, value: u32) {
        self.cells[index] = value;
    }

    /// Whether two cell indices are orthogonally adjacent.
    pub fn adjacent(&self, a: usize, b: usize) -> bool {
        let (ax, ay) = (a % self.size, a / self.size);
        let (bx, by) = (b % self.size, b / self.size);
        ax.abs_diff(bx) + ay.abs_diff(by) == 1
    }

    /// For every cell, the orthogonally adjacent cells sharing its value,
    /// in right, down, left, up order. The order is part of the engine
    /// contract: it fixes the enumeration order of moves, which in turn
    /// fixes which move a deterministic policy picks first.
    ///
    /// Recomputed fresh for every board state; merges change values too
    /// broadly for incremental updates to pay off.
    pub fn neighbor_map(&self) -> Vec<Vec<usize>> {
        let n = self.size;
        let mut map = Vec::with_capacity(self.cells.len());
        for i in 0..self.cells.len() {
            let x = i % n;
            let y = i / n;
            let value = self.cells[i];
            let mut neighbors = Vec::new();
            if x < n - 1 && self.cells[i + 1] == value {
                neighbors.push(i + 1); // right
            }
            if y < n - 1 && self.cells[i + n] == value {
                neighbors.push(i + n); // down
            }
            if x > 0 && self.cells[i - 1] == value {
                neighbors.push(i - 1); // left
            }
            if y > 0 && self.cells[i - n] == value {
                neighbors.push(i - n); // up
            }
            map.push(neighbors);
        }
        map
    }

    /// Early-exit scan for any two equal adjacent tiles. Cheaper than a
    /// full move enumeration when only game-over detection is needed.
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size;
        for i in 0..self.cells.len() {
            let x = i % n;
            let y = i / n;
            let value = self.cells[i];
            if x < n - 1 && self.cells[i + 1] == value {
                return true;
            }
            if y < n - 1 && self.cells[i + n] == value {
                return true;
            }
        }
        false
    }
}
