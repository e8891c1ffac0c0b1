//! Chain-merge move enumeration.
//!
//! A move selects a chain of equal-valued tiles and merges it into its
//! last tile. Chains are discovered by depth-first exploration over the
//! board's same-value adjacency map: starting from every cell, the search
//! repeatedly extends the chain into an unused neighbor of the current
//! frontier tile, so a chain is always traceable as a simple path. Two
//! discoveries that cover the same tile set and end on the same tile are
//! the same move; a hash set owned by the top-level call deduplicates them
//! globally, and duplicate branches are not recursed into (the subtree
//! below a repeated `(end, set)` state was already explored the first
//! time).
//!
//! This enumeration is exponential in chain length on dense boards, which
//! is acceptable for the small fixed board sizes the game uses.

use std::collections::HashSet;

use crate::board::Board;

/// A chain-merge move: `used` lists the consumed tiles in discovery order
/// (the starting tile first), and `end` is the tile the merge result lands
/// on, always the last entry of `used`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub end: usize,
    pub used: Vec<usize>,
}

impl Move {
    /// Chain length.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Identity of the move for set-style comparison: the endpoint plus
    /// the consumed tiles as an unordered collection.
    pub fn chain_key(&self) -> (usize, Vec<usize>) {
        let mut key = self.used.clone();
        key.sort_unstable();
        (self.end, key)
    }
}

/// Enumerate every legal move on the board, in deterministic discovery
/// order. Single-tile "chains" are not moves; a board with no two equal
/// adjacent tiles yields an empty list, which callers read as game over.
pub fn valid_moves(board: &Board) -> Vec<Move> {
    let neighbor_map = board.neighbor_map();
    let mut moves = Vec::new();
    let mut seen: HashSet<(usize, Vec<usize>)> = HashSet::new();

    // Grow chains out of every tile of the board.
    for start in 0..board.cell_count() {
        if neighbor_map[start].is_empty() {
            continue;
        }
        let root = Move {
            end: start,
            used: vec![start],
        };
        discover(&root, start, &neighbor_map, &mut moves, &mut seen);
    }

    moves
}

/// Extend `chain` into every unused same-value neighbor of its frontier
/// tile, recording each new branch that has not been produced before.
fn discover(
    chain: &Move,
    frontier: usize,
    neighbor_map: &[Vec<usize>],
    moves: &mut Vec<Move>,
    seen: &mut HashSet<(usize, Vec<usize>)>,
) {
    for &next in &neighbor_map[frontier] {
        if chain.used.contains(&next) {
            continue;
        }
        let mut branch = chain.clone();
        branch.used.push(next);
        branch.end = next;
        if !seen.insert(branch.chain_key()) {
            continue;
        }
        moves.push(branch.clone());
        discover(&branch, next, neighbor_map, moves, seen);
    }
}
