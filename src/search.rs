//! Depth-limited tree search over move sequences.
//!
//! Single-agent best-first expansion, not minimax: there is no opponent
//! ply, only the deterministic refill that the threaded seed fixes. Each
//! candidate move is simulated on a cloned board with its own copy of the
//! seed, so no branch ever observes a sibling's mutations.
//!
//! Branching is kept tractable by a fixed pruning filter: a move is
//! expanded only if its chain length and merge result are on the curated
//! allow-lists, except in panic mode (fewer than [`PANIC_THRESHOLD`]
//! moves available) where everything is expanded. Pruned moves keep their
//! slot with a sentinel evaluation, so ties still resolve to the first
//! discovered move and a position with nothing but pruned moves still
//! yields one.

use crate::board::Board;
use crate::constants::{DEAD_SCORE, GOOD_CHAIN_LENS, GOOD_VALUES, PANIC_THRESHOLD};
use crate::eval::Evaluator;
use crate::game::apply_move_cloned;
use crate::moves::{Move, valid_moves};
use crate::rng::Seed;

/// Find the best move from this position by recursive simulation.
///
/// Depth 0 evaluates the board as-is and proposes nothing. A position
/// with no moves is terminal and propagates a sentinel minimal score, so
/// lines that die early lose to any line that survives.
pub fn tree_search(
    board: &Board,
    seed: Seed,
    depth: u8,
    evaluator: &Evaluator,
) -> (i64, Option<Move>) {
    if depth == 0 {
        return (evaluator.evaluate(board), None);
    }

    let moves = valid_moves(board);
    if moves.is_empty() {
        return (DEAD_SCORE, None);
    }

    let panic = moves.len() < PANIC_THRESHOLD;

    let mut best_score = DEAD_SCORE;
    let mut best_index = 0;
    for (index, mv) in moves.iter().enumerate() {
        let result = board.get(mv.end) * mv.len() as u32;
        let expand = panic || (GOOD_CHAIN_LENS.contains(&mv.len()) && GOOD_VALUES.contains(&result));
        if !expand {
            continue; // scored DEAD_SCORE, slot kept
        }

        let (child, child_seed, _) = apply_move_cloned(board, seed, mv)
            .expect("enumerated move must apply");
        let (score, _) = tree_search(&child, child_seed, depth - 1, evaluator);
        if score > best_score {
            best_score = score;
            best_index = index;
        }
    }

    let mut moves = moves;
    (best_score, Some(moves.swap_remove(best_index)))
}

/// A bot with a fixed evaluator and search depth.
#[derive(Debug, Clone)]
pub struct Bot {
    evaluator: Evaluator,
    depth: u8,
}

impl Bot {
    /// Bot for the standard 5x5 game.
    pub fn new(depth: u8) -> Bot {
        Bot {
            evaluator: Evaluator::new(),
            depth,
        }
    }

    /// Bot with a custom evaluator.
    pub fn with_evaluator(evaluator: Evaluator, depth: u8) -> Bot {
        Bot { evaluator, depth }
    }

    /// Best move for the position, or `None` when the game is over.
    pub fn best_move(&self, board: &Board, seed: Seed) -> (i64, Option<Move>) {
        tree_search(board, seed, self.depth.max(1), &self.evaluator)
    }
}
