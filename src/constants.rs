//! Constants for board geometry, the legacy PRNG, and bot parameters.
//!
//! This module contains all the configuration constants for the engine.
//! The PRNG constants are a compatibility requirement: games recorded
//! against the original Gridentify server replay bit-for-bit only if the
//! exact multiplier, modulus, and wrap offset are used.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN). The standard Gridentify board is 5x5.
pub const DEFAULT_SIZE: usize = 5;

// =============================================================================
// Legacy PRNG
// =============================================================================
//
// The tile generator is a linear congruential generator with the same
// arithmetic as the original game server. It is deliberately bad randomness;
// replacing it with a better RNG breaks seed replay.

/// LCG multiplier.
pub const RNG_MULTIPLIER: i64 = 16807;

/// LCG modulus.
pub const RNG_MODULUS: i64 = 1_924_421_567;

/// Offset added when the raw LCG output is not positive.
pub const RNG_WRAP_OFFSET: i64 = 3_229_763_266;

// =============================================================================
// Tree Search Parameters
// =============================================================================

/// Below this many available moves the search stops pruning and expands
/// everything ("panic mode"). With few options left a bad forced move is
/// likely, and exhaustive search is affordable.
pub const PANIC_THRESHOLD: usize = 5;

/// Chain lengths worth building. Other lengths are pruned during search.
pub const GOOD_CHAIN_LENS: [usize; 7] = [2, 3, 4, 6, 8, 12, 24];

/// Merge results worth making: the starting values plus the 3 * 2^k
/// progression that doubling merges walk along.
pub const GOOD_VALUES: [u32; 17] = [
    1, 2, 3, 6, 12, 24, 48, 96, 192, 384, 768, 1536, 3072, 6144, 12288, 24576, 49152,
];

/// Evaluation assigned to a branch with no moves left (game over) and to
/// moves pruned by the search filter.
pub const DEAD_SCORE: i64 = i64::MIN;

// =============================================================================
// Evaluation Parameters
// =============================================================================

/// Weight of the neighbor-pressure term relative to the positional term.
pub const NEIGHBOR_WEIGHT: i64 = 1000;

/// Positional weight matrix for the standard 5x5 board: heavy toward two
/// opposite corners, near zero at the center. The evaluator takes the max
/// over all 8 symmetries of this matrix, so the orientation written here is
/// arbitrary.
#[rustfmt::skip]
pub const CORNER_WEIGHTS: [i64; 25] = [
     128,  256,  512, 1024, 2048,
      64,   32,   16,    8,    4,
       2,    1,    0,    1,    2,
       4,    8,   16,   32,   64,
    2048, 1024,  512,  256,  128,
];
