//! The legacy Gridentify tile generator.
//!
//! A 31-bit-ish linear congruential generator with the same arithmetic as
//! the original game server, kept bit-exact so that recorded seeds replay
//! identically. The generator is a pure function of the seed: callers
//! thread the seed explicitly, and no state is shared between branches of
//! a simulation.

use crate::constants::{RNG_MODULUS, RNG_MULTIPLIER, RNG_WRAP_OFFSET};

/// PRNG state. Travels with whichever board it belongs to.
pub type Seed = i64;

/// Advance the generator: returns the next seed and a tile value in 1..=3.
///
/// `rem_euclid` reproduces the reference implementation's non-negative
/// modulo for negative seeds, and the wrap offset is added whenever the
/// raw output is not positive (which for a non-negative remainder means
/// exactly zero).
#[inline]
pub fn next_value(seed: Seed) -> (Seed, u32) {
    // Widen before multiplying: the reference implementation computes in
    // arbitrary precision, so even absurd seeds must not overflow here.
    let e = (i128::from(RNG_MULTIPLIER) * i128::from(seed)).rem_euclid(i128::from(RNG_MODULUS))
        as i64;
    let next = if e > 0 { e } else { e + RNG_WRAP_OFFSET };
    let value = (e % 3) as u32 + 1;
    (next, value)
}

/// Pick a fresh seed for an unseeded game, uniform in `[1, i32::MAX)`.
pub fn random_seed() -> Seed {
    fastrand::i64(1..i32::MAX as i64)
}
