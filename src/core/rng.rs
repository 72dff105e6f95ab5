//! Random source for deck draws and table utilities
//!
//! Draw operations take any `rand::Rng`. `TcgRng` is the generator the
//! crate standardizes on: fast, seedable for deterministic tests, and its
//! state serializes with serde so a host can checkpoint it.

use crate::{Result, TcgError};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

/// Shared pseudo-random generator
pub type TcgRng = Xoshiro256PlusPlus;

/// Deterministic generator for a given seed
pub fn seeded_rng(seed: u64) -> TcgRng {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// Generator seeded from the operating system
pub fn entropy_rng() -> TcgRng {
    Xoshiro256PlusPlus::from_entropy()
}

/// Result of a coin flip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinFlip {
    Heads,
    Tails,
}

/// Flip a fair coin
pub fn flip_coin(rng: &mut impl Rng) -> CoinFlip {
    if rng.gen_bool(0.5) {
        CoinFlip::Heads
    } else {
        CoinFlip::Tails
    }
}

/// Roll `count` dice with `sides` faces each
///
/// Each result lies in `1..=sides`. Sum the vector for the total.
pub fn roll_dice(rng: &mut impl Rng, sides: u32, count: usize) -> Result<Vec<u32>> {
    if sides == 0 {
        return Err(TcgError::InvalidArgument(
            "dice must have at least one side".to_string(),
        ));
    }
    Ok((0..count).map(|_| rng.gen_range(1..=sides)).collect())
}
