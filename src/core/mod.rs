//! Core card identity types and random source

pub mod card;
pub mod rng;
pub mod types;

pub use card::CardKey;
pub use rng::{entropy_rng, flip_coin, roll_dice, seeded_rng, CoinFlip, TcgRng};
pub use types::{CardGame, CardName, CardNumber, SetCode};
