//! TCG Collection - card inventory and deck model for trading card game clients
//!
//! Tracks how many copies of each card a user owns, splits them into named
//! decks without ever over-claiming inventory, draws from decks without
//! replacement, and saves/restores the whole collection as JSON.

pub mod core;
pub mod error;
pub mod inventory;
pub mod loader;
pub mod storage;

pub use error::{Result, Shortfall, TcgError};
pub use inventory::{CardMultiset, Collection, Deck};
