//! Card collection and deck model
//!
//! `CardMultiset` is the building block for both the overall collection
//! and each deck. `Collection` owns its decks and keeps them within the
//! cards it holds.

pub mod collection;
pub mod deck;
pub mod multiset;

pub use collection::{Collection, CollectionState, DeckSource};
pub use deck::Deck;
pub use multiset::{CardCount, CardMultiset};
