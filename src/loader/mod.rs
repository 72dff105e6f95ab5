//! Card sources
//!
//! Producers of card counts for the collection. The catalog API clients
//! live outside this crate; the text deck list loader ships here.

pub mod deck;

pub use deck::{DeckList, DeckListLoader};
