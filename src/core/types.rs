//! Strongly-typed wrappers for card identity fields
//!
//! A card's identity is made of several short strings. Wrapping each one in
//! its own type keeps a set code from being passed where a card number is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trading card game a card belongs to
///
/// Part of a card's identity: the same name, set and number in two games
/// are two different cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardGame {
    Pokemon,
    MagicTheGathering,
}

impl fmt::Display for CardGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardGame::Pokemon => write!(f, "Pokemon"),
            CardGame::MagicTheGathering => write!(f, "Magic: The Gathering"),
        }
    }
}

/// Card name (e.g., "Pikachu", "Lightning Bolt")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardName(String);

impl CardName {
    pub fn new(s: impl Into<String>) -> Self {
        CardName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ASCII-folded, lowercased form used for loose name lookups
    ///
    /// "Pokémon Center" and "pokemon center" fold to the same string.
    pub fn folded(&self) -> String {
        fold_name(&self.0)
    }
}

impl fmt::Display for CardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CardName {
    fn from(s: String) -> Self {
        CardName(s)
    }
}

impl From<&str> for CardName {
    fn from(s: &str) -> Self {
        CardName(s.to_string())
    }
}

/// Set code or set name (e.g., "BS" for Base Set, "LEA" for Alpha)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SetCode(String);

impl SetCode {
    pub fn new(s: impl Into<String>) -> Self {
        SetCode(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SetCode {
    fn from(s: String) -> Self {
        SetCode(s)
    }
}

impl From<&str> for SetCode {
    fn from(s: &str) -> Self {
        SetCode(s.to_string())
    }
}

/// Collector number printed on the card
///
/// A string, not an integer: some numbers carry letters ("12a", "SV65").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardNumber(String);

impl CardNumber {
    pub fn new(s: impl Into<String>) -> Self {
        CardNumber(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CardNumber {
    fn from(s: String) -> Self {
        CardNumber(s)
    }
}

impl From<&str> for CardNumber {
    fn from(s: &str) -> Self {
        CardNumber(s.to_string())
    }
}

/// Normalize a card name for comparison: Unicode to ASCII, lowercase, trimmed
pub(crate) fn fold_name(name: &str) -> String {
    deunicode::deunicode(name.trim()).to_lowercase()
}
