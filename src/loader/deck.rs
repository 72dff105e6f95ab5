//! Text deck list loader
//!
//! Turns a plain deck list into card counts the collection can ingest:
//!
//! ```text
//! [metadata]
//! Name=Starter
//!
//! [Main]
//! 4 Pikachu|BS|58
//! 2 Energy Search|FO|34
//! 10 Lightning Energy
//! ```
//!
//! Set and collector number after the `|` separators are optional.

use crate::core::{CardGame, CardKey};
use crate::inventory::{CardMultiset, Deck};
use crate::{Result, TcgError};
use std::fs;
use std::path::Path;

/// Deck list loader
pub struct DeckListLoader;

impl DeckListLoader {
    /// Load a deck list from a file
    pub fn load_from_file(path: &Path, game: CardGame) -> Result<DeckList> {
        let content = fs::read_to_string(path).map_err(|e| TcgError::from_read(path, e))?;
        Self::parse(&content, game)
    }

    /// Parse a deck list from its text content
    pub fn parse(content: &str, game: CardGame) -> Result<DeckList> {
        let mut name = None;
        let mut cards = CardMultiset::new();
        let mut in_metadata = false;

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.starts_with('[') {
                in_metadata = line.eq_ignore_ascii_case("[metadata]");
                continue;
            }
            if in_metadata {
                if let Some(value) = line.strip_prefix("Name=") {
                    name = Some(value.trim().to_string());
                }
                continue;
            }

            let (key, count) = Self::parse_entry(line, game).ok_or_else(|| {
                TcgError::InvalidDeckFormat(format!("line {}: '{}'", line_no + 1, line))
            })?;
            cards.add(key, count);
        }

        if cards.is_empty() {
            return Err(TcgError::InvalidDeckFormat("Empty deck".to_string()));
        }

        Ok(DeckList { name, cards })
    }

    /// "4 Pikachu|BS|58" -> (Pikachu [BS #58], 4)
    fn parse_entry(line: &str, game: CardGame) -> Option<(CardKey, u32)> {
        let (count_str, rest) = line.split_once(' ')?;
        let count = count_str.parse::<u32>().ok().filter(|&c| c > 0)?;

        let mut parts = rest.split('|').map(str::trim);
        let card_name = parts.next().filter(|n| !n.is_empty())?;
        let set = parts.next().unwrap_or("");
        let number = parts.next().unwrap_or("");
        if parts.next().is_some() {
            return None;
        }

        Some((CardKey::new(game, card_name, set, number), count))
    }
}

/// A parsed deck list
#[derive(Debug, Clone)]
pub struct DeckList {
    /// Name from the metadata section, if any
    pub name: Option<String>,
    cards: CardMultiset,
}

impl DeckList {
    pub fn cards(&self) -> &CardMultiset {
        &self.cards
    }

    pub fn total_cards(&self) -> usize {
        self.cards.total()
    }

    /// Build a deck, falling back to `default_name` when the list has none
    pub fn into_deck(self, default_name: &str) -> Deck {
        let name = self.name.unwrap_or_else(|| default_name.to_string());
        Deck::new(name, self.cards)
    }
}
