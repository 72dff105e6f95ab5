//! Persisted collection format
//!
//! ```json
//! {
//!   "allCards": [{"game": "Pokemon", "name": "Pikachu", "set": "BS", "number": "58", "count": 3}],
//!   "decks": [{"name": "starter", "composition": [ ...same shape as allCards... ]}]
//! }
//! ```
//!
//! Decks store their composition only. Draw state is never persisted, so an
//! imported collection always has fully reset decks.

use crate::inventory::{CardMultiset, Collection, Deck};
use crate::{Result, TcgError};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionRecord {
    all_cards: CardMultiset,
    #[serde(default)]
    decks: Vec<DeckRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct DeckRecord {
    name: String,
    composition: CardMultiset,
}

impl CollectionRecord {
    fn from_collection(collection: &Collection) -> Self {
        CollectionRecord {
            all_cards: collection.all_cards().clone(),
            decks: collection
                .decks()
                .iter()
                .map(|deck| DeckRecord {
                    name: deck.name().to_string(),
                    composition: deck.all_cards().clone(),
                })
                .collect(),
        }
    }

    /// Rebuild the collection, re-validating every deck against the cards
    fn into_collection(self) -> Result<Collection> {
        let decks = self
            .decks
            .into_iter()
            .map(|d| Deck::new(d.name, d.composition))
            .collect();
        Collection::from_parts(self.all_cards, decks)
    }
}

fn parse_error(e: serde_json::Error) -> TcgError {
    if e.is_io() {
        TcgError::Io(e.into())
    } else {
        TcgError::InvalidSource(e.to_string())
    }
}

fn write_error(e: serde_json::Error) -> TcgError {
    if e.is_io() {
        TcgError::Io(e.into())
    } else {
        TcgError::Serialization(e.to_string())
    }
}

impl Collection {
    /// Serialize to a compact JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&CollectionRecord::from_collection(self)).map_err(write_error)
    }

    /// Serialize to an indented JSON string
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&CollectionRecord::from_collection(self))
            .map_err(write_error)
    }

    /// Parse a collection, failing with `InvalidSource` on malformed input and
    /// `CardNotInCollection` if the decks over-claim the cards
    pub fn from_json(json: &str) -> Result<Self> {
        let record: CollectionRecord = serde_json::from_str(json).map_err(parse_error)?;
        record.into_collection()
    }

    pub fn export_to_writer<W: Write>(&self, writer: W, pretty: bool) -> Result<()> {
        let record = CollectionRecord::from_collection(self);
        if pretty {
            serde_json::to_writer_pretty(writer, &record).map_err(write_error)
        } else {
            serde_json::to_writer(writer, &record).map_err(write_error)
        }
    }

    pub fn import_from_reader<R: Read>(reader: R) -> Result<Self> {
        let record: CollectionRecord = serde_json::from_reader(reader).map_err(parse_error)?;
        record.into_collection()
    }
}
