//! Card collection: the full inventory plus the decks carved out of it

use crate::core::CardKey;
use crate::error::Shortfall;
use crate::inventory::{CardMultiset, Deck};
use crate::{Result, TcgError};
use log::{debug, warn};

/// Where the cards of decks passed to `Collection::add_decks` come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckSource {
    /// The cards are already in the collection
    FromCollection,
    /// The cards are new: add them to the collection before admitting the deck
    NewCards,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionState {
    Empty,
    Populated,
}

/// Every card a user owns, partitioned into decks
///
/// Decks never claim more copies of a card than the collection holds,
/// individually or together. Cards not allocated to any deck are derived
/// on demand by `free_cards`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    all_cards: CardMultiset,
    decks: Vec<Deck>,
}

impl Collection {
    /// Create an empty collection
    pub fn new() -> Self {
        Collection {
            all_cards: CardMultiset::new(),
            decks: Vec::new(),
        }
    }

    /// Create a collection holding `cards` and no decks
    pub fn with_cards(cards: CardMultiset) -> Self {
        Collection {
            all_cards: cards,
            decks: Vec::new(),
        }
    }

    /// Create a collection from its cards and decks
    ///
    /// The deck cards must already be included in `cards`. The decks are
    /// validated together exactly as `add_deck` would; any violation
    /// rejects the whole construction.
    pub fn from_parts(cards: CardMultiset, decks: Vec<Deck>) -> Result<Self> {
        let mut collection = Collection::with_cards(cards);
        collection.add_decks(decks, DeckSource::FromCollection)?;
        Ok(collection)
    }

    pub fn all_cards(&self) -> &CardMultiset {
        &self.all_cards
    }

    /// Total number of physical cards owned
    pub fn all_cards_count(&self) -> usize {
        self.all_cards.total()
    }

    pub fn state(&self) -> CollectionState {
        if self.all_cards.is_empty() {
            CollectionState::Empty
        } else {
            CollectionState::Populated
        }
    }

    /// Add every card of `cards` to the collection
    pub fn add_cards(&mut self, cards: &CardMultiset) {
        self.all_cards.merge(cards);
        debug!(
            "Added {} card(s) to collection, now {}",
            cards.total(),
            self.all_cards_count()
        );
    }

    pub fn add_card(&mut self, key: CardKey, count: u32) {
        self.all_cards.add(key, count);
    }

    /// Admit a deck into the collection
    ///
    /// For each card in the deck, the copies claimed by this deck plus every
    /// existing deck must not exceed what the collection holds. On failure
    /// the error lists every short card and the deck list is unchanged.
    pub fn add_deck(&mut self, deck: Deck) -> Result<()> {
        let shortfalls = self.shortfalls(deck.all_cards());
        if !shortfalls.is_empty() {
            warn!(
                "Rejected deck '{}': {} card(s) not in collection",
                deck.name(),
                shortfalls.len()
            );
            return Err(TcgError::CardNotInCollection(shortfalls));
        }

        debug!(
            "Added deck '{}' with {} card(s)",
            deck.name(),
            deck.all_cards_count()
        );
        self.decks.push(deck);
        Ok(())
    }

    /// Admit several decks at once, all or nothing
    ///
    /// With `DeckSource::NewCards` each deck's cards are added to the
    /// collection first, so the decks always fit. With
    /// `DeckSource::FromCollection` the decks are validated cumulatively and
    /// the first deck that doesn't fit rejects the whole batch.
    pub fn add_decks<I>(&mut self, decks: I, source: DeckSource) -> Result<()>
    where
        I: IntoIterator<Item = Deck>,
    {
        let mut staged = self.clone();
        for deck in decks {
            if source == DeckSource::NewCards {
                staged.add_cards(deck.all_cards());
            }
            staged.add_deck(deck)?;
        }
        *self = staged;
        Ok(())
    }

    /// Remove a deck, releasing its cards back to the free pool
    pub fn remove_deck(&mut self, index: usize) -> Option<Deck> {
        if index >= self.decks.len() {
            return None;
        }
        let deck = self.decks.remove(index);
        debug!("Removed deck '{}'", deck.name());
        Some(deck)
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn deck_count(&self) -> usize {
        self.decks.len()
    }

    /// First deck with the given name (names need not be unique)
    pub fn deck(&self, name: &str) -> Option<&Deck> {
        self.decks.iter().find(|d| d.name() == name)
    }

    /// Mutable access for drawing and resetting; composition stays fixed
    pub fn deck_mut(&mut self, name: &str) -> Option<&mut Deck> {
        self.decks.iter_mut().find(|d| d.name() == name)
    }

    pub fn deck_at_mut(&mut self, index: usize) -> Option<&mut Deck> {
        self.decks.get_mut(index)
    }

    /// Sum of every deck's full composition
    pub fn allocated_cards(&self) -> CardMultiset {
        let mut allocated = CardMultiset::new();
        for deck in &self.decks {
            allocated.merge(deck.all_cards());
        }
        allocated
    }

    /// Cards not allocated to any deck
    ///
    /// Computed from deck compositions, not remaining cards: drawing from a
    /// deck doesn't free a card, removing the deck does.
    pub fn free_cards(&self) -> CardMultiset {
        self.all_cards.saturating_difference(&self.allocated_cards())
    }

    /// Cards in `demand` that `demand` plus every existing deck would over-claim
    ///
    /// Demand is summed in `u64` so decks holding `u32::MAX` copies between
    /// them are still compared exactly.
    fn shortfalls(&self, demand: &CardMultiset) -> Vec<Shortfall> {
        let mut shortfalls: Vec<Shortfall> = demand
            .iter()
            .filter_map(|(key, count)| {
                let allocated: u64 = self
                    .decks
                    .iter()
                    .map(|d| u64::from(d.all_cards().count(key)))
                    .sum();
                let wanted = u64::from(count) + allocated;
                let held = u64::from(self.all_cards.count(key));
                (wanted > held).then(|| Shortfall {
                    key: key.clone(),
                    shortfall: u32::try_from(wanted - held).unwrap_or(u32::MAX),
                })
            })
            .collect();
        shortfalls.sort_by(|a, b| a.key.cmp(&b.key));
        shortfalls
    }
}
