//! Named decks with draw-without-replacement state

use crate::core::CardKey;
use crate::inventory::CardMultiset;
use crate::{Result, TcgError};
use log::debug;
use rand::Rng;

/// A named sub-allocation of a collection with its own draw pile
///
/// `all_cards` is fixed at creation. `remaining_cards` starts as an
/// independent copy and shrinks as cards are drawn; it is always a
/// sub-multiset of `all_cards`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    name: String,
    all_cards: CardMultiset,
    remaining_cards: CardMultiset,
}

impl Deck {
    /// Create a deck whose composition is `cards`
    pub fn new(name: impl Into<String>, cards: CardMultiset) -> Self {
        let remaining_cards = cards.clone();
        Deck {
            name: name.into(),
            all_cards: cards,
            remaining_cards,
        }
    }

    /// Create a deck from a flat card list; repeated cards are counted
    pub fn from_cards<I>(name: impl Into<String>, cards: I) -> Self
    where
        I: IntoIterator<Item = CardKey>,
    {
        Deck::new(name, CardMultiset::from_list(cards))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The deck's full composition
    pub fn all_cards(&self) -> &CardMultiset {
        &self.all_cards
    }

    /// Cards not yet drawn since the last reset
    pub fn remaining_cards(&self) -> &CardMultiset {
        &self.remaining_cards
    }

    pub fn all_cards_count(&self) -> usize {
        self.all_cards.total()
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining_cards.total()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining_cards.is_empty()
    }

    /// Draw `count` cards at random without replacement
    ///
    /// Every physical copy left in the deck is equally likely on each step,
    /// and a copy drawn earlier in the same call is never drawn again.
    /// Drawn cards leave the deck until `reset`. Fails with
    /// `InsufficientCards` if fewer than `count` cards remain, in which case
    /// the deck is unchanged.
    pub fn draw(&mut self, count: usize, rng: &mut impl Rng) -> Result<CardMultiset> {
        let remaining = self.remaining_count();
        if count > remaining {
            return Err(TcgError::InsufficientCards {
                requested: count,
                remaining,
            });
        }

        let mut pool = self.remaining_cards.to_list();
        let mut drawn = CardMultiset::new();
        for _ in 0..count {
            let index = rng.gen_range(0..pool.len());
            drawn.add(pool.swap_remove(index), 1);
        }

        self.remaining_cards = CardMultiset::from_list(pool);
        debug!(
            "Drew {} card(s) from deck '{}', {} remaining",
            count,
            self.name,
            self.remaining_count()
        );
        Ok(drawn)
    }

    /// Draw a single card
    pub fn draw_one(&mut self, rng: &mut impl Rng) -> Result<CardKey> {
        self.draw(1, rng)?
            .to_list()
            .pop()
            .ok_or(TcgError::InsufficientCards {
                requested: 1,
                remaining: 0,
            })
    }

    /// Put every drawn card back
    pub fn reset(&mut self) {
        self.remaining_cards = self.all_cards.clone();
        debug!("Reset deck '{}' to {} cards", self.name, self.all_cards_count());
    }
}
