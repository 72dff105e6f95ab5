//! Multiset of cards: how many copies of each distinct card

use crate::core::CardKey;
use crate::{Result, TcgError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One entry of a serialized multiset
///
/// The key fields are flattened so the wire shape is
/// `{"game", "name", "set", "number", "count"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCount {
    #[serde(flatten)]
    pub key: CardKey,
    pub count: u32,
}

/// Mapping from card to a positive number of copies
///
/// An entry never holds a count of zero: removing the last copy deletes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<CardCount>", try_from = "Vec<CardCount>")]
pub struct CardMultiset {
    cards: FxHashMap<CardKey, u32>,
}

impl CardMultiset {
    pub fn new() -> Self {
        CardMultiset {
            cards: FxHashMap::default(),
        }
    }

    /// Add `count` copies of `key`
    ///
    /// Adding zero copies is a no-op and does not create an entry. A count
    /// saturates at `u32::MAX`.
    pub fn add(&mut self, key: CardKey, count: u32) {
        if count == 0 {
            return;
        }
        match self.cards.get_mut(&key) {
            Some(existing) => *existing = existing.saturating_add(count),
            None => {
                self.cards.insert(key, count);
            }
        }
    }

    /// Remove `count` copies of `key`
    ///
    /// Fails with `InsufficientQuantity` if fewer than `count` copies are
    /// stored, leaving the multiset untouched.
    pub fn remove(&mut self, key: &CardKey, count: u32) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        let available = self.count(key);
        if count > available {
            return Err(TcgError::InsufficientQuantity {
                key: key.clone(),
                requested: count,
                available,
            });
        }
        if count == available {
            self.cards.remove(key);
        } else if let Some(existing) = self.cards.get_mut(key) {
            *existing -= count;
        }
        Ok(())
    }

    /// Copies of `key` held (zero if absent)
    pub fn count(&self, key: &CardKey) -> u32 {
        self.cards.get(key).copied().unwrap_or(0)
    }

    pub fn contains(&self, key: &CardKey) -> bool {
        self.cards.contains_key(key)
    }

    /// Total number of physical cards
    pub fn total(&self) -> usize {
        self.cards.values().map(|&c| c as usize).sum()
    }

    /// Number of distinct cards
    pub fn distinct(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over `(card, count)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&CardKey, u32)> {
        self.cards.iter().map(|(k, &c)| (k, c))
    }

    pub fn keys(&self) -> impl Iterator<Item = &CardKey> {
        self.cards.keys()
    }

    /// Entries sorted by card key
    pub fn entries(&self) -> Vec<CardCount> {
        let mut entries: Vec<CardCount> = self
            .cards
            .iter()
            .map(|(key, &count)| CardCount {
                key: key.clone(),
                count,
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries
    }

    /// Flatten to one element per physical card, grouped and ordered by key
    pub fn to_list(&self) -> Vec<CardKey> {
        let mut list = Vec::with_capacity(self.total());
        for entry in self.entries() {
            for _ in 0..entry.count {
                list.push(entry.key.clone());
            }
        }
        list
    }

    /// Build a multiset from a flat list, one element per physical card
    pub fn from_list<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = CardKey>,
    {
        cards.into_iter().collect()
    }

    /// Add every card of `other` into this multiset
    pub fn merge(&mut self, other: &CardMultiset) {
        for (key, count) in other.iter() {
            self.add(key.clone(), count);
        }
    }

    /// True if every card of `self` is held at least as many times in `other`
    pub fn is_subset_of(&self, other: &CardMultiset) -> bool {
        self.iter().all(|(key, count)| count <= other.count(key))
    }

    /// `self - other` per card, dropping cards that would reach zero or less
    pub fn saturating_difference(&self, other: &CardMultiset) -> CardMultiset {
        let cards = self
            .cards
            .iter()
            .filter_map(|(key, &count)| {
                let left = count.saturating_sub(other.count(key));
                (left > 0).then(|| (key.clone(), left))
            })
            .collect();
        CardMultiset { cards }
    }

    /// Every card whose name matches, ignoring case and accents
    pub fn find_by_name(&self, name: &str) -> Vec<(&CardKey, u32)> {
        let mut found: Vec<_> = self.iter().filter(|(k, _)| k.matches_name(name)).collect();
        found.sort_by(|a, b| a.0.cmp(b.0));
        found
    }
}

impl FromIterator<CardKey> for CardMultiset {
    fn from_iter<I: IntoIterator<Item = CardKey>>(iter: I) -> Self {
        let mut multiset = CardMultiset::new();
        for key in iter {
            multiset.add(key, 1);
        }
        multiset
    }
}

impl FromIterator<(CardKey, u32)> for CardMultiset {
    fn from_iter<I: IntoIterator<Item = (CardKey, u32)>>(iter: I) -> Self {
        let mut multiset = CardMultiset::new();
        multiset.extend(iter);
        multiset
    }
}

impl Extend<(CardKey, u32)> for CardMultiset {
    fn extend<I: IntoIterator<Item = (CardKey, u32)>>(&mut self, iter: I) {
        for (key, count) in iter {
            self.add(key, count);
        }
    }
}

impl From<CardMultiset> for Vec<CardCount> {
    fn from(multiset: CardMultiset) -> Self {
        multiset.entries()
    }
}

impl TryFrom<Vec<CardCount>> for CardMultiset {
    type Error = TcgError;

    /// Repeated keys are summed; a zero count or a sum past `u32::MAX` is
    /// rejected
    fn try_from(entries: Vec<CardCount>) -> Result<Self> {
        let mut multiset = CardMultiset::new();
        for entry in entries {
            if entry.count == 0 {
                return Err(TcgError::InvalidSource(format!(
                    "{} has a count of zero",
                    entry.key
                )));
            }
            let count = multiset
                .count(&entry.key)
                .checked_add(entry.count)
                .ok_or_else(|| {
                    TcgError::InvalidSource(format!("count overflow for {}", entry.key))
                })?;
            multiset.cards.insert(entry.key, count);
        }
        Ok(multiset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardGame;

    fn card(name: &str) -> CardKey {
        CardKey::new(CardGame::Pokemon, name, "BS", "1")
    }

    #[test]
    fn test_add_accumulates() {
        let mut cards = CardMultiset::new();
        cards.add(card("Pikachu"), 2);
        cards.add(card("Pikachu"), 1);
        cards.add(card("Raichu"), 1);

        assert_eq!(cards.count(&card("Pikachu")), 3);
        assert_eq!(cards.distinct(), 2);
        assert_eq!(cards.total(), 4);
    }

    #[test]
    fn test_add_zero_creates_nothing() {
        let mut cards = CardMultiset::new();
        cards.add(card("Pikachu"), 0);
        assert!(cards.is_empty());
        assert!(!cards.contains(&card("Pikachu")));
    }

    #[test]
    fn test_remove_deletes_entry_at_zero() {
        let mut cards = CardMultiset::new();
        cards.add(card("Pikachu"), 3);

        cards.remove(&card("Pikachu"), 2).unwrap();
        assert_eq!(cards.count(&card("Pikachu")), 1);

        cards.remove(&card("Pikachu"), 1).unwrap();
        assert!(!cards.contains(&card("Pikachu")));
        assert!(cards.is_empty());
    }

    #[test]
    fn test_remove_too_many_fails_without_mutation() {
        let mut cards = CardMultiset::new();
        cards.add(card("Pikachu"), 2);

        let err = cards.remove(&card("Pikachu"), 5).unwrap_err();
        match &err {
            TcgError::InsufficientQuantity {
                key,
                requested,
                available,
            } => {
                assert_eq!(key, &card("Pikachu"));
                assert_eq!(*requested, 5);
                assert_eq!(*available, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.quantity_shortfall(), Some(3));
        assert_eq!(cards.count(&card("Pikachu")), 2);

        // Absent key: everything is missing
        let err = cards.remove(&card("Mew"), 1).unwrap_err();
        assert_eq!(err.quantity_shortfall(), Some(1));
    }

    #[test]
    fn test_list_round_trip() {
        let mut cards = CardMultiset::new();
        cards.add(card("Pikachu"), 3);
        cards.add(card("Raichu"), 1);

        let list = cards.to_list();
        assert_eq!(list.len(), 4);
        assert_eq!(list.iter().filter(|k| **k == card("Pikachu")).count(), 3);

        assert_eq!(CardMultiset::from_list(list), cards);
    }

    #[test]
    fn test_saturating_difference_is_pure() {
        let mut all = CardMultiset::new();
        all.add(card("Pikachu"), 3);
        all.add(card("Raichu"), 2);

        let mut used = CardMultiset::new();
        used.add(card("Pikachu"), 2);
        used.add(card("Raichu"), 2);
        used.add(card("Mew"), 1);

        let free = all.saturating_difference(&used);
        assert_eq!(free.count(&card("Pikachu")), 1);
        assert!(!free.contains(&card("Raichu")));
        assert!(!free.contains(&card("Mew")));

        assert_eq!(all.count(&card("Pikachu")), 3);
        assert_eq!(all.count(&card("Raichu")), 2);
    }

    #[test]
    fn test_subset() {
        let big: CardMultiset = vec![(card("Pikachu"), 3), (card("Raichu"), 1)]
            .into_iter()
            .collect();
        let small: CardMultiset = vec![(card("Pikachu"), 2)].into_iter().collect();

        assert!(small.is_subset_of(&big));
        assert!(!big.is_subset_of(&small));
        assert!(CardMultiset::new().is_subset_of(&small));
    }

    #[test]
    fn test_find_by_name() {
        let mut cards = CardMultiset::new();
        cards.add(CardKey::new(CardGame::Pokemon, "Pikachu", "BS", "58"), 2);
        cards.add(CardKey::new(CardGame::Pokemon, "Pikachu", "JU", "60"), 1);
        cards.add(card("Raichu"), 1);

        let found = cards.find_by_name("PIKACHU");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].1, 2);
        assert_eq!(found[1].1, 1);
    }

    #[test]
    fn test_serialized_shape() {
        let mut cards = CardMultiset::new();
        cards.add(CardKey::new(CardGame::Pokemon, "Pikachu", "BS", "58"), 2);

        let json = serde_json::to_value(&cards).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"game": "Pokemon", "name": "Pikachu", "set": "BS", "number": "58", "count": 2}
            ])
        );

        let back: CardMultiset = serde_json::from_value(json).unwrap();
        assert_eq!(back, cards);
    }

    #[test]
    fn test_deserialize_rejects_zero_and_sums_duplicates() {
        let zero = r#"[{"game": "Pokemon", "name": "Mew", "set": "", "number": "", "count": 0}]"#;
        assert!(serde_json::from_str::<CardMultiset>(zero).is_err());

        let dup = r#"[
            {"game": "Pokemon", "name": "Mew", "set": "", "number": "", "count": 1},
            {"game": "Pokemon", "name": "Mew", "set": "", "number": "", "count": 2}
        ]"#;
        let cards: CardMultiset = serde_json::from_str(dup).unwrap();
        assert_eq!(cards.count(&CardKey::named(CardGame::Pokemon, "Mew")), 3);
    }

    #[test]
    fn test_add_saturates_at_max() {
        let mut cards = CardMultiset::new();
        cards.add(card("Pikachu"), u32::MAX);
        cards.add(card("Pikachu"), 1);
        assert_eq!(cards.count(&card("Pikachu")), u32::MAX);

        let mut merged = cards.clone();
        merged.merge(&cards);
        assert_eq!(merged.count(&card("Pikachu")), u32::MAX);
    }

    #[test]
    fn test_deserialize_rejects_count_overflow() {
        let huge = r#"[
            {"game": "Pokemon", "name": "Mew", "set": "", "number": "", "count": 4294967295},
            {"game": "Pokemon", "name": "Mew", "set": "", "number": "", "count": 1}
        ]"#;
        let err = CardMultiset::try_from(
            serde_json::from_str::<Vec<CardCount>>(huge).unwrap(),
        )
        .unwrap_err();
        match err {
            TcgError::InvalidSource(message) => {
                assert!(message.contains("count overflow for Mew"), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(serde_json::from_str::<CardMultiset>(huge).is_err());

        let blob = format!(r#"{{"allCards": {huge}, "decks": []}}"#);
        assert!(matches!(
            crate::Collection::from_json(&blob),
            Err(TcgError::InvalidSource(_))
        ));
    }
}
