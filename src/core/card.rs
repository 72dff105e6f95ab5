//! Card identity used as the multiset key

use crate::core::types::fold_name;
use crate::core::{CardGame, CardName, CardNumber, SetCode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one distinct card
///
/// Equality, hashing and ordering are structural: two keys built from the
/// same game, name, set and number are the same card, so counts accumulate
/// per logical card rather than per value constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardKey {
    pub game: CardGame,
    pub name: CardName,
    pub set: SetCode,
    pub number: CardNumber,
}

impl CardKey {
    pub fn new(
        game: CardGame,
        name: impl Into<CardName>,
        set: impl Into<SetCode>,
        number: impl Into<CardNumber>,
    ) -> Self {
        CardKey {
            game,
            name: name.into(),
            set: set.into(),
            number: number.into(),
        }
    }

    /// A key with only a name, for catalogs that don't track printings
    pub fn named(game: CardGame, name: impl Into<CardName>) -> Self {
        CardKey::new(game, name, "", "")
    }

    /// Case- and accent-insensitive name match
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.folded() == fold_name(name)
    }
}

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        match (self.set.is_empty(), self.number.is_empty()) {
            (true, true) => Ok(()),
            (false, true) => write!(f, " [{}]", self.set),
            (true, false) => write!(f, " [#{}]", self.number),
            (false, false) => write!(f, " [{} #{}]", self.set, self.number),
        }
    }
}
