//! End-to-end collection tests
//!
//! Drive the collection the way a catalog client would: ingest fetched card
//! counts, carve decks out of them, draw, and inspect what is left free.

use similar_asserts::assert_eq;
use tcg_collection::core::{seeded_rng, CardGame, CardKey};
use tcg_collection::inventory::{CardMultiset, Collection, CollectionState, Deck};
use tcg_collection::loader::DeckListLoader;
use tcg_collection::{Result, Shortfall, TcgError};

fn pokemon(name: &str, set: &str, number: &str) -> CardKey {
    CardKey::new(CardGame::Pokemon, name, set, number)
}

/// Card counts as a catalog fetch would hand them over
fn fetched_cards() -> Vec<(CardKey, u32)> {
    vec![
        (pokemon("Pikachu", "BS", "58"), 4),
        (pokemon("Raichu", "BS", "14"), 2),
        (pokemon("Lightning Energy", "BS", "100"), 20),
        (pokemon("Bill", "BS", "91"), 4),
    ]
}

#[test]
fn test_collection_lifecycle() -> Result<()> {
    let mut collection = Collection::new();
    assert_eq!(collection.state(), CollectionState::Empty);

    let fetched: CardMultiset = fetched_cards().into_iter().collect();
    collection.add_cards(&fetched);
    assert_eq!(collection.state(), CollectionState::Populated);
    assert_eq!(collection.all_cards_count(), 30);

    // A second fetch of the same printing accumulates on the same key
    collection.add_card(pokemon("Pikachu", "BS", "58"), 1);
    assert_eq!(collection.all_cards().count(&pokemon("Pikachu", "BS", "58")), 5);

    let list = DeckListLoader::parse(
        "[metadata]\nName=Zap\n[Main]\n4 Pikachu|BS|58\n2 Raichu|BS|14\n12 Lightning Energy|BS|100\n",
        CardGame::Pokemon,
    )?;
    collection.add_deck(list.into_deck("unnamed"))?;

    let free = collection.free_cards();
    assert_eq!(free.count(&pokemon("Pikachu", "BS", "58")), 1);
    assert!(!free.contains(&pokemon("Raichu", "BS", "14")));
    assert_eq!(free.count(&pokemon("Lightning Energy", "BS", "100")), 8);
    assert_eq!(free.count(&pokemon("Bill", "BS", "91")), 4);

    let mut rng = seeded_rng(2024);
    let deck = collection.deck_mut("Zap").expect("deck was added");
    let hand = deck.draw(7, &mut rng)?;
    assert_eq!(hand.total(), 7);
    assert_eq!(deck.remaining_count(), 11);

    // Drawing doesn't release anything to the free pool
    assert_eq!(collection.free_cards(), free);

    Ok(())
}

#[test]
fn test_rejected_deck_lists_every_short_card() {
    let fetched: CardMultiset = fetched_cards().into_iter().collect();
    let mut collection = Collection::with_cards(fetched);

    collection
        .add_deck(Deck::new(
            "first",
            vec![(pokemon("Pikachu", "BS", "58"), 3)].into_iter().collect(),
        ))
        .unwrap();

    let greedy: CardMultiset = vec![
        (pokemon("Pikachu", "BS", "58"), 2),
        (pokemon("Raichu", "BS", "14"), 2),
        (pokemon("Mewtwo", "BS", "10"), 1),
        (pokemon("Bill", "BS", "91"), 6),
    ]
    .into_iter()
    .collect();

    let err = collection.add_deck(Deck::new("greedy", greedy)).unwrap_err();
    let TcgError::CardNotInCollection(shortfalls) = err else {
        panic!("expected CardNotInCollection");
    };

    assert_eq!(
        shortfalls,
        vec![
            Shortfall {
                key: pokemon("Bill", "BS", "91"),
                shortfall: 2
            },
            Shortfall {
                key: pokemon("Mewtwo", "BS", "10"),
                shortfall: 1
            },
            Shortfall {
                key: pokemon("Pikachu", "BS", "58"),
                shortfall: 1
            },
        ]
    );
    assert_eq!(collection.deck_count(), 1);
}

#[test]
fn test_draw_until_empty_then_reset() -> Result<()> {
    let cards: CardMultiset = fetched_cards().into_iter().collect();
    let mut collection = Collection::with_cards(cards.clone());
    collection.add_deck(Deck::new("everything", cards.clone()))?;

    let mut rng = seeded_rng(11);
    let deck = collection.deck_at_mut(0).expect("deck was added");

    let mut drawn = CardMultiset::new();
    while !deck.is_exhausted() {
        let hand = deck.draw(deck.remaining_count().min(7), &mut rng)?;
        drawn.merge(&hand);
    }
    assert_eq!(drawn, cards);

    let err = deck.draw(1, &mut rng).unwrap_err();
    assert!(matches!(
        err,
        TcgError::InsufficientCards {
            requested: 1,
            remaining: 0
        }
    ));

    deck.reset();
    assert_eq!(deck.remaining_cards(), &cards);
    Ok(())
}
