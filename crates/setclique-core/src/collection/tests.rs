//! Tests for collection construction.

use super::*;

#[test]
fn test_sampled_cards_are_unique_and_in_range() {
    let coll = Collection::with_seed(4, 3, 40, 7).unwrap();
    assert_eq!(coll.len(), 40);

    let unique: HashSet<&Card> = coll.iter().collect();
    assert_eq!(unique.len(), 40);

    for card in &coll {
        assert_eq!(card.dimensions(), 4);
        assert!(card.values().iter().all(|&v| v < 3));
    }
}

#[test]
fn test_full_deck() {
    let coll = Collection::with_seed(2, 3, 9, 1).unwrap();
    let mut cards = coll.as_slice().to_vec();
    cards.sort();
    let expected: Vec<Card> = {
        let mut all: Vec<Card> = (0..9).map(|i| Card::from_index(i, 2, 3)).collect();
        all.sort();
        all
    };
    assert_eq!(cards, expected);
}

#[test]
fn test_card_count_exceeds_deck() {
    let err = Collection::new(2, 3, 10).unwrap_err();
    assert!(matches!(err, SetError::InvalidArgument(_)));
}

#[test]
fn test_zero_shape_rejected() {
    assert!(matches!(
        Collection::new(0, 3, 0),
        Err(SetError::InvalidArgument(_))
    ));
    assert!(matches!(
        Collection::new(3, 0, 0),
        Err(SetError::InvalidArgument(_))
    ));
}

#[test]
fn test_empty_collection() {
    let coll = Collection::new(4, 3, 0).unwrap();
    assert!(coll.is_empty());
    assert_eq!(coll.iter().count(), 0);
}

#[test]
fn test_seed_is_deterministic() {
    let a = Collection::with_seed(4, 3, 15, 99).unwrap();
    let b = Collection::with_seed(4, 3, 15, 99).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_huge_deck_uses_rejection_sampling() {
    // 1000^30 does not fit in usize.
    let coll = Collection::with_seed(30, 1000, 20, 5).unwrap();
    assert_eq!(coll.deck_size(), None);
    assert_eq!(coll.len(), 20);
    let unique: HashSet<&Card> = coll.iter().collect();
    assert_eq!(unique.len(), 20);
    assert!(coll.iter().all(|c| c.values().iter().all(|&v| v < 1000)));
}

#[test]
fn test_from_cards_validation() {
    let ok = Collection::from_cards(2, 3, [Card::new([0, 0]), Card::new([1, 1])]).unwrap();
    assert_eq!(ok.len(), 2);
    assert_eq!(ok[1], Card::new([1, 1]));

    let wrong_dims = Collection::from_cards(2, 3, [Card::new([0, 0, 0])]);
    assert!(matches!(wrong_dims, Err(SetError::InvalidArgument(_))));

    let out_of_range = Collection::from_cards(2, 3, [Card::new([0, 3])]);
    assert!(matches!(out_of_range, Err(SetError::InvalidArgument(_))));

    let duplicate = Collection::from_cards(2, 3, [Card::new([1, 2]), Card::new([1, 2])]);
    assert!(matches!(duplicate, Err(SetError::InvalidArgument(_))));
}

#[cfg(feature = "serde")]
mod serde_tests {
    use crate::Collection;

    #[test]
    fn test_deserialize_checks_cards() {
        let coll = Collection::with_seed(4, 3, 6, 2).unwrap();
        let json = serde_json::to_string(&coll).unwrap();
        assert_eq!(serde_json::from_str::<Collection>(&json).unwrap(), coll);

        let duplicate = r#"{"dimensions":2,"dimension_range":3,"cards":[{"values":[0,1]},{"values":[0,1]}]}"#;
        assert!(serde_json::from_str::<Collection>(duplicate).is_err());

        let short = r#"{"dimensions":2,"dimension_range":3,"cards":[{"values":[0]}]}"#;
        assert!(serde_json::from_str::<Collection>(short).is_err());

        let out_of_range = r#"{"dimensions":2,"dimension_range":3,"cards":[{"values":[0,3]}]}"#;
        assert!(serde_json::from_str::<Collection>(out_of_range).is_err());
    }
}
