//! Card ordering, classification, and play comparison tests.

use core::cmp::Ordering;

use gdrs::{
    Card, CardError, CombinationKind, Rank, RawCard, Suit, beats, beats_raw, classify,
    classify_raw, compare, compare_raw, parse_cards, sanitize,
};

fn cards(tokens: &str) -> Vec<Card> {
    parse_cards(tokens).unwrap()
}

fn kind(tokens: &str) -> Option<CombinationKind> {
    classify(&cards(tokens)).map(|combo| combo.kind())
}

#[test]
fn rank_values_follow_guandan_order() {
    let values: Vec<u8> = Rank::ORDINARY.iter().map(|rank| rank.value()).collect();
    assert_eq!(values, (3..=15).collect::<Vec<u8>>());

    let ace = Card::new(Rank::Ace, Suit::Spades).unwrap();
    let two = Card::new(Rank::Two, Suit::Clubs).unwrap();
    assert!(two.value() > ace.value());
    assert!(Card::BLACK_JOKER.value() > two.value());
    assert!(Card::RED_JOKER.value() > Card::BLACK_JOKER.value());
}

#[test]
fn compare_orders_by_value_then_suit() {
    let three_spades = Card::new(Rank::Three, Suit::Spades).unwrap();
    let three_clubs = Card::new(Rank::Three, Suit::Clubs).unwrap();
    let four_spades = Card::new(Rank::Four, Suit::Spades).unwrap();

    assert_eq!(compare(&three_spades, &three_clubs), Ordering::Less);
    assert_eq!(compare(&three_clubs, &four_spades), Ordering::Less);
    assert_eq!(compare(&three_spades, &three_spades), Ordering::Equal);
    assert_eq!(compare(&Card::RED_JOKER, &Card::BLACK_JOKER), Ordering::Greater);

    let mut hand = cards("2C RJ 3D AS 3S BJ 10H");
    hand.sort();
    let sorted: Vec<String> = hand.iter().map(ToString::to_string).collect();
    assert_eq!(sorted, ["3S", "3D", "10H", "AS", "2C", "BJ", "RJ"]);
}

#[test]
fn card_construction_rejects_mismatched_jokers() {
    assert_eq!(
        Card::new(Rank::Joker, Suit::Spades),
        Err(CardError::InvalidPairing)
    );
    assert_eq!(
        Card::new(Rank::King, Suit::RedJoker),
        Err(CardError::InvalidPairing)
    );
    assert_eq!(
        Card::new(Rank::Joker, Suit::RedJoker),
        Ok(Card::RED_JOKER)
    );
}

#[test]
fn card_parsing_and_display() {
    assert_eq!("10h".parse::<Card>().unwrap().to_string(), "10H");
    assert_eq!("TH".parse::<Card>().unwrap().to_string(), "10H");
    assert_eq!("q♠".parse::<Card>().unwrap().to_string(), "QS");
    assert_eq!("rj".parse::<Card>().unwrap(), Card::RED_JOKER);
    assert_eq!("BJ".parse::<Card>().unwrap(), Card::BLACK_JOKER);

    assert_eq!("1S".parse::<Card>(), Err(CardError::Parse));
    assert_eq!("KX".parse::<Card>(), Err(CardError::Parse));
    assert_eq!("".parse::<Card>(), Err(CardError::Parse));
    assert_eq!(parse_cards("3S, 4S oops"), Err(CardError::Parse));
    assert_eq!(parse_cards("  ").unwrap(), Vec::new());
}

#[test]
fn singles_pairs_and_triples() {
    assert_eq!(kind("7D"), Some(CombinationKind::Single));
    assert_eq!(kind("RJ"), Some(CombinationKind::Single));

    assert_eq!(kind("QS QD"), Some(CombinationKind::Pair));
    assert_eq!(kind("QS KS"), None);
    assert_eq!(kind("RJ RJ"), Some(CombinationKind::Pair));
    assert_eq!(kind("BJ BJ"), Some(CombinationKind::Pair));
    assert_eq!(kind("RJ BJ"), None);

    assert_eq!(kind("3S 3H 3D"), Some(CombinationKind::ThreeOfAKind));
    assert_eq!(kind("3S 3H 4D"), None);
    assert_eq!(kind("RJ RJ BJ"), None);
    assert_eq!(kind("RJ RJ RJ"), None);
}

#[test]
fn straights_and_full_houses() {
    assert_eq!(kind("3S 4H 5D 6C 7S"), Some(CombinationKind::Straight));
    assert_eq!(kind("7S 3S 5D 4H 6C"), Some(CombinationKind::Straight));
    assert_eq!(kind("10S JH QD KC AS"), Some(CombinationKind::Straight));
    assert_eq!(kind("JH QD KC AS 2S"), Some(CombinationKind::Straight));
    assert_eq!(kind("AS 2H 3D 4C 5S"), None);
    assert_eq!(kind("KS AH 2D 3C 4S"), None);
    assert_eq!(kind("JH QD KC AS BJ"), None);
    assert_eq!(kind("3S 4H 5D 6C 8S"), None);

    assert_eq!(kind("7S 7H 7D 9S 9H"), Some(CombinationKind::FullHouse));
    assert_eq!(kind("9S 7H 9D 7S 7D"), Some(CombinationKind::FullHouse));
    assert_eq!(kind("7S 7H 7D BJ BJ"), None);
    assert_eq!(kind("RJ RJ BJ 9S 9H"), None);
    assert_eq!(kind("7S 7H 9D 9S 3H"), None);
}

#[test]
fn bombs() {
    assert_eq!(kind("8S 8H 8D 8C"), Some(CombinationKind::FourOfAKind));
    assert_eq!(kind("BJ RJ BJ RJ"), Some(CombinationKind::FourJokers));
    assert_eq!(kind("8S 8H 8D 9C"), None);

    assert_eq!(kind("5S 6S 7S 8S 9S"), Some(CombinationKind::StraightFlush));
    assert_eq!(kind("JH QH KH AH 2H"), Some(CombinationKind::StraightFlush));
    assert_eq!(kind("AS 2S 3S 4S 5S"), None);

    assert_eq!(kind("9S 9H 9D 9C 9S"), Some(CombinationKind::FiveOfAKind));
    assert_eq!(kind("9S 9H 9D 9C 9S 9H"), Some(CombinationKind::SixOfAKind));
    assert_eq!(
        kind("9S 9H 9D 9C 9S 9H 9D"),
        Some(CombinationKind::SevenOfAKind)
    );
    assert_eq!(
        kind("9S 9H 9D 9C 9S 9H 9D 9C"),
        Some(CombinationKind::EightOfAKind)
    );
    assert_eq!(kind("9S 9H 9D 9C 9S 9H 9D 8C"), None);
    assert_eq!(kind("9S 9H 9D 9C 9S 9H 9D 9C 9S"), None);
}

#[test]
fn unrecognised_sizes() {
    assert_eq!(kind(""), None);
    assert_eq!(kind("3S 4S 5S 6S"), None);
    assert_eq!(kind("3S 4S 5S 6S 7S 8S"), None);
}

#[test]
fn combination_keeps_sorted_cards() {
    let combo = classify(&cards("9S 7H 9D 7S 7D")).unwrap();
    assert_eq!(combo.len(), 5);
    assert_eq!(combo.cards()[0].rank(), Rank::Seven);
    assert_eq!(combo.highest().map(Card::rank), Some(Rank::Nine));
    assert!(!combo.is_bomb());
}

#[test]
fn kind_names_and_bomb_priority() {
    assert_eq!(CombinationKind::ThreeOfAKind.name(), "THREE_OF_A_KIND");
    assert_eq!(CombinationKind::FourJokers.to_string(), "FOUR_JOKERS");
    assert_eq!(CombinationKind::FullHouse.bomb_priority(), None);

    let bombs = [
        CombinationKind::FourOfAKind,
        CombinationKind::FiveOfAKind,
        CombinationKind::StraightFlush,
        CombinationKind::SixOfAKind,
        CombinationKind::SevenOfAKind,
        CombinationKind::EightOfAKind,
        CombinationKind::FourJokers,
    ];
    for pair in bombs.windows(2) {
        assert!(pair[0].bomb_priority() < pair[1].bomb_priority());
    }
}

#[test]
fn empty_table_accepts_any_play() {
    assert!(beats(&cards("3S"), &[]));
    assert!(beats(&cards("3S 3H 3D"), &[]));
}

#[test]
fn same_kind_compares_highest_card() {
    assert!(beats(&cards("2S"), &cards("AS")));
    assert!(!beats(&cards("AS"), &cards("2S")));
    assert!(beats(&cards("RJ"), &cards("BJ")));
    assert!(beats(&cards("4S 5H 6D 7C 8S"), &cards("3S 4H 5D 6C 7S")));
    assert!(beats(&cards("KS KH KD"), &cards("QS QH QD")));

    // Suit never decides legality.
    assert!(!beats(&cards("7C 7D"), &cards("7S 7H")));
    assert!(!beats(&cards("7S 7H"), &cards("7C 7D")));
}

#[test]
fn full_house_compares_triplet() {
    let sevens = cards("7S 7H 7D 9S 9H");
    let kings = cards("KS KH KD 2S 2H");
    assert!(!beats(&sevens, &kings));
    assert!(beats(&kings, &sevens));

    // The pair does not matter, even when it outranks the triplet.
    assert!(beats(&cards("4S 4H 4D 3S 3H"), &cards("3C 3D 3S 2S 2H")));
}

#[test]
fn mismatched_kinds_never_beat() {
    assert!(!beats(&cards("3S 4H 5D 6C 7S"), &cards("4S 4H")));
    assert!(!beats(&cards("2S 2H"), &cards("3S")));
    assert!(!beats(&cards("AS AH AD"), &cards("3S 3H 3D 4S 4H")));
}

#[test]
fn bombs_beat_everything_else() {
    let four_threes = cards("3S 3H 3D 3C");
    assert!(beats(&four_threes, &cards("RJ")));
    assert!(beats(&four_threes, &cards("AS AH AD KS KH")));
    assert!(!beats(&cards("10S JH QD KC AS"), &four_threes));
}

#[test]
fn bomb_priority_beats_rank() {
    let four_twos = cards("2S 2H 2D 2C");
    let five_threes = cards("3S 3H 3D 3C 3S");
    let low_flush = cards("3H 4H 5H 6H 7H");

    assert!(!beats(&four_twos, &five_threes));
    assert!(beats(&five_threes, &four_twos));
    assert!(!beats(&four_twos, &low_flush));
    assert!(beats(&low_flush, &five_threes));
    assert!(beats(&cards("4S 4H 4D 4C 4S 4H"), &cards("JS QS KS AS 2S")));

    let four_jokers = cards("BJ BJ RJ RJ");
    let five_nines = cards("9S 9H 9D 9C 9S");
    assert!(beats(&four_jokers, &five_nines));
    assert!(beats(
        &four_jokers,
        &cards("AS AH AD AC AS AH AD AC")
    ));
}

#[test]
fn same_bomb_kind_compares_highest_card() {
    assert!(beats(&cards("KS KH KD KC"), &cards("5S 5H 5D 5C")));
    assert!(!beats(&cards("5S 5H 5D 5C"), &cards("KS KH KD KC")));
    assert!(beats(&cards("6D 7D 8D 9D 10D"), &cards("5S 6S 7S 8S 9S")));
    assert!(!beats(&cards("BJ BJ RJ RJ"), &cards("RJ BJ RJ BJ")));
}

#[test]
fn unclassifiable_sides_never_beat() {
    assert!(!beats(&cards("3S 4H"), &cards("3D")));
    assert!(!beats(&cards("2S"), &cards("3D 4H")));
    assert!(!beats(&cards("RJ BJ"), &cards("3S 3H")));
}

#[test]
fn raw_input_is_sanitised() {
    let king = RawCard::new(Some(Rank::King), Some(Suit::Hearts));
    let no_rank = RawCard::new(None, Some(Suit::Spades));
    let no_suit = RawCard::new(Some(Rank::Four), None);
    let bad_joker = RawCard::new(Some(Rank::Joker), Some(Suit::Clubs));

    assert_eq!(no_rank.validate(), Err(CardError::MissingRank));
    assert_eq!(no_suit.validate(), Err(CardError::MissingSuit));
    assert_eq!(bad_joker.validate(), Err(CardError::InvalidPairing));
    assert_eq!(Card::try_from(king).map(|c| c.rank()), Ok(Rank::King));
    assert_eq!(RawCard::from(Card::RED_JOKER).suit, Some(Suit::RedJoker));

    assert_eq!(compare_raw(&king, &no_rank), Ordering::Equal);
    assert_eq!(compare_raw(&bad_joker, &king), Ordering::Equal);
    assert_eq!(
        compare_raw(&RawCard::from(Card::RED_JOKER), &king),
        Ordering::Greater
    );

    assert_eq!(classify_raw(&[king, no_suit]), None);
    assert_eq!(
        classify_raw(&[king]).map(|combo| combo.kind()),
        Some(CombinationKind::Single)
    );

    let ace = RawCard::new(Some(Rank::Ace), Some(Suit::Clubs));
    assert!(beats_raw(&[ace], &[king]));
    assert!(!beats_raw(&[king], &[ace]));
    assert!(beats_raw(&[no_rank], &[]));
    assert!(beats_raw(&[], &[]));
    assert!(!beats_raw(&[no_suit], &[king]));
    assert!(!beats_raw(&[ace], &[bad_joker]));
    assert!(!beats_raw(&[RawCard::from(Card::RED_JOKER)], &[king, no_rank]));

    let clean = sanitize(&[king, no_rank, RawCard::from(Card::BLACK_JOKER), bad_joker]);
    assert_eq!(clean.len(), 2);
    assert_eq!(clean[1], Card::BLACK_JOKER);
}
