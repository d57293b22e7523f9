//! Combination classification and play comparison.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// The shape a set of played cards forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum CombinationKind {
    /// One card.
    Single,
    /// Two cards of the same rank. Jokers must also share a colour.
    Pair,
    /// Three cards of the same ordinary rank.
    ThreeOfAKind,
    /// Five consecutive ordinary ranks.
    Straight,
    /// Three of one ordinary rank and two of another.
    FullHouse,
    /// Four cards of the same ordinary rank.
    FourOfAKind,
    /// Five cards of the same rank.
    FiveOfAKind,
    /// Five consecutive ordinary ranks of one suit.
    StraightFlush,
    /// Six cards of the same rank.
    SixOfAKind,
    /// Seven cards of the same rank.
    SevenOfAKind,
    /// Eight cards of the same rank.
    EightOfAKind,
    /// All four jokers.
    FourJokers,
}

impl CombinationKind {
    /// Returns the bomb priority, or `None` for ordinary shapes.
    ///
    /// Bomb priority ranks bombs against each other regardless of the cards
    /// they are made of.
    #[must_use]
    pub const fn bomb_priority(self) -> Option<u8> {
        match self {
            Self::Single | Self::Pair | Self::ThreeOfAKind | Self::Straight | Self::FullHouse => {
                None
            }
            Self::FourOfAKind => Some(1),
            Self::FiveOfAKind => Some(2),
            Self::StraightFlush => Some(3),
            Self::SixOfAKind => Some(4),
            Self::SevenOfAKind => Some(5),
            Self::EightOfAKind => Some(6),
            Self::FourJokers => Some(7),
        }
    }

    /// Returns whether the kind is a bomb.
    #[must_use]
    pub const fn is_bomb(self) -> bool {
        self.bomb_priority().is_some()
    }

    /// Returns the tag name of the kind, e.g. `FULL_HOUSE`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "SINGLE",
            Self::Pair => "PAIR",
            Self::ThreeOfAKind => "THREE_OF_A_KIND",
            Self::Straight => "STRAIGHT",
            Self::FullHouse => "FULL_HOUSE",
            Self::FourOfAKind => "FOUR_OF_A_KIND",
            Self::FiveOfAKind => "FIVE_OF_A_KIND",
            Self::StraightFlush => "STRAIGHT_FLUSH",
            Self::SixOfAKind => "SIX_OF_A_KIND",
            Self::SevenOfAKind => "SEVEN_OF_A_KIND",
            Self::EightOfAKind => "EIGHT_OF_A_KIND",
            Self::FourJokers => "FOUR_JOKERS",
        }
    }
}

impl fmt::Display for CombinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified play.
///
/// Owns the exact cards it was classified from, sorted by the card ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Combination {
    kind: CombinationKind,
    cards: Vec<Card>,
    /// Rank value compared between plays: the triplet for a full house,
    /// the highest card otherwise.
    #[cfg_attr(feature = "serde", serde(skip))]
    key: u8,
}

impl Combination {
    /// Returns the kind of the combination.
    #[must_use]
    pub const fn kind(&self) -> CombinationKind {
        self.kind
    }

    /// Returns the cards, sorted ascending.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; a combination holds at least one card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the highest card.
    #[must_use]
    pub fn highest(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns whether the combination is a bomb.
    #[must_use]
    pub const fn is_bomb(&self) -> bool {
        self.kind.is_bomb()
    }

    /// Ordering key: bombs above everything, then bomb priority, then rank.
    fn strength(&self) -> (bool, u8, u8) {
        (
            self.is_bomb(),
            self.kind.bomb_priority().unwrap_or(0),
            self.key,
        )
    }

    /// Returns whether this combination strictly beats `table`.
    ///
    /// A bomb beats every non-bomb. Two bombs compare by bomb priority, then
    /// by highest card. Two non-bombs must be the same kind and compare by
    /// highest card (by triplet for full houses).
    #[must_use]
    pub fn beats(&self, table: &Self) -> bool {
        if !self.is_bomb() && !table.is_bomb() && self.kind != table.kind {
            return false;
        }
        self.strength() > table.strength()
    }
}

fn same_rank(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].rank() == w[1].rank())
}

fn same_suit(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].suit() == w[1].suit())
}

/// Consecutive ordinary rank values, no wraparound. Expects sorted input.
fn is_run(cards: &[Card]) -> bool {
    !cards.iter().any(Card::is_joker)
        && cards.windows(2).all(|w| w[0].value() + 1 == w[1].value())
}

/// Returns the triplet rank value if the sorted cards are a full house.
fn full_house_triplet(cards: &[Card]) -> Option<u8> {
    if cards.iter().any(Card::is_joker) {
        return None;
    }
    let [a, b, c, d, e] = cards else {
        return None;
    };
    if a.rank() == c.rank() && d.rank() == e.rank() && c.rank() != d.rank() {
        Some(a.value())
    } else if a.rank() == b.rank() && c.rank() == e.rank() && b.rank() != c.rank() {
        Some(c.value())
    } else {
        None
    }
}

fn kind_of(cards: &[Card]) -> Option<CombinationKind> {
    let uniform = same_rank(cards);
    let jokers = cards.iter().any(Card::is_joker);

    let kind = match cards.len() {
        1 => CombinationKind::Single,
        2 if uniform && (!jokers || same_suit(cards)) => CombinationKind::Pair,
        3 if uniform && !jokers => CombinationKind::ThreeOfAKind,
        4 if uniform && jokers => CombinationKind::FourJokers,
        4 if uniform => CombinationKind::FourOfAKind,
        5 if uniform => CombinationKind::FiveOfAKind,
        5 if is_run(cards) && same_suit(cards) => CombinationKind::StraightFlush,
        5 if full_house_triplet(cards).is_some() => CombinationKind::FullHouse,
        5 if is_run(cards) => CombinationKind::Straight,
        6 if uniform => CombinationKind::SixOfAKind,
        7 if uniform => CombinationKind::SevenOfAKind,
        8 if uniform => CombinationKind::EightOfAKind,
        _ => return None,
    };
    Some(kind)
}

/// Classifies a set of cards.
///
/// Returns `None` if the cards do not form any recognised combination. The
/// order of `cards` does not matter.
///
/// # Example
///
/// ```
/// use gdrs::{CombinationKind, classify, parse_cards};
///
/// let cards = parse_cards("5S 6S 7S 8S 9S").unwrap();
/// let combo = classify(&cards).unwrap();
/// assert_eq!(combo.kind(), CombinationKind::StraightFlush);
///
/// let cards = parse_cards("RJ BJ").unwrap();
/// assert!(classify(&cards).is_none());
/// ```
#[must_use]
pub fn classify(cards: &[Card]) -> Option<Combination> {
    let mut sorted = cards.to_vec();
    sorted.sort();

    let Some(kind) = kind_of(&sorted) else {
        log::trace!("no combination for {} cards", sorted.len());
        return None;
    };

    let key = match kind {
        CombinationKind::FullHouse => full_house_triplet(&sorted),
        _ => sorted.last().map(Card::value),
    }?;

    Some(Combination {
        kind,
        cards: sorted,
        key,
    })
}

/// Returns whether `challenger` legally beats the cards on the table.
///
/// An empty table accepts anything. Otherwise both sides must classify, and
/// the challenger must strictly beat the table per [`Combination::beats`].
///
/// # Example
///
/// ```
/// use gdrs::{beats, parse_cards};
///
/// let full_house_7 = parse_cards("7S 7H 7D 9S 9H").unwrap();
/// let full_house_k = parse_cards("KS KH KD 2S 2H").unwrap();
/// assert!(!beats(&full_house_7, &full_house_k));
/// assert!(beats(&full_house_k, &full_house_7));
/// assert!(beats(&full_house_7, &[]));
/// ```
#[must_use]
pub fn beats(challenger: &[Card], table: &[Card]) -> bool {
    if table.is_empty() {
        return true;
    }
    let (Some(challenger), Some(table)) = (classify(challenger), classify(table)) else {
        return false;
    };
    challenger.beats(&table)
}
