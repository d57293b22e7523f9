//! Sanitation of untrusted card input.
//!
//! Cards that arrive from outside (a client message, a JSON payload) may be
//! missing a rank or suit, or pair a joker rank with an ordinary suit. They
//! are carried as [`RawCard`] until validated; the rule engine itself only
//! ever sees well-formed [`Card`]s.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::{Card, Rank, Suit};
use crate::combination::{Combination, classify};
use crate::error::CardError;

/// A card as received from an untrusted source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawCard {
    /// The rank, if one was supplied.
    pub rank: Option<Rank>,
    /// The suit, if one was supplied.
    pub suit: Option<Suit>,
}

impl RawCard {
    /// Creates a raw card from optional parts.
    #[must_use]
    pub const fn new(rank: Option<Rank>, suit: Option<Suit>) -> Self {
        Self { rank, suit }
    }

    /// Validates the raw card.
    ///
    /// # Errors
    ///
    /// Returns an error if the rank or suit is missing, or if they cannot be
    /// combined.
    pub const fn validate(self) -> Result<Card, CardError> {
        let Some(rank) = self.rank else {
            return Err(CardError::MissingRank);
        };
        let Some(suit) = self.suit else {
            return Err(CardError::MissingSuit);
        };
        Card::new(rank, suit)
    }
}

impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        raw.validate()
    }
}

impl From<Card> for RawCard {
    fn from(card: Card) -> Self {
        Self {
            rank: Some(card.rank()),
            suit: Some(card.suit()),
        }
    }
}

/// Orders two raw cards.
///
/// Well-formed cards follow the regular card ordering; if either side is
/// malformed the two compare as equal.
#[must_use]
pub fn compare_raw(a: &RawCard, b: &RawCard) -> Ordering {
    match (a.validate(), b.validate()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => Ordering::Equal,
    }
}

/// Drops malformed cards and returns the rest sorted.
///
/// # Example
///
/// ```
/// use gdrs::{Rank, RawCard, Suit, sanitize};
///
/// let raw = [
///     RawCard::new(Some(Rank::King), Some(Suit::Hearts)),
///     RawCard::new(None, Some(Suit::Spades)),
///     RawCard::new(Some(Rank::Three), Some(Suit::Clubs)),
/// ];
/// let cards = sanitize(&raw);
/// assert_eq!(cards.len(), 2);
/// assert_eq!(cards[0].rank(), Rank::Three);
/// ```
#[must_use]
pub fn sanitize(raw: &[RawCard]) -> Vec<Card> {
    let mut cards: Vec<Card> = raw.iter().filter_map(|r| r.validate().ok()).collect();
    cards.sort_unstable();
    cards
}

/// Classifies untrusted cards.
///
/// Returns `None` if any card is malformed, otherwise the same result as
/// [`classify`].
#[must_use]
pub fn classify_raw(raw: &[RawCard]) -> Option<Combination> {
    let cards = raw
        .iter()
        .map(|r| r.validate())
        .collect::<Result<Vec<Card>, CardError>>()
        .inspect_err(|err| log::trace!("rejecting raw play: {err}"))
        .ok()?;
    classify(&cards)
}

/// Returns whether untrusted `challenger` cards beat the untrusted cards on
/// the table.
///
/// An empty table accepts anything. A malformed card on either side makes
/// that side unclassifiable, so the result is `false`.
///
/// # Example
///
/// ```
/// use gdrs::{Rank, RawCard, Suit, beats_raw};
///
/// let ace = RawCard::new(Some(Rank::Ace), Some(Suit::Spades));
/// let king = RawCard::new(Some(Rank::King), Some(Suit::Spades));
/// assert!(beats_raw(&[ace], &[king]));
/// assert!(!beats_raw(&[RawCard::default()], &[king]));
/// ```
#[must_use]
pub fn beats_raw(challenger: &[RawCard], table: &[RawCard]) -> bool {
    if table.is_empty() {
        return true;
    }
    let (Some(challenger), Some(table)) = (classify_raw(challenger), classify_raw(table)) else {
        return false;
    };
    challenger.beats(&table)
}
