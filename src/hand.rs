//! A player's hand.

use alloc::vec::Vec;

use crate::card::Card;
use crate::combination::{Combination, classify};
use crate::error::PlayError;

/// Cards held by one player, kept sorted by the card ordering.
///
/// The hand knows nothing about who holds it or whose turn it is; it only
/// checks that a play is made of held cards, forms a combination, and beats
/// the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand from the given cards.
    #[must_use]
    pub fn new(mut cards: Vec<Card>) -> Self {
        cards.sort();
        Self { cards }
    }

    /// Returns the cards in the hand, sorted ascending.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether every card in `cards` is held, counting duplicates.
    #[must_use]
    pub fn contains_all(&self, cards: &[Card]) -> bool {
        let mut held = self.cards.clone();
        cards.iter().all(|card| take(&mut held, card))
    }

    /// Groups the hand by rank, lowest first. Both joker colours share a group.
    ///
    /// # Example
    ///
    /// ```
    /// use gdrs::{Hand, parse_cards};
    ///
    /// let hand = Hand::new(parse_cards("3S 4H 3D RJ BJ").unwrap());
    /// let groups = hand.groups();
    /// assert_eq!(groups.len(), 3);
    /// assert_eq!(groups[0].len(), 2);
    /// assert_eq!(groups[2].len(), 2);
    /// ```
    #[must_use]
    pub fn groups(&self) -> Vec<&[Card]> {
        self.cards
            .chunk_by(|a, b| a.rank() == b.rank())
            .collect()
    }

    /// Removes the given cards from the hand.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::NotInHand`] and leaves the hand unchanged if any
    /// card is not held.
    pub fn remove(&mut self, cards: &[Card]) -> Result<(), PlayError> {
        let mut remaining = self.cards.clone();
        if !cards.iter().all(|card| take(&mut remaining, card)) {
            return Err(PlayError::NotInHand);
        }
        self.cards = remaining;
        Ok(())
    }

    /// Plays cards from the hand against the cards on the table.
    ///
    /// Pass an empty `table` when leading. On success the cards leave the
    /// hand and their classification is returned; on error the hand is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`PlayError::Empty`] if no cards are given.
    /// - [`PlayError::NotInHand`] if a card is not held.
    /// - [`PlayError::InvalidCombination`] if the cards form no combination.
    /// - [`PlayError::CannotBeat`] if the cards do not beat the table.
    ///
    /// # Example
    ///
    /// ```
    /// use gdrs::{CombinationKind, Hand, PlayError, parse_cards};
    ///
    /// let mut hand = Hand::new(parse_cards("4S 4H 9C").unwrap());
    /// let table = parse_cards("6D 6C").unwrap();
    ///
    /// let pair = parse_cards("4S 4H").unwrap();
    /// assert_eq!(hand.play(&pair, &table), Err(PlayError::CannotBeat));
    ///
    /// let single = parse_cards("9C").unwrap();
    /// let combo = hand.play(&single, &[]).unwrap();
    /// assert_eq!(combo.kind(), CombinationKind::Single);
    /// assert_eq!(hand.len(), 2);
    /// ```
    pub fn play(&mut self, cards: &[Card], table: &[Card]) -> Result<Combination, PlayError> {
        if cards.is_empty() {
            return Err(PlayError::Empty);
        }
        if !self.contains_all(cards) {
            return Err(PlayError::NotInHand);
        }
        let combination = classify(cards).ok_or(PlayError::InvalidCombination)?;
        if !table.is_empty() {
            let beaten = classify(table).is_some_and(|last| combination.beats(&last));
            if !beaten {
                log::debug!("{} does not beat the table", combination.kind());
                return Err(PlayError::CannotBeat);
            }
        }
        self.remove(cards)?;
        Ok(combination)
    }
}

/// Removes one copy of `card` from `cards`, returning whether it was there.
fn take(cards: &mut Vec<Card>, card: &Card) -> bool {
    cards
        .iter()
        .position(|held| held == card)
        .map(|index| cards.remove(index))
        .is_some()
}
