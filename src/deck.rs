//! Deck building, shuffling, and dealing.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Rank, Suit};
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::DeckOptions;

/// A shuffled stack of cards built from one or more merged decks.
///
/// Shuffling is seeded, so the same options and seed always produce the same
/// deal.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    options: DeckOptions,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Builds and shuffles a deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use gdrs::{Deck, DeckOptions};
    ///
    /// let deck = Deck::new(DeckOptions::default(), 7);
    /// assert_eq!(deck.len(), 108);
    /// ```
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::build(options, &mut rng);

        Self {
            cards,
            options,
            rng,
        }
    }

    /// Creates and shuffles the cards for the configured number of decks.
    fn build(options: DeckOptions, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(options.total_cards());

        for _ in 0..options.decks {
            for suit in Suit::ORDINARY {
                for rank in Rank::ORDINARY {
                    if let Ok(card) = Card::new(rank, suit) {
                        cards.push(card);
                    }
                }
            }
            if options.jokers {
                cards.push(Card::BLACK_JOKER);
                cards.push(Card::RED_JOKER);
            }
        }

        cards.shuffle(rng);
        log::debug!(
            "built {} cards from {} deck(s)",
            cards.len(),
            options.decks
        );
        cards
    }

    /// Rebuilds the full deck and shuffles it again.
    pub fn reshuffle(&mut self) {
        self.cards = Self::build(self.options, &mut self.rng);
    }

    /// Returns the options the deck was built with.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }

    /// Returns the cards left in the deck, top of the deck last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Deals the whole deck round-robin into the configured number of hands.
    ///
    /// Cards that do not divide evenly go to the first hands. The deck is
    /// empty afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if no hands are configured or if there are fewer cards
    /// than hands.
    ///
    /// # Example
    ///
    /// ```
    /// use gdrs::{Deck, DeckOptions};
    ///
    /// let mut deck = Deck::new(DeckOptions::default(), 1);
    /// let hands = deck.deal().unwrap();
    /// assert_eq!(hands.len(), 4);
    /// assert!(hands.iter().all(|hand| hand.len() == 27));
    /// ```
    pub fn deal(&mut self) -> Result<Vec<Hand>, DealError> {
        let hands = self.options.hands as usize;
        if hands == 0 {
            return Err(DealError::NoHands);
        }
        if self.cards.len() < hands {
            return Err(DealError::NotEnoughCards);
        }

        let mut dealt: Vec<Vec<Card>> = (0..hands)
            .map(|_| Vec::with_capacity(self.cards.len() / hands + 1))
            .collect();
        for (i, card) in self.cards.drain(..).rev().enumerate() {
            dealt[i % hands].push(card);
        }

        log::debug!("dealt {hands} hands");
        Ok(dealt.into_iter().map(Hand::new).collect())
    }
}
