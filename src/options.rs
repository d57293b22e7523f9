//! Deck and dealing configuration.

use crate::card::DECK_SIZE;

/// Configuration for building and dealing a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use gdrs::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_decks(1)
///     .with_jokers(false)
///     .with_hands(4);
/// assert_eq!(options.total_cards(), 52);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Number of merged decks.
    pub decks: u8,
    /// Whether each deck includes its red and black joker.
    pub jokers: bool,
    /// Number of hands to deal.
    pub hands: u8,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: 2,
            jokers: true,
            hands: 4,
        }
    }
}

impl DeckOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use gdrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(3);
    /// assert_eq!(options.decks, 3);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether jokers are included.
    #[must_use]
    pub const fn with_jokers(mut self, jokers: bool) -> Self {
        self.jokers = jokers;
        self
    }

    /// Sets the number of hands to deal.
    ///
    /// # Example
    ///
    /// ```
    /// use gdrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_hands(2);
    /// assert_eq!(options.hands, 2);
    /// ```
    #[must_use]
    pub const fn with_hands(mut self, hands: u8) -> Self {
        self.hands = hands;
        self
    }

    /// Returns the number of cards in a single deck.
    #[must_use]
    pub const fn cards_per_deck(&self) -> usize {
        if self.jokers { DECK_SIZE } else { DECK_SIZE - 2 }
    }

    /// Returns the number of cards across all decks.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.decks as usize * self.cards_per_deck()
    }
}
