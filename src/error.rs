//! Error types for card construction, plays, and dealing.

use thiserror::Error;

/// Errors that can occur when building a card from untrusted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank is missing.
    #[error("card has no rank")]
    MissingRank,
    /// The suit is missing.
    #[error("card has no suit")]
    MissingSuit,
    /// A joker rank with an ordinary suit, or an ordinary rank with a joker colour.
    #[error("rank and suit cannot be combined")]
    InvalidPairing,
    /// The card token could not be parsed.
    #[error("unrecognised card token")]
    Parse,
}

/// Errors that can occur when playing cards from a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// No cards were selected.
    #[error("no cards selected")]
    Empty,
    /// At least one selected card is not held in the hand.
    #[error("selected cards are not in hand")]
    NotInHand,
    /// The selected cards do not form a recognised combination.
    #[error("invalid combination")]
    InvalidCombination,
    /// The selected cards do not beat the last play.
    #[error("cannot beat last play")]
    CannotBeat,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck options ask for zero hands.
    #[error("no hands to deal to")]
    NoHands,
    /// Not enough cards in the deck to give every hand a card.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}
