//! A Guandan card game rule engine with optional `no_std` support.
//!
//! The crate classifies a set of cards into a [`Combination`] (single, pair,
//! triple, straight, full house, or one of the bombs) and decides whether a
//! play beats the cards on the table. Everything is a pure function of the
//! cards passed in; turn order, scoring, and sessions belong to the caller.
//!
//! # Example
//!
//! ```
//! use gdrs::{CombinationKind, beats, classify, parse_cards};
//!
//! let triple = parse_cards("3S 3H 3D").unwrap();
//! assert_eq!(classify(&triple).unwrap().kind(), CombinationKind::ThreeOfAKind);
//!
//! let jokers = parse_cards("BJ BJ RJ RJ").unwrap();
//! let nines = parse_cards("9S 9H 9D 9C 9S").unwrap();
//! assert!(beats(&jokers, &nines));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod combination;
pub mod deck;
pub mod error;
pub mod hand;
pub mod input;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, compare, parse_cards};
pub use combination::{Combination, CombinationKind, beats, classify};
pub use deck::Deck;
pub use error::{CardError, DealError, PlayError};
pub use hand::Hand;
pub use input::{RawCard, beats_raw, classify_raw, compare_raw, sanitize};
pub use options::DeckOptions;
