//! Card types and the card ordering.
//!
//! Every comparison in the crate goes through [`Card::value`]: ordinary ranks
//! run 3 through 10, J, Q, K, A and then 2, and both jokers sit above every
//! ordinary rank with the red joker above the black one.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Rank {
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
    /// 2, the highest ordinary rank.
    Two,
    /// Joker. Only valid with a joker colour as suit.
    Joker,
}

impl Rank {
    /// The thirteen ordinary ranks in ascending order.
    pub const ORDINARY: [Self; 13] = [
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
        Self::Two,
    ];

    /// Returns the comparison weight of the rank.
    ///
    /// Jokers report the black joker weight; use [`Card::value`] to tell the
    /// two colours apart.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
            Self::Ace => 14,
            Self::Two => 15,
            Self::Joker => 16,
        }
    }

    /// Returns whether this is the joker rank.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::Joker)
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
            Self::Two => "2",
            Self::Joker => "JOKER",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        let rank = match label {
            "3" => Self::Three,
            "4" => Self::Four,
            "5" => Self::Five,
            "6" => Self::Six,
            "7" => Self::Seven,
            "8" => Self::Eight,
            "9" => Self::Nine,
            "10" | "T" | "t" => Self::Ten,
            "J" | "j" => Self::Jack,
            "Q" | "q" => Self::Queen,
            "K" | "k" => Self::King,
            "A" | "a" => Self::Ace,
            "2" => Self::Two,
            _ => return None,
        };
        Some(rank)
    }
}

/// Card suit, or joker colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Black joker colour.
    BlackJoker,
    /// Red joker colour.
    RedJoker,
}

impl Suit {
    /// The four ordinary suits in sort precedence.
    pub const ORDINARY: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns whether this is a joker colour.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::BlackJoker | Self::RedJoker)
    }

    /// Sort precedence among cards of equal value. Never used for legality.
    const fn precedence(self) -> u8 {
        match self {
            Self::Spades => 0,
            Self::Hearts => 1,
            Self::Diamonds => 2,
            Self::Clubs => 3,
            Self::BlackJoker => 4,
            Self::RedJoker => 5,
        }
    }

    const fn symbol(self) -> &'static str {
        match self {
            Self::Spades => "S",
            Self::Hearts => "H",
            Self::Diamonds => "D",
            Self::Clubs => "C",
            Self::BlackJoker => "B",
            Self::RedJoker => "R",
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            'S' | '♠' => Some(Self::Spades),
            'H' | '♥' => Some(Self::Hearts),
            'D' | '♦' => Some(Self::Diamonds),
            'C' | '♣' => Some(Self::Clubs),
            _ => None,
        }
    }
}

/// A playing card.
///
/// Cards can only be built through [`Card::new`] (or the joker constants), so
/// a joker rank always carries a joker colour and an ordinary rank always
/// carries an ordinary suit.
///
/// The [`Ord`] implementation is the crate's card ordering: rank value first,
/// then suit precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::input::RawCard", into = "crate::input::RawCard")
)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// The black joker.
    pub const BLACK_JOKER: Self = Self {
        rank: Rank::Joker,
        suit: Suit::BlackJoker,
    };

    /// The red joker.
    pub const RED_JOKER: Self = Self {
        rank: Rank::Joker,
        suit: Suit::RedJoker,
    };

    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidPairing`] if exactly one of `rank` and
    /// `suit` belongs to a joker.
    ///
    /// # Example
    ///
    /// ```
    /// use gdrs::{Card, CardError, Rank, Suit};
    ///
    /// assert!(Card::new(Rank::Ace, Suit::Spades).is_ok());
    /// assert_eq!(
    ///     Card::new(Rank::Joker, Suit::Hearts),
    ///     Err(CardError::InvalidPairing)
    /// );
    /// ```
    pub const fn new(rank: Rank, suit: Suit) -> Result<Self, CardError> {
        if rank.is_joker() != suit.is_joker() {
            return Err(CardError::InvalidPairing);
        }
        Ok(Self { rank, suit })
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit (or joker colour) of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.rank.is_joker()
    }

    /// Returns the comparison weight of the card (3..=17).
    ///
    /// # Example
    ///
    /// ```
    /// use gdrs::{Card, Rank, Suit};
    ///
    /// let two = Card::new(Rank::Two, Suit::Clubs).unwrap();
    /// assert_eq!(two.value(), 15);
    /// assert_eq!(Card::BLACK_JOKER.value(), 16);
    /// assert_eq!(Card::RED_JOKER.value(), 17);
    /// ```
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self.suit {
            Suit::RedJoker => Rank::Joker.value() + 1,
            _ => self.rank.value(),
        }
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value()
            .cmp(&other.value())
            .then_with(|| self.suit.precedence().cmp(&other.suit.precedence()))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders two cards by rank value, breaking ties by suit precedence.
#[must_use]
pub fn compare(a: &Card, b: &Card) -> Ordering {
    a.cmp(b)
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Suit::BlackJoker => f.write_str("BJ"),
            Suit::RedJoker => f.write_str("RJ"),
            suit => write!(f, "{}{}", self.rank.label(), suit.symbol()),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses tokens such as `3S`, `10H`, `TH`, `QD`, `2♣`, `BJ` and `RJ`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("BJ") {
            return Ok(Self::BLACK_JOKER);
        }
        if token.eq_ignore_ascii_case("RJ") {
            return Ok(Self::RED_JOKER);
        }

        let mut chars = token.chars();
        let suit_ch = chars.next_back().ok_or(CardError::Parse)?;
        let suit = Suit::from_char(suit_ch.to_ascii_uppercase()).ok_or(CardError::Parse)?;
        let rank = Rank::from_label(chars.as_str()).ok_or(CardError::Parse)?;

        Self::new(rank, suit)
    }
}

/// Parses a list of card tokens separated by whitespace or commas.
///
/// # Errors
///
/// Returns [`CardError::Parse`] if any token is not a card.
///
/// # Example
///
/// ```
/// use gdrs::parse_cards;
///
/// let cards = parse_cards("3S 3H, 3D").unwrap();
/// assert_eq!(cards.len(), 3);
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

/// Number of cards in one deck, jokers included.
pub const DECK_SIZE: usize = 54;
