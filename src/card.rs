//! Card types and the integer card encoding.
//!
//! Every card has an id in `1..=52`. Ids are grouped by suit in blocks of
//! thirteen (Hearts, Diamonds, Clubs, Spades) and ordered Ace to King inside
//! each block, so `1` is the Ace of Hearts and `52` the King of Spades.

use core::fmt;

use crate::error::CardError;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit.
const RANKS: u8 = 13;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// Returns the suit encoded by a raw card id.
    ///
    /// Returns `None` for ids outside `1..=52`.
    ///
    /// ```
    /// use bjduel::Suit;
    ///
    /// assert_eq!(Suit::from_id(1), Some(Suit::Hearts));
    /// assert_eq!(Suit::from_id(40), Some(Suit::Spades));
    /// assert_eq!(Suit::from_id(0), None);
    /// ```
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=13 => Some(Self::Hearts),
            14..=26 => Some(Self::Diamonds),
            27..=39 => Some(Self::Clubs),
            40..=52 => Some(Self::Spades),
            _ => None,
        }
    }

    /// Single-letter symbol used when printing cards.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }

    const fn index(self) -> u8 {
        match self {
            Self::Hearts => 0,
            Self::Diamonds => 1,
            Self::Clubs => 2,
            Self::Spades => 3,
        }
    }
}

/// A playing card.
///
/// A `Card` is always valid: it can only be built from an id in `1..=52` or
/// from a suit and a rank in `1..=13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    id: u8,
}

impl Card {
    /// Creates a card from its suit and rank (1 = Ace, 11 = Jack,
    /// 12 = Queen, 13 = King).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the rank is outside `1..=13`.
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank == 0 || rank > RANKS {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self {
            id: suit.index() * RANKS + rank,
        })
    }

    /// Creates a card from its integer id.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidId`] if the id is outside `1..=52`.
    ///
    /// ```
    /// use bjduel::{Card, Suit};
    ///
    /// let card = Card::from_id(14).unwrap();
    /// assert_eq!(card.suit(), Suit::Diamonds);
    /// assert_eq!(card.rank(), 1);
    /// assert!(Card::from_id(53).is_err());
    /// ```
    pub const fn from_id(id: u8) -> Result<Self, CardError> {
        if id == 0 || id as usize > DECK_SIZE {
            return Err(CardError::InvalidId(id));
        }
        Ok(Self { id })
    }

    /// Builds a card from an id the caller has already range-checked.
    pub(crate) const fn from_valid_id(id: u8) -> Self {
        debug_assert!(id >= 1 && id as usize <= DECK_SIZE);
        Self { id }
    }

    /// Returns the integer id of the card.
    #[must_use]
    pub const fn id(self) -> u8 {
        self.id
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        match (self.id - 1) / RANKS {
            0 => Suit::Hearts,
            1 => Suit::Diamonds,
            2 => Suit::Clubs,
            _ => Suit::Spades,
        }
    }

    /// Returns the rank of the card within its suit (1 = Ace, 13 = King).
    #[must_use]
    pub const fn rank(self) -> u8 {
        (self.id - 1) % RANKS + 1
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank() == 1
    }

    /// Returns the face value of the card.
    ///
    /// Face cards are worth 10 and the Ace is worth 1 here; upgrading an Ace
    /// to 11 is left to hand valuation.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self.rank() {
            11..=13 => 10,
            rank => rank,
        }
    }

    /// Iterates over all 52 cards in id order.
    pub fn deck() -> impl Iterator<Item = Self> {
        (1..=DECK_SIZE as u8).map(Self::from_valid_id)
    }
}

impl TryFrom<u8> for Card {
    type Error = CardError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = self.suit().letter();
        match self.rank() {
            1 => write!(f, "A{suit}"),
            11 => write!(f, "J{suit}"),
            12 => write!(f, "Q{suit}"),
            13 => write!(f, "K{suit}"),
            rank => write!(f, "{rank}{suit}"),
        }
    }
}
