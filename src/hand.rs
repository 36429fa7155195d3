//! Hand container and hand valuation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::HandError;
use crate::options::AceScoring;

/// Highest total that is not a bust.
pub const BLACKJACK: u16 = 21;

/// Value added when an Ace counts high instead of low.
const SOFT_BONUS: u16 = 10;

fn hard_total(cards: &[Card]) -> u16 {
    cards.iter().map(|card| u16::from(card.value())).sum()
}

fn greedy_total(cards: &[Card]) -> u16 {
    cards.iter().fold(0, |total, card| {
        if card.is_ace() && total + 11 <= BLACKJACK {
            total + 11
        } else {
            total + u16::from(card.value())
        }
    })
}

fn optimal_total(cards: &[Card]) -> (u16, bool) {
    let mut value = hard_total(cards);
    let aces = cards.iter().filter(|card| card.is_ace()).count();

    // Count one Ace high if it fits; a second high Ace would always bust.
    let soft = aces > 0 && value + SOFT_BONUS <= BLACKJACK;
    if soft {
        value += SOFT_BONUS;
    }

    (value, soft)
}

/// Totals a run of cards under the given Ace rule.
///
/// ```
/// use bjduel::{AceScoring, Card, hand::total_value};
///
/// let cards = [5, 1, 13].map(|id| Card::from_id(id).unwrap());
/// assert_eq!(total_value(&cards, AceScoring::Greedy), 26);
/// assert_eq!(total_value(&cards, AceScoring::Optimal), 16);
/// ```
#[must_use]
pub fn total_value(cards: &[Card], scoring: AceScoring) -> u16 {
    match scoring {
        AceScoring::Greedy => greedy_total(cards),
        AceScoring::Optimal => optimal_total(cards).0,
    }
}

/// A bounded, ordered hand of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the order they were received.
    cards: Vec<Card>,
    /// Maximum number of cards.
    capacity: usize,
    /// Ace rule used by [`Hand::value`].
    scoring: AceScoring,
}

impl Hand {
    /// Creates a new empty hand holding at most `capacity` cards.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            cards: Vec::new(),
            capacity,
            scoring: AceScoring::Greedy,
        }
    }

    /// Sets the Ace rule used when totalling this hand.
    #[must_use]
    pub const fn with_ace_scoring(mut self, scoring: AceScoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Adds a card to the hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Full`] if the hand is at capacity and
    /// [`HandError::Duplicate`] if the card is already held. The hand is left
    /// unchanged in both cases.
    pub fn add_card(&mut self, card: Card) -> Result<(), HandError> {
        if self.is_full() {
            return Err(HandError::Full);
        }
        if self.contains(card) {
            return Err(HandError::Duplicate);
        }
        self.cards.push(card);
        Ok(())
    }

    /// Returns whether the card is in the hand.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the total value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        total_value(&self.cards, self.scoring)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether an Ace is currently counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        match self.scoring {
            AceScoring::Optimal => optimal_total(&self.cards).1,
            AceScoring::Greedy => self.value() > hard_total(&self.cards),
        }
    }

    /// Returns the Ace rule of the hand.
    #[must_use]
    pub const fn ace_scoring(&self) -> AceScoring {
        self.scoring
    }

    /// Returns the maximum number of cards.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns whether no more cards fit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
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

    /// Takes back the most recently added card.
    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// Prints each card followed by `", "`, e.g. `AH, 10D, `.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card}, ")?;
        }
        Ok(())
    }
}
