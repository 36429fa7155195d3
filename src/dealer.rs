//! Card sources and the dealer that keeps track of cards in play.

extern crate alloc;

use alloc::collections::VecDeque;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, DECK_SIZE};
use crate::error::DealError;
use crate::hand::Hand;

/// A stream of cards for the dealer to draw from.
///
/// Sources may repeat cards; the dealer discards repeats of cards that are
/// already in play.
pub trait CardSource {
    /// Returns the next card, or `None` if the source is exhausted.
    fn next_card(&mut self) -> Option<Card>;
}

/// Uniformly random cards from a seeded ChaCha8 generator.
///
/// The same seed always yields the same sequence of cards.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    /// Creates a source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws a card with a uniformly random id in `1..=52`.
    pub fn draw_card(&mut self) -> Card {
        Card::from_valid_id(self.rng.random_range(1..=DECK_SIZE as u8))
    }
}

impl CardSource for SeededSource {
    fn next_card(&mut self) -> Option<Card> {
        Some(self.draw_card())
    }
}

/// A fixed sequence of cards, replayed in order.
///
/// Useful for tests and for replaying a known game.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    cards: VecDeque<Card>,
}

impl ScriptedSource {
    /// Creates a source that yields `cards` in order, then runs dry.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Returns the number of cards not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl CardSource for ScriptedSource {
    fn next_card(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }
}

/// Deals cards from a [`CardSource`] and remembers which cards are in play.
///
/// Every hand in a game is fed through [`Dealer::deal`], so a card can never
/// be held twice, whether in the same hand or across hands.
#[derive(Debug, Clone)]
pub struct Dealer<S> {
    source: S,
    in_play: HashSet<Card>,
}

impl<S: CardSource> Dealer<S> {
    /// Creates a dealer drawing from `source` with no cards in play.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            in_play: HashSet::with_capacity(DECK_SIZE),
        }
    }

    /// Draws the next card from the source without any uniqueness check.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::SourceExhausted`] if the source has no cards left.
    pub fn draw_card(&mut self) -> Result<Card, DealError> {
        self.source.next_card().ok_or(DealError::SourceExhausted)
    }

    /// Redraws until the card is not held by `hand`, starting from `card`.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NoCards`] if `hand` already holds the whole deck,
    /// or [`DealError::SourceExhausted`] if the source runs dry first.
    pub fn validate_unique(&mut self, hand: &Hand, mut card: Card) -> Result<Card, DealError> {
        if hand.len() >= DECK_SIZE {
            return Err(DealError::NoCards);
        }
        while hand.contains(card) {
            card = self.draw_card()?;
        }
        Ok(card)
    }

    /// Deals a card that is not currently in play and marks it as in play.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NoCards`] if every card is in play, or
    /// [`DealError::SourceExhausted`] if the source runs dry first.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        if self.in_play.len() >= DECK_SIZE {
            return Err(DealError::NoCards);
        }
        loop {
            let card = self.draw_card()?;
            if self.in_play.insert(card) {
                return Ok(card);
            }
        }
    }

    /// Returns whether the card has been dealt and not collected.
    #[must_use]
    pub fn is_in_play(&self, card: Card) -> bool {
        self.in_play.contains(&card)
    }

    /// Returns the number of cards in play.
    #[must_use]
    pub fn in_play(&self) -> usize {
        self.in_play.len()
    }

    /// Returns a single dealt card so it can be dealt again.
    pub(crate) fn return_card(&mut self, card: Card) {
        self.in_play.remove(&card);
    }

    /// Returns every dealt card so they can be dealt again.
    pub fn collect(&mut self) {
        self.in_play.clear();
    }

    /// Returns the card source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }
}
