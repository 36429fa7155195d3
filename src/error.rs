//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Card id outside `1..=52`.
    #[error("card id {0} is outside 1..=52")]
    InvalidId(u8),
    /// Rank outside `1..=13`.
    #[error("card rank {0} is outside 1..=13")]
    InvalidRank(u8),
}

/// Errors that can occur when adding a card to a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Hand already holds its maximum number of cards.
    #[error("hand is full")]
    Full,
    /// Card is already in the hand.
    #[error("card is already in the hand")]
    Duplicate,
}

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Every card of the deck is already in play.
    #[error("every card is already in play")]
    NoCards,
    /// The card source has no more cards to give.
    #[error("card source is exhausted")]
    SourceExhausted,
}

/// Errors that can occur during player and computer turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The hand refused the card.
    #[error(transparent)]
    Hand(#[from] HandError),
    /// The dealer could not produce a card.
    #[error(transparent)]
    Deal(#[from] DealError),
}

/// Errors that can occur during showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
}
