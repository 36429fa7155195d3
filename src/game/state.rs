//! Game state types.

use crate::card::Card;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Both sides are about to draw for the next round.
    Dealing,
    /// Waiting for the player to hit or stand.
    AwaitingPlayerChoice,
    /// The player is done; the computer draws until it holds.
    AiFinishing,
    /// Both sides are done and the winner can be decided.
    Resolved,
}

/// What the computer did on one of its turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiMove {
    /// The computer drew this card.
    Drew(Card),
    /// The computer kept its hand.
    Held,
}

impl AiMove {
    /// Returns the drawn card, if any.
    #[must_use]
    pub const fn card(self) -> Option<Card> {
        match self {
            Self::Drew(card) => Some(card),
            Self::Held => None,
        }
    }
}

/// Summary of one dealing round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStep {
    /// The card dealt to the player.
    pub player_card: Card,
    /// The computer's move.
    pub ai_move: AiMove,
    /// The player's total after the draw.
    pub player_value: u16,
    /// The state the game moved to.
    pub next_state: GameState,
}
