//! Game outcome types for showdown.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::BLACKJACK;

/// Who won the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The human player won.
    Player,
    /// The computer won.
    Computer,
    /// Nobody won.
    Tie,
}

/// Decides the winner from the two final totals.
///
/// Two busts tie; a single bust loses; otherwise the higher total wins and
/// equal totals tie.
///
/// ```
/// use bjduel::{Outcome, decide_winner};
///
/// assert_eq!(decide_winner(22, 22), Outcome::Tie);
/// assert_eq!(decide_winner(22, 20), Outcome::Computer);
/// assert_eq!(decide_winner(20, 18), Outcome::Player);
/// ```
#[must_use]
pub const fn decide_winner(player_value: u16, ai_value: u16) -> Outcome {
    let player_bust = player_value > BLACKJACK;
    let ai_bust = ai_value > BLACKJACK;

    if player_bust && ai_bust {
        Outcome::Tie
    } else if player_bust {
        Outcome::Computer
    } else if ai_bust || player_value > ai_value {
        Outcome::Player
    } else if player_value == ai_value {
        Outcome::Tie
    } else {
        Outcome::Computer
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Who won.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u16,
    /// The computer's final hand value.
    pub ai_value: u16,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the computer busted.
    pub ai_bust: bool,
    /// The player's cards in draw order.
    pub player_cards: Vec<Card>,
    /// The computer's cards in draw order.
    pub ai_cards: Vec<Card>,
}
