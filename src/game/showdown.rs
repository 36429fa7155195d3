use crate::dealer::CardSource;
use crate::error::ShowdownError;
use crate::result::{RoundResult, decide_winner};

use super::{Game, GameState};

impl<S: CardSource> Game<S> {
    /// Compares both hands and reports the winner.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not resolved.
    pub fn showdown(&self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Resolved {
            return Err(ShowdownError::InvalidState);
        }

        let player_value = self.player_hand.value();
        let ai_value = self.ai_hand.value();

        Ok(RoundResult {
            outcome: decide_winner(player_value, ai_value),
            player_value,
            ai_value,
            player_bust: self.player_hand.is_bust(),
            ai_bust: self.ai_hand.is_bust(),
            player_cards: self.player_hand.cards().to_vec(),
            ai_cards: self.ai_hand.cards().to_vec(),
        })
    }
}
