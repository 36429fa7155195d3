extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::dealer::CardSource;
use crate::error::ActionError;

use super::{AiMove, Game, GameState};

impl<S: CardSource> Game<S> {
    /// Computer takes one turn.
    ///
    /// The computer draws one card while its total is at or below
    /// [`GameOptions::ai_hit_limit`](crate::GameOptions::ai_hit_limit) and its
    /// hand has room, and holds otherwise. It never looks at the player's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is neither dealing nor letting the
    /// computer finish, or the dealer has no card to give.
    pub fn ai_play_turn(&mut self) -> Result<AiMove, ActionError> {
        if !matches!(self.state, GameState::Dealing | GameState::AiFinishing) {
            return Err(ActionError::InvalidState);
        }

        if self.ai_hand.value() > self.options.ai_hit_limit || self.ai_hand.is_full() {
            return Ok(AiMove::Held);
        }

        let card = self.dealer.deal()?;
        self.ai_hand.add_card(card)?;
        Ok(AiMove::Drew(card))
    }

    /// Computer draws until it holds, then the game is resolved.
    ///
    /// Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the player's turn is not over or the dealer has no
    /// card to give.
    pub fn ai_finish(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.state != GameState::AiFinishing {
            return Err(ActionError::InvalidState);
        }

        let mut drawn_cards = Vec::new();
        while let AiMove::Drew(card) = self.ai_play_turn()? {
            drawn_cards.push(card);
        }

        self.state = GameState::Resolved;

        Ok(drawn_cards)
    }
}
