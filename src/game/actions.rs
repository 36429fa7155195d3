use crate::card::Card;
use crate::dealer::CardSource;
use crate::error::{ActionError, HandError};
use crate::hand::BLACKJACK;

use super::{Game, GameState, RoundStep};

impl<S: CardSource> Game<S> {
    fn ensure_state(&self, expected: GameState) -> Result<(), ActionError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Deals one card to the player.
    ///
    /// Exactly one card is drawn per call; whether to call it at all is the
    /// caller's decision.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealing state, the player's
    /// hand is full (no card is drawn in that case), or the dealer has no
    /// card to give.
    pub fn player_turn(&mut self) -> Result<Card, ActionError> {
        self.ensure_state(GameState::Dealing)?;

        if self.player_hand.is_full() {
            return Err(HandError::Full.into());
        }

        let card = self.dealer.deal()?;
        self.player_hand.add_card(card)?;
        Ok(card)
    }

    /// Plays one dealing round: the player draws, then the computer takes one
    /// turn.
    ///
    /// Afterwards the game waits for the player's choice if their total is
    /// under 21 and their hand has room. A player on exactly 21 with room
    /// left is dealt another card next round without being asked, unless
    /// [`GameOptions::stand_on_21`](crate::GameOptions::stand_on_21) is set.
    /// Otherwise (bust, a full hand, or standing on 21) the player's turn is
    /// over and the computer finishes.
    ///
    /// A failed round changes nothing: if the computer's step fails, the
    /// player's card goes back to the dealer and the game stays in the
    /// dealing state.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealing state or a card
    /// cannot be dealt.
    pub fn play_round(&mut self) -> Result<RoundStep, ActionError> {
        let player_card = self.player_turn()?;
        let ai_move = match self.ai_play_turn() {
            Ok(ai_move) => ai_move,
            Err(err) => {
                self.player_hand.pop();
                self.dealer.return_card(player_card);
                return Err(err);
            }
        };

        let player_value = self.player_hand.value();
        let has_room = !self.player_hand.is_full();
        self.state = if player_value < BLACKJACK && has_room {
            GameState::AwaitingPlayerChoice
        } else if player_value == BLACKJACK && has_room && !self.options.stand_on_21 {
            GameState::Dealing
        } else {
            GameState::AiFinishing
        };

        Ok(RoundStep {
            player_card,
            ai_move,
            player_value,
            next_state: self.state,
        })
    }

    /// Player choice: take another card next round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for the player's choice.
    pub fn hit(&mut self) -> Result<(), ActionError> {
        self.ensure_state(GameState::AwaitingPlayerChoice)?;
        self.state = GameState::Dealing;
        Ok(())
    }

    /// Player choice: keep the current hand and let the computer finish.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for the player's choice.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_state(GameState::AwaitingPlayerChoice)?;
        self.state = GameState::AiFinishing;
        Ok(())
    }
}
