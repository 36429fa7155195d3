//! Game engine and state management.

use crate::dealer::{CardSource, Dealer, SeededSource};
use crate::hand::Hand;
use crate::options::GameOptions;

mod actions;
mod ai;
mod showdown;
pub mod state;

pub use state::{AiMove, GameState, RoundStep};

/// A heads-up game between a human player and the computer.
///
/// The game owns both hands, the dealer, and the current state. Use
/// [`GameOptions`] to configure the hand capacity, the computer's hit limit,
/// and the Ace rule.
///
/// A typical game calls [`Game::play_round`] until the player is done
/// (answering with [`Game::hit`] or [`Game::stand`] in between), then
/// [`Game::ai_finish`] and [`Game::showdown`].
#[derive(Debug, Clone)]
pub struct Game<S = SeededSource> {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// The human player's hand.
    player_hand: Hand,
    /// The computer's hand.
    ai_hand: Hand,
    /// Card dealer shared by both hands.
    dealer: Dealer<S>,
}

impl Game {
    /// Creates a new game dealing random cards from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjduel::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Dealing);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_source(options, SeededSource::new(seed))
    }
}

impl<S: CardSource> Game<S> {
    /// Creates a new game dealing from `source`.
    #[must_use]
    pub fn with_source(options: GameOptions, source: S) -> Self {
        Self {
            options,
            state: GameState::Dealing,
            player_hand: Self::empty_hand(&options),
            ai_hand: Self::empty_hand(&options),
            dealer: Dealer::new(source),
        }
    }

    fn empty_hand(options: &GameOptions) -> Hand {
        Hand::new(options.hand_capacity).with_ace_scoring(options.ace_scoring)
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the computer's hand.
    #[must_use]
    pub const fn ai_hand(&self) -> &Hand {
        &self.ai_hand
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer<S> {
        &self.dealer
    }

    /// Clears both hands, returns every card to the dealer, and goes back to
    /// the `Dealing` state.
    ///
    /// The new hands pick up the current hand capacity and Ace rule from
    /// [`Game::options`].
    pub fn clear_round(&mut self) {
        self.player_hand = Self::empty_hand(&self.options);
        self.ai_hand = Self::empty_hand(&self.options);
        self.dealer.collect();
        self.state = GameState::Dealing;
    }
}
