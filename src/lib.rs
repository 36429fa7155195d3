//! Heads-up blackjack against a stand-on-17 computer, with optional `no_std`
//! support for the engine.
//!
//! The crate provides a [`Game`] type that runs the whole game: the player
//! draws, the computer draws by a fixed threshold, and the higher total
//! without busting wins. Cards come from a [`Dealer`] that never deals a card
//! already in play, fed by a seeded random [`CardSource`] or a scripted one.
//!
//! # Example
//!
//! ```
//! use bjduel::{Card, Game, GameOptions, GameState, Outcome, ScriptedSource};
//!
//! // Player draws 10H, computer 9S; player draws KD, computer 8C.
//! let cards = [10, 48, 26, 34].map(|id| Card::from_id(id).unwrap());
//! let mut game = Game::with_source(GameOptions::default(), ScriptedSource::new(cards));
//!
//! game.play_round().unwrap();
//! game.hit().unwrap();
//! let step = game.play_round().unwrap();
//! assert_eq!(step.player_value, 20);
//! assert_eq!(game.state(), GameState::AwaitingPlayerChoice);
//!
//! game.stand().unwrap();
//! game.ai_finish().unwrap();
//! assert_eq!(game.showdown().unwrap().outcome, Outcome::Player);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod cli;
pub mod dealer;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use dealer::{CardSource, Dealer, ScriptedSource, SeededSource};
pub use error::{ActionError, CardError, DealError, HandError, ShowdownError};
pub use game::{AiMove, Game, GameState, RoundStep};
pub use hand::{BLACKJACK, Hand};
pub use options::{AceScoring, GameOptions};
pub use result::{Outcome, RoundResult, decide_winner};
