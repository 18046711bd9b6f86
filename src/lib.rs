//! Poker hand evaluation for a multiplayer card table, with optional `no_std` support.
//!
//! The crate models a [`Game`] of named [`Player`]s holding [`Card`]s drawn
//! independently from a 52-card identity space. [`evaluate`] classifies a
//! hand into a [`Score`], [`Score::compare`] orders scores, and
//! [`Game::standings`] ranks every player with shared places for ties.
//!
//! # Example
//!
//! ```
//! use pokerhands::{Dealer, Game};
//!
//! let mut game = Game::new();
//! game.add_new_player("Ada");
//! game.add_new_player("Grace");
//!
//! let mut dealer = Dealer::new(42);
//! while !game.is_any_player_at_hand_size_limit() {
//!     game.draw_random_cards(&mut dealer);
//! }
//!
//! for standing in game.standings() {
//!     println!("{standing}");
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod score;

// Re-export main types
pub use card::{CARDS_PER_SUIT, Card, Color, DECK_SIZE, Rank, Suit};
pub use dealer::Dealer;
pub use error::{CardError, GameError, ScoreError, SerializationError};
pub use game::{Game, GamePlainForm};
pub use options::{GameOptions, HAND_SIZE_LIMIT};
pub use player::{Player, PlayerPlainForm};
pub use result::Standing;
pub use score::{HandType, Score, evaluate};
