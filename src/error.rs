//! Error types for card, score, and game operations.

use alloc::vec::Vec;

use thiserror::Error;

use crate::card::Rank;
use crate::score::HandType;

/// Errors that can occur when identifying a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Card id is outside `0..52`.
    #[error("invalid card id {0}")]
    InvalidIdentity(u8),
}

/// Errors that can occur when building a score from flat parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Tiebreaker count does not match what the hand type requires.
    #[error("invalid tiebreaker count {} for {hand_type:?}", .tiebreakers.len())]
    InvalidScore {
        /// The requested hand type.
        hand_type: HandType,
        /// The rejected tiebreakers.
        tiebreakers: Vec<Rank>,
    },
}

/// Errors that can occur when restoring a player or game from plain data.
#[derive(Debug, Error)]
pub enum SerializationError {
    /// Input does not have the expected shape.
    #[error("malformed game data: {0}")]
    Json(#[from] serde_json::Error),
    /// Input references a card id outside `0..52`.
    #[error("malformed game data: {0}")]
    Card(#[from] CardError),
}

/// Errors that can occur during game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Player not found.
    #[error("player {0} not found")]
    PlayerNotFound(usize),
}
