//! Plain data and JSON conversion for games.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::error::SerializationError;
use crate::player::{Player, PlayerPlainForm};

use super::Game;

/// Plain data form of a game: its players in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePlainForm {
    /// Players in insertion order.
    pub players: Vec<PlayerPlainForm>,
}

impl Game {
    /// Converts the game to plain data.
    ///
    /// Options are not part of the plain form.
    #[must_use]
    pub fn to_plain_form(&self) -> GamePlainForm {
        GamePlainForm {
            players: self.players.iter().map(Player::to_plain_form).collect(),
        }
    }

    /// Restores a game from plain data, keeping player and card order.
    ///
    /// The restored game uses default options. Nothing is restored if any
    /// player is malformed.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError::Card`] if any card id is not in `0..52`.
    pub fn from_plain_form(data: GamePlainForm) -> Result<Self, SerializationError> {
        let players = data
            .players
            .into_iter()
            .map(Player::from_plain_form)
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|err| tracing::warn!(%err, "rejected game data"))?;

        tracing::debug!(players = players.len(), "restored game");
        Ok(Self {
            players,
            ..Self::default()
        })
    }

    /// Serializes the game to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError::Json`] if encoding fails.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerhands::Game;
    ///
    /// let mut game = Game::new();
    /// game.add_new_player("Ada");
    /// assert_eq!(game.to_json().unwrap(), r#"{"players":[{"name":"Ada","cards":[]}]}"#);
    /// ```
    pub fn to_json(&self) -> Result<String, SerializationError> {
        Ok(serde_json::to_string(&self.to_plain_form())?)
    }

    /// Restores a game from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError`] if the input is malformed or holds an
    /// out-of-range card id.
    pub fn from_json(json: &str) -> Result<Self, SerializationError> {
        let data: GamePlainForm = serde_json::from_str(json)
            .inspect_err(|err| tracing::warn!(%err, "rejected game data"))?;
        Self::from_plain_form(data)
    }
}
