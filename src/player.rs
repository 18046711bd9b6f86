//! Player hand representation.

use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::{CardError, SerializationError};
use crate::options::HAND_SIZE_LIMIT;
use crate::score::{Score, evaluate};

/// Plain data form of a player: a name and the card ids in hand order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPlainForm {
    /// Player name.
    pub name: String,
    /// Card ids, each in `0..52`.
    pub cards: Vec<u8>,
}

/// A named player and the ordered cards in their hand.
///
/// Hands are not drawn from a depleting deck, so the same card may appear
/// more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Player name.
    name: String,
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Appends a random card to the hand.
    ///
    /// This succeeds past the hand size limit; callers check
    /// [`Player::is_at_hand_size_limit`] themselves.
    pub fn draw_random_card<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Card {
        let card = Card::random(rng);
        self.cards.push(card);
        tracing::debug!(player = %self.name, %card, "drew card");
        card
    }

    /// Appends the card with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidIdentity`] if `id` is not in `0..52`.
    pub fn add_card(&mut self, id: u8) -> Result<(), CardError> {
        let card = Card::from_id(id)?;
        self.cards.push(card);
        tracing::debug!(player = %self.name, %card, "added card");
        Ok(())
    }

    /// Removes the first card with the given id.
    ///
    /// Returns `false`, leaving the hand untouched, if no card matches.
    pub fn discard_card(&mut self, id: u8) -> bool {
        let Some(index) = self.cards.iter().position(|card| card.id() == id) else {
            tracing::debug!(player = %self.name, id, "discarded card not in hand");
            return false;
        };
        let card = self.cards.remove(index);
        tracing::debug!(player = %self.name, %card, "discarded card");
        true
    }

    /// Empties the hand.
    pub fn clear_cards(&mut self) {
        self.cards.clear();
    }

    /// Returns whether the hand holds at least [`HAND_SIZE_LIMIT`] cards.
    ///
    /// A game configured with another limit answers through
    /// [`Game::is_player_at_hand_size_limit`](crate::Game::is_player_at_hand_size_limit).
    #[must_use]
    pub fn is_at_hand_size_limit(&self) -> bool {
        self.is_at_limit(HAND_SIZE_LIMIT)
    }

    /// Returns whether the hand holds at least `limit` cards.
    #[must_use]
    pub fn is_at_limit(&self, limit: usize) -> bool {
        self.cards.len() >= limit
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Evaluates the hand.
    #[must_use]
    pub fn score(&self) -> Score {
        evaluate(&self.cards)
    }

    /// Converts the player to plain data.
    #[must_use]
    pub fn to_plain_form(&self) -> PlayerPlainForm {
        PlayerPlainForm {
            name: self.name.clone(),
            cards: self.cards.iter().map(|card| card.id()).collect(),
        }
    }

    /// Restores a player from plain data, keeping the card order.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError::Card`] if any id is not in `0..52`.
    pub fn from_plain_form(data: PlayerPlainForm) -> Result<Self, SerializationError> {
        let cards = data
            .cards
            .into_iter()
            .map(Card::from_id)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: data.name,
            cards,
        })
    }

    /// Serializes the player to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError::Json`] if encoding fails.
    pub fn to_json(&self) -> Result<String, SerializationError> {
        Ok(serde_json::to_string(&self.to_plain_form())?)
    }

    /// Restores a player from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError`] if the input is malformed or holds an
    /// out-of-range card id.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerhands::Player;
    ///
    /// let player = Player::from_json(r#"{"name":"Ada","cards":[0,12,12]}"#).unwrap();
    /// assert_eq!(player.name(), "Ada");
    /// assert_eq!(player.len(), 3);
    ///
    /// assert!(Player::from_json(r#"{"name":"Ada","cards":[52]}"#).is_err());
    /// assert!(Player::from_json(r#"{"name":"Ada","cards":[1.5]}"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SerializationError> {
        let data: PlayerPlainForm = serde_json::from_str(json)?;
        Self::from_plain_form(data)
    }
}
