//! Game state management.

use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::error::GameError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::score::Score;

mod plain;
mod standings;

pub use plain::GamePlainForm;

/// A card table holding players in insertion order.
///
/// The game owns its players and exposes them read-only; hands change only
/// through the draw, discard and clear operations below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Players in insertion order.
    players: Vec<Player>,
}

impl Game {
    /// Creates an empty game with default options.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerhands::{Dealer, Game};
    ///
    /// let mut game = Game::new();
    /// game.add_new_player("Ada");
    /// game.add_new_player("Grace");
    ///
    /// let mut dealer = Dealer::new(7);
    /// game.draw_random_cards(&mut dealer);
    /// assert!(game.players().iter().all(|player| player.len() == 1));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty game with the given options.
    #[must_use]
    pub const fn with_options(options: GameOptions) -> Self {
        Self {
            options,
            players: Vec::new(),
        }
    }

    /// Adds a player with an empty hand.
    pub fn add_new_player(&mut self, name: impl Into<String>) {
        self.add_player(Player::new(name));
    }

    /// Adds an existing player.
    pub fn add_player(&mut self, player: Player) {
        tracing::debug!(player = player.name(), cards = player.len(), "added player");
        self.players.push(player);
    }

    /// Returns the players in insertion order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `index`.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns whether the game has no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    fn player_mut(&mut self, index: usize) -> Result<&mut Player, GameError> {
        self.players
            .get_mut(index)
            .ok_or(GameError::PlayerNotFound(index))
    }

    /// Draws a random card for every player.
    pub fn draw_random_cards<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for player in &mut self.players {
            player.draw_random_card(rng);
        }
    }

    /// Draws a random card for the player at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerNotFound`] if there is no such player.
    pub fn draw_random_card<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
    ) -> Result<Card, GameError> {
        Ok(self.player_mut(index)?.draw_random_card(rng))
    }

    /// Removes the first card with id `id` from the player at `index`.
    ///
    /// Returns whether a card was removed; a missing card is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerNotFound`] if there is no such player.
    pub fn discard_card(&mut self, index: usize, id: u8) -> Result<bool, GameError> {
        Ok(self.player_mut(index)?.discard_card(id))
    }

    /// Empties every player's hand.
    pub fn clear_board(&mut self) {
        for player in &mut self.players {
            player.clear_cards();
        }
        tracing::debug!(players = self.players.len(), "cleared board");
    }

    /// Returns whether the hand of the player at `index` has reached the
    /// configured hand size limit.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerNotFound`] if there is no such player.
    pub fn is_player_at_hand_size_limit(&self, index: usize) -> Result<bool, GameError> {
        self.players
            .get(index)
            .map(|player| player.is_at_limit(self.options.hand_size_limit))
            .ok_or(GameError::PlayerNotFound(index))
    }

    /// Returns whether any hand has reached the configured hand size limit.
    #[must_use]
    pub fn is_any_player_at_hand_size_limit(&self) -> bool {
        self.players
            .iter()
            .any(|player| player.is_at_limit(self.options.hand_size_limit))
    }

    /// Returns whether every hand is empty.
    ///
    /// A game without players counts as empty.
    #[must_use]
    pub fn is_every_player_hand_empty(&self) -> bool {
        self.players.iter().all(Player::is_empty)
    }

    /// Evaluates every hand, in player order.
    #[must_use]
    pub fn scores(&self) -> Vec<Score> {
        self.players.iter().map(Player::score).collect()
    }
}
