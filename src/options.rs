//! Game configuration options.

/// Default number of cards at which a hand counts as full.
pub const HAND_SIZE_LIMIT: usize = 5;

/// Configuration options for a game.
///
/// The hand size limit is advisory: draws still succeed past it, and the
/// limit only drives the game's hand size predicates.
///
/// ```
/// use pokerhands::GameOptions;
///
/// let options = GameOptions::default().with_hand_size_limit(7);
/// assert_eq!(options.hand_size_limit, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of cards at which a hand counts as full.
    pub hand_size_limit: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size_limit: HAND_SIZE_LIMIT,
        }
    }
}

impl GameOptions {
    /// Sets the hand size limit.
    #[must_use]
    pub const fn with_hand_size_limit(mut self, limit: usize) -> Self {
        self.hand_size_limit = limit;
        self
    }
}
