//! Seeded random card source.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

/// A reproducible source of random cards.
///
/// `Dealer` implements [`RngCore`], so it can be handed to any draw
/// operation. Two dealers built from the same seed draw the same cards.
///
/// # Example
///
/// ```
/// use pokerhands::{Dealer, Player};
///
/// let mut dealer = Dealer::new(42);
/// let mut player = Player::new("Ada");
/// player.draw_random_card(&mut dealer);
///
/// let mut replay = Dealer::new(42);
/// assert_eq!(player.cards()[0], replay.deal());
/// ```
#[derive(Debug, Clone)]
pub struct Dealer {
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Dealer {
    /// Creates a dealer with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws a single card.
    pub fn deal(&mut self) -> Card {
        Card::random(&mut self.rng)
    }
}

impl RngCore for Dealer {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst);
    }
}
