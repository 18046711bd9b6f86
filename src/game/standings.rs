//! Player ranking with shared places.

use alloc::vec::Vec;

use crate::result::Standing;

use super::Game;

impl Game {
    /// Ranks players from best to worst hand.
    ///
    /// The first player takes place 1. Each following player shares the
    /// previous place when their scores compare equal, and otherwise takes
    /// their 1-based position, so two tied winners and a loser are placed
    /// 1, 1, 3.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerhands::Game;
    ///
    /// let game = Game::from_json(
    ///     r#"{"players":[
    ///         {"name":"Ada","cards":[0,13]},
    ///         {"name":"Grace","cards":[4]},
    ///         {"name":"Alan","cards":[26,39]}
    ///     ]}"#,
    /// )
    /// .unwrap();
    ///
    /// let places: Vec<_> = game.standings().iter().map(|s| s.place).collect();
    /// assert_eq!(places, [1, 1, 3]);
    /// ```
    #[must_use]
    pub fn standings(&self) -> Vec<Standing<'_>> {
        let mut ranked: Vec<_> = self
            .players
            .iter()
            .map(|player| (player, player.score()))
            .collect();
        // Stable, so equal hands keep their seating order.
        ranked.sort_by(|(_, a), (_, b)| b.cmp(a));

        let mut standings: Vec<Standing<'_>> = Vec::with_capacity(ranked.len());
        for (index, (player, score)) in ranked.into_iter().enumerate() {
            let place = match standings.last() {
                Some(previous) if previous.score.compare(&score).is_eq() => previous.place,
                _ => index + 1,
            };
            tracing::debug!(player = player.name(), place, %score, "ranked player");
            standings.push(Standing {
                player,
                score,
                place,
            });
        }
        standings
    }
}
