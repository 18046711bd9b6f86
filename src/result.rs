//! Ranking result types.

use core::fmt;

use crate::player::Player;
use crate::score::Score;

/// A player's position in the ranking of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing<'a> {
    /// The ranked player.
    pub player: &'a Player,
    /// The player's evaluated hand.
    pub score: Score,
    /// 1-based place, shared by players whose scores compare equal.
    pub place: usize,
}

impl fmt::Display for Standing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {} with {}",
            self.place,
            ordinal_suffix(self.place),
            self.player.name(),
            self.score
        )
    }
}

/// Returns the English ordinal suffix for a place: `st`, `nd`, `rd` or `th`.
///
/// ```
/// use pokerhands::result::ordinal_suffix;
///
/// assert_eq!(ordinal_suffix(1), "st");
/// assert_eq!(ordinal_suffix(12), "th");
/// assert_eq!(ordinal_suffix(23), "rd");
/// ```
#[must_use]
pub const fn ordinal_suffix(place: usize) -> &'static str {
    match (place % 10, place % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
