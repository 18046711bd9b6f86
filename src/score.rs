//! Hand evaluation and ranking.
//!
//! [`evaluate`] classifies an unordered multiset of cards into one of ten
//! hand types, carrying exactly the tiebreaker ranks needed to order two
//! hands of the same type. [`Score::compare`] orders evaluated hands.

use core::cmp::Ordering;
use core::fmt;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Rank};
use crate::error::ScoreError;

/// Poker hand category, declared from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandType {
    /// No other category applies.
    HighCard,
    /// Exactly one rank appears twice.
    OnePair,
    /// Exactly two ranks appear twice.
    TwoPair,
    /// A rank appears three times.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of one rank and two of another.
    FullHouse,
    /// A rank appears four times.
    FourOfAKind,
    /// A straight that is also a flush.
    StraightFlush,
    /// A rank appears five times.
    FiveOfAKind,
}

impl HandType {
    /// Returns the priority value, from 0 (high card) to 9 (five of a kind).
    #[must_use]
    pub const fn priority(self) -> u8 {
        self as u8
    }
}

/// Result of evaluating a hand.
///
/// Each variant holds the tiebreakers its hand type needs, most significant
/// first. Kicker lists hold the remaining singleton ranks in descending order
/// and vary in length with the hand size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Score {
    /// Five of a kind of the given rank.
    FiveOfAKind(Rank),
    /// Straight flush with the given high card.
    StraightFlush(Rank),
    /// Four of a kind.
    FourOfAKind {
        /// The rank appearing four times.
        quad: Rank,
        /// Remaining singleton ranks, descending.
        kickers: Vec<Rank>,
    },
    /// Full house.
    FullHouse {
        /// The rank appearing three times.
        triple: Rank,
        /// The rank appearing twice.
        pair: Rank,
    },
    /// Flush with all five ranks, descending.
    Flush([Rank; 5]),
    /// Straight with the given high card.
    Straight(Rank),
    /// Three of a kind.
    ThreeOfAKind {
        /// The rank appearing three times.
        triple: Rank,
        /// Remaining singleton ranks, descending.
        kickers: Vec<Rank>,
    },
    /// Two pair.
    TwoPair {
        /// The higher pair.
        high: Rank,
        /// The lower pair.
        low: Rank,
        /// Remaining singleton ranks, descending.
        kickers: Vec<Rank>,
    },
    /// One pair.
    OnePair {
        /// The paired rank.
        pair: Rank,
        /// Remaining singleton ranks, descending.
        kickers: Vec<Rank>,
    },
    /// High card with every rank in the hand, descending.
    HighCard(Vec<Rank>),
}

impl Score {
    /// Builds a score from a hand type and a flat tiebreaker list.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidScore`] when the tiebreaker count does not
    /// fit the hand type: five of a kind, straight flush and straight take
    /// exactly one, full house exactly two, flush exactly five; four of a
    /// kind, three of a kind and one pair at least one; two pair at least two.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerhands::{HandType, Rank, Score};
    ///
    /// let king = Rank::KING;
    /// let four = Rank::new(4).unwrap();
    /// let score = Score::new(HandType::FullHouse, vec![king, four]).unwrap();
    /// assert_eq!(score.describe(), "Full house of K over 4");
    ///
    /// assert!(Score::new(HandType::FullHouse, vec![king]).is_err());
    /// ```
    pub fn new(hand_type: HandType, tiebreakers: Vec<Rank>) -> Result<Self, ScoreError> {
        let score = match (hand_type, tiebreakers.as_slice()) {
            (HandType::FiveOfAKind, &[rank]) => Some(Self::FiveOfAKind(rank)),
            (HandType::StraightFlush, &[high]) => Some(Self::StraightFlush(high)),
            (HandType::FourOfAKind, &[quad, ref kickers @ ..]) => Some(Self::FourOfAKind {
                quad,
                kickers: kickers.to_vec(),
            }),
            (HandType::FullHouse, &[triple, pair]) => Some(Self::FullHouse { triple, pair }),
            (HandType::Flush, &[a, b, c, d, e]) => Some(Self::Flush([a, b, c, d, e])),
            (HandType::Straight, &[high]) => Some(Self::Straight(high)),
            (HandType::ThreeOfAKind, &[triple, ref kickers @ ..]) => Some(Self::ThreeOfAKind {
                triple,
                kickers: kickers.to_vec(),
            }),
            (HandType::TwoPair, &[high, low, ref kickers @ ..]) => Some(Self::TwoPair {
                high,
                low,
                kickers: kickers.to_vec(),
            }),
            (HandType::OnePair, &[pair, ref kickers @ ..]) => Some(Self::OnePair {
                pair,
                kickers: kickers.to_vec(),
            }),
            (HandType::HighCard, ranks) => Some(Self::HighCard(ranks.to_vec())),
            _ => None,
        };

        score.ok_or(ScoreError::InvalidScore {
            hand_type,
            tiebreakers,
        })
    }

    /// Returns the hand type of the score.
    #[must_use]
    pub const fn hand_type(&self) -> HandType {
        match self {
            Self::FiveOfAKind(_) => HandType::FiveOfAKind,
            Self::StraightFlush(_) => HandType::StraightFlush,
            Self::FourOfAKind { .. } => HandType::FourOfAKind,
            Self::FullHouse { .. } => HandType::FullHouse,
            Self::Flush(_) => HandType::Flush,
            Self::Straight(_) => HandType::Straight,
            Self::ThreeOfAKind { .. } => HandType::ThreeOfAKind,
            Self::TwoPair { .. } => HandType::TwoPair,
            Self::OnePair { .. } => HandType::OnePair,
            Self::HighCard(_) => HandType::HighCard,
        }
    }

    /// Returns the tiebreakers as a flat list, most significant first.
    #[must_use]
    pub fn tiebreakers(&self) -> Vec<Rank> {
        let mut ranks = Vec::with_capacity(5);
        match self {
            Self::FiveOfAKind(rank) | Self::StraightFlush(rank) | Self::Straight(rank) => {
                ranks.push(*rank);
            }
            Self::FourOfAKind {
                quad: rank,
                kickers,
            }
            | Self::ThreeOfAKind {
                triple: rank,
                kickers,
            }
            | Self::OnePair {
                pair: rank,
                kickers,
            } => {
                ranks.push(*rank);
                ranks.extend_from_slice(kickers);
            }
            Self::FullHouse { triple, pair } => ranks.extend([*triple, *pair]),
            Self::Flush(flush) => ranks.extend_from_slice(flush),
            Self::TwoPair { high, low, kickers } => {
                ranks.extend([*high, *low]);
                ranks.extend_from_slice(kickers);
            }
            Self::HighCard(high) => ranks.extend_from_slice(high),
        }
        ranks
    }

    /// Compares two scores.
    ///
    /// Hand type decides first. Within a hand type, tiebreakers are compared
    /// position by position (Ace high) up to the length of the shorter list,
    /// so a hand whose tiebreakers are a prefix of the other's compares equal.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.hand_type().cmp(&other.hand_type()).then_with(|| {
            self.tiebreakers()
                .iter()
                .zip(other.tiebreakers().iter())
                .map(|(a, b)| a.cmp(b))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Returns a human readable label, e.g. `"Full house of K over 4"`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

/// Total order refining [`Score::compare`].
///
/// Scores that `compare` equal through a common tiebreaker prefix are further
/// ordered by tiebreaker count, so sorting by `Ord` never contradicts `compare`.
impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
            .then_with(|| self.tiebreakers().len().cmp(&other.tiebreakers().len()))
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FiveOfAKind(rank) => write!(f, "Five of a kind of {rank}"),
            Self::StraightFlush(high) => write!(f, "Straight flush with {high} high"),
            Self::FourOfAKind { quad, .. } => write!(f, "Four of a kind of {quad}"),
            Self::FullHouse { triple, pair } => write!(f, "Full house of {triple} over {pair}"),
            Self::Flush([high, ..]) => write!(f, "Flush ({high} high)"),
            Self::Straight(high) => write!(f, "Straight with {high} high"),
            Self::ThreeOfAKind { triple, .. } => write!(f, "Three of a kind of {triple}"),
            Self::TwoPair { high, low, .. } => write!(f, "Two pair of {high} and {low}"),
            Self::OnePair { pair, .. } => write!(f, "One pair of {pair}"),
            Self::HighCard(ranks) => match ranks.first() {
                Some(high) => write!(f, "Nothing ({high} high)"),
                None => f.write_str("Nothing"),
            },
        }
    }
}

fn sorted_descending(mut ranks: Vec<Rank>) -> Vec<Rank> {
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    ranks
}

/// Returns the five ranks, descending, if all five cards share a suit.
fn flush_ranks(cards: &[Card]) -> Option<[Rank; 5]> {
    let &[a, b, c, d, e] = cards else {
        return None;
    };
    let suit = a.suit();
    if [b, c, d, e].iter().any(|card| card.suit() != suit) {
        return None;
    }

    let mut ranks = [a.rank(), b.rank(), c.rank(), d.rank(), e.rank()];
    ranks.sort_unstable_by(|x, y| y.cmp(x));
    Some(ranks)
}

/// Returns the straight's high card for five cards of distinct ranks.
///
/// Ranks are taken at face value here, so A-2-3-4-5 is five high. The run
/// 10-J-Q-K-A is the one exception and reports the Ace.
fn straight_high(cards: &[Card], counts: &HashMap<Rank, usize>) -> Option<Rank> {
    if cards.len() != 5 || counts.len() != 5 {
        return None;
    }

    let min = counts.keys().map(|rank| rank.value()).min()?;
    let max = counts.keys().map(|rank| rank.value()).max()?;
    if max - min == 4 {
        return Rank::new(max);
    }

    let broadway = counts
        .keys()
        .all(|rank| *rank == Rank::ACE || rank.value() >= 10);
    broadway.then_some(Rank::ACE)
}

/// Evaluates a hand.
///
/// The hand is treated as a multiset: order does not matter and duplicate
/// cards count towards pairs and sets. Flushes and straights need exactly
/// five cards.
///
/// # Example
///
/// ```
/// use pokerhands::{Card, HandType, Rank, Suit, evaluate};
///
/// let cards = [
///     Card::new(Suit::Clubs, Rank::new(9).unwrap()),
///     Card::new(Suit::Hearts, Rank::new(9).unwrap()),
///     Card::new(Suit::Spades, Rank::new(9).unwrap()),
///     Card::new(Suit::Clubs, Rank::new(2).unwrap()),
///     Card::new(Suit::Diamonds, Rank::new(2).unwrap()),
/// ];
/// let score = evaluate(&cards);
/// assert_eq!(score.hand_type(), HandType::FullHouse);
/// assert_eq!(score.describe(), "Full house of 9 over 2");
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> Score {
    let mut counts: HashMap<Rank, usize> = HashMap::new();
    for card in cards {
        *counts.entry(card.rank()).or_insert(0) += 1;
    }

    let ranks_with_count = |count: usize| {
        sorted_descending(
            counts
                .iter()
                .filter(|&(_, &n)| n == count)
                .map(|(&rank, _)| rank)
                .collect(),
        )
    };

    let fives = ranks_with_count(5);
    let quads = ranks_with_count(4);
    let triples = ranks_with_count(3);
    let pairs = ranks_with_count(2);
    let singletons = ranks_with_count(1);
    let flush = flush_ranks(cards);
    let straight = straight_high(cards, &counts);

    let score = if let Some(&rank) = fives.first() {
        Score::FiveOfAKind(rank)
    } else if let (Some(_), Some(high)) = (flush, straight) {
        Score::StraightFlush(high)
    } else if let Some(&quad) = quads.first() {
        Score::FourOfAKind {
            quad,
            kickers: singletons,
        }
    } else if let (Some(&triple), Some(&pair)) = (triples.first(), pairs.first()) {
        Score::FullHouse { triple, pair }
    } else if let Some(ranks) = flush {
        Score::Flush(ranks)
    } else if let Some(high) = straight {
        Score::Straight(high)
    } else if let Some(&triple) = triples.first() {
        Score::ThreeOfAKind {
            triple,
            kickers: singletons,
        }
    } else if let &[high, low] = pairs.as_slice() {
        Score::TwoPair {
            high,
            low,
            kickers: singletons,
        }
    } else if let &[pair] = pairs.as_slice() {
        Score::OnePair {
            pair,
            kickers: singletons,
        }
    } else {
        Score::HighCard(sorted_descending(
            cards.iter().map(|card| card.rank()).collect(),
        ))
    };

    tracing::trace!(
        cards = cards.len(),
        hand_type = ?score.hand_type(),
        "evaluated hand"
    );
    score
}
