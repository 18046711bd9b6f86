//! Card types and identity mapping.

use core::cmp::Ordering;
use core::fmt;

use rand::Rng;

use crate::error::CardError;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks in each suit.
pub const CARDS_PER_SUIT: u8 = 13;

/// Card suit.
///
/// The declaration order matches the identity mapping: ids `0..13` are clubs,
/// `13..26` hearts, `26..39` spades and `39..52` diamonds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
}

/// Display color of a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Clubs and spades.
    Black,
    /// Hearts and diamonds.
    Red,
}

impl Suit {
    /// All suits in identity order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Hearts, Self::Spades, Self::Diamonds];

    /// Returns the display color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Clubs | Self::Spades => Color::Black,
            Self::Hearts | Self::Diamonds => Color::Red,
        }
    }

    /// Returns the display glyph of the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Hearts => '♥',
            Self::Spades => '♠',
            Self::Diamonds => '♦',
        }
    }
}

/// Card rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
///
/// Ranks order Ace-high: the Ace compares above the King. Straight detection
/// is the only place that looks at the raw value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rank(u8);

impl Rank {
    /// The Ace.
    pub const ACE: Self = Self(1);
    /// The Jack.
    pub const JACK: Self = Self(11);
    /// The Queen.
    pub const QUEEN: Self = Self(12);
    /// The King.
    pub const KING: Self = Self(13);

    /// Creates a rank from its face value.
    ///
    /// Returns `None` for values outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerhands::Rank;
    ///
    /// assert_eq!(Rank::new(1), Some(Rank::ACE));
    /// assert_eq!(Rank::new(14), None);
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= CARDS_PER_SUIT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the face value (1 for the Ace).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    const fn strength(self) -> u8 {
        if self.0 == 1 { 14 } else { self.0 }
    }

    /// Returns the short label: `A`, `J`, `Q`, `K`, or the numeral.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            // `Rank` only holds 1..=13, so this is the King.
            _ => "K",
        }
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength().cmp(&other.strength())
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card, identified by an integer in `0..52`.
///
/// Two cards with the same id are indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    id: u8,
}

impl Card {
    /// Creates the card for the given identity.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidIdentity`] if `id` is not in `0..52`.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerhands::{Card, Rank, Suit};
    ///
    /// let card = Card::from_id(13).unwrap();
    /// assert_eq!(card.suit(), Suit::Hearts);
    /// assert_eq!(card.rank(), Rank::ACE);
    /// assert!(Card::from_id(52).is_err());
    /// ```
    pub const fn from_id(id: u8) -> Result<Self, CardError> {
        if (id as usize) < DECK_SIZE {
            Ok(Self { id })
        } else {
            Err(CardError::InvalidIdentity(id))
        }
    }

    /// Creates the card with the given suit and rank.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            id: suit as u8 * CARDS_PER_SUIT + rank.0 - 1,
        }
    }

    /// Draws a card uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            id: rng.random_range(0..DECK_SIZE as u8),
        }
    }

    /// Returns the card identity.
    #[must_use]
    pub const fn id(self) -> u8 {
        self.id
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank(self.id % CARDS_PER_SUIT + 1)
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::ALL[(self.id / CARDS_PER_SUIT) as usize]
    }
}

impl TryFrom<u8> for Card {
    type Error = CardError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit().symbol())
    }
}
