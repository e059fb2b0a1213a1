//! Playing cards: suit, rank, color and face orientation.
//!
//! A `Card` never changes its suit or rank after construction. The only
//! mutable part is whether it is face-up, and that only changes through
//! [`Card::flip`].

use serde::{Deserialize, Serialize};

/// One of the four suits.
///
/// The declaration order is also the foundation order used by the engine
/// (`Suit::ALL`, `Suit::index`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Spades,
    Hearts,
    Diamonds,
}

impl Suit {
    /// All suits in foundation order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds];

    /// Position of this suit in `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Suit::Clubs => 0,
            Suit::Spades => 1,
            Suit::Hearts => 2,
            Suit::Diamonds => 3,
        }
    }

    /// Color of this suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }

    /// Single-character symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card color. Tableau runs must alternate colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Rank value outside 1..=13.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankOutOfRange(pub u8);

impl std::fmt::Display for RankOutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rank {} is outside 1..=13", self.0)
    }
}

impl std::error::Error for RankOutOfRange {}

/// Card rank, 1 (Ace) through 13 (King).
///
/// ```
/// use klondike_engine::cards::Rank;
///
/// assert_eq!(Rank::new(1), Some(Rank::ACE));
/// assert_eq!(Rank::new(13), Some(Rank::KING));
/// assert_eq!(Rank::new(0), None);
/// assert_eq!(Rank::new(14), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank, or `None` outside 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Option<Rank> {
        if value >= 1 && value <= 13 {
            Some(Rank(value))
        } else {
            None
        }
    }

    /// Numeric value (1..=13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All thirteen ranks, Ace first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    /// Short label as printed on a card corner.
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
            _ => "K",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = RankOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or(RankOutOfRange(value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single playing card.
///
/// Not `Copy`: each of the 52 cards lives in exactly one pile, and moving
/// it between piles moves the value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a card with an explicit orientation.
    #[must_use]
    pub const fn with_face_up(suit: Suit, rank: Rank, face_up: bool) -> Self {
        Self { suit, rank, face_up }
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Color derived from the suit.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Toggle face orientation.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Stable identity in 0..52, independent of orientation.
    ///
    /// Laid out suit-by-suit in `Suit::ALL` order, Ace first.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.suit.index() as u8 * 13 + (self.rank.value() - 1)
    }

    /// The full ordered 52-card set, all face-down.
    pub fn full_deck() -> impl Iterator<Item = Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::all().map(move |rank| Card::new(suit, rank)))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
