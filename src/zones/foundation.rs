//! Foundation piles.
//!
//! A foundation only ever holds one suit in order Ace..King, so the pile is
//! stored as a counter: the rank of its top card, or 0 when empty.

use serde::{Deserialize, Serialize};

use crate::cards::{Rank, Suit};

/// Value of a complete foundation.
pub const FOUNDATION_COMPLETE: u8 = 13;

/// One per-suit foundation pile.
///
/// `add_card` and `remove_card` clamp at the ends instead of failing. They
/// do not check legality; the engine validates before calling them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFoundation")]
pub struct FoundationPile {
    suit: Suit,
    value: u8,
}

/// Unchecked wire form of a `FoundationPile`.
#[derive(Deserialize)]
struct RawFoundation {
    suit: Suit,
    value: u8,
}

/// Foundation value above a complete pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoundationOverflow(pub u8);

impl std::fmt::Display for FoundationOverflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "foundation value {} is above {}", self.0, FOUNDATION_COMPLETE)
    }
}

impl std::error::Error for FoundationOverflow {}

impl TryFrom<RawFoundation> for FoundationPile {
    type Error = FoundationOverflow;

    fn try_from(raw: RawFoundation) -> Result<Self, Self::Error> {
        if raw.value > FOUNDATION_COMPLETE {
            return Err(FoundationOverflow(raw.value));
        }
        Ok(Self {
            suit: raw.suit,
            value: raw.value,
        })
    }
}

impl FoundationPile {
    /// Create an empty foundation for a suit.
    #[must_use]
    pub const fn new(suit: Suit) -> Self {
        Self { suit, value: 0 }
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Highest rank placed so far (0 = empty).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    pub fn add_card(&mut self) {
        if self.value < FOUNDATION_COMPLETE {
            self.value += 1;
        }
    }

    pub fn remove_card(&mut self) {
        if self.value > 0 {
            self.value -= 1;
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value == 0
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.value == FOUNDATION_COMPLETE
    }

    /// Rank of the top card, if any.
    #[must_use]
    pub const fn top_rank(&self) -> Option<Rank> {
        Rank::new(self.value)
    }

    /// Rank this foundation accepts next, if it is not complete.
    #[must_use]
    pub const fn next_rank(&self) -> Option<Rank> {
        Rank::new(self.value + 1)
    }
}
