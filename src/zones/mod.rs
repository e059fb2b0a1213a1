//! Card piles outside the tableau.
//!
//! ## Key Types
//!
//! - `Deck`: draw pile + discard pile + the RNG that shuffles them
//! - `FoundationPile`: per-suit Ace..King progress counter
//!
//! Tableau piles are plain `Vec<Card>` owned by the game engine.

pub mod deck;
pub mod foundation;

pub use deck::Deck;
pub use foundation::{FoundationOverflow, FoundationPile, FOUNDATION_COMPLETE};
