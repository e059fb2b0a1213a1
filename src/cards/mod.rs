//! Card values.
//!
//! - `Suit`: the four suits, in foundation order
//! - `Color`: red or black, derived from suit
//! - `Rank`: validated 1..=13
//! - `Card`: suit + rank + face orientation

pub mod card;

pub use card::{Card, Color, Rank, RankOutOfRange, Suit};
