//! # klondike-engine
//!
//! Rules engine for Klondike solitaire: cards, the deck, tableau and
//! foundation piles, and move validation.
//!
//! ## Design Principles
//!
//! 1. **All-or-nothing moves**: Every move either applies its whole effect
//!    or returns a `MoveError` and leaves the game untouched.
//!
//! 2. **Illegal moves are values**: Dropping a card in the wrong place is
//!    ordinary input, so it is reported through `Result`, never a panic.
//!
//! 3. **Injected randomness**: Every shuffle goes through a seeded
//!    `GameRng`, so a deal can be reproduced from its seed.
//!
//! ## Architecture
//!
//! The presentation layer (rendering, drag-and-drop, animation) lives
//! outside this crate. It reads piles through `Solitaire`'s views and
//! translates gestures into the move operations.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, moves, errors
//! - `cards`: Suits, ranks, colors and cards
//! - `zones`: Deck (draw/discard) and foundation piles
//! - `rules`: Placement predicates and the `RulesEngine` trait
//! - `games`: The Klondike game engine

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, Move, MoveError, MoveList};

pub use crate::cards::{Card, Color, Rank, Suit};

pub use crate::zones::{Deck, FoundationPile};

pub use crate::rules::{can_move_to_foundation, can_move_to_tableau, RulesEngine};

pub use crate::games::klondike::Solitaire;
