//! Core engine types: RNG, configuration, moves, errors.
//!
//! These are the building blocks shared by the piles and the game engine.

pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use rng::GameRng;
pub use config::{GameConfig, CARDS_PER_DECK, FOUNDATION_PILE_COUNT, TABLEAU_PILE_COUNT};
pub use action::{Move, MoveList};
pub use error::MoveError;
