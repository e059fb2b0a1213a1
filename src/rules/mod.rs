//! Klondike placement rules and the rules engine trait.
//!
//! - `can_move_to_foundation` / `can_move_to_tableau`: pure legality checks
//! - `RulesEngine`: uniform move generation and application

pub mod engine;

pub use engine::{can_move_to_foundation, can_move_to_tableau, RulesEngine};
