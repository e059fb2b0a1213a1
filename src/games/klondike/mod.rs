//! Klondike solitaire: draw-1, one deck, seven tableau piles, four
//! foundations.
//!
//! - Deal: tableau piles of 1..7 cards, only the top card face-up
//! - Draw one card at a time to the discard pile; recycle it when the
//!   draw pile runs out
//! - Build foundations up by suit from Ace, tableau down in alternating
//!   colors, Kings only on empty piles
//! - Won when all four foundations reach King

mod game;

pub use game::Solitaire;
