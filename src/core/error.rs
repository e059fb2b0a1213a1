//! Move rejection reasons.
//!
//! Illegal moves are ordinary input (a player drops a card somewhere it
//! can't go), so every mutating engine operation reports them as a value.

use crate::cards::Suit;

/// Why a move was rejected. A rejected move never changes game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// There is no card left to draw.
    EmptyDrawPile,
    /// The discard pile can only be recycled once the draw pile is empty.
    DrawPileNotEmpty,
    /// There is no discard card to play.
    EmptyDiscardPile,
    /// Tableau pile index outside 0..7.
    TableauOutOfRange(usize),
    /// Card index past the end of a tableau pile.
    CardOutOfRange { pile: usize, index: usize },
    /// The tableau pile has no cards.
    EmptyTableau(usize),
    /// The foundation for this suit has no cards.
    EmptyFoundation(Suit),
    /// Face-down cards cannot be moved.
    FaceDownCard,
    /// The top card is already face-up.
    AlreadyFaceUp(usize),
    /// The card is not the next rank for its foundation.
    IllegalFoundationMove,
    /// The card cannot be stacked on the target pile.
    IllegalTableauMove,
    /// Source and target pile are the same.
    SamePile(usize),
}

impl MoveError {
    /// Whether the error comes from a caller passing a bad index rather
    /// than from the game rules.
    #[must_use]
    pub fn is_index_error(&self) -> bool {
        matches!(self, MoveError::TableauOutOfRange(_) | MoveError::CardOutOfRange { .. })
    }
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::EmptyDrawPile => write!(f, "draw pile is empty"),
            MoveError::DrawPileNotEmpty => write!(f, "draw pile still has cards"),
            MoveError::EmptyDiscardPile => write!(f, "discard pile is empty"),
            MoveError::TableauOutOfRange(pile) => write!(f, "no tableau pile {}", pile),
            MoveError::CardOutOfRange { pile, index } => {
                write!(f, "tableau pile {} has no card at {}", pile, index)
            }
            MoveError::EmptyTableau(pile) => write!(f, "tableau pile {} is empty", pile),
            MoveError::EmptyFoundation(suit) => write!(f, "{} foundation is empty", suit),
            MoveError::FaceDownCard => write!(f, "card is face-down"),
            MoveError::AlreadyFaceUp(pile) => {
                write!(f, "top card of tableau pile {} is already face-up", pile)
            }
            MoveError::IllegalFoundationMove => write!(f, "card is not next for its foundation"),
            MoveError::IllegalTableauMove => write!(f, "card cannot be placed on that pile"),
            MoveError::SamePile(pile) => write!(f, "cannot move tableau pile {} onto itself", pile),
        }
    }
}

impl std::error::Error for MoveError {}
