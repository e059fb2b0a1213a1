//! Move representation.
//!
//! Every mutating engine operation has a matching `Move` variant. A host
//! can call the operation directly or hand a `Move` to
//! `RulesEngine::apply_move`; both paths share the same validation.
//!
//! Pile indices are 0-based. Tableau card indices count from the bottom of
//! the pile (0 = the deepest card).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Suit;

/// A single player move.
///
/// ```
/// use klondike_engine::core::Move;
///
/// let mv = Move::TableauToTableau { source: 3, card_index: 2, target: 0 };
/// assert_eq!(mv.to_string(), "tableau 3[2..] -> tableau 0");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Turn over the next draw pile card onto the discard pile.
    DrawCard,

    /// Recycle the discard pile into an empty draw pile.
    ShuffleDiscardPile,

    /// Play the top discard card to its foundation.
    DiscardToFoundation,

    /// Play the top discard card onto a tableau pile.
    DiscardToTableau { target: usize },

    /// Move the top card of a tableau pile to its foundation.
    TableauToFoundation { source: usize },

    /// Move the run starting at `card_index` from one tableau pile to
    /// another.
    TableauToTableau {
        source: usize,
        card_index: usize,
        target: usize,
    },

    /// Reveal the face-down top card of a tableau pile.
    FlipTableauCard { pile: usize },

    /// Take the top card of a foundation back onto a tableau pile.
    FoundationToTableau { suit: Suit, target: usize },
}

/// Inline storage for move lists; a typical position has well under 16.
pub type MoveList = SmallVec<[Move; 16]>;

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::DrawCard => write!(f, "draw"),
            Move::ShuffleDiscardPile => write!(f, "recycle discard pile"),
            Move::DiscardToFoundation => write!(f, "discard -> foundation"),
            Move::DiscardToTableau { target } => write!(f, "discard -> tableau {}", target),
            Move::TableauToFoundation { source } => write!(f, "tableau {} -> foundation", source),
            Move::TableauToTableau { source, card_index, target } => {
                write!(f, "tableau {}[{}..] -> tableau {}", source, card_index, target)
            }
            Move::FlipTableauCard { pile } => write!(f, "flip tableau {}", pile),
            Move::FoundationToTableau { suit, target } => {
                write!(f, "{} foundation -> tableau {}", suit, target)
            }
        }
    }
}
