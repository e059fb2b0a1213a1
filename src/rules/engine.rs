//! Move legality and the rules engine trait.
//!
//! The two placement predicates are pure functions over cards and piles;
//! everything that mutates goes through a `RulesEngine`.

use crate::cards::{Card, Rank};
use crate::core::action::{Move, MoveList};
use crate::core::error::MoveError;
use crate::zones::FoundationPile;

/// Whether `card` is the next card for `foundation`.
///
/// Foundations build up from Ace to King without gaps. The caller picks the
/// foundation matching the card's suit.
#[must_use]
pub fn can_move_to_foundation(card: &Card, foundation: &FoundationPile) -> bool {
    card.suit() == foundation.suit() && card.rank().value() == foundation.value() + 1
}

/// Whether `card` may be placed on top of `pile` (bottom-to-top order).
///
/// - Empty pile: only a King.
/// - Nothing goes on an Ace.
/// - Colors must alternate.
/// - Ranks must descend by exactly one.
#[must_use]
pub fn can_move_to_tableau(card: &Card, pile: &[Card]) -> bool {
    let Some(top) = pile.last() else {
        return card.rank() == Rank::KING;
    };

    if top.rank() == Rank::ACE {
        return false;
    }

    if top.color() == card.color() {
        return false;
    }

    top.rank().value() == card.rank().value() + 1
}

/// Rules engine trait.
///
/// Games implement this trait to expose move generation and application
/// uniformly, so hint systems and automated players don't need to know
/// the individual operations.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Every returned move must be accepted by `apply_move`
/// - `apply_move`: All-or-nothing; a rejected move leaves state untouched
/// - `is_won`: Pure
pub trait RulesEngine {
    /// Enumerate the moves a player can make from the current state.
    fn legal_moves(&self) -> MoveList;

    /// Apply a move.
    fn apply_move(&mut self, mv: Move) -> Result<(), MoveError>;

    /// Whether the game has been won.
    fn is_won(&self) -> bool;

    // === Convenience Methods ===

    /// Whether any move is available.
    fn has_legal_move(&self) -> bool {
        !self.legal_moves().is_empty()
    }

    /// Whether `mv` is listed by `legal_moves`.
    ///
    /// Stricter than `apply_move` around face-down top cards: a placement
    /// onto one, or sending one to its foundation, may be accepted when
    /// applied but is never listed.
    fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves().contains(&mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn up(suit: Suit, rank: u8) -> Card {
        Card::with_face_up(suit, Rank::new(rank).unwrap(), true)
    }

    fn foundation_at(suit: Suit, value: u8) -> FoundationPile {
        let mut pile = FoundationPile::new(suit);
        for _ in 0..value {
            pile.add_card();
        }
        pile
    }

    // =========================================================================
    // Foundation
    // =========================================================================

    #[test]
    fn test_foundation_sequence() {
        let empty = foundation_at(Suit::Hearts, 0);
        assert!(!can_move_to_foundation(&up(Suit::Hearts, 2), &empty));
        assert!(can_move_to_foundation(&up(Suit::Hearts, 1), &empty));

        let one = foundation_at(Suit::Hearts, 1);
        assert!(can_move_to_foundation(&up(Suit::Hearts, 2), &one));

        let two = foundation_at(Suit::Hearts, 2);
        assert!(!can_move_to_foundation(&up(Suit::Hearts, 13), &two));
        assert!(can_move_to_foundation(&up(Suit::Hearts, 3), &two));
    }

    #[test]
    fn test_foundation_rejects_other_suit() {
        let empty = foundation_at(Suit::Hearts, 0);
        assert!(!can_move_to_foundation(&up(Suit::Spades, 1), &empty));
    }

    #[test]
    fn test_complete_foundation_accepts_nothing() {
        let full = foundation_at(Suit::Clubs, 13);
        for rank in 1..=13 {
            assert!(!can_move_to_foundation(&up(Suit::Clubs, rank), &full));
        }
    }

    // =========================================================================
    // Tableau
    // =========================================================================

    #[test]
    fn test_red_six_on_black_seven() {
        let pile = vec![up(Suit::Spades, 7)];
        assert!(can_move_to_tableau(&up(Suit::Hearts, 6), &pile));
        assert!(can_move_to_tableau(&up(Suit::Diamonds, 6), &pile));
    }

    #[test]
    fn test_color_clash_rejected() {
        let pile = vec![up(Suit::Diamonds, 7)];
        assert!(!can_move_to_tableau(&up(Suit::Hearts, 6), &pile));
    }

    #[test]
    fn test_rank_gap_rejected() {
        let pile = vec![up(Suit::Hearts, 7)];
        assert!(!can_move_to_tableau(&up(Suit::Clubs, 5), &pile));

        let black = vec![up(Suit::Spades, 7)];
        assert!(!can_move_to_tableau(&up(Suit::Clubs, 5), &black));
    }

    #[test]
    fn test_rank_must_descend() {
        let pile = vec![up(Suit::Spades, 7)];
        assert!(!can_move_to_tableau(&up(Suit::Hearts, 8), &pile));
        assert!(!can_move_to_tableau(&up(Suit::Hearts, 7), &pile));
    }

    #[test]
    fn test_nothing_on_ace() {
        let pile = vec![up(Suit::Spades, 1)];
        for suit in Suit::ALL {
            for rank in 1..=13 {
                assert!(!can_move_to_tableau(&up(suit, rank), &pile));
            }
        }
    }

    #[test]
    fn test_empty_pile_only_takes_king() {
        let empty: Vec<Card> = Vec::new();
        for suit in Suit::ALL {
            for rank in 1..=12 {
                assert!(!can_move_to_tableau(&up(suit, rank), &empty));
            }
            assert!(can_move_to_tableau(&up(suit, 13), &empty));
        }
    }

    #[test]
    fn test_only_top_card_matters() {
        let pile = vec![Card::new(Suit::Hearts, Rank::KING), up(Suit::Clubs, 9)];
        assert!(can_move_to_tableau(&up(Suit::Diamonds, 8), &pile));
    }
}
