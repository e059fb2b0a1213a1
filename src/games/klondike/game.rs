//! Klondike game state and moves.

use log::{debug, trace, warn};
use rustc_hash::FxHashSet;

use crate::cards::{Card, Rank, Suit};
use crate::core::{
    GameConfig, Move, MoveError, MoveList, CARDS_PER_DECK, FOUNDATION_PILE_COUNT,
    TABLEAU_PILE_COUNT,
};
use crate::rules::{can_move_to_foundation, can_move_to_tableau, RulesEngine};
use crate::zones::{Deck, FoundationPile};

/// A Klondike game: one deck, four foundations and seven tableau piles.
///
/// Every move either applies completely or returns a [`MoveError`] and
/// leaves the state untouched.
///
/// ## Usage
///
/// ```
/// use klondike_engine::{GameConfig, Solitaire};
///
/// let mut game = Solitaire::new(&GameConfig::new().with_seed(42));
/// game.new_game();
///
/// assert_eq!(game.draw_pile().len(), 24);
/// assert!(game.draw_card().is_ok());
/// assert_eq!(game.discard_pile().len(), 1);
/// assert!(game.discard_pile()[0].is_face_up());
/// ```
#[derive(Clone, Debug)]
pub struct Solitaire {
    deck: Deck,

    /// Indexed by `Suit::index`.
    foundations: [FoundationPile; FOUNDATION_PILE_COUNT],

    /// Each pile is bottom-to-top.
    tableau: [Vec<Card>; TABLEAU_PILE_COUNT],
}

impl Default for Solitaire {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl Solitaire {
    /// Create a game with a full shuffled draw pile and an empty layout.
    ///
    /// Call [`Solitaire::new_game`] to deal.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            deck: Deck::new(config.build_rng()),
            foundations: Suit::ALL.map(FoundationPile::new),
            tableau: Default::default(),
        }
    }

    /// Create and deal a game with a fixed seed.
    #[must_use]
    pub fn dealt_with_seed(seed: u64) -> Self {
        let mut game = Self::new(&GameConfig::new().with_seed(seed));
        game.new_game();
        game
    }

    // === Views ===

    /// Face-down stock; the next card to draw is the last element.
    #[must_use]
    pub fn draw_pile(&self) -> &[Card] {
        self.deck.draw_pile()
    }

    /// Face-up waste; the playable card is the last element.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        self.deck.discard_pile()
    }

    /// All seven tableau piles, each bottom-to-top.
    #[must_use]
    pub fn tableau_piles(&self) -> &[Vec<Card>] {
        &self.tableau
    }

    #[must_use]
    pub fn tableau_pile(&self, index: usize) -> Option<&[Card]> {
        self.tableau.get(index).map(Vec::as_slice)
    }

    /// Foundations in `Suit::ALL` order.
    #[must_use]
    pub fn foundation_piles(&self) -> &[FoundationPile] {
        &self.foundations
    }

    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &FoundationPile {
        &self.foundations[suit.index()]
    }

    /// All four foundations hold Ace through King.
    #[must_use]
    pub fn won_game(&self) -> bool {
        self.foundations.iter().all(FoundationPile::is_complete)
    }

    /// Seed of the game's RNG, for reproducing the deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.deck.seed()
    }

    /// Check that each of the 52 cards is in exactly one place.
    ///
    /// Foundation piles count as holding Ace through their current value.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = FxHashSet::default();

        let loose_cards = self
            .deck
            .draw_pile()
            .iter()
            .chain(self.deck.discard_pile())
            .chain(self.tableau.iter().flatten());
        for card in loose_cards {
            if !seen.insert(card.id()) {
                return false;
            }
        }

        for foundation in &self.foundations {
            let played = Rank::all()
                .take(foundation.value() as usize)
                .map(|rank| Card::new(foundation.suit(), rank).id());
            for id in played {
                if !seen.insert(id) {
                    return false;
                }
            }
        }

        seen.len() == CARDS_PER_DECK
    }

    // === Operations ===

    /// Reset the deck and foundations and deal a fresh layout.
    ///
    /// Pile `j` receives one card in each round `0..=j`; the card dealt in
    /// its last round is turned face-up. That leaves piles of 1..7 cards
    /// with only the top showing and 24 cards in the draw pile.
    pub fn new_game(&mut self) {
        self.deck.reset();
        for foundation in &mut self.foundations {
            foundation.reset();
        }
        for pile in &mut self.tableau {
            pile.clear();
        }

        for round in 0..TABLEAU_PILE_COUNT {
            for pile in round..TABLEAU_PILE_COUNT {
                let mut card = self
                    .deck
                    .draw()
                    .expect("a freshly reset deck holds 52 cards");
                if pile == round {
                    card.flip();
                }
                self.tableau[pile].push(card);
            }
        }

        debug!(
            "dealt new game (seed {}, {} cards left to draw)",
            self.seed(),
            self.deck.draw_pile().len()
        );
    }

    /// Turn the next draw pile card face-up onto the discard pile.
    pub fn draw_card(&mut self) -> Result<(), MoveError> {
        self.apply_move(Move::DrawCard)
    }

    /// Recycle the discard pile into the draw pile. Only allowed once the
    /// draw pile is empty and there is something to recycle.
    pub fn shuffle_discard_pile(&mut self) -> Result<(), MoveError> {
        self.apply_move(Move::ShuffleDiscardPile)
    }

    pub fn play_discard_pile_card_to_foundation(&mut self) -> Result<(), MoveError> {
        self.apply_move(Move::DiscardToFoundation)
    }

    pub fn play_discard_pile_card_to_tableau(&mut self, target: usize) -> Result<(), MoveError> {
        self.apply_move(Move::DiscardToTableau { target })
    }

    /// Move the top card of a tableau pile to its foundation.
    ///
    /// The card underneath is not revealed; use
    /// [`Solitaire::flip_top_tableau_card`].
    pub fn move_tableau_card_to_foundation(&mut self, source: usize) -> Result<(), MoveError> {
        self.apply_move(Move::TableauToFoundation { source })
    }

    /// Move the cards from `card_index` to the top of `source` onto
    /// `target`, keeping their order.
    ///
    /// Only the card at `card_index` is checked against the target; the
    /// cards above it travel with it.
    pub fn move_tableau_cards_to_another_tableau(
        &mut self,
        source: usize,
        card_index: usize,
        target: usize,
    ) -> Result<(), MoveError> {
        self.apply_move(Move::TableauToTableau {
            source,
            card_index,
            target,
        })
    }

    /// Reveal the face-down top card of a tableau pile.
    pub fn flip_top_tableau_card(&mut self, pile: usize) -> Result<(), MoveError> {
        self.apply_move(Move::FlipTableauCard { pile })
    }

    /// Take the top card of a foundation back onto a tableau pile.
    ///
    /// The card is rebuilt face-up from the foundation's suit and value.
    pub fn move_foundation_card_to_tableau(
        &mut self,
        suit: Suit,
        target: usize,
    ) -> Result<(), MoveError> {
        self.apply_move(Move::FoundationToTableau { suit, target })
    }

    // === Move execution ===

    /// Piles a player can see the top of: empty, or topped by a face-up
    /// card. Move generation only offers placements onto these.
    fn open_piles(&self) -> impl Iterator<Item = (usize, &Vec<Card>)> {
        self.tableau
            .iter()
            .enumerate()
            .filter(|(_, pile)| pile.last().map_or(true, Card::is_face_up))
    }

    fn checked_pile(&self, index: usize) -> Result<&Vec<Card>, MoveError> {
        self.tableau.get(index).ok_or_else(|| out_of_range(index))
    }

    fn draw_to_discard(&mut self) -> Result<(), MoveError> {
        let mut card = self.deck.draw().ok_or(MoveError::EmptyDrawPile)?;
        if !card.is_face_up() {
            card.flip();
        }
        self.deck.discard_pile_mut().push(card);
        Ok(())
    }

    fn recycle_discard_pile(&mut self) -> Result<(), MoveError> {
        if !self.deck.draw_pile().is_empty() {
            return Err(MoveError::DrawPileNotEmpty);
        }
        if self.deck.discard_pile().is_empty() {
            return Err(MoveError::EmptyDiscardPile);
        }
        self.deck.shuffle_in_discard_pile();
        Ok(())
    }

    fn discard_to_foundation(&mut self) -> Result<(), MoveError> {
        let card = self.deck.top_discard().ok_or(MoveError::EmptyDiscardPile)?;
        let suit = card.suit();
        if !can_move_to_foundation(card, self.foundation(suit)) {
            return Err(MoveError::IllegalFoundationMove);
        }

        self.foundations[suit.index()].add_card();
        self.deck.discard_pile_mut().pop();
        Ok(())
    }

    fn discard_to_tableau(&mut self, target: usize) -> Result<(), MoveError> {
        let card = self.deck.top_discard().ok_or(MoveError::EmptyDiscardPile)?;
        let pile = self.checked_pile(target)?;
        if !can_move_to_tableau(card, pile) {
            return Err(MoveError::IllegalTableauMove);
        }

        if let Some(card) = self.deck.discard_pile_mut().pop() {
            self.tableau[target].push(card);
        }
        Ok(())
    }

    fn tableau_to_foundation(&mut self, source: usize) -> Result<(), MoveError> {
        let card = self
            .checked_pile(source)?
            .last()
            .ok_or(MoveError::EmptyTableau(source))?;
        let suit = card.suit();
        if !can_move_to_foundation(card, self.foundation(suit)) {
            return Err(MoveError::IllegalFoundationMove);
        }

        self.foundations[suit.index()].add_card();
        self.tableau[source].pop();
        Ok(())
    }

    fn tableau_to_tableau(
        &mut self,
        source: usize,
        card_index: usize,
        target: usize,
    ) -> Result<(), MoveError> {
        let from = self.checked_pile(source)?;
        let to = self.checked_pile(target)?;
        if source == target {
            return Err(MoveError::SamePile(source));
        }

        let card = from.get(card_index).ok_or(MoveError::CardOutOfRange {
            pile: source,
            index: card_index,
        })?;
        if !card.is_face_up() {
            return Err(MoveError::FaceDownCard);
        }
        if !can_move_to_tableau(card, to) {
            return Err(MoveError::IllegalTableauMove);
        }

        let run = self.tableau[source].split_off(card_index);
        self.tableau[target].extend(run);
        Ok(())
    }

    fn flip_tableau_top(&mut self, index: usize) -> Result<(), MoveError> {
        let pile = self.tableau.get_mut(index).ok_or_else(|| out_of_range(index))?;
        let card = pile.last_mut().ok_or(MoveError::EmptyTableau(index))?;
        if card.is_face_up() {
            return Err(MoveError::AlreadyFaceUp(index));
        }

        card.flip();
        Ok(())
    }

    fn foundation_to_tableau(&mut self, suit: Suit, target: usize) -> Result<(), MoveError> {
        let pile = self.checked_pile(target)?;
        let rank = self
            .foundation(suit)
            .top_rank()
            .ok_or(MoveError::EmptyFoundation(suit))?;
        let card = Card::with_face_up(suit, rank, true);
        if !can_move_to_tableau(&card, pile) {
            return Err(MoveError::IllegalTableauMove);
        }

        self.foundations[suit.index()].remove_card();
        self.tableau[target].push(card);
        Ok(())
    }
}

/// Out-of-range pile indices are host bugs, not player mistakes.
fn out_of_range(index: usize) -> MoveError {
    warn!("tableau pile index {} is out of range (0..{})", index, TABLEAU_PILE_COUNT);
    MoveError::TableauOutOfRange(index)
}

impl RulesEngine for Solitaire {
    fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();

        if !self.deck.draw_pile().is_empty() {
            moves.push(Move::DrawCard);
        } else if !self.deck.discard_pile().is_empty() {
            moves.push(Move::ShuffleDiscardPile);
        }

        if let Some(card) = self.deck.top_discard() {
            if can_move_to_foundation(card, self.foundation(card.suit())) {
                moves.push(Move::DiscardToFoundation);
            }
            for (target, pile) in self.open_piles() {
                if can_move_to_tableau(card, pile) {
                    moves.push(Move::DiscardToTableau { target });
                }
            }
        }

        for (source, pile) in self.tableau.iter().enumerate() {
            let Some(top) = pile.last() else {
                continue;
            };
            if !top.is_face_up() {
                moves.push(Move::FlipTableauCard { pile: source });
                continue;
            }
            if can_move_to_foundation(top, self.foundation(top.suit())) {
                moves.push(Move::TableauToFoundation { source });
            }

            for (card_index, card) in pile.iter().enumerate().filter(|(_, c)| c.is_face_up()) {
                for (target, dest) in self.open_piles() {
                    if target != source && can_move_to_tableau(card, dest) {
                        moves.push(Move::TableauToTableau {
                            source,
                            card_index,
                            target,
                        });
                    }
                }
            }
        }

        for foundation in &self.foundations {
            let Some(rank) = foundation.top_rank() else {
                continue;
            };
            let card = Card::with_face_up(foundation.suit(), rank, true);
            for (target, pile) in self.open_piles() {
                if can_move_to_tableau(&card, pile) {
                    moves.push(Move::FoundationToTableau {
                        suit: foundation.suit(),
                        target,
                    });
                }
            }
        }

        moves
    }

    fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let result = match mv {
            Move::DrawCard => self.draw_to_discard(),
            Move::ShuffleDiscardPile => self.recycle_discard_pile(),
            Move::DiscardToFoundation => self.discard_to_foundation(),
            Move::DiscardToTableau { target } => self.discard_to_tableau(target),
            Move::TableauToFoundation { source } => self.tableau_to_foundation(source),
            Move::TableauToTableau {
                source,
                card_index,
                target,
            } => self.tableau_to_tableau(source, card_index, target),
            Move::FlipTableauCard { pile } => self.flip_tableau_top(pile),
            Move::FoundationToTableau { suit, target } => self.foundation_to_tableau(suit, target),
        };

        match &result {
            Ok(()) => debug!("applied {}", mv),
            Err(err) => trace!("rejected {}: {}", mv, err),
        }

        result
    }

    fn is_won(&self) -> bool {
        self.won_game()
    }
}
