//! Draw and discard piles.
//!
//! The `Deck` owns the 52-card set while it is not on the tableau: the
//! face-down draw pile and the face-up discard pile. Both are `Vec<Card>`
//! with the top of the pile at the end of the vec.

use log::trace;

use crate::cards::Card;
use crate::core::rng::GameRng;

/// Draw pile, discard pile and the RNG used to shuffle them.
///
/// ## Usage
///
/// ```
/// use klondike_engine::core::GameRng;
/// use klondike_engine::zones::Deck;
///
/// let mut deck = Deck::new(GameRng::new(42));
/// assert_eq!(deck.draw_pile().len(), 52);
///
/// let card = deck.draw().unwrap();
/// assert!(!card.is_face_up());
/// assert_eq!(deck.draw_pile().len(), 51);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    /// Next card to draw is the last element.
    draw_pile: Vec<Card>,

    /// Most recently discarded card is the last element.
    discard_pile: Vec<Card>,

    rng: GameRng,
}

impl Deck {
    /// Create a deck with a full, shuffled draw pile.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        let mut deck = Self {
            draw_pile: Vec::with_capacity(crate::core::CARDS_PER_DECK),
            discard_pile: Vec::new(),
            rng,
        };
        deck.reset();
        deck
    }

    /// Rebuild all 52 cards face-down into a freshly shuffled draw pile and
    /// clear the discard pile.
    pub fn reset(&mut self) {
        self.discard_pile.clear();
        self.draw_pile.clear();
        self.draw_pile.extend(Card::full_deck());
        self.rng.shuffle(&mut self.draw_pile);
    }

    /// Remove and return the top card of the draw pile.
    ///
    /// Orientation is left as-is. Returns `None` when the pile is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.draw_pile.pop()
    }

    /// Shuffle the discard pile into a new draw pile and empty the discard.
    ///
    /// Cards are turned face-down as they return to the stock. The caller
    /// decides whether recycling is allowed; no check happens here.
    pub fn shuffle_in_discard_pile(&mut self) {
        let mut recycled = std::mem::take(&mut self.discard_pile);
        for card in recycled.iter_mut().filter(|c| c.is_face_up()) {
            card.flip();
        }
        self.rng.shuffle(&mut recycled);
        trace!("recycled {} discard cards into the draw pile", recycled.len());
        self.draw_pile.extend(recycled);
    }

    #[must_use]
    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    pub fn draw_pile_mut(&mut self) -> &mut Vec<Card> {
        &mut self.draw_pile
    }

    pub fn discard_pile_mut(&mut self) -> &mut Vec<Card> {
        &mut self.discard_pile
    }

    /// Top of the discard pile.
    #[must_use]
    pub fn top_discard(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    /// Seed of the deck's RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
