//! Game configuration.
//!
//! Hosts configure the engine at construction time. The rules themselves
//! (draw-1, seven tableau piles, four foundations) are fixed; what a host
//! can choose is where the randomness comes from.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Number of tableau piles in a Klondike layout.
pub const TABLEAU_PILE_COUNT: usize = 7;

/// Number of foundation piles (one per suit).
pub const FOUNDATION_PILE_COUNT: usize = 4;

/// Cards in a full deck.
pub const CARDS_PER_DECK: usize = 52;

/// Complete game configuration.
///
/// ```
/// use klondike_engine::core::GameConfig;
///
/// let config = GameConfig::new().with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for every shuffle in the game. `None` draws a random seed.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the seed so deals are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG described by this configuration.
    #[must_use]
    pub fn build_rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_random_seed(),
        }
    }
}
