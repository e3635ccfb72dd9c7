//! Simulation configuration.
//!
//! `SimConfig` describes one game setup: hand size, starting counters,
//! starting deck, supply piles and the per-player strategy knobs. Cards are
//! referenced by name so a config can be written by hand or loaded from JSON;
//! `resolve_*` turns names into `CardId`s against a catalog and reports
//! unknown names as configuration errors.

use serde::{Deserialize, Serialize};

use super::error::{Result, SimError};
use crate::cards::{CardCatalog, CardId};

/// Configuration for a simulated game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Cards dealt at the start of every turn.
    pub hand_size: usize,

    /// Actions available at the start of a turn.
    pub starting_actions: u32,

    /// Buys available at the start of a turn.
    pub starting_buys: u32,

    /// Hard cap on hands per game; a game reaching it times out.
    pub max_hands: usize,

    /// Base seed. Game `i` of a batch uses `seed + i`.
    pub seed: u64,

    /// Starting deck of every player as (card name, copies).
    pub starting_deck: Vec<(String, u32)>,

    /// Supply piles as (card name, copies).
    pub supply: Vec<(String, u32)>,

    /// Card whose empty pile ends the game.
    pub game_end_card: String,

    /// Per-player province countdown. Each $8 hand counts it down once and
    /// provinces are bought once it reaches zero.
    pub province_delay: [u32; 2],
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            starting_actions: 1,
            starting_buys: 1,
            max_hands: 50,
            seed: 42,
            starting_deck: vec![("copper".to_string(), 5), ("estate".to_string(), 3)],
            supply: vec![
                ("silver".to_string(), 100),
                ("gold".to_string(), 100),
                ("nobles".to_string(), 12),
                ("province".to_string(), 12),
            ],
            game_end_card: "province".to_string(),
            province_delay: [3, 0],
        }
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    pub fn with_max_hands(mut self, max: usize) -> Self {
        self.max_hands = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_starting_deck(mut self, deck: Vec<(String, u32)>) -> Self {
        self.starting_deck = deck;
        self
    }

    pub fn with_supply(mut self, supply: Vec<(String, u32)>) -> Self {
        self.supply = supply;
        self
    }

    pub fn with_province_delay(mut self, delay: [u32; 2]) -> Self {
        self.province_delay = delay;
        self
    }

    /// Check the config against a catalog.
    pub fn validate(&self, catalog: &CardCatalog) -> Result<()> {
        if self.hand_size == 0 {
            return Err(SimError::InvalidConfig("hand_size must be at least 1".to_string()));
        }
        self.resolve_starting_deck(catalog)?;
        self.resolve_supply(catalog)?;
        self.resolve_game_end_card(catalog)?;
        Ok(())
    }

    /// Starting deck with names resolved to ids.
    pub fn resolve_starting_deck(&self, catalog: &CardCatalog) -> Result<Vec<(CardId, u32)>> {
        resolve(&self.starting_deck, catalog)
    }

    /// Supply piles with names resolved to ids.
    pub fn resolve_supply(&self, catalog: &CardCatalog) -> Result<Vec<(CardId, u32)>> {
        resolve(&self.supply, catalog)
    }

    pub fn resolve_game_end_card(&self, catalog: &CardCatalog) -> Result<CardId> {
        catalog.id(&self.game_end_card)
    }
}

fn resolve(entries: &[(String, u32)], catalog: &CardCatalog) -> Result<Vec<(CardId, u32)>> {
    entries
        .iter()
        .map(|(name, copies)| Ok((catalog.id(name)?, *copies)))
        .collect()
}
