//! The supply table: piles of cards available to buy.

use rustc_hash::FxHashMap;

use super::deck::Deck;
use crate::cards::CardId;
use crate::core::{Result, SimError};

/// Supply piles shared by all players of one game.
#[derive(Clone, Debug)]
pub struct Table {
    piles: FxHashMap<CardId, u32>,
    /// Pile order as configured, for stable iteration.
    order: Vec<CardId>,
    game_end_card: CardId,
}

impl Table {
    /// Create a table from (card, copies) piles.
    ///
    /// The game ends when the `game_end_card` pile is empty (or missing), or
    /// when any two piles are empty.
    #[must_use]
    pub fn new(piles: &[(CardId, u32)], game_end_card: CardId) -> Self {
        let mut table = Self {
            piles: FxHashMap::default(),
            order: Vec::with_capacity(piles.len()),
            game_end_card,
        };
        for &(card, copies) in piles {
            if !table.piles.contains_key(&card) {
                table.order.push(card);
            }
            *table.piles.entry(card).or_insert(0) += copies;
        }
        table
    }

    /// Copies left in a pile; 0 for cards not on the table.
    #[must_use]
    pub fn count(&self, card: CardId) -> u32 {
        self.piles.get(&card).copied().unwrap_or(0)
    }

    /// Take one card from its pile into a deck.
    ///
    /// Fails with `EmptyPile` without touching the deck if none are left.
    /// Cash is the caller's concern.
    pub fn buy(&mut self, card: CardId, deck: &mut Deck) -> Result<()> {
        let pile = self
            .piles
            .get_mut(&card)
            .filter(|left| **left > 0)
            .ok_or(SimError::EmptyPile(card))?;
        *pile -= 1;
        deck.gain(card);
        Ok(())
    }

    #[must_use]
    pub fn is_game_end(&self) -> bool {
        if self.count(self.game_end_card) == 0 {
            return true;
        }
        self.piles.values().filter(|&&left| left == 0).count() >= 2
    }

    /// Cards with at least one copy left, in pile order.
    #[must_use]
    pub fn available_cards(&self) -> Vec<CardId> {
        self.order
            .iter()
            .copied()
            .filter(|&card| self.count(card) > 0)
            .collect()
    }
}
