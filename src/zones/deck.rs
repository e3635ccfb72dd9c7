//! A player's deck: draw pile, discard pile and ownership counts.
//!
//! The draw pile is ordered with the top at the end of the `Vec`. When it
//! runs dry, `draw` reshuffles the discard pile into it; when both are empty
//! the deck is exhausted and `draw` returns `None`.
//!
//! `card_counts` tracks every copy the player owns, including copies that
//! are out in a hand. Cards leaving for a hand are not uncounted; they come
//! back through `discard` when the hand finishes.

use rustc_hash::FxHashMap;

use crate::cards::{CardCatalog, CardId};
use crate::core::GameRng;

/// Draw and discard piles with shuffle-on-empty semantics.
#[derive(Clone, Debug)]
pub struct Deck {
    draw_pile: Vec<CardId>,
    discard_pile: Vec<CardId>,
    card_counts: FxHashMap<CardId, u32>,
    rng: GameRng,
}

impl Deck {
    /// Build a shuffled deck from (card, copies) entries.
    #[must_use]
    pub fn new(cards: &[(CardId, u32)], rng: GameRng) -> Self {
        let draw_pile = cards
            .iter()
            .flat_map(|&(card, copies)| std::iter::repeat(card).take(copies as usize))
            .collect();
        let mut deck = Self::from_piles(draw_pile, Vec::new(), rng);
        deck.rng.shuffle(&mut deck.draw_pile);
        deck
    }

    /// Build a deck with explicit pile contents, without shuffling.
    ///
    /// `draw_pile` is ordered bottom to top.
    #[must_use]
    pub fn from_piles(draw_pile: Vec<CardId>, discard_pile: Vec<CardId>, rng: GameRng) -> Self {
        let mut card_counts = FxHashMap::default();
        for &card in draw_pile.iter().chain(discard_pile.iter()) {
            *card_counts.entry(card).or_insert(0) += 1;
        }
        Self {
            draw_pile,
            discard_pile,
            card_counts,
            rng,
        }
    }

    /// Draw the top card, reshuffling the discard pile in if needed.
    pub fn draw(&mut self) -> Option<CardId> {
        if self.draw_pile.is_empty() {
            self.shuffle();
        }
        self.draw_pile.pop()
    }

    /// Draw up to `count` cards. A short result means the deck ran out.
    pub fn deal(&mut self, count: usize) -> Vec<CardId> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            match self.draw() {
                Some(card) => cards.push(card),
                None => break,
            }
        }
        cards
    }

    /// Return an owned card to the discard pile.
    pub fn discard(&mut self, card: CardId) {
        self.discard_pile.push(card);
    }

    /// Add a newly acquired card to the discard pile.
    pub fn gain(&mut self, card: CardId) {
        *self.card_counts.entry(card).or_insert(0) += 1;
        self.discard_pile.push(card);
    }

    /// Put an owned card back on top of the draw pile.
    pub fn replace(&mut self, card: CardId) {
        self.draw_pile.push(card);
    }

    /// Move the discard pile into the draw pile and shuffle it.
    pub fn shuffle(&mut self) {
        if self.discard_pile.is_empty() {
            return;
        }
        log::trace!(target: "hand", "reshuffling {} discards", self.discard_pile.len());
        self.draw_pile.append(&mut self.discard_pile);
        self.rng.shuffle(&mut self.draw_pile);
    }

    // === Queries ===

    /// Copies of `card` owned, wherever they are.
    #[must_use]
    pub fn count(&self, card: CardId) -> u32 {
        self.card_counts.get(&card).copied().unwrap_or(0)
    }

    /// Total cards owned.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.card_counts.values().sum()
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Draw pile, bottom to top.
    #[must_use]
    pub fn draw_pile(&self) -> &[CardId] {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[CardId] {
        &self.discard_pile
    }

    /// Ownership counts, sorted by card for stable output.
    #[must_use]
    pub fn card_counts(&self) -> Vec<(CardId, u32)> {
        let mut counts: Vec<_> = self.card_counts.iter().map(|(&c, &n)| (c, n)).collect();
        counts.sort_unstable();
        counts
    }

    /// Victory points across every owned card.
    #[must_use]
    pub fn count_victory(&self, catalog: &CardCatalog) -> u32 {
        self.card_counts
            .iter()
            .map(|(&card, &copies)| catalog.victory(card) * copies)
            .sum()
    }

    /// Average cash value per owned card; 0 for an empty deck.
    #[must_use]
    pub fn expected_cash(&self, catalog: &CardCatalog) -> f64 {
        let size = self.size();
        if size == 0 {
            return 0.0;
        }
        let cash: u32 = self
            .card_counts
            .iter()
            .map(|(&card, &copies)| catalog.cash(card) * copies)
            .sum();
        f64::from(cash) / f64::from(size)
    }
}
