//! Hand state: one turn in progress.
//!
//! A `HandState` holds the cards in hand, the cards played and discarded
//! this turn, the turn counters, and a queue of deferred deck operations.
//!
//! ## Deferred deck operations
//!
//! Actions never touch the `Deck` while the search explores hypothetical
//! branches. "+3 Cards" queues three `DeckAction::Draw`s instead; only the
//! branch the turn driver commits replays its queue against the real deck.
//!
//! ## Cloning
//!
//! All sequences are `im::Vector`s, so `clone()` is O(1) with structural
//! sharing and mutating a clone never affects the original.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardCatalog, CardId};
use crate::core::{Result, SimConfig, SimError};
use crate::zones::Deck;

/// A deck operation deferred until a branch is committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckAction {
    /// Draw the top card of the deck into hand.
    Draw,
    /// Put a card from hand back on top of the deck.
    Replace,
}

/// Snapshot of a turn in progress.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandState {
    cards_in_hand: Vector<CardId>,
    played: Vector<CardId>,
    discarded: Vector<CardId>,

    /// Actions left this turn.
    pub actions_remaining: u32,

    /// Buys left this turn.
    pub buys_remaining: u32,

    /// Cash from effects, on top of the cash value of cards in hand.
    pub cash_offset: i64,

    pending_deck_actions: Vector<DeckAction>,
}

impl HandState {
    /// Create a hand from explicit cards.
    #[must_use]
    pub fn new(
        cards: impl IntoIterator<Item = CardId>,
        actions_remaining: u32,
        buys_remaining: u32,
    ) -> Self {
        Self {
            cards_in_hand: cards.into_iter().collect(),
            played: Vector::new(),
            discarded: Vector::new(),
            actions_remaining,
            buys_remaining,
            cash_offset: 0,
            pending_deck_actions: Vector::new(),
        }
    }

    /// Deal a fresh hand from a deck using the configured hand size and counters.
    ///
    /// A nearly exhausted deck deals a short hand.
    pub fn deal(deck: &mut Deck, config: &SimConfig) -> Self {
        let cards = deck.deal(config.hand_size);
        log::debug!(target: "hand", "dealt {} cards: {:?}", cards.len(), cards);
        Self::new(cards, config.starting_actions, config.starting_buys)
    }

    // === Accessors ===

    #[must_use]
    pub fn cards_in_hand(&self) -> &Vector<CardId> {
        &self.cards_in_hand
    }

    #[must_use]
    pub fn played(&self) -> &Vector<CardId> {
        &self.played
    }

    #[must_use]
    pub fn discarded(&self) -> &Vector<CardId> {
        &self.discarded
    }

    #[must_use]
    pub fn pending_deck_actions(&self) -> &Vector<DeckAction> {
        &self.pending_deck_actions
    }

    /// Number of copies of `card` in hand.
    #[must_use]
    pub fn count(&self, card: CardId) -> usize {
        self.cards_in_hand.iter().filter(|&&c| c == card).count()
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards_in_hand.contains(&card)
    }

    /// Distinct cards in hand, in first-seen order.
    #[must_use]
    pub fn distinct_cards(&self) -> SmallVec<[CardId; 8]> {
        let mut distinct = SmallVec::new();
        for &card in &self.cards_in_hand {
            if !distinct.contains(&card) {
                distinct.push(card);
            }
        }
        distinct
    }

    // === Counting ===

    /// Cash value of the cards in hand plus `cash_offset`.
    #[must_use]
    pub fn count_cash(&self, catalog: &CardCatalog) -> i64 {
        let cards: i64 = self
            .cards_in_hand
            .iter()
            .map(|&c| i64::from(catalog.cash(c)))
            .sum();
        cards + self.cash_offset
    }

    /// Number of action cards in hand (copies counted).
    #[must_use]
    pub fn count_actions(&self, catalog: &CardCatalog) -> usize {
        self.cards_in_hand.iter().filter(|&&c| catalog.is_action(c)).count()
    }

    /// Is there an action left and a card to spend it on?
    #[must_use]
    pub fn can_play_action(&self, catalog: &CardCatalog) -> bool {
        self.actions_remaining > 0 && self.count_actions(catalog) > 0
    }

    /// Net cards this hand will gain once its pending draws and replaces run.
    #[must_use]
    pub fn gained_cards(&self) -> i64 {
        self.pending_deck_actions
            .iter()
            .map(|a| match a {
                DeckAction::Draw => 1,
                DeckAction::Replace => -1,
            })
            .sum()
    }

    // === Mutators ===
    //
    // Each mutator checks its precondition first; a failed call leaves the
    // hand unchanged.

    /// Move one copy of `card` from hand to the played pile.
    ///
    /// Does not spend an action; the caller decides that.
    pub fn play(&mut self, card: CardId) -> Result<()> {
        self.take_from_hand(card)?;
        self.played.push_back(card);
        Ok(())
    }

    /// Move one copy of `card` from hand to the discarded pile.
    pub fn discard(&mut self, card: CardId) -> Result<()> {
        self.take_from_hand(card)?;
        self.discarded.push_back(card);
        Ok(())
    }

    /// Remove one copy of `card` from hand without tracking where it went.
    pub fn take_from_hand(&mut self, card: CardId) -> Result<()> {
        let index = self
            .cards_in_hand
            .iter()
            .position(|&c| c == card)
            .ok_or(SimError::CardNotInHand(card))?;
        self.cards_in_hand.remove(index);
        Ok(())
    }

    /// Queue a deferred deck operation.
    pub fn queue_deck_action(&mut self, action: DeckAction) {
        self.pending_deck_actions.push_back(action);
    }

    /// Drain the pending deck operations.
    pub fn take_pending_deck_actions(&mut self) -> Vector<DeckAction> {
        std::mem::take(&mut self.pending_deck_actions)
    }

    /// Drain the cards discarded this turn.
    pub fn take_discarded(&mut self) -> Vector<CardId> {
        std::mem::take(&mut self.discarded)
    }

    /// Draw real cards from the deck into hand. Returns how many arrived.
    pub fn draw(&mut self, deck: &mut Deck, count: usize) -> usize {
        let cards = deck.deal(count);
        log::debug!(target: "hand", "drew {:?}", cards);
        let drawn = cards.len();
        self.cards_in_hand.extend(cards);
        drawn
    }

    /// End the turn: every card in play, discarded or still in hand goes to
    /// the deck's discard pile, and pending operations are dropped.
    pub fn finish(mut self, deck: &mut Deck) {
        for card in self
            .played
            .iter()
            .chain(self.discarded.iter())
            .chain(self.cards_in_hand.iter())
        {
            deck.discard(*card);
        }
        self.pending_deck_actions.clear();
    }
}
