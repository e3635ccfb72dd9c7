//! Card catalog for definition lookup.
//!
//! The `CardCatalog` owns every card definition of a game and interns card
//! names into dense `CardId`s. Registration validates each card's action,
//! so a malformed definition (e.g. "choose 3 of 2") is rejected while the
//! catalog is being built and never surfaces during play.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::core::{Result, SimError};
use crate::effects::Action;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use deckbuild_sim::cards::{CardCatalog, CardDefinition, CardId};
///
/// let mut catalog = CardCatalog::new();
/// let copper = catalog
///     .register(CardDefinition::new(CardId::new(0), "copper").with_cash(1))
///     .unwrap();
///
/// assert_eq!(catalog.id("copper").unwrap(), copper);
/// assert_eq!(catalog.card(copper).cash, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<CardDefinition>,
    by_name: FxHashMap<String, CardId>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard card set used by the bundled strategy and games.
    ///
    /// | card | cost | cash | VP | action |
    /// |---|---|---|---|---|
    /// | copper | 0 | 1 | | |
    /// | silver | 3 | 2 | | |
    /// | gold | 6 | 3 | | |
    /// | estate | 2 | | 1 | |
    /// | province | 8 | | 6 | |
    /// | nobles | 6 | | 2 | choose one: +3 cards or +2 actions |
    /// | village | 3 | | | +1 card, +2 actions |
    /// | smithy | 4 | | | +3 cards |
    /// | courtyard | 2 | | | +3 cards, put 1 back |
    /// | pawn | 2 | | | choose two: +1 card, +1 action, +1 buy, +$1 |
    /// | market | 5 | | | +1 card, +1 action, +1 buy, +$1 |
    /// | festival | 5 | | | +2 actions, +1 buy, +$2 |
    /// | vault | 5 | | | +2 cards, discard any for +$1 each |
    /// | library | 5 | | | +2 cards if no actions left |
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for card in standard_cards() {
            catalog
                .register(card)
                .expect("standard card set is well formed");
        }
        catalog
    }

    /// Register a card definition, assigning it the next free ID.
    ///
    /// The `id` field of `card` is overwritten. Fails on a duplicate name
    /// or an invalid action.
    pub fn register(&mut self, mut card: CardDefinition) -> Result<CardId> {
        if self.by_name.contains_key(&card.name) {
            return Err(SimError::DuplicateCard(card.name));
        }
        if let Some(action) = &card.action {
            action.validate()?;
        }

        let id = CardId::new(self.cards.len() as u32);
        card.id = id;
        self.by_name.insert(card.name.clone(), id);
        self.cards.push(card);
        Ok(id)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(id.index())
    }

    /// Get a card definition by ID, panicking if not found.
    ///
    /// IDs handed out by this catalog are always valid.
    #[must_use]
    pub fn card(&self, id: CardId) -> &CardDefinition {
        &self.cards[id.index()]
    }

    /// Resolve a card name.
    pub fn id(&self, name: &str) -> Result<CardId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| SimError::UnknownCard(name.to_string()))
    }

    /// Name of a card.
    #[must_use]
    pub fn name(&self, id: CardId) -> &str {
        &self.card(id).name
    }

    /// Names of a sequence of cards, for logs and display.
    pub fn names<'c>(&self, cards: impl IntoIterator<Item = &'c CardId>) -> Vec<&str> {
        cards.into_iter().map(|&id| self.name(id)).collect()
    }

    /// Action of a card, if it has one.
    #[must_use]
    pub fn action(&self, id: CardId) -> Option<&Action> {
        self.card(id).action.as_ref()
    }

    #[must_use]
    pub fn is_action(&self, id: CardId) -> bool {
        self.card(id).is_action()
    }

    #[must_use]
    pub fn cash(&self, id: CardId) -> u32 {
        self.card(id).cash
    }

    #[must_use]
    pub fn victory(&self, id: CardId) -> u32 {
        self.card(id).victory
    }

    #[must_use]
    pub fn cost(&self, id: CardId) -> u32 {
        self.card(id).cost
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }
}

fn standard_cards() -> Vec<CardDefinition> {
    let card = |name: &str| CardDefinition::new(CardId::new(0), name);

    vec![
        card("copper").with_cash(1),
        card("silver").with_cost(3).with_cash(2),
        card("gold").with_cost(6).with_cash(3),
        card("estate").with_cost(2).with_victory(1),
        card("province").with_cost(8).with_victory(6),
        card("nobles")
            .with_cost(6)
            .with_victory(2)
            .with_action(Action::choose(1, vec![Action::cards(3), Action::GainActions(2)])),
        card("village")
            .with_cost(3)
            .with_action(Action::all(vec![Action::cards(1), Action::GainActions(2)])),
        card("smithy").with_cost(4).with_action(Action::cards(3)),
        card("courtyard")
            .with_cost(2)
            .with_action(Action::GainCards { draw: 3, replace: 1 }),
        card("pawn").with_cost(2).with_action(Action::choose(
            2,
            vec![
                Action::cards(1),
                Action::GainActions(1),
                Action::GainBuys(1),
                Action::GainCash(1),
            ],
        )),
        card("market").with_cost(5).with_action(Action::all(vec![
            Action::cards(1),
            Action::GainActions(1),
            Action::GainBuys(1),
            Action::GainCash(1),
        ])),
        card("festival").with_cost(5).with_action(Action::all(vec![
            Action::GainActions(2),
            Action::GainBuys(1),
            Action::GainCash(2),
        ])),
        card("vault")
            .with_cost(5)
            .with_action(Action::all(vec![Action::cards(2), Action::DiscardForCash])),
        card("library")
            .with_cost(5)
            .with_action(Action::GainCardsIfNoActions(2)),
    ]
}
