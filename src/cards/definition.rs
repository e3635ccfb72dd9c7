//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type:
//! cost, cash value, victory points and an optional action. Copies of a
//! card in decks and hands are just repeated `CardId`s.

use serde::{Deserialize, Serialize};

use crate::effects::Action;

/// Identifier for a card definition, interned by the catalog.
///
/// This identifies the "type" of card (e.g., "nobles"), not a copy of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the catalog's definition table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use deckbuild_sim::cards::{CardDefinition, CardId};
/// use deckbuild_sim::effects::Action;
///
/// let smithy = CardDefinition::new(CardId::new(0), "smithy")
///     .with_cost(4)
///     .with_action(Action::cards(3));
///
/// assert!(smithy.is_action());
/// assert_eq!(smithy.describe(), "smithy ($4): +3 Cards");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Unique card name, used by configs and human input.
    pub name: String,

    /// Price in the supply.
    pub cost: u32,

    /// Cash produced while the card sits in hand.
    pub cash: u32,

    /// Victory points counted at game end.
    pub victory: u32,

    /// Effect when played as an action.
    pub action: Option<Action>,
}

impl CardDefinition {
    /// Create a card with no cost, value or action.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cost: 0,
            cash: 0,
            victory: 0,
            action: None,
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_cash(mut self, cash: u32) -> Self {
        self.cash = cash;
        self
    }

    #[must_use]
    pub fn with_victory(mut self, victory: u32) -> Self {
        self.victory = victory;
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Does this card have an action component?
    #[must_use]
    pub fn is_action(&self) -> bool {
        self.action.is_some()
    }

    /// One-line human-readable summary.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.cash > 0 {
            parts.push(format!("${}", self.cash));
        }
        if self.victory > 0 {
            parts.push(format!("{} VP", self.victory));
        }
        if let Some(action) = &self.action {
            parts.push(action.describe());
        }
        if parts.is_empty() {
            format!("{} (${})", self.name, self.cost)
        } else {
            format!("{} (${}): {}", self.name, self.cost, parts.join(", "))
        }
    }
}
