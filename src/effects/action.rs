//! Card actions and their enumeration.
//!
//! `Action` is a closed sum type: every effect kind is a variant, and each
//! variant supports the same four capabilities:
//!
//! - `apply`: the single resulting state of a non-branching effect
//! - `ways_to_play`: every distinct state reachable through the effect's
//!   internal choices
//! - `describe`: human-readable summary
//! - `apply_human_choice`: resolve the effect from typed user input
//!
//! Actions only touch the `HandState` they are given. Deck effects are
//! queued as `DeckAction`s and run later by the turn driver.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::combinations::{k_subsets, Combination};
use crate::cards::CardCatalog;
use crate::core::{Result, SimError};
use crate::hand::{DeckAction, HandState};

/// A composable effect attached to an action card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// +n actions.
    GainActions(u32),

    /// Draw `draw` cards, then put `replace` cards from hand back on the deck.
    GainCards { draw: u32, replace: u32 },

    /// Draw n cards, but only when no actions remain after playing this card.
    GainCardsIfNoActions(u32),

    /// +n buys.
    GainBuys(u32),

    /// +$n.
    GainCash(u32),

    /// Discard any number of cards that have no cash value, +$1 each.
    DiscardForCash,

    /// Pick exactly `k` distinct entries of `choices` and apply them all.
    Choose { choices: Vec<Action>, k: usize },
}

impl Action {
    /// Plain "+n Cards".
    #[must_use]
    pub fn cards(count: u32) -> Self {
        Action::GainCards {
            draw: count,
            replace: 0,
        }
    }

    /// Choose `k` of `choices`.
    #[must_use]
    pub fn choose(k: usize, choices: Vec<Action>) -> Self {
        Action::Choose { choices, k }
    }

    /// Every effect in `effects`, applied together.
    #[must_use]
    pub fn all(effects: Vec<Action>) -> Self {
        let k = effects.len();
        Action::Choose { choices: effects, k }
    }

    /// Reject impossible choices, including inside nested choices.
    pub fn validate(&self) -> Result<()> {
        if let Action::Choose { choices, k } = self {
            if *k > choices.len() {
                return Err(SimError::InvalidChoose {
                    k: *k,
                    choices: choices.len(),
                });
            }
            for choice in choices {
                choice.validate()?;
            }
        }
        Ok(())
    }

    /// Apply the effect, producing one state.
    ///
    /// For effects with internal choice this is the first way to play:
    /// discard nothing, or the lowest-numbered choices.
    pub fn apply(&self, hand: &HandState, catalog: &CardCatalog) -> Result<HandState> {
        match self {
            Action::DiscardForCash | Action::Choose { .. } => Ok(self
                .ways_to_play(hand, catalog)?
                .into_iter()
                .next()
                .unwrap_or_else(|| hand.clone())),
            _ => {
                let mut next = hand.clone();
                self.apply_counters(&mut next);
                Ok(next)
            }
        }
    }

    /// Every state reachable by the effect's choices, in a fixed order.
    ///
    /// - `DiscardForCash`: one branch per sub-multiset of the discardable
    ///   cards, grouped by card, so identical copies never produce duplicate
    ///   branches. Discarding nothing comes first.
    /// - `Choose`: one branch per k-subset of choices (lexicographic), with
    ///   chosen effects applied in index order and branching sub-effects
    ///   expanded as a cross product.
    /// - Everything else: exactly one branch.
    pub fn ways_to_play(&self, hand: &HandState, catalog: &CardCatalog) -> Result<Vec<HandState>> {
        match self {
            Action::DiscardForCash => discard_for_cash_ways(hand, catalog),
            Action::Choose { choices, k } => choose_ways(hand, choices, *k, catalog),
            _ => {
                let mut next = hand.clone();
                self.apply_counters(&mut next);
                Ok(vec![next])
            }
        }
    }

    fn apply_counters(&self, hand: &mut HandState) {
        match *self {
            Action::GainActions(n) => hand.actions_remaining += n,
            Action::GainCards { draw, replace } => queue_cards(hand, draw, replace),
            Action::GainCardsIfNoActions(n) => {
                if hand.actions_remaining == 0 {
                    queue_cards(hand, n, 0);
                }
            }
            Action::GainBuys(n) => hand.buys_remaining += n,
            Action::GainCash(n) => hand.cash_offset += i64::from(n),
            Action::DiscardForCash | Action::Choose { .. } => {}
        }
    }

    /// Human-readable summary of the effect.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Action::GainActions(n) => plus(*n, "Action"),
            Action::GainCards { draw, replace: 0 } => plus(*draw, "Card"),
            Action::GainCards { draw, replace } => {
                let back = if *replace == 1 {
                    "1 card".to_string()
                } else {
                    format!("{replace} cards")
                };
                format!("{}, then put {back} back on your deck", plus(*draw, "Card"))
            }
            Action::GainCardsIfNoActions(n) => format!("{} if no Actions remain", plus(*n, "Card")),
            Action::GainBuys(n) => plus(*n, "Buy"),
            Action::GainCash(n) => format!("+${n}"),
            Action::DiscardForCash => {
                "Discard any number of cards without cash value for +$1 each".to_string()
            }
            Action::Choose { choices, k } if *k == choices.len() => choices
                .iter()
                .map(Action::describe)
                .collect::<Vec<_>>()
                .join(", "),
            Action::Choose { choices, k } => {
                let listed: Vec<_> = choices
                    .iter()
                    .enumerate()
                    .map(|(i, c)| format!("{}) {}", i + 1, c.describe()))
                    .collect();
                format!("Choose {k} of: {}", listed.join("; "))
            }
        }
    }

    /// Resolve the effect from user input and apply it to `hand`.
    ///
    /// - `Choose`: exactly `k` distinct choice numbers, 1-based, separated
    ///   by spaces or commas. Blank input is accepted when every choice is
    ///   taken. Chosen sub-effects that need their own input get none.
    /// - `DiscardForCash`: names of the cards to discard, repeated for
    ///   several copies. Blank input discards nothing.
    /// - Other effects ignore the input.
    ///
    /// On error `hand` is left exactly as it was.
    pub fn apply_human_choice(
        &self,
        hand: &mut HandState,
        input: &str,
        catalog: &CardCatalog,
    ) -> Result<()> {
        let mut working = hand.clone();
        match self {
            Action::Choose { choices, k } => {
                for index in parse_choices(input, choices.len(), *k)? {
                    choices[index].apply_human_choice(&mut working, "", catalog)?;
                }
            }
            Action::DiscardForCash => {
                for name in tokens(input) {
                    let card = catalog
                        .id(name)
                        .map_err(|_| SimError::InvalidInput(format!("no card named '{name}'")))?;
                    if catalog.cash(card) > 0 {
                        return Err(SimError::NotDiscardable(card));
                    }
                    working.discard(card)?;
                    working.cash_offset += 1;
                }
            }
            _ => self.apply_counters(&mut working),
        }
        *hand = working;
        Ok(())
    }
}

fn plus(n: u32, noun: &str) -> String {
    if n == 1 {
        format!("+1 {noun}")
    } else {
        format!("+{n} {noun}s")
    }
}

fn queue_cards(hand: &mut HandState, draw: u32, replace: u32) {
    for _ in 0..draw {
        hand.queue_deck_action(DeckAction::Draw);
    }
    for _ in 0..replace {
        hand.queue_deck_action(DeckAction::Replace);
    }
}

fn discard_for_cash_ways(hand: &HandState, catalog: &CardCatalog) -> Result<Vec<HandState>> {
    let mut ways = vec![hand.clone()];

    for card in hand.distinct_cards() {
        if catalog.cash(card) > 0 {
            continue;
        }
        let copies = hand.count(card);
        let mut next = Vec::with_capacity(ways.len() * (copies + 1));
        for way in &ways {
            let mut current = way.clone();
            next.push(current.clone());
            for _ in 0..copies {
                current.discard(card)?;
                current.cash_offset += 1;
                next.push(current.clone());
            }
        }
        ways = next;
    }

    Ok(ways)
}

fn choose_ways(
    hand: &HandState,
    choices: &[Action],
    k: usize,
    catalog: &CardCatalog,
) -> Result<Vec<HandState>> {
    if k > choices.len() {
        return Err(SimError::InvalidChoose {
            k,
            choices: choices.len(),
        });
    }

    let mut ways = Vec::new();
    for combination in k_subsets(choices.len(), k) {
        let mut branches = vec![hand.clone()];
        for &index in &combination {
            let mut next = Vec::with_capacity(branches.len());
            for branch in &branches {
                next.extend(choices[index].ways_to_play(branch, catalog)?);
            }
            branches = next;
        }
        ways.extend(branches);
    }
    Ok(ways)
}

fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
}

fn parse_choices(input: &str, n: usize, k: usize) -> Result<Combination> {
    let mut picks: Combination = SmallVec::new();

    for token in tokens(input) {
        let number: usize = token
            .parse()
            .ok()
            .filter(|v| (1..=n).contains(v))
            .ok_or_else(|| {
                SimError::InvalidInput(format!("'{token}' is not a choice between 1 and {n}"))
            })?;
        if picks.contains(&(number - 1)) {
            return Err(SimError::InvalidInput(format!("choice {number} picked twice")));
        }
        picks.push(number - 1);
    }

    if picks.is_empty() && k == n {
        return Ok((0..n).collect());
    }
    if picks.len() != k {
        return Err(SimError::InvalidInput(format!("pick exactly {k} of {n} choices")));
    }

    picks.sort_unstable();
    Ok(picks)
}
