//! Enumeration of every way to play out a hand's actions.

use rustc_hash::FxHashSet;

use crate::cards::CardCatalog;
use crate::core::Result;
use crate::hand::HandState;

/// Every distinct terminal state reachable by sequencing and resolving the
/// action cards in `hand`.
///
/// For each distinct action card in hand (first-seen order) the card is
/// played on a clone, an action is spent, and each way of resolving the
/// card is explored recursively. The unmodified `hand` ("stop here") is
/// always part of the result, after everything reachable from it.
///
/// Identical states reached along different paths appear once, at their
/// first position, so the order is stable for a given input.
///
/// The deck is never touched: draws are still pending on the returned states.
pub fn ways_to_play_hand(hand: &HandState, catalog: &CardCatalog) -> Result<Vec<HandState>> {
    let mut seen = FxHashSet::default();
    let mut results = Vec::new();
    collect(hand, catalog, &mut seen, &mut results)?;
    log::trace!(
        target: "play",
        "{} ways to play {:?}",
        results.len(),
        catalog.names(hand.cards_in_hand())
    );
    Ok(results)
}

fn collect(
    hand: &HandState,
    catalog: &CardCatalog,
    seen: &mut FxHashSet<HandState>,
    results: &mut Vec<HandState>,
) -> Result<()> {
    if seen.contains(hand) {
        // Everything reachable from here is already collected
        return Ok(());
    }

    if hand.can_play_action(catalog) {
        for card in hand.distinct_cards() {
            let Some(action) = catalog.action(card) else {
                continue;
            };

            let mut next = hand.clone();
            next.play(card)?;
            next.actions_remaining -= 1;

            for branch in action.ways_to_play(&next, catalog)? {
                collect(&branch, catalog, seen, results)?;
            }
        }
    }

    if seen.insert(hand.clone()) {
        results.push(hand.clone());
    }
    Ok(())
}
