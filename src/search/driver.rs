//! The turn driver: greedy one-ply play of a hand's actions.
//!
//! Each step enumerates every way to play the current hand, takes the best
//! by `best_hand`, and commits only that branch to the real deck. The next
//! step starts again from the committed hand with the drawn cards now
//! known. Nothing is planned past the first draw.

use crate::cards::{CardCatalog, CardId};
use crate::core::Result;
use crate::hand::{DeckAction, HandState};
use crate::zones::Deck;

use super::enumerate::ways_to_play_hand;
use super::heuristic::best_hand;

/// Picks the card to put back when a committed branch holds a Replace.
pub trait ReplacePolicy {
    /// A card currently in `hand`, or `None` if the hand is empty.
    fn choose_card_to_replace(
        &mut self,
        hand: &HandState,
        catalog: &CardCatalog,
    ) -> Option<CardId>;
}

/// Puts back the least valuable card: lowest cash, non-actions before
/// actions, then lowest cost.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowestValueReplace;

impl ReplacePolicy for LowestValueReplace {
    fn choose_card_to_replace(
        &mut self,
        hand: &HandState,
        catalog: &CardCatalog,
    ) -> Option<CardId> {
        hand.cards_in_hand()
            .iter()
            .copied()
            .min_by_key(|&c| (catalog.cash(c), catalog.is_action(c), catalog.cost(c)))
    }
}

/// Play the hand's actions greedily and return the final hand.
///
/// Stops when no action can be played or when the best reachable state is
/// the current hand itself. Only committed branches touch `deck`. A replace
/// policy naming a card that is not in hand fails with `CardNotInHand`.
pub fn play_actions(
    mut hand: HandState,
    deck: &mut Deck,
    catalog: &CardCatalog,
    replace: &mut dyn ReplacePolicy,
) -> Result<HandState> {
    while hand.can_play_action(catalog) {
        let ways = ways_to_play_hand(&hand, catalog)?;
        let Some(best) = best_hand(&ways, deck, catalog) else {
            break;
        };
        if *best == hand {
            break;
        }

        let mut next = best.clone();
        log::debug!(
            target: "play",
            "played {:?}, {} actions left, {} cards pending",
            catalog.names(next.played()),
            next.actions_remaining,
            next.gained_cards()
        );
        commit(&mut next, deck, catalog, replace)?;
        hand = next;
    }
    Ok(hand)
}

/// Run a branch's pending deck actions against the real deck and move its
/// discarded cards to the discard pile.
fn commit(
    hand: &mut HandState,
    deck: &mut Deck,
    catalog: &CardCatalog,
    replace: &mut dyn ReplacePolicy,
) -> Result<()> {
    for action in hand.take_pending_deck_actions() {
        match action {
            DeckAction::Draw => {
                hand.draw(deck, 1);
            }
            DeckAction::Replace => {
                let Some(card) = replace.choose_card_to_replace(hand, catalog) else {
                    continue;
                };
                hand.take_from_hand(card)?;
                log::trace!(target: "play", "put {} back on the deck", catalog.name(card));
                deck.replace(card);
            }
        }
    }

    for card in hand.take_discarded() {
        deck.discard(card);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, SimError};

    /// Always puts back the same card, in hand or not.
    struct FixedReplace(CardId);

    impl ReplacePolicy for FixedReplace {
        fn choose_card_to_replace(
            &mut self,
            _hand: &HandState,
            _catalog: &CardCatalog,
        ) -> Option<CardId> {
            Some(self.0)
        }
    }

    fn ids(catalog: &CardCatalog, names: &[&str]) -> Vec<CardId> {
        names.iter().map(|n| catalog.id(n).unwrap()).collect()
    }

    #[test]
    fn test_lowest_value_replace() {
        let catalog = CardCatalog::standard();
        let hand = HandState::new(ids(&catalog, &["gold", "smithy", "estate", "copper"]), 0, 1);

        let card = LowestValueReplace.choose_card_to_replace(&hand, &catalog);
        // estate and smithy both have no cash; estate is not an action
        assert_eq!(card, catalog.id("estate").ok());

        let empty = HandState::new(Vec::<CardId>::new(), 0, 1);
        assert_eq!(LowestValueReplace.choose_card_to_replace(&empty, &catalog), None);
    }

    #[test]
    fn test_smithy_draws_for_real() {
        let catalog = CardCatalog::standard();
        let gold = catalog.id("gold").unwrap();
        let hand = HandState::new(ids(&catalog, &["smithy", "copper"]), 1, 1);
        let mut deck = Deck::from_piles(vec![gold, gold, gold, gold], Vec::new(), GameRng::new(1));

        let done = play_actions(hand, &mut deck, &catalog, &mut LowestValueReplace).unwrap();

        assert_eq!(done.count(gold), 3);
        assert_eq!(done.played().len(), 1);
        assert!(done.pending_deck_actions().is_empty());
        assert_eq!(deck.draw_pile_len(), 1);
    }

    #[test]
    fn test_no_beneficial_play_leaves_deck_alone() {
        let catalog = CardCatalog::standard();
        let copper = catalog.id("copper").unwrap();
        // Library draws nothing while actions remain, so playing it only costs an action
        let hand = HandState::new(ids(&catalog, &["library", "copper"]), 2, 1);
        let mut deck = Deck::from_piles(vec![copper; 3], Vec::new(), GameRng::new(1));

        let done =
            play_actions(hand.clone(), &mut deck, &catalog, &mut LowestValueReplace).unwrap();

        assert_eq!(done, hand);
        assert_eq!(deck.draw_pile_len(), 3);
    }

    #[test]
    fn test_courtyard_puts_a_card_back() {
        let catalog = CardCatalog::standard();
        let copper = catalog.id("copper").unwrap();
        let estate = catalog.id("estate").unwrap();
        let hand = HandState::new(ids(&catalog, &["courtyard", "gold"]), 1, 1);
        let mut deck = Deck::from_piles(vec![copper, estate, copper], Vec::new(), GameRng::new(1));

        let done = play_actions(hand, &mut deck, &catalog, &mut LowestValueReplace).unwrap();

        // Drew copper, estate, copper and put the estate back
        assert_eq!(done.cards_in_hand().len(), 3);
        assert!(!done.contains(estate));
        assert!(done.contains(copper));
        assert_eq!(deck.draw_pile(), &[estate]);
    }

    #[test]
    fn test_replacing_a_card_not_in_hand_fails() {
        let catalog = CardCatalog::standard();
        let copper = catalog.id("copper").unwrap();
        let province = catalog.id("province").unwrap();
        let hand = HandState::new(ids(&catalog, &["courtyard", "gold"]), 1, 1);
        let mut deck = Deck::from_piles(vec![copper; 3], Vec::new(), GameRng::new(1));

        let result = play_actions(hand, &mut deck, &catalog, &mut FixedReplace(province));

        assert_eq!(result, Err(SimError::CardNotInHand(province)));
        assert!(!deck.draw_pile().contains(&province));
    }

    #[test]
    fn test_discarded_cards_reach_the_deck() {
        let catalog = CardCatalog::standard();
        let copper = catalog.id("copper").unwrap();
        let province = catalog.id("province").unwrap();
        // Vault: +2 Cards, discard cards without cash for +$1 each
        let hand = HandState::new(ids(&catalog, &["vault", "province", "province"]), 1, 1);
        let mut deck = Deck::from_piles(vec![copper, copper], Vec::new(), GameRng::new(1));

        let done = play_actions(hand, &mut deck, &catalog, &mut LowestValueReplace).unwrap();

        assert_eq!(done.count(province), 0);
        assert_eq!(done.cash_offset, 2);
        assert_eq!(done.count_cash(&catalog), 4);
        assert!(done.discarded().is_empty());
        assert_eq!(deck.discard_pile(), &[province, province]);
    }
}
