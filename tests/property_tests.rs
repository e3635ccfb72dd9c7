//! Property tests for actions, enumeration and hand values.

use deckbuild_sim::effects::combinations::binomial;
use deckbuild_sim::{ways_to_play_hand, Action, CardCatalog, CardId, HandState};
use proptest::prelude::*;
use rustc_hash::FxHashSet;

fn simple_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0u32..4).prop_map(Action::GainActions),
        (0u32..4).prop_map(Action::cards),
        (0u32..4).prop_map(Action::GainBuys),
        (0u32..4).prop_map(Action::GainCash),
    ]
}

/// Hands of 0-7 cards drawn from the standard set.
fn hand_cards(catalog: &CardCatalog) -> impl Strategy<Value = Vec<CardId>> {
    let ids: Vec<CardId> = catalog.iter().map(|c| c.id).collect();
    prop::collection::vec(prop::sample::select(ids), 0..7)
}

proptest! {
    #[test]
    fn prop_choose_has_binomial_branches(
        choices in prop::collection::vec(simple_action(), 0..6),
        k in 0usize..6,
    ) {
        prop_assume!(k <= choices.len());
        let catalog = CardCatalog::standard();
        let hand = HandState::new(Vec::<CardId>::new(), 1, 1);

        let ways = Action::choose(k, choices.clone()).ways_to_play(&hand, &catalog).unwrap();

        prop_assert_eq!(ways.len(), binomial(choices.len(), k));
    }

    #[test]
    fn prop_no_actions_left_is_terminal(cards in hand_cards(&CardCatalog::standard())) {
        let catalog = CardCatalog::standard();
        let hand = HandState::new(cards, 0, 1);

        prop_assert_eq!(ways_to_play_hand(&hand, &catalog).unwrap(), vec![hand]);
    }

    #[test]
    fn prop_enumeration_is_distinct_and_keeps_stop(
        cards in hand_cards(&CardCatalog::standard()),
        actions in 0u32..3,
    ) {
        let catalog = CardCatalog::standard();
        let hand = HandState::new(cards, actions, 1);

        let ways = ways_to_play_hand(&hand, &catalog).unwrap();
        let unique: FxHashSet<_> = ways.iter().collect();

        prop_assert_eq!(unique.len(), ways.len());
        prop_assert_eq!(ways.last(), Some(&hand));
        for way in &ways {
            // Every card is still accounted for
            prop_assert_eq!(
                way.cards_in_hand().len() + way.played().len() + way.discarded().len(),
                hand.cards_in_hand().len()
            );
        }
    }

    #[test]
    fn prop_clone_mutation_leaves_original(
        cards in hand_cards(&CardCatalog::standard()),
        cash in -3i64..5,
    ) {
        let catalog = CardCatalog::standard();
        let original = HandState::new(cards, 1, 1);
        let snapshot = (
            original.cards_in_hand().clone(),
            original.played().clone(),
            original.discarded().clone(),
            original.actions_remaining,
            original.buys_remaining,
            original.cash_offset,
        );

        let mut copy = original.clone();
        if let Some(&first) = copy.cards_in_hand().front() {
            copy.play(first).unwrap();
        }
        if let Some(&next) = copy.cards_in_hand().front() {
            copy.discard(next).unwrap();
        }
        copy.actions_remaining += 2;
        copy.buys_remaining = 0;
        copy.cash_offset = cash;
        ways_to_play_hand(&copy, &catalog).unwrap();

        prop_assert_eq!(
            (
                original.cards_in_hand().clone(),
                original.played().clone(),
                original.discarded().clone(),
                original.actions_remaining,
                original.buys_remaining,
                original.cash_offset,
            ),
            snapshot
        );
    }
}
