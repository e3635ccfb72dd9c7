//! Scoring candidate hands.
//!
//! The score is the cash a hand is expected to spend: what it holds now plus
//! the average cash value of each card it still has to draw. Victory points
//! and longer-term effects are deliberately ignored.

use crate::cards::CardCatalog;
use crate::hand::HandState;
use crate::zones::Deck;

/// `count_cash(hand) + gained_cards(hand) * deck.expected_cash()`.
#[must_use]
pub fn expected_cash(hand: &HandState, deck: &Deck, catalog: &CardCatalog) -> f64 {
    hand.count_cash(catalog) as f64 + hand.gained_cards() as f64 * deck.expected_cash(catalog)
}

/// The best candidate by expected cash.
///
/// Equal scores go to the candidate with strictly more actions remaining,
/// then to the earliest candidate. Returns `None` for no candidates.
#[must_use]
pub fn best_hand<'a>(
    candidates: &'a [HandState],
    deck: &Deck,
    catalog: &CardCatalog,
) -> Option<&'a HandState> {
    let mut best: Option<(&HandState, f64)> = None;

    for hand in candidates {
        let score = expected_cash(hand, deck, catalog);
        let better = match best {
            None => true,
            Some((current, current_score)) => {
                let more_actions = hand.actions_remaining > current.actions_remaining;
                score > current_score || (score == current_score && more_actions)
            }
        };
        if better {
            best = Some((hand, score));
        }
    }

    best.map(|(hand, _)| hand)
}
