//! A player: a deck plus the policies that drive its turns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::strategy::BuyStrategy;
use crate::cards::{CardCatalog, CardId};
use crate::core::{Result, SimConfig, SimError};
use crate::hand::HandState;
use crate::search::{play_actions, LowestValueReplace, ReplacePolicy};
use crate::zones::{Deck, Table};

/// Cash statistics over a run of hands played without buying.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpendReport {
    pub hands: usize,
    pub average: f64,
    /// Hands producing more than $8.
    pub big_hands: usize,
    /// Hands per cash total.
    pub histogram: BTreeMap<i64, usize>,
}

pub struct Player {
    deck: Deck,
    strategy: Box<dyn BuyStrategy>,
    replace: Box<dyn ReplacePolicy>,
}

impl Player {
    /// Create a player putting back its lowest-value card on replaces.
    #[must_use]
    pub fn new(deck: Deck, strategy: Box<dyn BuyStrategy>) -> Self {
        Self {
            deck,
            strategy,
            replace: Box::new(LowestValueReplace),
        }
    }

    /// Use `replace` to pick the cards put back by Replace effects.
    #[must_use]
    pub fn with_replace_policy(mut self, replace: Box<dyn ReplacePolicy>) -> Self {
        self.replace = replace;
        self
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Deal a hand, play its actions, buy, and discard everything.
    ///
    /// Returns the cash the hand produced.
    pub fn play_hand(
        &mut self,
        table: &mut Table,
        catalog: &CardCatalog,
        config: &SimConfig,
    ) -> Result<i64> {
        let hand = self.play_turn_actions(catalog, config)?;
        let cash = hand.count_cash(catalog);
        self.play_buys(&hand, table, catalog)?;
        hand.finish(&mut self.deck);
        Ok(cash)
    }

    /// Like `play_hand`, but never buys.
    pub fn play_hand_without_buying(
        &mut self,
        catalog: &CardCatalog,
        config: &SimConfig,
    ) -> Result<i64> {
        let hand = self.play_turn_actions(catalog, config)?;
        let cash = hand.count_cash(catalog);
        hand.finish(&mut self.deck);
        Ok(cash)
    }

    fn play_turn_actions(
        &mut self,
        catalog: &CardCatalog,
        config: &SimConfig,
    ) -> Result<HandState> {
        let hand = HandState::deal(&mut self.deck, config);
        play_actions(hand, &mut self.deck, catalog, &mut *self.replace)
    }

    /// Spend the hand's cash and buys through the strategy.
    ///
    /// The strategy sees `begin_hand` once, then one `choose_buy` per buy.
    /// Returns the cards bought, in order. A strategy choosing a card it
    /// cannot afford fails with `InsufficientCash` before anything else is
    /// bought; an empty pile fails with `EmptyPile`.
    pub fn play_buys(
        &mut self,
        hand: &HandState,
        table: &mut Table,
        catalog: &CardCatalog,
    ) -> Result<Vec<CardId>> {
        let mut cash = hand.count_cash(catalog);
        log::debug!(target: "cash", "total cash: {}", cash);
        self.strategy.begin_hand(cash);

        let mut bought = Vec::new();
        for _ in 0..hand.buys_remaining {
            let Some(card) = self.strategy.choose_buy(cash, table, catalog) else {
                break;
            };
            let cost = catalog.cost(card);
            if i64::from(cost) > cash {
                return Err(SimError::InsufficientCash { cost, cash });
            }
            table.buy(card, &mut self.deck)?;
            cash -= i64::from(cost);
            bought.push(card);
        }
        Ok(bought)
    }

    /// Play `hands` hands without buying and summarize the cash they made.
    pub fn average_spend(
        &mut self,
        hands: usize,
        catalog: &CardCatalog,
        config: &SimConfig,
    ) -> Result<SpendReport> {
        let mut report = SpendReport {
            hands,
            ..SpendReport::default()
        };
        let mut total = 0;

        for _ in 0..hands {
            let cash = self.play_hand_without_buying(catalog, config)?;
            total += cash;
            if cash > 8 {
                report.big_hands += 1;
            }
            *report.histogram.entry(cash).or_insert(0) += 1;
        }

        if hands > 0 {
            report.average = total as f64 / hands as f64;
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use crate::games::nobles::NoblesBigMoney;

    /// Always asks for the same card.
    struct Stubborn(CardId);

    impl BuyStrategy for Stubborn {
        fn choose_buy(
            &mut self,
            _cash: i64,
            _table: &Table,
            _catalog: &CardCatalog,
        ) -> Option<CardId> {
            Some(self.0)
        }
    }

    /// Always puts back the same card.
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

    fn player(catalog: &CardCatalog, cards: &[(&str, u32)]) -> Player {
        let cards: Vec<_> = cards.iter().map(|&(n, c)| (catalog.id(n).unwrap(), c)).collect();
        let deck = Deck::new(&cards, GameRng::new(5));
        Player::new(deck, Box::new(NoblesBigMoney::new(catalog, 0).unwrap()))
    }

    #[test]
    fn test_play_hand_buys_and_discards() {
        let catalog = CardCatalog::standard();
        let config = SimConfig::default();
        let silver = catalog.id("silver").unwrap();
        let province = catalog.id("province").unwrap();
        let mut table = Table::new(&[(silver, 10), (province, 8)], province);
        let mut p = player(&catalog, &[("copper", 5)]);

        let cash = p.play_hand(&mut table, &catalog, &config).unwrap();

        assert_eq!(cash, 5);
        assert_eq!(table.count(silver), 9);
        assert_eq!(p.deck().count(silver), 1);
        assert_eq!(p.deck().size(), 6);
        assert_eq!(p.deck().discard_pile_len(), 6);
    }

    #[test]
    fn test_extra_buys_are_spent() {
        let catalog = CardCatalog::standard();
        let silver = catalog.id("silver").unwrap();
        let province = catalog.id("province").unwrap();
        let copper = catalog.id("copper").unwrap();
        let mut table = Table::new(&[(silver, 10), (province, 8)], province);
        let mut p = player(&catalog, &[("copper", 1)]);

        let mut hand = HandState::new([copper], 0, 2);
        hand.cash_offset = 11;

        // $12 buys a province, the $4 left buys a silver
        let bought = p.play_buys(&hand, &mut table, &catalog).unwrap();
        assert_eq!(bought, vec![province, silver]);
        assert_eq!(table.count(province), 7);
        assert_eq!(table.count(silver), 9);
    }

    #[test]
    fn test_province_delay_counts_hands_not_buys() {
        let catalog = CardCatalog::standard();
        let nobles = catalog.id("nobles").unwrap();
        let province = catalog.id("province").unwrap();
        let copper = catalog.id("copper").unwrap();
        let mut table = Table::new(&[(nobles, 4), (province, 8)], province);
        let deck = Deck::new(&[(copper, 5)], GameRng::new(5));
        let mut p = Player::new(deck, Box::new(NoblesBigMoney::new(&catalog, 2).unwrap()));

        // One $16 hand with two buys counts the delay down once
        let mut big = HandState::new([copper], 0, 2);
        big.cash_offset = 15;
        assert_eq!(p.play_buys(&big, &mut table, &catalog).unwrap(), vec![nobles, nobles]);
        assert_eq!(table.count(province), 8);

        let mut eight = HandState::new([copper], 0, 1);
        eight.cash_offset = 7;
        assert_eq!(p.play_buys(&eight, &mut table, &catalog).unwrap(), vec![province]);
    }

    #[test]
    fn test_replace_policy_must_name_a_card_in_hand() {
        let catalog = CardCatalog::standard();
        let config = SimConfig::default();
        let gold = catalog.id("gold").unwrap();
        let courtyard = catalog.id("courtyard").unwrap();
        let province = catalog.id("province").unwrap();
        let mut table = Table::new(&[(province, 8)], province);
        // Top of the draw pile is the last card: courtyard and four gold are dealt
        let mut piles = vec![gold; 5];
        piles.push(courtyard);
        let deck = Deck::from_piles(piles, Vec::new(), GameRng::new(5));
        let mut p = Player::new(deck, Box::new(NoblesBigMoney::new(&catalog, 0).unwrap()))
            .with_replace_policy(Box::new(FixedReplace(province)));

        assert_eq!(
            p.play_hand(&mut table, &catalog, &config),
            Err(SimError::CardNotInHand(province))
        );
        assert_eq!(table.count(province), 8);
    }

    #[test]
    fn test_unaffordable_buy_fails() {
        let catalog = CardCatalog::standard();
        let province = catalog.id("province").unwrap();
        let copper = catalog.id("copper").unwrap();
        let mut table = Table::new(&[(province, 8)], province);
        let deck = Deck::new(&[(copper, 5)], GameRng::new(5));
        let mut p = Player::new(deck, Box::new(Stubborn(province)));

        let hand = HandState::new([copper, copper], 0, 1);
        assert_eq!(
            p.play_buys(&hand, &mut table, &catalog),
            Err(SimError::InsufficientCash { cost: 8, cash: 2 })
        );
        assert_eq!(table.count(province), 8);
        assert_eq!(p.deck().size(), 5);
    }

    #[test]
    fn test_average_spend() {
        let catalog = CardCatalog::standard();
        let config = SimConfig::default();
        let mut p = player(&catalog, &[("copper", 7), ("estate", 3)]);

        let report = p.average_spend(20, &catalog, &config).unwrap();

        assert_eq!(report.hands, 20);
        assert_eq!(report.histogram.values().sum::<usize>(), 20);
        assert_eq!(report.big_hands, 0);
        // Two hands per pass through the deck, 7 coppers per pass
        assert!((report.average - 3.5).abs() < 1e-9);
        assert_eq!(p.deck().size(), 10);
    }
}
