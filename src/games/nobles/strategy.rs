//! Buy strategies.

use crate::cards::{CardCatalog, CardId};
use crate::core::Result;
use crate::zones::Table;

/// Decides what to buy with the cash a hand produced.
pub trait BuyStrategy {
    /// Called once per hand with its total cash, before any `choose_buy`.
    fn begin_hand(&mut self, _cash: i64) {}

    /// The card to buy with `cash`, or `None` to stop buying.
    ///
    /// Called once per remaining buy with the cash still unspent. A returned
    /// card must be on the table and affordable.
    fn choose_buy(
        &mut self,
        cash: i64,
        table: &Table,
        catalog: &CardCatalog,
    ) -> Option<CardId>;
}

/// Big money with nobles.
///
/// - $8: province, once `province_delay` has counted down to zero
/// - $6: gold and nobles, alternating which one is tried first
/// - $3: silver
///
/// The delay and the alternation advance once per hand, however many buys
/// it has. An empty first choice at $6 falls back to the other card. An
/// empty province pile means no buy.
#[derive(Clone, Debug)]
pub struct NoblesBigMoney {
    silver: CardId,
    gold: CardId,
    nobles: CardId,
    province: CardId,
    province_delay: u32,
    gold_first: bool,
    /// Order of the current hand, fixed by its first $6 buy.
    hand_gold_first: Option<bool>,
}

impl NoblesBigMoney {
    /// Resolve the cards this strategy buys.
    pub fn new(catalog: &CardCatalog, province_delay: u32) -> Result<Self> {
        Ok(Self {
            silver: catalog.id("silver")?,
            gold: catalog.id("gold")?,
            nobles: catalog.id("nobles")?,
            province: catalog.id("province")?,
            province_delay,
            gold_first: false,
            hand_gold_first: None,
        })
    }

    /// Countdown to the first province, one step per $8 hand.
    #[must_use]
    pub fn province_delay(&self) -> u32 {
        self.province_delay
    }

    fn first_available(
        &self,
        cards: &[CardId],
        table: &Table,
        catalog: &CardCatalog,
    ) -> Option<CardId> {
        for &card in cards {
            if table.count(card) > 0 {
                return Some(card);
            }
            log::debug!(target: "buy", "no {} left", catalog.name(card));
        }
        None
    }

    fn hand_order_gold_first(&mut self) -> bool {
        match self.hand_gold_first {
            Some(gold_first) => gold_first,
            None => {
                let gold_first = self.gold_first;
                self.gold_first = !gold_first;
                self.hand_gold_first = Some(gold_first);
                gold_first
            }
        }
    }
}

impl BuyStrategy for NoblesBigMoney {
    fn begin_hand(&mut self, cash: i64) {
        if cash >= 8 && self.province_delay > 0 {
            self.province_delay -= 1;
            log::debug!(target: "buy", "skipping a province, {} to go", self.province_delay);
        }
        self.hand_gold_first = None;
    }

    fn choose_buy(
        &mut self,
        cash: i64,
        table: &Table,
        catalog: &CardCatalog,
    ) -> Option<CardId> {
        let choice = if cash >= 8 && self.province_delay == 0 {
            self.first_available(&[self.province], table, catalog)
        } else if cash >= 6 {
            let order = if self.hand_order_gold_first() {
                [self.gold, self.nobles]
            } else {
                [self.nobles, self.gold]
            };
            self.first_available(&order, table, catalog)
        } else if cash >= 3 {
            self.first_available(&[self.silver], table, catalog)
        } else {
            None
        };

        match choice {
            Some(card) => {
                log::debug!(target: "buy", "buying {} with ${}", catalog.name(card), cash);
            }
            None => log::debug!(target: "buy", "no buy with ${}", cash),
        }
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (CardCatalog, Table) {
        let catalog = CardCatalog::standard();
        let piles: Vec<_> = ["silver", "gold", "nobles", "province"]
            .iter()
            .map(|n| (catalog.id(n).unwrap(), 2))
            .collect();
        let province = catalog.id("province").unwrap();
        (catalog, Table::new(&piles, province))
    }

    #[test]
    fn test_thresholds() {
        let (catalog, table) = setup();
        let mut strategy = NoblesBigMoney::new(&catalog, 0).unwrap();

        let province = catalog.id("province").ok();
        let silver = catalog.id("silver").ok();
        for (cash, expected) in [(8, province), (3, silver), (2, None)] {
            strategy.begin_hand(cash);
            assert_eq!(strategy.choose_buy(cash, &table, &catalog), expected);
        }
    }

    #[test]
    fn test_six_alternates_nobles_and_gold() {
        let (catalog, table) = setup();
        let mut strategy = NoblesBigMoney::new(&catalog, 0).unwrap();
        let nobles = catalog.id("nobles").ok();
        let gold = catalog.id("gold").ok();

        let picks: Vec<_> = (0..4)
            .map(|_| {
                strategy.begin_hand(7);
                strategy.choose_buy(7, &table, &catalog)
            })
            .collect();
        assert_eq!(picks, vec![nobles, gold, nobles, gold]);
    }

    #[test]
    fn test_bookkeeping_is_per_hand() {
        let (catalog, table) = setup();
        let mut strategy = NoblesBigMoney::new(&catalog, 2).unwrap();
        let nobles = catalog.id("nobles").ok();
        let gold = catalog.id("gold").ok();

        // One $16 hand with two buys skips one province and keeps its order
        strategy.begin_hand(16);
        assert_eq!(strategy.province_delay(), 1);
        assert_eq!(strategy.choose_buy(16, &table, &catalog), nobles);
        assert_eq!(strategy.choose_buy(10, &table, &catalog), nobles);

        strategy.begin_hand(6);
        assert_eq!(strategy.choose_buy(6, &table, &catalog), gold);
    }

    #[test]
    fn test_province_delay() {
        let (catalog, table) = setup();
        let mut strategy = NoblesBigMoney::new(&catalog, 2).unwrap();
        let province = catalog.id("province").ok();

        // Delayed $8 hands buy like $6 hands
        strategy.begin_hand(8);
        assert_eq!(strategy.province_delay(), 1);
        assert_eq!(strategy.choose_buy(8, &table, &catalog), catalog.id("nobles").ok());
        strategy.begin_hand(9);
        assert_eq!(strategy.province_delay(), 0);
        assert_eq!(strategy.choose_buy(9, &table, &catalog), province);
        strategy.begin_hand(8);
        assert_eq!(strategy.choose_buy(8, &table, &catalog), province);
    }

    #[test]
    fn test_empty_piles() {
        let catalog = CardCatalog::standard();
        let gold = catalog.id("gold").unwrap();
        let province = catalog.id("province").unwrap();
        let table = Table::new(&[(gold, 1), (province, 0)], province);
        let mut strategy = NoblesBigMoney::new(&catalog, 0).unwrap();

        // Nobles pile is missing, gold is the fallback
        strategy.begin_hand(6);
        assert_eq!(strategy.choose_buy(6, &table, &catalog), Some(gold));
        strategy.begin_hand(8);
        assert_eq!(strategy.choose_buy(8, &table, &catalog), None);
    }
}
