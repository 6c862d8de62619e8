//! Order book snapshot views
//!
//! The engine never mutates caller data: sorting copies the slice first, so
//! concurrent callers can share one snapshot. Sorting is stable, so orders
//! at the same price are consumed earliest-inserted-first.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::ids::TradingPair;
use types::numeric::Price;
use types::order::{Side, UiOrder};

/// Sort counter-orders best-price-first for the given taker side.
///
/// A buyer wants the cheapest ask first (ascending); a seller wants the
/// highest bid first (descending). The input is copied, never reordered in
/// place. Equal prices keep their input order.
pub fn sort_by_best_price(orders: &[UiOrder], taker_side: Side) -> Vec<UiOrder> {
    let mut sorted = orders.to_vec();
    match taker_side {
        Side::BUY => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        Side::SELL => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
    }
    sorted
}

/// An immutable snapshot of both book sides for a trading pair.
///
/// Supplied by the relayer collaborator immediately before matching; the
/// engine only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub pair: TradingPair,
    /// Resting buy orders.
    pub bids: Vec<UiOrder>,
    /// Resting sell orders.
    pub asks: Vec<UiOrder>,
}

impl BookSnapshot {
    pub fn new(pair: TradingPair, bids: Vec<UiOrder>, asks: Vec<UiOrder>) -> Self {
        Self { pair, bids, asks }
    }

    /// The counter-orders a taker on `side` would match against.
    pub fn counter_orders(&self, taker_side: Side) -> &[UiOrder] {
        match taker_side {
            Side::BUY => &self.asks,
            Side::SELL => &self.bids,
        }
    }

    /// Highest bid price.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.iter().map(|o| o.price).max()
    }

    /// Lowest ask price.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.iter().map(|o| o.price).min()
    }

    /// Mid-market price (average of best bid and best ask).
    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => {
                Some((bid.as_decimal() + ask.as_decimal()) / Decimal::from(2))
            }
            _ => None,
        }
    }

    /// Spread between best ask and best bid.
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.as_decimal() - bid.as_decimal()),
            _ => None,
        }
    }

    /// Number of resting bid orders.
    pub fn bid_depth(&self) -> usize {
        self.bids.len()
    }

    /// Number of resting ask orders.
    pub fn ask_depth(&self) -> usize {
        self.asks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ui_order, ui_order_with_salt};

    #[test]
    fn test_sort_ascending_for_buyer() {
        let orders = vec![
            ui_order(Side::SELL, "12", 10, 0),
            ui_order(Side::SELL, "10", 10, 0),
            ui_order(Side::SELL, "11", 10, 0),
        ];

        let sorted = sort_by_best_price(&orders, Side::BUY);
        let prices: Vec<String> = sorted.iter().map(|o| o.price.to_string()).collect();
        assert_eq!(prices, vec!["10", "11", "12"]);
    }

    #[test]
    fn test_sort_descending_for_seller() {
        let orders = vec![
            ui_order(Side::BUY, "9", 10, 0),
            ui_order(Side::BUY, "10", 10, 0),
        ];

        let sorted = sort_by_best_price(&orders, Side::SELL);
        let prices: Vec<String> = sorted.iter().map(|o| o.price.to_string()).collect();
        assert_eq!(prices, vec!["10", "9"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let orders = vec![
            ui_order(Side::SELL, "12", 10, 0),
            ui_order(Side::SELL, "10", 10, 0),
        ];
        let before = orders.clone();

        let _ = sort_by_best_price(&orders, Side::BUY);
        assert_eq!(orders, before);
    }

    #[test]
    fn test_sort_ties_keep_input_order() {
        let first = ui_order_with_salt(Side::SELL, "10", 10, 0, "1");
        let second = ui_order_with_salt(Side::SELL, "10", 10, 0, "2");
        let orders = vec![first.clone(), second.clone()];

        let sorted = sort_by_best_price(&orders, Side::BUY);
        assert_eq!(sorted[0].raw_order.salt, "1");
        assert_eq!(sorted[1].raw_order.salt, "2");
    }

    #[test]
    fn test_snapshot_best_prices_and_spread() {
        let snapshot = BookSnapshot::new(
            TradingPair::new("ZRX/WETH"),
            vec![
                ui_order(Side::BUY, "9", 10, 0),
                ui_order(Side::BUY, "10", 10, 0),
            ],
            vec![
                ui_order(Side::SELL, "12", 10, 0),
                ui_order(Side::SELL, "11", 10, 0),
            ],
        );

        assert_eq!(snapshot.best_bid(), Price::from_str("10"));
        assert_eq!(snapshot.best_ask(), Price::from_str("11"));
        assert_eq!(snapshot.spread(), Some(Decimal::from(1)));
        assert_eq!(
            snapshot.mid_price(),
            Some(Decimal::from_str_exact("10.5").unwrap())
        );
        assert_eq!(snapshot.bid_depth(), 2);
        assert_eq!(snapshot.ask_depth(), 2);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = BookSnapshot::new(TradingPair::new("ZRX/WETH"), vec![], vec![]);
        assert!(snapshot.best_bid().is_none());
        assert!(snapshot.best_ask().is_none());
        assert!(snapshot.mid_price().is_none());
        assert!(snapshot.spread().is_none());
    }

    #[test]
    fn test_counter_orders_selects_opposite_book() {
        let snapshot = BookSnapshot::new(
            TradingPair::new("ZRX/WETH"),
            vec![ui_order(Side::BUY, "9", 10, 0)],
            vec![ui_order(Side::SELL, "11", 5, 0)],
        );

        assert_eq!(snapshot.counter_orders(Side::BUY).len(), 1);
        assert_eq!(snapshot.counter_orders(Side::BUY)[0].side, Side::SELL);
        assert_eq!(snapshot.counter_orders(Side::SELL)[0].side, Side::BUY);
    }
}
