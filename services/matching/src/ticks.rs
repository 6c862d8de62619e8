//! Market tick samples for the charting backend
//!
//! After each trade the widget reports a tick (best bid/ask plus the
//! traded volume attributed to the taker side) which the backend folds
//! into its OHLCV series. Building the sample is pure; posting it belongs
//! to the relayer client.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::errors::CoreError;
use types::numeric::{base_units_to_decimal, Quantity};
use types::order::Side;

use crate::book::BookSnapshot;

/// One tick as the charting backend ingests it.
///
/// Field names are the wire format of the `/market` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketTick {
    /// Best bid price, zero when the bid side is empty.
    pub bid: Decimal,
    /// Best ask price, zero when the ask side is empty.
    pub ask: Decimal,
    /// Volume in decimal units when the taker bought, else zero.
    pub bid_vol: Decimal,
    /// Volume in decimal units when the taker sold, else zero.
    pub ask_vol: Decimal,
}

/// Sample the book after a trade of `amount` smallest units on `side`.
///
/// `amount_decimals` is the precision of the asset `amount` is denominated
/// in; the reported volume is its decimal-unit value.
pub fn build_market_tick(
    book: &BookSnapshot,
    side: Side,
    amount: Quantity,
    amount_decimals: u32,
) -> Result<MarketTick, CoreError> {
    let volume = base_units_to_decimal(amount.as_decimal(), amount_decimals)?;

    let (bid_vol, ask_vol) = match side {
        Side::BUY => (volume, Decimal::ZERO),
        Side::SELL => (Decimal::ZERO, volume),
    };

    Ok(MarketTick {
        bid: book
            .best_bid()
            .map(|p| p.as_decimal())
            .unwrap_or(Decimal::ZERO),
        ask: book
            .best_ask()
            .map(|p| p.as_decimal())
            .unwrap_or(Decimal::ZERO),
        bid_vol,
        ask_vol,
    })
}
