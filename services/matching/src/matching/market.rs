//! Market-order fill-plan construction
//!
//! Selects which counter-orders a market trade consumes and for how much.
//! The walk accumulates in base-asset smallest units; for a buyer each
//! allocation is then re-expressed in the quote asset the taker actually
//! pays, using the decimal precision of both tokens. Outbound amounts are
//! ceiling-rounded to whole units.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use types::errors::CoreError;
use types::numeric::{base_units_to_decimal, ceil_to_unit, decimal_to_base_units, Quantity};
use types::order::{Side, SignedOrder, UiOrder};
use types::token::TokenRegistry;

use crate::book::sort_by_best_price;

/// A resolved market fill plan.
///
/// `orders` and `amounts` are parallel: `amounts[i]` is the fill amount for
/// `orders[i]`, in the unit the taker delivers (quote smallest units for a
/// buyer, base smallest units for a seller), ceiling-rounded to whole
/// units. Every counter-order visited while demand remained is present,
/// including fully-consumed ones with a zero amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketFill {
    pub orders: Vec<SignedOrder>,
    pub amounts: Vec<Quantity>,
    /// True only if the snapshot held enough liquidity for the whole
    /// requested amount. Partial liquidity is a normal outcome, not an
    /// error.
    pub can_be_filled: bool,
}

/// Build a market fill plan for `amount` base units against the given
/// counter-orders.
///
/// Orders are consumed best-price-first (stable on ties); each order
/// contributes its remaining size until the request is covered. The
/// registry resolves maker/taker decimal precision for the buyer-side unit
/// conversion; an asset missing from it is a contract violation.
pub fn build_market_orders(
    amount: Quantity,
    orders: &[UiOrder],
    side: Side,
    registry: &TokenRegistry,
) -> Result<MarketFill, CoreError> {
    debug!(%amount, ?side, orders = orders.len(), "building market fill plan");

    let sorted = sort_by_best_price(orders, side);
    let target = amount.as_decimal();

    let mut orders_to_fill = Vec::new();
    let mut amounts = Vec::new();
    let mut filled_amount = Decimal::ZERO;
    for order in &sorted {
        if filled_amount >= target {
            break;
        }
        orders_to_fill.push(order.raw_order.clone());

        let available = order.available().as_decimal();
        let allocated = if filled_amount + available > target {
            target - filled_amount
        } else {
            available
        };
        filled_amount += allocated;

        let taker_units = match side {
            // A buyer pays in the quote asset: re-express the base-unit
            // allocation as decimal base, price it, and scale into quote
            // smallest units.
            Side::BUY => {
                let maker = registry.get_by_asset_data(&order.raw_order.maker_asset_data)?;
                let taker = registry.get_by_asset_data(&order.raw_order.taker_asset_data)?;
                let base_value = base_units_to_decimal(allocated, maker.decimals)?;
                decimal_to_base_units(base_value * order.price.as_decimal(), taker.decimals)?
            }
            // A seller delivers the base asset directly.
            Side::SELL => allocated,
        };
        amounts.push(taker_units);
    }

    let can_be_filled = filled_amount == target;
    debug!(%filled_amount, can_be_filled, "market fill plan complete");

    let amounts = amounts
        .into_iter()
        .map(|a| Quantity::try_new(ceil_to_unit(a)).unwrap_or_else(Quantity::zero))
        .collect();

    Ok(MarketFill {
        orders: orders_to_fill,
        amounts,
        can_be_filled,
    })
}
