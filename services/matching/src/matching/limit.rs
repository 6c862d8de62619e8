//! Limit-order fill estimation
//!
//! Previews how much of a requested amount is obtainable at-or-better-than
//! a limit price against the current counter-orders. An estimate only: no
//! specific orders are allocated.

use rust_decimal::Decimal;
use tracing::debug;
use types::numeric::{Price, Quantity};
use types::order::{Side, UiOrder};

use crate::book::sort_by_best_price;

/// Estimate the fillable amount at a limit price.
///
/// Counter-orders are walked best-price-first, accumulating each order's
/// remaining size until the requested `amount` is covered or the next
/// order's price violates the limit (a buyer stops above `price`, a seller
/// below it). The result is capped at `amount`.
///
/// Pure: the snapshot is copied before sorting and never mutated.
pub fn match_limit_orders(
    amount: Quantity,
    price: Price,
    orders: &[UiOrder],
    side: Side,
) -> Quantity {
    debug!(%amount, %price, ?side, "estimating fillable amount at limit");

    let sorted = sort_by_best_price(orders, side);
    let target = amount.as_decimal();

    let mut filled_amount = Decimal::ZERO;
    for order in &sorted {
        if filled_amount >= target {
            break;
        }
        let order_price = order.price.as_decimal();
        if side == Side::BUY && order_price > price.as_decimal() {
            break;
        }
        if side == Side::SELL && order_price < price.as_decimal() {
            break;
        }

        let available = order.available().as_decimal();
        debug!(%order_price, %available, "counter-order within limit");
        if filled_amount + available > target {
            filled_amount = target;
        } else {
            filled_amount += available;
        }
    }

    Quantity::try_new(filled_amount).unwrap_or_else(Quantity::zero)
}
