//! Aggregate fill-plan valuation
//!
//! Totals the taker-asset value of a resolved `(order, amount)` fill plan
//! so callers can display and validate expected cost or proceeds before
//! committing to submission.

use rust_decimal::Decimal;
use types::errors::{CoreError, MatchError};
use types::numeric::Quantity;
use types::order::{Side, SignedOrder};

/// Sum the taker-asset value of a fill plan.
///
/// `orders_to_fill` and `amounts` must pair positionally; a length mismatch
/// is a caller programming error and fails loudly. Buyer-side amounts are
/// already quote-denominated by construction, so their effective price is
/// one; seller-side amounts are valued at each order's own exchange rate
/// (`makerAssetAmount / takerAssetAmount`).
pub fn sum_taker_asset_fillable_orders(
    side: Side,
    orders_to_fill: &[SignedOrder],
    amounts: &[Quantity],
) -> Result<Decimal, CoreError> {
    if orders_to_fill.len() != amounts.len() {
        return Err(MatchError::LengthMismatch {
            orders: orders_to_fill.len(),
            amounts: amounts.len(),
        }
        .into());
    }
    if orders_to_fill.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let mut total = Decimal::ZERO;
    for (order, amount) in orders_to_fill.iter().zip(amounts) {
        let price = match side {
            Side::BUY => Decimal::ONE,
            Side::SELL => order
                .exchange_rate()
                .ok_or(MatchError::ZeroTakerAssetAmount)?,
        };
        total += amount.as_decimal() * price;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::signed_order;

    #[test]
    fn test_length_mismatch_fails_loudly() {
        let orders = vec![signed_order(Side::BUY, "10", 60, "0")];
        let amounts = vec![Quantity::from_u64(60), Quantity::from_u64(40)];

        let err = sum_taker_asset_fillable_orders(Side::SELL, &orders, &amounts).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Match(MatchError::LengthMismatch {
                orders: 1,
                amounts: 2
            })
        ));
    }

    #[test]
    fn test_empty_input_is_zero() {
        let total = sum_taker_asset_fillable_orders(Side::SELL, &[], &[]).unwrap();
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn test_buy_side_uses_unit_price() {
        let orders = vec![
            signed_order(Side::SELL, "10", 60, "0"),
            signed_order(Side::SELL, "9", 50, "1"),
        ];
        let amounts = vec![Quantity::from_u64(600), Quantity::from_u64(450)];

        let total = sum_taker_asset_fillable_orders(Side::BUY, &orders, &amounts).unwrap();
        assert_eq!(total, Decimal::from(1050));
    }

    #[test]
    fn test_sell_side_uses_order_exchange_rate() {
        // makerAssetAmount / takerAssetAmount = 150 / 100 = 1.5
        let mut order = signed_order(Side::BUY, "1", 100, "0");
        order.maker_asset_amount = Decimal::from(150);
        order.taker_asset_amount = Decimal::from(100);

        let total =
            sum_taker_asset_fillable_orders(Side::SELL, &[order], &[Quantity::from_u64(40)])
                .unwrap();
        assert_eq!(total, Decimal::from(60));
    }

    #[test]
    fn test_sell_side_mixed_rates() {
        let mut cheap = signed_order(Side::BUY, "1", 100, "0");
        cheap.maker_asset_amount = Decimal::from(100);
        cheap.taker_asset_amount = Decimal::from(100);
        let mut rich = signed_order(Side::BUY, "1", 100, "1");
        rich.maker_asset_amount = Decimal::from(200);
        rich.taker_asset_amount = Decimal::from(100);

        let total = sum_taker_asset_fillable_orders(
            Side::SELL,
            &[cheap, rich],
            &[Quantity::from_u64(10), Quantity::from_u64(10)],
        )
        .unwrap();
        // 10 * 1.0 + 10 * 2.0
        assert_eq!(total, Decimal::from(30));
    }

    #[test]
    fn test_zero_taker_asset_amount_fails_loudly() {
        let mut order = signed_order(Side::BUY, "1", 100, "0");
        order.taker_asset_amount = Decimal::ZERO;

        let err =
            sum_taker_asset_fillable_orders(Side::SELL, &[order], &[Quantity::from_u64(10)])
                .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Match(MatchError::ZeroTakerAssetAmount)
        ));
    }
}
