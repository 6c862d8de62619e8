//! Order assembly and filtering
//!
//! Bridges between the relayer's raw `SignedOrder`s and the annotated
//! counter-orders the engine walks, builds the config for a new limit
//! order, and filters snapshots by maker.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::errors::{CoreError, MatchError};
use types::ids::{Address, AssetData};
use types::numeric::{
    base_units_to_decimal, ceil_to_unit, decimal_to_base_units, Price, Quantity,
};
use types::order::{OrderStatus, Side, SignedOrder, UiOrder};
use types::token::{TokenMetaData, TokenRegistry};

/// Fill state the relayer reports per order alongside a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFillState {
    pub status: OrderStatus,
    /// Amount already filled, in taker-asset smallest units.
    pub taker_filled_amount: Decimal,
}

/// Annotate relayer orders as counter-orders for the given base token.
///
/// An order whose maker sells the base asset rests on the sell side; one
/// whose taker asset is the base rests on the buy side. Size and filled
/// portion come out in base smallest units, price as quote-per-base in
/// decimal units. `fill_states`, when present, must pair positionally with
/// `orders`; relayers that report no fill info yield fresh, fully-open
/// orders.
pub fn orders_to_ui_orders(
    orders: &[SignedOrder],
    base_token: &TokenMetaData,
    registry: &TokenRegistry,
    fill_states: Option<&[OrderFillState]>,
) -> Result<Vec<UiOrder>, CoreError> {
    if let Some(states) = fill_states {
        if states.len() != orders.len() {
            return Err(MatchError::LengthMismatch {
                orders: orders.len(),
                amounts: states.len(),
            }
            .into());
        }
    }

    let base_asset_data = base_token.asset_data();
    let mut ui_orders = Vec::with_capacity(orders.len());
    for (index, order) in orders.iter().enumerate() {
        let side = resting_side(order, &base_asset_data, base_token)?;
        let rate = order
            .exchange_rate()
            .ok_or(MatchError::ZeroTakerAssetAmount)?;

        let (size, quote_asset_data) = match side {
            Side::SELL => (order.maker_asset_amount, &order.taker_asset_data),
            Side::BUY => (order.taker_asset_amount, &order.maker_asset_data),
        };
        let quote_token = registry.get_by_asset_data(quote_asset_data)?;

        let price = price_per_base(order, side, base_token, quote_token)?;
        let (status, filled) = match fill_states.map(|s| &s[index]) {
            Some(state) => {
                // Taker-unit fills translate into base units: directly for a
                // resting buy (taker asset is the base), via the order's own
                // rate for a resting sell.
                let filled_base = match side {
                    Side::BUY => state.taker_filled_amount,
                    Side::SELL => state.taker_filled_amount * rate,
                };
                (state.status, Quantity::try_new(filled_base))
            }
            None => (OrderStatus::Fillable, None),
        };

        ui_orders.push(UiOrder::new(
            order.clone(),
            side,
            Quantity::try_new(size).unwrap_or_else(Quantity::zero),
            filled,
            price,
            status,
        ));
    }
    Ok(ui_orders)
}

/// Which side of the base token's book a relayer order rests on.
fn resting_side(
    order: &SignedOrder,
    base_asset_data: &AssetData,
    base_token: &TokenMetaData,
) -> Result<Side, CoreError> {
    if order.maker_asset_data == *base_asset_data {
        Ok(Side::SELL)
    } else if order.taker_asset_data == *base_asset_data {
        Ok(Side::BUY)
    } else {
        Err(MatchError::OrderNotInPair {
            base: base_token.symbol.clone(),
        }
        .into())
    }
}

/// Quote-per-base price of a resting order, in decimal units.
fn price_per_base(
    order: &SignedOrder,
    side: Side,
    base_token: &TokenMetaData,
    quote_token: &TokenMetaData,
) -> Result<Price, CoreError> {
    let (base_amount, quote_amount) = match side {
        Side::SELL => (order.maker_asset_amount, order.taker_asset_amount),
        Side::BUY => (order.taker_asset_amount, order.maker_asset_amount),
    };
    let base_value = base_units_to_decimal(base_amount, base_token.decimals)?;
    let quote_value = base_units_to_decimal(quote_amount, quote_token.decimals)?;
    let price = quote_value
        .checked_div(base_value)
        .ok_or(MatchError::ZeroTakerAssetAmount)?;
    Ok(Price::try_new(price).unwrap_or_else(Price::zero))
}

/// Configuration for a new limit order, ready for fee/taker completion by
/// the relayer and signing by the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfig {
    pub maker_address: Address,
    pub taker_address: Address,
    pub maker_asset_data: AssetData,
    pub taker_asset_data: AssetData,
    pub maker_asset_amount: Decimal,
    pub taker_asset_amount: Decimal,
    pub expiration_time_seconds: i64,
}

/// Derive the asset data and amounts for a new limit order.
///
/// `amount` is in base smallest units; the quote leg is its decimal value
/// times `price`, scaled into quote smallest units and ceiling-rounded. A
/// buyer makes the quote asset and takes the base; a seller the reverse.
/// The taker is left open (zero address).
pub fn build_limit_order_config(
    amount: Quantity,
    price: Price,
    side: Side,
    base_token: &TokenMetaData,
    quote_token: &TokenMetaData,
    maker_address: Address,
    expiration_time_seconds: i64,
) -> Result<OrderConfig, CoreError> {
    let base_asset_data = base_token.asset_data();
    let quote_asset_data = quote_token.asset_data();

    let base_value = base_units_to_decimal(amount.as_decimal(), base_token.decimals)?;
    let quote_value = base_value * price.as_decimal();
    let quote_amount = ceil_to_unit(decimal_to_base_units(quote_value, quote_token.decimals)?);

    let (maker_asset_data, taker_asset_data, maker_asset_amount, taker_asset_amount) = match side {
        Side::BUY => (
            quote_asset_data,
            base_asset_data,
            quote_amount,
            amount.as_decimal(),
        ),
        Side::SELL => (
            base_asset_data,
            quote_asset_data,
            amount.as_decimal(),
            quote_amount,
        ),
    };

    Ok(OrderConfig {
        maker_address,
        taker_address: Address::zero(),
        maker_asset_data,
        taker_asset_data,
        maker_asset_amount,
        taker_asset_amount,
        expiration_time_seconds,
    })
}

/// Keep only orders from the given makers.
///
/// An empty or absent allow-list keeps everything.
pub fn filter_orders_by_maker(orders: &[SignedOrder], makers: Option<&[Address]>) -> Vec<SignedOrder> {
    match makers {
        None => orders.to_vec(),
        Some([]) => orders.to_vec(),
        Some(makers) => orders
            .iter()
            .filter(|order| makers.contains(&order.maker_address))
            .cloned()
            .collect(),
    }
}
