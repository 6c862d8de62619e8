//! Relayer order shapes
//!
//! `SignedOrder` is the raw order as the relayer serves it; matching carries
//! it through untouched and reads only the asset amounts and asset data.
//! `UiOrder` is the annotated counter-order the engine walks: resting side,
//! price, size and filled portion in base smallest units.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{Address, AssetData};
use crate::numeric::{Price, Quantity};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }
}

/// Relayer-reported order state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Open and at least partially fillable
    Fillable,
    /// Completely filled (terminal)
    FullyFilled,
    /// Canceled on-chain (terminal)
    Cancelled,
    /// Past its expiration time (terminal)
    Expired,
    /// Failed validation (terminal)
    Invalid,
}

impl OrderStatus {
    /// Whether the order can still be matched against.
    pub fn is_open(&self) -> bool {
        matches!(self, OrderStatus::Fillable)
    }
}

/// A signed 0x order exactly as the relayer serves it.
///
/// Opaque to the matching loop except for the asset amounts and asset data;
/// everything else is carried through for on-chain execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedOrder {
    pub maker_address: Address,
    pub taker_address: Address,
    pub fee_recipient_address: Address,
    pub sender_address: Address,
    /// What the maker offers, in maker-asset smallest units.
    pub maker_asset_amount: Decimal,
    /// What the maker asks in return, in taker-asset smallest units.
    pub taker_asset_amount: Decimal,
    pub maker_fee: Decimal,
    pub taker_fee: Decimal,
    /// Unix seconds.
    pub expiration_time_seconds: i64,
    /// uint256 salt, kept as the relayer's string encoding.
    pub salt: String,
    pub maker_asset_data: AssetData,
    pub taker_asset_data: AssetData,
    pub exchange_address: Address,
    pub signature: String,
}

impl SignedOrder {
    /// The order's true exchange rate: maker units per taker unit.
    ///
    /// `None` when `taker_asset_amount` is zero (malformed order).
    pub fn exchange_rate(&self) -> Option<Decimal> {
        self.maker_asset_amount.checked_div(self.taker_asset_amount)
    }

    /// Whether the order is past its expiration at `now` (unix seconds).
    pub fn is_expired(&self, now_seconds: i64) -> bool {
        self.expiration_time_seconds <= now_seconds
    }
}

/// A counter-order available to match against.
///
/// `size` and `filled` are in base-asset smallest units; `price` is
/// quote-per-base in human decimal units. The raw signed order is kept
/// alongside for execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiOrder {
    pub raw_order: SignedOrder,
    /// Side of the book this order rests on.
    pub side: Side,
    pub size: Quantity,
    pub filled: Quantity,
    pub price: Price,
    pub status: OrderStatus,
}

impl UiOrder {
    /// Create a counter-order record; an absent filled portion is zero.
    pub fn new(
        raw_order: SignedOrder,
        side: Side,
        size: Quantity,
        filled: Option<Quantity>,
        price: Price,
        status: OrderStatus,
    ) -> Self {
        Self {
            raw_order,
            side,
            size,
            filled: filled.unwrap_or_else(Quantity::zero),
            price,
            status,
        }
    }

    /// Remaining unfilled quantity, clamped at zero.
    pub fn available(&self) -> Quantity {
        self.size.saturating_sub(self.filled)
    }

    /// Whether the order can still be matched against.
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }
}
