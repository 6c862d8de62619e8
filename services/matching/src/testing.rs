//! Shared fixtures for unit tests.

use rust_decimal::Decimal;
use types::ids::{Address, AssetData};
use types::numeric::{Price, Quantity};
use types::order::{OrderStatus, Side, SignedOrder, UiOrder};
use types::token::{TokenMetaData, TokenRegistry};

pub const WETH_ADDRESS: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";
pub const USDC_ADDRESS: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
pub const MAKER_ADDRESS: &str = "0x5409ed021d9299bf6814279a6a1411a7e866a631";

/// WETH (18 decimals) as base, USDC (6 decimals) as quote.
pub fn registry() -> TokenRegistry {
    TokenRegistry::new(vec![weth(), usdc()]).unwrap()
}

pub fn weth() -> TokenMetaData {
    TokenMetaData {
        address: Address::new(WETH_ADDRESS).unwrap(),
        symbol: "WETH".to_string(),
        name: "Wrapped Ether".to_string(),
        decimals: 18,
        display_decimals: None,
    }
}

pub fn usdc() -> TokenMetaData {
    TokenMetaData {
        address: Address::new(USDC_ADDRESS).unwrap(),
        symbol: "USDC".to_string(),
        name: "USD Coin".to_string(),
        decimals: 6,
        display_decimals: Some(2),
    }
}

/// A raw order resting on `side` of the WETH/USDC book.
///
/// A resting sell offers base (WETH) for quote (USDC); a resting buy is the
/// reverse. Asset amounts are derived from `size` at the given `price` as
/// plain unit counts; tests that depend on decimal scaling build their own.
pub fn signed_order(side: Side, price: &str, size: u64, salt: &str) -> SignedOrder {
    let price = Price::from_str(price).unwrap();
    let size_dec = Decimal::from(size);
    let quote_amount = size_dec * price.as_decimal();
    let (maker_asset, taker_asset, maker_amount, taker_amount) = match side {
        Side::SELL => (weth(), usdc(), size_dec, quote_amount),
        Side::BUY => (usdc(), weth(), quote_amount, size_dec),
    };

    SignedOrder {
        maker_address: Address::new(MAKER_ADDRESS).unwrap(),
        taker_address: Address::zero(),
        fee_recipient_address: Address::zero(),
        sender_address: Address::zero(),
        maker_asset_amount: maker_amount,
        taker_asset_amount: taker_amount,
        maker_fee: Decimal::ZERO,
        taker_fee: Decimal::ZERO,
        expiration_time_seconds: 1_700_000_000,
        salt: salt.to_string(),
        maker_asset_data: AssetData::erc20(&maker_asset.address),
        taker_asset_data: AssetData::erc20(&taker_asset.address),
        exchange_address: Address::zero(),
        signature: "0x1b".to_string(),
    }
}

/// A counter-order resting on `side` with the given price, size and filled
/// portion (all in plain units).
pub fn ui_order(side: Side, price: &str, size: u64, filled: u64) -> UiOrder {
    ui_order_with_salt(side, price, size, filled, "0")
}

/// Same as [`ui_order`] with a distinguishing salt for tie-break tests.
pub fn ui_order_with_salt(side: Side, price: &str, size: u64, filled: u64, salt: &str) -> UiOrder {
    UiOrder::new(
        signed_order(side, price, size, salt),
        side,
        Quantity::from_u64(size),
        if filled == 0 {
            None
        } else {
            Some(Quantity::from_u64(filled))
        },
        Price::from_str(price).unwrap(),
        OrderStatus::Fillable,
    )
}
