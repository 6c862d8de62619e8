//! Error types for the matching core
//!
//! Comprehensive error taxonomy using thiserror. Errors are raised only for
//! programmer-contract violations (mismatched inputs, malformed identifiers,
//! unknown tokens); liquidity outcomes are returned as data, never as errors.

use thiserror::Error;

/// Top-level core error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Match error: {0}")]
    Match(#[from] MatchError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Numeric error: {0}")]
    Numeric(#[from] NumericError),
}

/// Matching-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("orders and amounts array lengths must be the same: {orders} != {amounts}")]
    LengthMismatch { orders: usize, amounts: usize },

    #[error("signed order has zero takerAssetAmount")]
    ZeroTakerAssetAmount,

    #[error("order does not trade the base token {base}")]
    OrderNotInPair { base: String },
}

/// Token metadata and identifier errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid asset data: {0}")]
    InvalidAssetData(String),

    #[error("unknown token address: {0}")]
    UnknownAddress(String),

    #[error("unknown token symbol: {0}")]
    UnknownSymbol(String),

    #[error("no known token for asset data: {0}")]
    UnknownAssetData(String),

    #[error("duplicate token address in registry: {0}")]
    DuplicateAddress(String),

    #[error("invalid token list: {0}")]
    InvalidTokenList(String),
}

/// Numeric conversion errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    #[error("unsupported decimal precision {0}: maximum is 28")]
    UnsupportedDecimals(u32),
}
