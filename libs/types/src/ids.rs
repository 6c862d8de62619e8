//! Validated identifier types
//!
//! Addresses and asset data travel as hex strings on the relayer wire
//! format; these newtypes normalize and validate them once at the boundary
//! so matching logic never re-checks shapes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::TokenError;

/// ERC20 asset-data proxy id (first 4 bytes of the encoding).
pub const ERC20_PROXY_ID: &str = "f47261b0";

const ADDRESS_HEX_LEN: usize = 40;
const ASSET_DATA_HEX_LEN: usize = 8 + 64; // proxy id + 32-byte padded address

fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// A 20-byte Ethereum address as a normalized lowercase hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Create a new address, normalizing to lowercase.
    ///
    /// Input must be `0x` followed by 40 hex characters.
    pub fn new(address: impl Into<String>) -> Result<Self, TokenError> {
        let raw = address.into();
        let hex = raw
            .strip_prefix("0x")
            .ok_or_else(|| TokenError::InvalidAddress(raw.clone()))?;
        if hex.len() != ADDRESS_HEX_LEN || !is_hex(hex) {
            return Err(TokenError::InvalidAddress(raw));
        }
        Ok(Self(format!("0x{}", hex.to_ascii_lowercase())))
    }

    /// The zero address, used as the open taker on new orders.
    pub fn zero() -> Self {
        Self(format!("0x{}", "0".repeat(ADDRESS_HEX_LEN)))
    }

    /// The normalized `0x`-prefixed hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex digits without the `0x` prefix.
    fn hex(&self) -> &str {
        &self.0[2..]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 0x asset data: a proxy id followed by the ABI-encoded asset reference.
///
/// Only the ERC20 encoding is handled here: `0xf47261b0` followed by the
/// token address left-padded to 32 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetData(String);

impl AssetData {
    /// Wrap raw asset data, normalizing to lowercase.
    pub fn new(asset_data: impl Into<String>) -> Result<Self, TokenError> {
        let raw = asset_data.into();
        let hex = raw
            .strip_prefix("0x")
            .ok_or_else(|| TokenError::InvalidAssetData(raw.clone()))?;
        if !is_hex(hex) {
            return Err(TokenError::InvalidAssetData(raw));
        }
        Ok(Self(format!("0x{}", hex.to_ascii_lowercase())))
    }

    /// Encode an ERC20 token address as asset data.
    pub fn erc20(address: &Address) -> Self {
        Self(format!(
            "0x{}{}{}",
            ERC20_PROXY_ID,
            "0".repeat(64 - ADDRESS_HEX_LEN),
            address.hex()
        ))
    }

    /// Whether this is ERC20-encoded asset data.
    pub fn is_erc20(&self) -> bool {
        let hex = &self.0[2..];
        hex.len() == ASSET_DATA_HEX_LEN && hex.starts_with(ERC20_PROXY_ID)
    }

    /// Decode the token address out of ERC20 asset data.
    pub fn erc20_address(&self) -> Result<Address, TokenError> {
        if !self.is_erc20() {
            return Err(TokenError::InvalidAssetData(self.0.clone()));
        }
        let hex = &self.0[2..];
        Address::new(format!("0x{}", &hex[hex.len() - ADDRESS_HEX_LEN..]))
    }

    /// The normalized `0x`-prefixed hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trading pair identifier
///
/// Format: "BASE/QUOTE" (e.g., "ZRX/WETH", "DAI/USDC")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradingPair(String);

impl TradingPair {
    /// Create a new TradingPair from a string
    ///
    /// # Panics
    /// Panics if the format is invalid (must contain '/')
    pub fn new(symbol: impl Into<String>) -> Self {
        let s = symbol.into();
        assert!(s.contains('/'), "TradingPair must be in BASE/QUOTE format");
        Self(s)
    }

    /// Try to create a TradingPair, returning None if invalid
    pub fn try_new(symbol: impl Into<String>) -> Option<Self> {
        let s = symbol.into();
        if s.contains('/') {
            Some(Self(s))
        } else {
            None
        }
    }

    /// Get the symbol string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into base and quote symbols
    pub fn split(&self) -> (&str, &str) {
        let parts: Vec<&str> = self.0.split('/').collect();
        (parts[0], parts[1])
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TradingPair {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
