//! Token metadata and the known-token registry
//!
//! The registry is a read-only lookup capability (address / symbol / asset
//! data → metadata) built once from configuration and passed to call sites.
//! There is no process-global registry; matching code receives
//! `&TokenRegistry` explicitly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::TokenError;
use crate::ids::{Address, AssetData};
use crate::numeric::MAX_DECIMALS;

/// Metadata for a known ERC20 token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetaData {
    pub address: Address,
    pub symbol: String,
    pub name: String,
    /// Smallest-unit precision (e.g. 18 for WETH, 6 for USDC).
    pub decimals: u32,
    /// Precision used when rendering amounts, if different from `decimals`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_decimals: Option<u32>,
}

impl TokenMetaData {
    /// ERC20 asset data for this token.
    pub fn asset_data(&self) -> AssetData {
        AssetData::erc20(&self.address)
    }
}

/// Read-only lookup over the configured token list.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    /// Keyed by normalized address string.
    by_address: HashMap<String, TokenMetaData>,
}

impl TokenRegistry {
    /// Build a registry from a token list.
    ///
    /// Rejects duplicate addresses and unsupported decimal precision.
    pub fn new(tokens: Vec<TokenMetaData>) -> Result<Self, TokenError> {
        let mut by_address = HashMap::with_capacity(tokens.len());
        for token in tokens {
            if token.decimals > MAX_DECIMALS {
                return Err(TokenError::InvalidTokenList(format!(
                    "{}: unsupported decimals {}",
                    token.symbol, token.decimals
                )));
            }
            let key = token.address.as_str().to_string();
            if by_address.insert(key.clone(), token).is_some() {
                return Err(TokenError::DuplicateAddress(key));
            }
        }
        Ok(Self { by_address })
    }

    /// Build a registry from a JSON token list (configuration format).
    pub fn from_json(json: &str) -> Result<Self, TokenError> {
        let tokens: Vec<TokenMetaData> = serde_json::from_str(json)
            .map_err(|e| TokenError::InvalidTokenList(e.to_string()))?;
        Self::new(tokens)
    }

    /// Look up a token by address.
    pub fn get_by_address(&self, address: &Address) -> Result<&TokenMetaData, TokenError> {
        self.by_address
            .get(address.as_str())
            .ok_or_else(|| TokenError::UnknownAddress(address.as_str().to_string()))
    }

    /// Look up a token by symbol (case-insensitive).
    pub fn get_by_symbol(&self, symbol: &str) -> Result<&TokenMetaData, TokenError> {
        self.by_address
            .values()
            .find(|t| t.symbol.eq_ignore_ascii_case(symbol))
            .ok_or_else(|| TokenError::UnknownSymbol(symbol.to_string()))
    }

    /// Look up a token by its ERC20 asset data.
    pub fn get_by_asset_data(&self, asset_data: &AssetData) -> Result<&TokenMetaData, TokenError> {
        let address = asset_data
            .erc20_address()
            .map_err(|_| TokenError::UnknownAssetData(asset_data.as_str().to_string()))?;
        self.by_address
            .get(address.as_str())
            .ok_or_else(|| TokenError::UnknownAssetData(asset_data.as_str().to_string()))
    }

    /// Number of known tokens.
    pub fn len(&self) -> usize {
        self.by_address.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_address.is_empty()
    }
}
