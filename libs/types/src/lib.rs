//! Types library for the trade widget matching core
//!
//! This library provides the type definitions shared by the matching engine
//! and its callers: validated identifiers, decimal numerics with explicit
//! unit conversion, token metadata lookup, and the order shapes exchanged
//! with the relayer.
//!
//! # Modules
//! - `ids`: Validated identifiers (Address, AssetData, TradingPair)
//! - `numeric`: Decimal newtypes (Price, Quantity) and unit conversion
//! - `token`: Token metadata and the read-only token registry
//! - `order`: Relayer order shapes (SignedOrder, UiOrder) and Side
//! - `errors`: Error taxonomy

// Public modules
pub mod errors;
pub mod ids;
pub mod numeric;
pub mod order;
pub mod token;

// Library version constant
pub const LIB_VERSION: &str = "0.1.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::token::*;
}
