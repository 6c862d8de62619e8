//! Matching entry points
//!
//! Limit estimation and market fill-plan construction over a sorted
//! snapshot. Both walk counter-orders best-price-first and allocate
//! greedily against the requested amount.

pub mod limit;
pub mod market;

pub use limit::match_limit_orders;
pub use market::{build_market_orders, MarketFill};
