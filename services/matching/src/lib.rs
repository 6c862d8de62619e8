//! Client-side matching core
//!
//! Decides how a trade intent decomposes against a snapshot of resting
//! counter-orders fetched from the relayer:
//! - Limit estimation: how much is obtainable at-or-better-than a price
//! - Market execution: which orders to fill, for how much, in what units
//! - Aggregate valuation: total taker-asset value of a resolved fill plan
//! - Market tick samples for the charting backend
//! - Order assembly: relayer orders → annotated counter-orders, new-order
//!   configs, maker filtering
//!
//! Every operation is synchronous, pure and side-effect-free: callers hand
//! in an immutable snapshot and the engine never mutates it.
//!
//! # Data flow
//!
//! ```text
//! Relayer snapshot (SignedOrder)
//!        │
//!    ┌───▼────┐
//!    │Assembly│  ← side/price/size/filled annotation (UiOrder)
//!    └───┬────┘
//!        │
//!    ┌───▼────┐
//!    │ Sort   │  ← best price first, stable on ties
//!    └───┬────┘
//!        │
//!   ┌────┴─────────┐
//!   │              │
//! ┌─▼─────┐   ┌────▼─────┐
//! │Limit  │   │Market    │
//! │esti-  │   │fill plan │
//! │mate   │   │+ units   │
//! └───────┘   └────┬─────┘
//!                  │
//!             ┌────▼─────┐
//!             │Valuation │
//!             └──────────┘
//! ```

pub mod book;
pub mod matching;
pub mod orders;
pub mod ticks;
pub mod valuation;

#[cfg(test)]
pub(crate) mod testing;

pub use book::BookSnapshot;
pub use matching::limit::match_limit_orders;
pub use matching::market::{build_market_orders, MarketFill};
pub use valuation::sum_taker_asset_fillable_orders;

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
