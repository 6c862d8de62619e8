//! Decimal numerics for prices, quantities and unit conversion
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! `Price` and `Quantity` are non-negative `Decimal` newtypes; raw token
//! amounts in an asset's smallest unit are integer-valued `Decimal`s.
//!
//! Unit conversion between smallest-unit amounts and human decimal values is
//! an explicit, named operation parameterized by the asset's decimal
//! precision. The only rounding the engine applies to outbound amounts is
//! `ceil_to_unit`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use crate::errors::NumericError;

/// Maximum supported asset decimal precision (Decimal scale limit).
pub const MAX_DECIMALS: u32 = 28;

/// A non-negative price, quote-asset units per base-asset unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero price.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Create from an integer value.
    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Parse from a decimal string. Returns `None` on parse failure or a
    /// negative value.
    pub fn from_str(s: &str) -> Option<Self> {
        s.parse::<Decimal>().ok().and_then(Self::try_new)
    }

    /// Wrap a `Decimal`, rejecting negative values.
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value.is_sign_negative() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// The raw decimal value.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative quantity of an asset.
///
/// Depending on context this holds either a smallest-unit amount (an
/// integer-valued decimal) or a human decimal value; conversion between the
/// two is always explicit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Zero quantity.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Create from an integer value.
    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Parse from a decimal string. Returns `None` on parse failure or a
    /// negative value.
    pub fn from_str(s: &str) -> Option<Self> {
        s.parse::<Decimal>().ok().and_then(Self::try_new)
    }

    /// Wrap a `Decimal`, rejecting negative values.
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value.is_sign_negative() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// The raw decimal value.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Subtract, clamping at zero instead of going negative.
    pub fn saturating_sub(&self, other: Quantity) -> Quantity {
        let diff = self.0 - other.0;
        if diff.is_sign_negative() {
            Quantity::zero()
        } else {
            Quantity(diff)
        }
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 + rhs.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 10^decimals as a `Decimal`.
fn pow10(decimals: u32) -> Result<Decimal, NumericError> {
    if decimals > MAX_DECIMALS {
        return Err(NumericError::UnsupportedDecimals(decimals));
    }
    Ok(Decimal::from_i128_with_scale(10_i128.pow(decimals), 0))
}

/// Convert a smallest-unit amount into a human decimal value.
///
/// E.g. `1500000` with 6 decimals → `1.5`.
pub fn base_units_to_decimal(amount: Decimal, decimals: u32) -> Result<Decimal, NumericError> {
    Ok(amount / pow10(decimals)?)
}

/// Convert a human decimal value into a smallest-unit amount.
///
/// No rounding is applied; the result may be fractional and callers round
/// explicitly (the engine always uses [`ceil_to_unit`]).
pub fn decimal_to_base_units(value: Decimal, decimals: u32) -> Result<Decimal, NumericError> {
    Ok(value * pow10(decimals)?)
}

/// Round an amount up to the nearest whole unit.
///
/// On-chain amounts are integers in the asset's smallest unit; rounding up
/// never under-allocates relative to the intended trade.
pub fn ceil_to_unit(amount: Decimal) -> Decimal {
    amount.ceil()
}
