//! Externally supplied spot prices.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// A market spot price for one whole token, in a common quote currency.
///
/// Wraps an `f64` that must be finite and non-negative.  Spot prices are
/// display inputs fed by an external price oracle; they never influence
/// the integer amounts of a quote.
///
/// # Examples
///
/// ```
/// use maturity_quote::domain::Price;
///
/// assert!(Price::new(1.5).is_ok());
/// assert!(Price::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Price of zero.
    pub const ZERO: Self = Self(0.0);

    /// Creates a validated price.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidPrice`] if the value is negative, NaN,
    /// or infinite.
    pub fn new(value: f64) -> Result<Self, QuoteError> {
        if !value.is_finite() || value < 0.0 {
            return Err(QuoteError::InvalidPrice(
                "price must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` for a zero price.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<f64> for Price {
    type Error = QuoteError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Spot prices of a pool's asset and collateral tokens.
///
/// When present, collateralization metrics also report the collateral's
/// value relative to the principal's value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotPrices {
    /// Price of one whole asset token.
    pub asset: Price,
    /// Price of one whole collateral token.
    pub collateral: Price,
}

impl SpotPrices {
    /// Bundles both prices.
    #[must_use]
    pub const fn new(asset: Price, collateral: Price) -> Self {
        Self { asset, collateral }
    }

    /// Returns `collateral / asset`, or `None` when the asset price is zero.
    #[must_use]
    pub fn collateral_per_asset(&self) -> Option<f64> {
        if self.asset.is_zero() {
            return None;
        }
        Some(self.collateral.get() / self.asset.get())
    }
}
