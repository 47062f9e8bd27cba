//! Token decimal places.

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// Largest supported precision (the ERC-20 convention).
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places of a token's smallest unit.
///
/// Valid range is `0..=18`.  Collateralization ratios are scaled by
/// `10^decimals` of the asset so they read in the collateral's native
/// precision.
///
/// # Examples
///
/// ```
/// use maturity_quote::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.factor(), 1_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Eighteen decimal places.
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a validated precision.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, QuoteError> {
        if value > MAX_DECIMALS {
            return Err(QuoteError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`.
    ///
    /// Never overflows: `10^18 < u128::MAX`.
    #[must_use]
    pub const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }

    /// Converts a raw amount into whole units as a float, for display-only
    /// ratios such as the value-weighted collateralization.
    #[must_use]
    pub fn to_units(&self, raw: u128) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let value = raw as f64 / self.factor() as f64;
        value
    }
}

impl TryFrom<u8> for Decimals {
    type Error = QuoteError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(value: Decimals) -> Self {
        value.0
    }
}
