//! Liquidity-provider share units.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::decimal_string;

/// Pool shares minted to a liquidity provider.
///
/// Kept distinct from [`Amount`](super::Amount) because it counts claims
/// on the pool as a whole rather than units of a particular token.
///
/// # Examples
///
/// ```
/// use maturity_quote::domain::Liquidity;
///
/// let shares = Liquidity::new(1_000);
/// assert_eq!(shares.get(), 1_000);
/// assert!(Liquidity::ZERO.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Liquidity(u128);

impl Liquidity {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw share count.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw share count.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` when no shares are held.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Liquidity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        decimal_string::serialize(self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Liquidity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decimal_string::deserialize(deserializer).map(Self)
    }
}
