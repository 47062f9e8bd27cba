//! Full-width token amount used for claims and ratios.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{decimal_string, Uint112};

/// A raw 128-bit token amount in the smallest unit.
///
/// Lender claims (bond and insurance), stored fees and collateralization
/// ratios use the full `u128` range.  Amounts that must fit the pool's
/// 112-bit reserves use [`Uint112`] instead; every `Uint112` widens into
/// an `Amount` losslessly.
///
/// On the wire an `Amount` is a decimal string.
///
/// # Examples
///
/// ```
/// use maturity_quote::domain::{Amount, Uint112};
///
/// let bond = Amount::new(1_100);
/// assert_eq!(Amount::from(Uint112::from_u64(1_100)), bond);
/// assert_eq!(bond.to_string(), "1100");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Largest representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Wraps a raw `u128`.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` for the zero amount.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<Uint112> for Amount {
    fn from(value: Uint112) -> Self {
        Self(value.get())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        decimal_string::serialize(self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decimal_string::deserialize(deserializer).map(Self)
    }
}
