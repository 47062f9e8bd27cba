//! 112-bit unsigned integer matching the pool's reserve width.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::decimal_string;
use crate::error::QuoteError;

/// Largest value representable in 112 bits.
const MAX_U112: u128 = (1u128 << 112) - 1;

/// Unsigned integer bounded to `0 ..= 2^112 − 1`.
///
/// Curve parameters, curve deltas, asset amounts and borrower dues are all
/// stored on-chain in 112-bit slots.  The bound is enforced at
/// construction, so every live `Uint112` is a value a settlement
/// transaction can actually carry.
///
/// # Examples
///
/// ```
/// use maturity_quote::domain::Uint112;
///
/// let debt = Uint112::new(1_000).expect("fits in 112 bits");
/// assert_eq!(debt.get(), 1_000);
/// assert!(Uint112::new(1u128 << 112).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Uint112(u128);

impl Uint112 {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// `2^112 − 1`.
    pub const MAX: Self = Self(MAX_U112);

    /// Number of significant bits.
    pub const BITS: u32 = 112;

    /// Creates a value after checking the 112-bit bound.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Overflow`] if `value` exceeds `2^112 − 1`.
    pub const fn new(value: u128) -> Result<Self, QuoteError> {
        if value > MAX_U112 {
            return Err(QuoteError::Overflow("value exceeds 112 bits"));
        }
        Ok(Self(value))
    }

    /// Infallible construction from a `u64`, which always fits.
    pub const fn from_u64(value: u64) -> Self {
        Self(value as u128)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` for zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition; `None` when the sum leaves the 112-bit range.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) if v <= MAX_U112 => Some(Self(v)),
            _ => None,
        }
    }

    /// Checked subtraction; `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl TryFrom<u128> for Uint112 {
    type Error = QuoteError;

    fn try_from(value: u128) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Uint112 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Uint112 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        decimal_string::serialize(self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Uint112 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = decimal_string::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}
