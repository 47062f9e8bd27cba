//! Canonical fixed-point position inside a curve's admissible range.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A point of the percent domain `[0, 2^32)`.
///
/// `0` selects the lower extreme of the curve's admissible range and
/// `2^32 − 1` the upper extreme; values in between interpolate linearly
/// in the curve delta chosen by the oracle.  On the wire a percent is a
/// plain JSON number.
///
/// # Examples
///
/// ```
/// use maturity_quote::domain::Percent;
///
/// let half = Percent::new(1 << 31);
/// assert!(half > Percent::ZERO && half < Percent::MAX);
/// assert_eq!(Percent::SCALE, 1u64 << 32);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Percent(u32);

impl Percent {
    /// Lower extreme of the domain.
    pub const ZERO: Self = Self(0);

    /// Upper extreme of the domain, `2^32 − 1`.
    pub const MAX: Self = Self(u32::MAX);

    /// Fixed-point denominator, `2^32`.
    pub const SCALE: u64 = 1 << 32;

    /// Wraps a raw fixed-point value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw fixed-point value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns the percent as a fraction of the domain, in `[0, 1)`.
    #[must_use]
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / Self::SCALE as f64
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/2^32", self.0)
    }
}
