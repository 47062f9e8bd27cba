//! Caller-chosen slippage tolerance.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// Decimal places of a parts-per-million tolerance.
const PPM_SCALE: u32 = 6;

/// Fractional tolerance for adverse movement between quoting and
/// settlement.
///
/// Crosses the wire as a plain fraction in `[0, 1]` (e.g. `0.005` for half
/// a percent).  The fraction is held exactly as `units / 10^scale`, taken
/// from the shortest decimal that reads back as the same `f64`, so a
/// tolerance of `0.0000015` widens by exactly 1.5 ppm.
///
/// # Examples
///
/// ```
/// use maturity_quote::domain::Slippage;
///
/// let s = Slippage::from_fraction(0.005).expect("in range");
/// assert_eq!((s.units(), s.scale()), (5, 3));
/// assert_eq!(Slippage::from_ppm(5_000), Ok(s));
/// assert!(Slippage::from_fraction(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Slippage {
    units: u64,
    scale: u32,
}

impl Slippage {
    /// No tolerance.
    pub const ZERO: Self = Self { units: 0, scale: 0 };

    /// Full tolerance (100%).
    pub const FULL: Self = Self { units: 1, scale: 0 };

    /// Creates a tolerance from parts per million.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidSlippage`] above 1 000 000.
    pub fn from_ppm(ppm: u32) -> Result<Self, QuoteError> {
        if ppm > 1_000_000 {
            return Err(QuoteError::InvalidSlippage("slippage must be within [0, 1]"));
        }
        Ok(Self::normalized(u64::from(ppm), PPM_SCALE))
    }

    /// Creates a tolerance from a fraction in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidSlippage`] if the fraction is not
    /// finite or lies outside `[0, 1]`.
    pub fn from_fraction(fraction: f64) -> Result<Self, QuoteError> {
        if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
            return Err(QuoteError::InvalidSlippage("slippage must be within [0, 1]"));
        }
        if fraction.is_sign_negative() {
            // only -0.0 gets past the range check
            return Ok(Self::ZERO);
        }
        // `Display` for f64 prints the shortest round-tripping decimal and
        // never switches to exponent notation.
        let text = fraction.to_string();
        let (whole, digits) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let scale = u32::try_from(digits.len())
            .map_err(|_| QuoteError::InvalidSlippage("slippage has too many digits"))?;
        let units = format!("{whole}{digits}")
            .parse::<u64>()
            .map_err(|_| QuoteError::InvalidSlippage("slippage has too many digits"))?;
        Ok(Self::normalized(units, scale))
    }

    fn normalized(mut units: u64, mut scale: u32) -> Self {
        if units == 0 {
            return Self::ZERO;
        }
        while scale > 0 && units % 10 == 0 {
            units /= 10;
            scale -= 1;
        }
        Self { units, scale }
    }

    /// Numerator of the exact fraction.
    #[must_use]
    pub const fn units(&self) -> u64 {
        self.units
    }

    /// Decimal places of the exact fraction: the tolerance is
    /// `units / 10^scale`.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns `true` for a zero tolerance.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.units == 0
    }

    /// Returns the tolerance as the nearest `f64`.
    #[must_use]
    pub fn as_fraction(&self) -> f64 {
        format!("{}e-{}", self.units, self.scale)
            .parse()
            .unwrap_or(f64::NAN)
    }
}

impl TryFrom<f64> for Slippage {
    type Error = QuoteError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_fraction(value)
    }
}

impl From<Slippage> for f64 {
    fn from(value: Slippage) -> Self {
        value.as_fraction()
    }
}

impl fmt::Display for Slippage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_fraction() * 100.0)
    }
}
