//! Two-point interpolation between curve deltas and the percent domain.
//!
//! The oracle evaluated at percent `0` and at the configured ceiling
//! yields two anchor deltas `v_floor` and `v_ceiling`.  A delta `v` in
//! between maps onto the domain as
//!
//! ```text
//! percent = floor((v − v_floor) × (ceiling + 1) / (v_ceiling − v_floor))
//! ```
//!
//! which is the usual `× 2^32` form for the default ceiling `2^32 − 1`.
//! The codec accepts anchors in either order, so a delta that falls as
//! percent grows encodes just as well.

use crate::domain::{Percent, Uint112};
use crate::error::{QuoteError, Result};
use crate::math::{mul_div, narrow_u128, NativeWidth, U256};

/// Interpolates between the deltas observed at the two domain extremes.
///
/// # Examples
///
/// ```
/// use maturity_quote::domain::{Percent, Uint112};
/// use maturity_quote::quote::PercentCodec;
///
/// let codec = PercentCodec::new(
///     Uint112::from_u64(0),
///     Uint112::from_u64(u64::from(u32::MAX)),
///     Percent::MAX,
/// )
/// .expect("distinct anchors");
/// let p = codec.encode(Uint112::from_u64(1 << 31)).expect("encodes");
/// assert!(p.get().abs_diff(1 << 31) <= 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentCodec {
    floor: Uint112,
    ceiling: Uint112,
    ceiling_percent: Percent,
}

impl PercentCodec {
    /// Creates a codec from the deltas at percent `0` and at
    /// `ceiling_percent`.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::DegenerateCurve`] if both anchors are equal,
    /// and [`QuoteError::InvalidQuantity`] for a zero ceiling.
    pub fn new(floor: Uint112, ceiling: Uint112, ceiling_percent: Percent) -> Result<Self> {
        if floor == ceiling {
            return Err(QuoteError::DegenerateCurve);
        }
        if ceiling_percent == Percent::ZERO {
            return Err(QuoteError::InvalidQuantity("percent ceiling must be positive"));
        }
        Ok(Self {
            floor,
            ceiling,
            ceiling_percent,
        })
    }

    /// Delta at percent `0`.
    #[must_use]
    pub const fn floor(&self) -> Uint112 {
        self.floor
    }

    /// Delta at the ceiling percent.
    #[must_use]
    pub const fn ceiling(&self) -> Uint112 {
        self.ceiling
    }

    /// Number of fixed-point steps spanned by the anchors.
    fn steps(&self) -> U256 {
        U256::from(u64::from(self.ceiling_percent.get()) + 1)
    }

    /// Distance between the anchors, always positive.
    fn range(&self) -> u128 {
        self.floor.get().abs_diff(self.ceiling.get())
    }

    /// Maps a delta onto the percent domain.
    ///
    /// Deltas outside the anchors clamp to `0` or to the ceiling.
    ///
    /// # Errors
    ///
    /// Propagates arithmetic errors from the 256-bit interpolation.
    pub fn encode(&self, delta: Uint112) -> Result<Percent> {
        let (v, lo, hi) = (delta.get(), self.floor.get(), self.ceiling.get());
        let offset = if hi > lo {
            v.saturating_sub(lo)
        } else {
            lo.saturating_sub(v)
        };
        let raw = mul_div(offset.widen(), self.steps(), self.range().widen())?;
        let ceiling = U256::from(self.ceiling_percent.get());
        let clamped = if raw > ceiling { ceiling } else { raw };
        // clamped <= ceiling_percent, which is a u32.
        Ok(Percent::new(clamped.low_u32()))
    }

    /// Maps a percent back onto a delta, rounding toward the floor anchor.
    ///
    /// # Errors
    ///
    /// Propagates arithmetic errors from the 256-bit interpolation.
    pub fn decode(&self, percent: Percent) -> Result<Uint112> {
        let travelled = narrow_u128(mul_div(
            U256::from(percent.get()),
            self.range().widen(),
            self.steps(),
        )?)?;
        let (lo, hi) = (self.floor.get(), self.ceiling.get());
        let value = if hi > lo {
            lo.checked_add(travelled)
                .ok_or(QuoteError::Overflow("decoded delta"))?
        } else {
            lo.checked_sub(travelled)
                .ok_or(QuoteError::Underflow("decoded delta"))?
        };
        Uint112::new(value)
    }
}
