//! Time-perturbed worst cases and slippage-widened guarantees.
//!
//! A quote is computed at `now` but settles some time later.  The
//! pipeline re-evaluates the oracle at an earlier and a later timestamp,
//! takes the worst of the three results for every dependent amount, and
//! widens (for amounts the caller pays) or narrows (for amounts the
//! caller receives) that worst case by the slippage tolerance.
//!
//! ```text
//! max = floor(worst × (1 + s)) = worst + floor(worst × s)
//! min = floor(worst × (1 − s)) = worst − ceil(worst × s)
//! ```
//!
//! `s` is the exact decimal fraction held by [`Slippage`], so neither
//! bound is looser or tighter than the caller's tolerance.

use crate::config::QuoteConfig;
use crate::domain::Slippage;
use crate::error::{QuoteError, Result};
use crate::math::{mul, NativeWidth, U256};

/// Largest power of ten that fits [`U256`].
const MAX_SCALE: u32 = 77;

/// The two timestamps bracketing likely settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    /// `now − earlier_offset`, saturating at zero.
    pub earlier: u64,
    /// `now + later_offset`, clamped to `maturity − 1`.
    pub later: u64,
}

impl TimeWindow {
    /// Brackets `now` for a pool maturing at `maturity`.
    ///
    /// Callers guarantee `now < maturity`, so `later >= now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use maturity_quote::config::QuoteConfig;
    /// use maturity_quote::quote::TimeWindow;
    ///
    /// let w = TimeWindow::around(1_000, 1_100, &QuoteConfig::default());
    /// assert_eq!((w.earlier, w.later), (940, 1_099));
    /// ```
    #[must_use]
    pub fn around(now: u64, maturity: u64, config: &QuoteConfig) -> Self {
        let earlier = now.saturating_sub(config.earlier_offset_secs());
        let later = now
            .saturating_add(config.later_offset_secs())
            .min(maturity.saturating_sub(1));
        Self { earlier, later }
    }
}

/// Largest of the quoted and perturbed values: the worst case for an
/// amount the caller pays.
#[must_use]
pub fn worst_payable<T: Ord + Copy>(quoted: T, earlier: T, later: T) -> T {
    quoted.max(earlier).max(later)
}

/// Smallest of the quoted and perturbed values: the worst case for an
/// amount the caller receives.
#[must_use]
pub fn worst_receivable<T: Ord + Copy>(quoted: T, earlier: T, later: T) -> T {
    quoted.min(earlier).min(later)
}

/// Ceiling the caller agrees to pay: `worst × (1 + s)`, floored.
///
/// # Errors
///
/// Returns an overflow error if the widened value leaves `T`'s width.
pub fn widen<T: NativeWidth>(worst: T, slippage: Slippage) -> Result<T> {
    let worst = worst.widen();
    let (allowance, _) = share(worst, slippage)?;
    let widened = worst
        .checked_add(allowance)
        .ok_or(QuoteError::Overflow("widened bound"))?;
    T::narrow(widened)
}

/// Floor the caller agrees to receive: `worst × (1 − s)`, floored.
///
/// # Errors
///
/// Never fails for in-range inputs; the signature matches [`widen`].
pub fn narrow<T: NativeWidth>(worst: T, slippage: Slippage) -> Result<T> {
    let worst = worst.widen();
    let (_, allowance) = share(worst, slippage)?;
    let narrowed = worst
        .checked_sub(allowance)
        .ok_or(QuoteError::Underflow("narrowed bound"))?;
    T::narrow(narrowed)
}

/// `value × s` rounded down and up.
fn share(value: U256, slippage: Slippage) -> Result<(U256, U256)> {
    let product = mul(value, U256::from(slippage.units()))?;
    if slippage.scale() > MAX_SCALE {
        // value < 2^128 and units < 2^64, so the product is below 10^58
        let up = if product.is_zero() { U256::zero() } else { U256::one() };
        return Ok((U256::zero(), up));
    }
    let denominator = U256::exp10(slippage.scale() as usize);
    let (down, rest) = product.div_mod(denominator);
    let up = if rest.is_zero() { down } else { down + U256::one() };
    Ok((down, up))
}
