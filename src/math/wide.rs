//! 256-bit intermediates.
//!
//! Every multiply-then-divide in the quote pipeline widens its operands to
//! [`U256`], computes there, and narrows the result back through
//! [`NativeWidth::narrow`].  Narrowing a value that does not fit the target
//! is an error, never a wrap.

use crate::domain::{Amount, Liquidity, Uint112};
use crate::error::{QuoteError, Result};

pub use self::u256::U256;

// Expanded apart from the crate `Result` alias: the generated parsers
// name the two-parameter form.
mod u256 {
    uint::construct_uint! {
        /// 256-bit unsigned integer for intermediate products.
        pub struct U256(4);
    }
}

/// Conversion between a native-width integer and [`U256`].
pub trait NativeWidth: Sized {
    /// Widens losslessly.
    fn widen(self) -> U256;

    /// Narrows, truncating nothing.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Overflow`] if `value` exceeds the native width.
    fn narrow(value: U256) -> Result<Self>;
}

/// Narrows a `U256` to `u128`.
///
/// # Errors
///
/// Returns [`QuoteError::Overflow`] if more than 128 bits are significant.
pub fn narrow_u128(value: U256) -> Result<u128> {
    if value.bits() > 128 {
        return Err(QuoteError::Overflow("value exceeds 128 bits"));
    }
    Ok(value.low_u128())
}

impl NativeWidth for u128 {
    fn widen(self) -> U256 {
        U256::from(self)
    }

    fn narrow(value: U256) -> Result<Self> {
        narrow_u128(value)
    }
}

impl NativeWidth for Amount {
    fn widen(self) -> U256 {
        U256::from(self.get())
    }

    fn narrow(value: U256) -> Result<Self> {
        narrow_u128(value).map(Amount::new)
    }
}

impl NativeWidth for Uint112 {
    fn widen(self) -> U256 {
        U256::from(self.get())
    }

    fn narrow(value: U256) -> Result<Self> {
        narrow_u128(value).and_then(Uint112::new)
    }
}

impl NativeWidth for Liquidity {
    fn widen(self) -> U256 {
        U256::from(self.get())
    }

    fn narrow(value: U256) -> Result<Self> {
        narrow_u128(value).map(Liquidity::new)
    }
}

/// Computes `floor(a × b / denominator)` in 256 bits.
///
/// # Errors
///
/// Returns [`QuoteError::DivisionByZero`] for a zero denominator and
/// [`QuoteError::Overflow`] if `a × b` exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use maturity_quote::math::{mul_div, U256};
///
/// let r = mul_div(U256::from(u128::MAX), U256::from(4u8), U256::from(2u8));
/// assert_eq!(r, Ok(U256::from(u128::MAX) * U256::from(2u8)));
/// ```
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256> {
    if denominator.is_zero() {
        return Err(QuoteError::DivisionByZero);
    }
    let product = a
        .checked_mul(b)
        .ok_or(QuoteError::Overflow("256-bit product"))?;
    Ok(product / denominator)
}

/// Computes `a × b` in 256 bits.
///
/// # Errors
///
/// Returns [`QuoteError::Overflow`] if the product exceeds 256 bits.
pub fn mul(a: U256, b: U256) -> Result<U256> {
    a.checked_mul(b)
        .ok_or(QuoteError::Overflow("256-bit product"))
}
