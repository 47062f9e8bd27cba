//! Arithmetic utilities for quote calculations.
//!
//! - [`U256`], [`mul_div`] and [`NativeWidth`]: 256-bit intermediates and
//!   the narrowing contract back to native widths.
//!
//! # Width policy
//!
//! | Type | Width | Holds |
//! |------|-------|-------|
//! | `Uint112` | 112 bits | curve parameters, curve deltas, asset amounts, dues |
//! | `Amount` | 128 bits | claims, fees, ratios |
//! | `Liquidity` | 128 bits | LP shares |
//! | `U256` | 256 bits | intermediate products only |

mod wide;

pub use wide::{mul, mul_div, narrow_u128, NativeWidth, U256};
