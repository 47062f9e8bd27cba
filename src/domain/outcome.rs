//! Results of a single curve-oracle evaluation.
//!
//! Each record carries the dependent amounts a settlement would produce
//! together with the curve deltas it would apply.  The quote pipeline
//! reads two things off an outcome: the percent-interpolated delta
//! ([`anchor`](BorrowOutcome::anchor)) and the post-trade curve state
//! ([`project`](BorrowOutcome::project)).

use serde::{Deserialize, Serialize};

use super::{Claims, CurveState, Due, Liquidity, Uint112};
use crate::error::{QuoteError, Result};

fn add(value: Uint112, delta: Uint112) -> Result<Uint112> {
    value
        .checked_add(&delta)
        .ok_or(QuoteError::Overflow("curve parameter exceeds 112 bits"))
}

fn sub(value: Uint112, delta: Uint112) -> Result<Uint112> {
    value
        .checked_sub(&delta)
        .ok_or(QuoteError::Underflow("curve parameter below zero"))
}

/// Borrowing: the pool pays out asset (x falls) while the interest and
/// collateral parameters rise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowOutcome {
    /// Debt and collateral the borrower would owe.
    pub due: Due,
    /// Asset leaving the pool.
    pub x_decrease: Uint112,
    /// Interest parameter increase.
    pub y_increase: Uint112,
    /// Collateral parameter increase.
    pub z_increase: Uint112,
}

impl BorrowOutcome {
    /// Delta interpolated by the percent domain.
    #[must_use]
    pub const fn anchor(&self) -> Uint112 {
        self.y_increase
    }

    /// Curve state after this borrow settles.
    ///
    /// # Errors
    ///
    /// Returns an underflow error if the pool cannot pay `x_decrease`, or
    /// an overflow error if `y` or `z` leave 112 bits.
    pub fn project(&self, state: &CurveState) -> Result<CurveState> {
        Ok(CurveState::new(
            sub(state.x, self.x_decrease)?,
            add(state.y, self.y_increase)?,
            add(state.z, self.z_increase)?,
        ))
    }
}

/// Lending: asset enters the pool (x rises) while the interest and
/// collateral parameters fall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendOutcome {
    /// Bond and insurance the lender would receive.
    pub claims: Claims,
    /// Asset entering the pool.
    pub x_increase: Uint112,
    /// Interest parameter decrease.
    pub y_decrease: Uint112,
    /// Collateral parameter decrease.
    pub z_decrease: Uint112,
}

impl LendOutcome {
    /// Delta interpolated by the percent domain.
    #[must_use]
    pub const fn anchor(&self) -> Uint112 {
        self.y_decrease
    }

    /// Curve state after this lend settles.
    ///
    /// # Errors
    ///
    /// Returns an overflow error if `x` leaves 112 bits, or an underflow
    /// error if `y` or `z` would go negative.
    pub fn project(&self, state: &CurveState) -> Result<CurveState> {
        Ok(CurveState::new(
            add(state.x, self.x_increase)?,
            sub(state.y, self.y_decrease)?,
            sub(state.z, self.z_decrease)?,
        ))
    }
}

/// Liquidity provision: all three parameters rise and the provider takes
/// on a due alongside the minted shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityOutcome {
    /// Shares minted to the provider.
    pub liquidity_out: Liquidity,
    /// Due the provider takes on.
    pub due: Due,
    /// Asset entering the pool.
    pub x_increase: Uint112,
    /// Interest parameter increase.
    pub y_increase: Uint112,
    /// Collateral parameter increase.
    pub z_increase: Uint112,
}

impl LiquidityOutcome {
    /// Curve state after the provision settles.
    ///
    /// # Errors
    ///
    /// Returns an overflow error if any parameter leaves 112 bits.
    pub fn project(&self, state: &CurveState) -> Result<CurveState> {
        Ok(CurveState::new(
            add(state.x, self.x_increase)?,
            add(state.y, self.y_increase)?,
            add(state.z, self.z_increase)?,
        ))
    }
}
