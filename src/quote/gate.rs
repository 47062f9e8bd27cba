//! Admissible-range check run before a target-amount quote.
//!
//! The oracle will happily evaluate a debt or collateral target that lies
//! outside what the curve can economically offer, returning deltas that
//! mean nothing.  Evaluating the two percent-domain extremes first gives
//! the admissible range of each dependent amount; a target outside it
//! fails with a leg-specific code before the main evaluation runs.

use futures::try_join;
use log::debug;

use crate::domain::{BorrowOutcome, LendOutcome, Percent, Uint112};
use crate::error::{Leg, QuoteError, Result};
use crate::traits::{CurveOracle, CurvePoint};

use super::PercentCodec;

/// Inclusive range `[minimum, maximum]` of one dependent amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissibleRange {
    /// Smallest admissible amount.
    pub minimum: u128,
    /// Largest admissible amount.
    pub maximum: u128,
}

impl AdmissibleRange {
    /// Range spanned by two boundary values, in whichever order they come.
    #[must_use]
    pub fn spanning(a: u128, b: u128) -> Self {
        Self {
            minimum: a.min(b),
            maximum: a.max(b),
        }
    }

    /// Returns `true` if `value` lies within the range, bounds included.
    #[must_use]
    pub const fn contains(&self, value: u128) -> bool {
        self.minimum <= value && value <= self.maximum
    }

    /// Classifies a requested amount for `leg`.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::BelowRange`] or [`QuoteError::AboveRange`]
    /// when `requested` falls outside the range.
    pub fn check(&self, leg: Leg, requested: u128) -> Result<()> {
        if requested < self.minimum {
            return Err(QuoteError::BelowRange {
                leg,
                requested,
                minimum: self.minimum,
            });
        }
        if requested > self.maximum {
            return Err(QuoteError::AboveRange {
                leg,
                requested,
                maximum: self.maximum,
            });
        }
        Ok(())
    }
}

/// Oracle outcomes at percent `0` and at the configured ceiling.
///
/// Both the gate and the [`PercentCodec`] read from the same pair, so a
/// target-amount quote pays for the extremes only once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundaries<T> {
    /// Outcome at percent `0`.
    pub floor: T,
    /// Outcome at the ceiling percent.
    pub ceiling: T,
    /// Percent the ceiling outcome was evaluated at.
    pub ceiling_percent: Percent,
}

impl Boundaries<BorrowOutcome> {
    /// Evaluates both extremes of a borrow concurrently.
    ///
    /// # Errors
    ///
    /// Propagates the first oracle failure.
    pub async fn borrow<O: CurveOracle>(
        oracle: &O,
        point: CurvePoint,
        asset_out: Uint112,
        ceiling_percent: Percent,
    ) -> Result<Self> {
        let (floor, ceiling) = try_join!(
            oracle.borrow_given_percent(point, asset_out, Percent::ZERO),
            oracle.borrow_given_percent(point, asset_out, ceiling_percent),
        )?;
        debug!(
            "borrow boundaries: debt {}..{}, collateral {}..{}",
            floor.due.debt, ceiling.due.debt, floor.due.collateral, ceiling.due.collateral
        );
        Ok(Self {
            floor,
            ceiling,
            ceiling_percent,
        })
    }

    /// Admissible debt range.
    #[must_use]
    pub fn debt(&self) -> AdmissibleRange {
        AdmissibleRange::spanning(self.floor.due.debt.get(), self.ceiling.due.debt.get())
    }

    /// Admissible collateral range.
    #[must_use]
    pub fn collateral(&self) -> AdmissibleRange {
        AdmissibleRange::spanning(
            self.floor.due.collateral.get(),
            self.ceiling.due.collateral.get(),
        )
    }

    /// Codec anchored on the interest deltas of both extremes.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::DegenerateCurve`] if the anchors coincide.
    pub fn codec(&self) -> Result<PercentCodec> {
        PercentCodec::new(
            self.floor.anchor(),
            self.ceiling.anchor(),
            self.ceiling_percent,
        )
    }
}

impl Boundaries<LendOutcome> {
    /// Evaluates both extremes of a lend concurrently.
    ///
    /// # Errors
    ///
    /// Propagates the first oracle failure.
    pub async fn lend<O: CurveOracle>(
        oracle: &O,
        point: CurvePoint,
        asset_in: Uint112,
        ceiling_percent: Percent,
    ) -> Result<Self> {
        let (floor, ceiling) = try_join!(
            oracle.lend_given_percent(point, asset_in, Percent::ZERO),
            oracle.lend_given_percent(point, asset_in, ceiling_percent),
        )?;
        debug!(
            "lend boundaries: bond {}..{}, insurance {}..{}",
            floor.claims.bond, ceiling.claims.bond, floor.claims.insurance, ceiling.claims.insurance
        );
        Ok(Self {
            floor,
            ceiling,
            ceiling_percent,
        })
    }

    /// Admissible bond range.
    #[must_use]
    pub fn bond(&self) -> AdmissibleRange {
        AdmissibleRange::spanning(self.floor.claims.bond.get(), self.ceiling.claims.bond.get())
    }

    /// Admissible insurance range.
    #[must_use]
    pub fn insurance(&self) -> AdmissibleRange {
        AdmissibleRange::spanning(
            self.floor.claims.insurance.get(),
            self.ceiling.claims.insurance.get(),
        )
    }

    /// Codec anchored on the interest deltas of both extremes.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::DegenerateCurve`] if the anchors coincide.
    pub fn codec(&self) -> Result<PercentCodec> {
        PercentCodec::new(
            self.floor.anchor(),
            self.ceiling.anchor(),
            self.ceiling_percent,
        )
    }
}
