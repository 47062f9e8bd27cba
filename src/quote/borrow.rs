//! Borrow quotes.
//!
//! Pipeline for one [`BorrowQuery`]:
//!
//! 1. Reject a matured pool or an empty `asset_out`.
//! 2. For a debt or collateral target, evaluate both percent extremes and
//!    gate the target (codes 1/2 for debt, 3/4 for collateral).
//! 3. Evaluate the main outcome and, for a target query, encode its
//!    interest delta back onto the percent domain.
//! 4. Re-evaluate at the earlier and later timestamps; the largest debt
//!    and collateral widen into `max_debt` / `max_collateral`.
//! 5. Compute current and futuristic metrics.

use futures::try_join;
use log::debug;

use crate::domain::{BorrowOutcome, Uint112};
use crate::error::{Leg, OracleError, QuoteError, Result};
use crate::message::{BorrowGiven, BorrowQuery, BorrowQuote};
use crate::traits::{CurveOracle, CurvePoint};

use super::metrics::{MetricInputs, RiskMetrics};
use super::time_bounds::{widen, worst_payable};
use super::{Boundaries, QuoteEngine};

impl<O: CurveOracle> QuoteEngine<O> {
    /// Quotes a borrow.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::PoolMatured`] once `now >= maturity`.
    /// - [`QuoteError::InvalidQuantity`] for a zero `asset_out`.
    /// - [`QuoteError::BelowRange`] / [`QuoteError::AboveRange`] when the
    ///   debt or collateral target lies outside the admissible range.
    /// - [`QuoteError::DegenerateCurve`] when the percent extremes coincide.
    /// - Oracle and arithmetic failures.
    pub async fn quote_borrow(&self, query: &BorrowQuery) -> Result<BorrowQuote> {
        let context = &query.context;
        let term = self.begin("borrow", context)?;
        let asset_out = query.asset_out;
        if asset_out.is_zero() {
            return Err(QuoteError::InvalidQuantity("asset out must be positive"));
        }
        let point = context.point();

        let (outcome, percent) = match query.given {
            BorrowGiven::Percent { percent } => {
                let outcome = self.evaluate_borrow(point, asset_out, query.given).await?;
                (outcome, percent)
            }
            BorrowGiven::Debt { debt_in } => {
                let bounds = self.borrow_boundaries(point, asset_out).await?;
                bounds.debt().check(Leg::Debt, debt_in.get())?;
                let outcome = self.evaluate_borrow(point, asset_out, query.given).await?;
                (outcome, bounds.codec()?.encode(outcome.anchor())?)
            }
            BorrowGiven::Collateral { collateral_in } => {
                let bounds = self.borrow_boundaries(point, asset_out).await?;
                bounds
                    .collateral()
                    .check(Leg::Collateral, collateral_in.get())?;
                let outcome = self.evaluate_borrow(point, asset_out, query.given).await?;
                (outcome, bounds.codec()?.encode(outcome.anchor())?)
            }
        };

        let window = self.window(context);
        let (earlier, later) = try_join!(
            self.evaluate_borrow(point.at(window.earlier), asset_out, query.given),
            self.evaluate_borrow(point.at(window.later), asset_out, query.given),
        )?;

        let max_debt = match query.given {
            BorrowGiven::Debt { .. } => None,
            _ => Some(widen(
                worst_payable(outcome.due.debt, earlier.due.debt, later.due.debt),
                context.slippage,
            )?),
        };
        let max_collateral = match query.given {
            BorrowGiven::Collateral { .. } => None,
            _ => Some(widen(
                worst_payable(
                    outcome.due.collateral,
                    earlier.due.collateral,
                    later.due.collateral,
                ),
                context.slippage,
            )?),
        };

        let projected = outcome.project(&context.state)?;
        let metrics = RiskMetrics::compute(
            &MetricInputs {
                pool: &context.pool,
                principal: asset_out.get(),
                repayment: outcome.due.debt.get(),
                collateral: outcome.due.collateral.get(),
                term_secs: term,
                projected: &projected,
                prices: context.spot_prices.as_ref(),
            },
            self.config.seconds_per_year(),
        )?;

        debug!(
            "borrow quote: debt {} collateral {} percent {}",
            outcome.due.debt, outcome.due.collateral, percent
        );
        Ok(BorrowQuote {
            debt: outcome.due.debt,
            collateral: outcome.due.collateral,
            percent,
            max_debt,
            max_collateral,
            apr: metrics.apr,
            cdp: metrics.cdp,
            futuristic_apr: metrics.futuristic_apr,
            futuristic_cdp: metrics.futuristic_cdp,
        })
    }

    /// Percent extremes of a borrow of `asset_out`.
    async fn borrow_boundaries(
        &self,
        point: CurvePoint,
        asset_out: Uint112,
    ) -> Result<Boundaries<BorrowOutcome>> {
        Boundaries::borrow(
            &self.oracle,
            point,
            asset_out,
            self.config.percent_ceiling(),
        )
        .await
    }

    /// One oracle evaluation for the query's known field.
    async fn evaluate_borrow(
        &self,
        point: CurvePoint,
        asset_out: Uint112,
        given: BorrowGiven,
    ) -> core::result::Result<BorrowOutcome, OracleError> {
        match given {
            BorrowGiven::Percent { percent } => {
                self.oracle
                    .borrow_given_percent(point, asset_out, percent)
                    .await
            }
            BorrowGiven::Debt { debt_in } => {
                self.oracle
                    .borrow_given_debt(point, asset_out, debt_in)
                    .await
            }
            BorrowGiven::Collateral { collateral_in } => {
                self.oracle
                    .borrow_given_collateral(point, asset_out, collateral_in)
                    .await
            }
        }
    }
}
