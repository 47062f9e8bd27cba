//! Lend quotes.
//!
//! Mirrors the borrow pipeline with the directions flipped: the lender
//! receives bond and insurance, so the perturbed worst case is the
//! smallest claim and the guarantee narrows it by the slippage.

use futures::try_join;
use log::debug;

use crate::domain::{Amount, LendOutcome, Uint112};
use crate::error::{Leg, OracleError, QuoteError, Result};
use crate::message::{LendGiven, LendQuery, LendQuote};
use crate::traits::{CurveOracle, CurvePoint};

use super::metrics::{MetricInputs, RiskMetrics};
use super::time_bounds::{narrow, worst_receivable};
use super::{Boundaries, QuoteEngine};

impl<O: CurveOracle> QuoteEngine<O> {
    /// Quotes a lend.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::PoolMatured`] once `now >= maturity`.
    /// - [`QuoteError::InvalidQuantity`] for a zero `asset_in`.
    /// - [`QuoteError::BelowRange`] / [`QuoteError::AboveRange`] for a bond
    ///   or insurance target outside the admissible range.
    /// - Oracle, codec and arithmetic failures.
    pub async fn quote_lend(&self, query: &LendQuery) -> Result<LendQuote> {
        let context = &query.context;
        let term = self.begin("lend", context)?;
        let asset_in = query.asset_in;
        if asset_in.is_zero() {
            return Err(QuoteError::InvalidQuantity("asset in must be positive"));
        }
        let point = context.point();

        let (outcome, percent) = match query.given {
            LendGiven::Percent { percent } => {
                (self.evaluate_lend(point, asset_in, query.given).await?, percent)
            }
            LendGiven::Bond { bond_out } => {
                let bounds = self.lend_boundaries(point, asset_in).await?;
                bounds.bond().check(Leg::Bond, bond_out.get())?;
                let outcome = self.evaluate_lend(point, asset_in, query.given).await?;
                (outcome, bounds.codec()?.encode(outcome.anchor())?)
            }
            LendGiven::Insurance { insurance_out } => {
                let bounds = self.lend_boundaries(point, asset_in).await?;
                bounds.insurance().check(Leg::Insurance, insurance_out.get())?;
                let outcome = self.evaluate_lend(point, asset_in, query.given).await?;
                (outcome, bounds.codec()?.encode(outcome.anchor())?)
            }
        };

        let window = self.window(context);
        let (earlier, later) = try_join!(
            self.evaluate_lend(point.at(window.earlier), asset_in, query.given),
            self.evaluate_lend(point.at(window.later), asset_in, query.given),
        )?;

        let guarantee = |pick: fn(&LendOutcome) -> Amount| {
            narrow(
                worst_receivable(pick(&outcome), pick(&earlier), pick(&later)),
                context.slippage,
            )
        };
        let min_bond = match query.given {
            LendGiven::Bond { .. } => None,
            _ => Some(guarantee(|o| o.claims.bond)?),
        };
        let min_insurance = match query.given {
            LendGiven::Insurance { .. } => None,
            _ => Some(guarantee(|o| o.claims.insurance)?),
        };

        let projected = outcome.project(&context.state)?;
        let metrics = RiskMetrics::compute(
            &MetricInputs {
                pool: &context.pool,
                principal: asset_in.get(),
                repayment: outcome.claims.bond.get(),
                collateral: outcome.claims.insurance.get(),
                term_secs: term,
                projected: &projected,
                prices: context.spot_prices.as_ref(),
            },
            self.config.seconds_per_year(),
        )?;

        debug!(
            "lend quote: bond {} insurance {} percent {}",
            outcome.claims.bond, outcome.claims.insurance, percent
        );
        Ok(LendQuote {
            bond: outcome.claims.bond,
            insurance: outcome.claims.insurance,
            percent,
            min_bond,
            min_insurance,
            apr: metrics.apr,
            cdp: metrics.cdp,
            futuristic_apr: metrics.futuristic_apr,
            futuristic_cdp: metrics.futuristic_cdp,
        })
    }

    async fn lend_boundaries(
        &self,
        point: CurvePoint,
        asset_in: Uint112,
    ) -> Result<Boundaries<LendOutcome>> {
        Boundaries::lend(&self.oracle, point, asset_in, self.config.percent_ceiling()).await
    }

    async fn evaluate_lend(
        &self,
        point: CurvePoint,
        asset_in: Uint112,
        given: LendGiven,
    ) -> core::result::Result<LendOutcome, OracleError> {
        match given {
            LendGiven::Percent { percent } => {
                self.oracle.lend_given_percent(point, asset_in, percent).await
            }
            LendGiven::Bond { bond_out } => {
                self.oracle.lend_given_bond(point, asset_in, bond_out).await
            }
            LendGiven::Insurance { insurance_out } => {
                self.oracle
                    .lend_given_insurance(point, asset_in, insurance_out)
                    .await
            }
        }
    }
}
