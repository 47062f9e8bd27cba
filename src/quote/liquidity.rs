//! Add-liquidity quotes.
//!
//! No percent domain here: the oracle answers directly for an asset, debt
//! or collateral amount.  The time window still applies, and the pipeline
//! bounds every field the caller did not fix: the minted liquidity narrows,
//! the asset, debt and collateral the caller supplies widen.

use futures::try_join;
use log::debug;

use crate::domain::{LiquidityOutcome, Uint112};
use crate::error::{OracleError, QuoteError, Result};
use crate::message::{LiquidityGiven, LiquidityQuery, LiquidityQuote};
use crate::traits::{CurveOracle, CurvePoint};

use super::metrics::FuturisticMetrics;
use super::time_bounds::{narrow, widen, worst_payable, worst_receivable};
use super::QuoteEngine;

impl<O: CurveOracle> QuoteEngine<O> {
    /// Quotes an add-liquidity.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::PoolMatured`] once `now >= maturity`.
    /// - [`QuoteError::InvalidQuantity`] for a zero known amount.
    /// - Oracle and arithmetic failures.
    pub async fn quote_liquidity(&self, query: &LiquidityQuery) -> Result<LiquidityQuote> {
        let context = &query.context;
        self.begin("liquidity", context)?;
        let known = match query.given {
            LiquidityGiven::Asset { asset_in } => asset_in,
            LiquidityGiven::Debt { debt_in } => debt_in,
            LiquidityGiven::Collateral { collateral_in } => collateral_in,
        };
        if known.is_zero() {
            return Err(QuoteError::InvalidQuantity("liquidity input must be positive"));
        }
        let point = context.point();
        let window = self.window(context);
        let (outcome, earlier, later) = try_join!(
            self.evaluate_liquidity(point, query.given),
            self.evaluate_liquidity(point.at(window.earlier), query.given),
            self.evaluate_liquidity(point.at(window.later), query.given),
        )?;

        let payable = |pick: fn(&LiquidityOutcome) -> Uint112| {
            widen(
                worst_payable(pick(&outcome), pick(&earlier), pick(&later)),
                context.slippage,
            )
        };
        let min_liquidity = narrow(
            worst_receivable(outcome.liquidity_out, earlier.liquidity_out, later.liquidity_out),
            context.slippage,
        )?;
        let (asset_in, max_asset) = match query.given {
            LiquidityGiven::Asset { asset_in } => (asset_in, None),
            _ => (outcome.x_increase, Some(payable(|o| o.x_increase)?)),
        };
        let max_debt = match query.given {
            LiquidityGiven::Debt { .. } => None,
            _ => Some(payable(|o| o.due.debt)?),
        };
        let max_collateral = match query.given {
            LiquidityGiven::Collateral { .. } => None,
            _ => Some(payable(|o| o.due.collateral)?),
        };

        let projected = outcome.project(&context.state)?;
        let futuristic = FuturisticMetrics::of(
            &context.pool,
            &projected,
            context.spot_prices.as_ref(),
            self.config.seconds_per_year(),
        )?;

        debug!(
            "liquidity quote: asset {} liquidity {} debt {} collateral {}",
            asset_in, outcome.liquidity_out, outcome.due.debt, outcome.due.collateral
        );
        Ok(LiquidityQuote {
            asset_in,
            liquidity_out: outcome.liquidity_out,
            debt: outcome.due.debt,
            collateral: outcome.due.collateral,
            min_liquidity,
            max_asset,
            max_debt,
            max_collateral,
            futuristic_apr: futuristic.apr,
            futuristic_cdp: futuristic.cdp,
        })
    }

    async fn evaluate_liquidity(
        &self,
        point: CurvePoint,
        given: LiquidityGiven,
    ) -> core::result::Result<LiquidityOutcome, OracleError> {
        match given {
            LiquidityGiven::Asset { asset_in } => {
                self.oracle.liquidity_given_asset(point, asset_in).await
            }
            LiquidityGiven::Debt { debt_in } => {
                self.oracle.liquidity_given_debt(point, debt_in).await
            }
            LiquidityGiven::Collateral { collateral_in } => {
                self.oracle
                    .liquidity_given_collateral(point, collateral_in)
                    .await
            }
        }
    }
}
