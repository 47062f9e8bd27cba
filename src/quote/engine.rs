//! The quoting engine and its failure boundary.
//!
//! [`QuoteEngine`] owns an oracle and the policy configuration.  The
//! `quote_*` methods (in the `borrow`, `lend` and `liquidity` modules)
//! return [`Result`] and are meant for Rust callers; the message-level
//! methods ([`borrow`](QuoteEngine::borrow), [`answer`](QuoteEngine::answer),
//! …) wrap them so that every failure, panics included, becomes a
//! [`FailureCode`](crate::error::FailureCode) inside an [`Answer`].

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use log::{debug, warn};

use crate::aggregate::{plan_repayment, sum_claims, sum_dues, RepaymentPlan};
use crate::config::QuoteConfig;
use crate::domain::{Claims, Due};
use crate::error::{QuoteError, Result};
use crate::message::{
    Answer, BorrowQuery, BorrowQuote, ClaimsQuery, DuesQuery, LendQuery, LendQuote,
    LiquidityQuery, LiquidityQuote, Outcome, QueryContext, RepaymentQuery, Request, Response,
};
use crate::traits::CurveOracle;

use super::TimeWindow;

/// Derives quotes from a [`CurveOracle`].
///
/// Stateless between queries: every input arrives with the query, so one
/// engine can serve any number of concurrent callers.  The crate-level
/// quick start shows a complete round trip.
#[derive(Debug, Clone)]
pub struct QuoteEngine<O> {
    pub(super) oracle: O,
    pub(super) config: QuoteConfig,
}

impl<O: CurveOracle> QuoteEngine<O> {
    /// Creates an engine.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidConfiguration`](crate::error::QuoteError::InvalidConfiguration)
    /// if `config` fails validation.
    pub fn new(oracle: O, config: QuoteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { oracle, config })
    }

    /// Creates an engine with the default policy.
    pub fn with_default_config(oracle: O) -> Self {
        Self {
            oracle,
            config: QuoteConfig::default(),
        }
    }

    /// The injected oracle.
    #[must_use]
    pub const fn oracle(&self) -> &O {
        &self.oracle
    }

    /// The active policy.
    #[must_use]
    pub const fn config(&self) -> &QuoteConfig {
        &self.config
    }

    /// Checks the pool still quotes and returns the seconds to maturity.
    pub(super) fn begin(&self, kind: &'static str, context: &QueryContext) -> Result<u64> {
        debug!(
            "{kind} quote at {} for pool maturing {} on {}",
            context.now, context.pool.maturity, context.state
        );
        context.pool.seconds_to_maturity(context.now)
    }

    /// Perturbed timestamps bracketing settlement of a query.
    pub(super) fn window(&self, context: &QueryContext) -> TimeWindow {
        TimeWindow::around(context.now, context.pool.maturity, &self.config)
    }

    // -- message boundary ---------------------------------------------------

    /// Answers a borrow query; never fails.
    pub async fn borrow(&self, query: BorrowQuery) -> Answer<BorrowQuery, BorrowQuote> {
        let result = guarded("borrow", self.quote_borrow(&query)).await;
        Answer::new(query, result)
    }

    /// Answers a lend query; never fails.
    pub async fn lend(&self, query: LendQuery) -> Answer<LendQuery, LendQuote> {
        let result = guarded("lend", self.quote_lend(&query)).await;
        Answer::new(query, result)
    }

    /// Answers an add-liquidity query; never fails.
    pub async fn liquidity(&self, query: LiquidityQuery) -> Answer<LiquidityQuery, LiquidityQuote> {
        let result = guarded("liquidity", self.quote_liquidity(&query)).await;
        Answer::new(query, result)
    }

    /// Answers a dues total.
    #[must_use]
    pub fn aggregate_dues(&self, query: DuesQuery) -> Answer<DuesQuery, Due> {
        let result = settle("aggregateDues", sum_dues(&query.positions));
        Answer::new(query, result)
    }

    /// Answers a claims total.
    #[must_use]
    pub fn aggregate_claims(&self, query: ClaimsQuery) -> Answer<ClaimsQuery, Claims> {
        let result = settle("aggregateClaims", sum_claims(&query.positions));
        Answer::new(query, result)
    }

    /// Answers a partial-repayment plan.
    #[must_use]
    pub fn plan_repayment(&self, query: RepaymentQuery) -> Answer<RepaymentQuery, RepaymentPlan> {
        let result = settle("planRepayment", plan_repayment(&query.choices));
        Answer::new(query, result)
    }

    /// Answers any request with exactly one response of the same kind.
    pub async fn answer(&self, request: Request) -> Response {
        match request {
            Request::Borrow(q) => Response::Borrow(self.borrow(q).await),
            Request::Lend(q) => Response::Lend(self.lend(q).await),
            Request::Liquidity(q) => Response::Liquidity(self.liquidity(q).await),
            Request::AggregateDues(q) => Response::AggregateDues(self.aggregate_dues(q)),
            Request::AggregateClaims(q) => Response::AggregateClaims(self.aggregate_claims(q)),
            Request::PlanRepayment(q) => Response::PlanRepayment(self.plan_repayment(q)),
        }
    }
}

/// Converts a result into an outcome, logging the classification.
fn settle<R>(kind: &'static str, result: Result<R>) -> Outcome<R> {
    match result {
        Ok(value) => {
            debug!("{kind} succeeded");
            Outcome::Success(value)
        }
        Err(err) => {
            let code = err.failure_code();
            warn!("{kind} failed with code {code}: {err}");
            Outcome::Failure(code)
        }
    }
}

/// Runs `work`, converting errors and panics into a failure code.
async fn guarded<R>(
    kind: &'static str,
    work: impl core::future::Future<Output = Result<R>>,
) -> Outcome<R> {
    match AssertUnwindSafe(work).catch_unwind().await {
        Ok(result) => settle(kind, result),
        Err(_) => settle(kind, Err(QuoteError::OraclePanicked)),
    }
}
