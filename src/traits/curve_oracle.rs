//! The curve oracle: black-box evaluator of a pool's pricing curve.
//!
//! [`CurveOracle`] is the only capability the quoting core consumes.  It
//! is injected into [`QuoteEngine`](crate::quote::QuoteEngine) so that the
//! on-chain curve math can be swapped for a remote evaluator or a test
//! double without touching the pipeline.
//!
//! # Evaluation families
//!
//! | Family | Known quantity | Outcome |
//! |--------|----------------|---------|
//! | borrow | percent, debt in, collateral in | [`BorrowOutcome`] |
//! | lend | percent, bond out, insurance out | [`LendOutcome`] |
//! | liquidity | asset in, debt in, collateral in | [`LiquidityOutcome`] |
//!
//! # Contract
//!
//! - **Deterministic**: the same inputs always produce the same outcome.
//! - **Pure**: an evaluation never mutates shared state.
//! - **Time-monotonic**: for fixed inputs, dues and claims move in one
//!   direction as `now` approaches maturity.
//! - **Single-shot**: each call either returns an outcome or fails; the
//!   core never retries.
//!
//! Every argument is `Copy` and taken by value, so returned futures do not
//! borrow from the caller.

use core::future::Future;

use crate::domain::{
    Amount, BorrowOutcome, CurveState, LendOutcome, LiquidityOutcome, Percent, Pool, Uint112,
};
use crate::error::OracleError;

/// Where on the curve an evaluation happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurvePoint {
    /// Pool being evaluated (maturity, tokens, totals).
    pub pool: Pool,
    /// Curve parameters snapshot.
    pub state: CurveState,
    /// Evaluation time, unix seconds.
    pub now: u64,
}

impl CurvePoint {
    /// Creates an evaluation point.
    #[must_use]
    pub const fn new(pool: Pool, state: CurveState, now: u64) -> Self {
        Self { pool, state, now }
    }

    /// The same point evaluated at another timestamp.
    #[must_use]
    pub const fn at(self, now: u64) -> Self {
        Self { now, ..self }
    }
}

/// Evaluator of a fixed-maturity pool's pricing curve.
///
/// Implementors must be shareable across tasks; the engine may issue
/// independent evaluations for one query concurrently.
pub trait CurveOracle: Send + Sync {
    /// Borrow `asset_out` at a position of the percent domain.
    fn borrow_given_percent(
        &self,
        point: CurvePoint,
        asset_out: Uint112,
        percent: Percent,
    ) -> impl Future<Output = Result<BorrowOutcome, OracleError>> + Send;

    /// Borrow `asset_out` owing exactly `debt_in`.
    fn borrow_given_debt(
        &self,
        point: CurvePoint,
        asset_out: Uint112,
        debt_in: Uint112,
    ) -> impl Future<Output = Result<BorrowOutcome, OracleError>> + Send;

    /// Borrow `asset_out` locking exactly `collateral_in`.
    fn borrow_given_collateral(
        &self,
        point: CurvePoint,
        asset_out: Uint112,
        collateral_in: Uint112,
    ) -> impl Future<Output = Result<BorrowOutcome, OracleError>> + Send;

    /// Lend `asset_in` at a position of the percent domain.
    fn lend_given_percent(
        &self,
        point: CurvePoint,
        asset_in: Uint112,
        percent: Percent,
    ) -> impl Future<Output = Result<LendOutcome, OracleError>> + Send;

    /// Lend `asset_in` receiving exactly `bond_out`.
    fn lend_given_bond(
        &self,
        point: CurvePoint,
        asset_in: Uint112,
        bond_out: Amount,
    ) -> impl Future<Output = Result<LendOutcome, OracleError>> + Send;

    /// Lend `asset_in` receiving exactly `insurance_out`.
    fn lend_given_insurance(
        &self,
        point: CurvePoint,
        asset_in: Uint112,
        insurance_out: Amount,
    ) -> impl Future<Output = Result<LendOutcome, OracleError>> + Send;

    /// Provide `asset_in` of liquidity.
    fn liquidity_given_asset(
        &self,
        point: CurvePoint,
        asset_in: Uint112,
    ) -> impl Future<Output = Result<LiquidityOutcome, OracleError>> + Send;

    /// Provide liquidity taking on exactly `debt_in`.
    fn liquidity_given_debt(
        &self,
        point: CurvePoint,
        debt_in: Uint112,
    ) -> impl Future<Output = Result<LiquidityOutcome, OracleError>> + Send;

    /// Provide liquidity locking exactly `collateral_in`.
    fn liquidity_given_collateral(
        &self,
        point: CurvePoint,
        collateral_in: Uint112,
    ) -> impl Future<Output = Result<LiquidityOutcome, OracleError>> + Send;
}
