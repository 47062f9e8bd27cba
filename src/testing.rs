//! Deterministic oracle double and fixtures for unit tests.
//!
//! The linear curve below is not the on-chain curve; it only has the
//! shape the core relies on: dues grow with percent and with time to
//! maturity, collateral falls with percent, and every target-amount
//! evaluation inverts the percent evaluation.
//!
//! With `d` the seconds to maturity and `p` the percent:
//!
//! ```text
//! rate_bps(p)  = 1000 + 4000·p / (2^32 − 1)
//! debt         = A + A·rate_bps·d / (10000·YEAR)
//! collateral   = 3A − 2A·p / (2^32 − 1)
//! y_increase   = A·(1 + p)
//! ```
//!
//! [`Mode::Flat`] pins the percent-interpolated deltas so both extremes
//! share one anchor.

use core::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::SECONDS_PER_YEAR;
use crate::domain::{
    Amount, BorrowOutcome, Claims, CurveState, Decimals, Due, LendOutcome, Liquidity,
    LiquidityOutcome, Percent, Pool, Slippage, Token, TokenAddress, Uint112,
};
use crate::error::OracleError;
use crate::message::{
    BorrowGiven, BorrowQuery, LendGiven, LendQuery, LiquidityGiven, LiquidityQuery, QueryContext,
};
use crate::quote::QuoteEngine;
use crate::traits::{CurveOracle, CurvePoint};

pub(crate) const YEAR: u64 = SECONDS_PER_YEAR;
pub(crate) const NOW: u64 = 1_700_000_000;
const P_MAX: u128 = u32::MAX as u128;

/// How the double answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Normal,
    Fail,
    Panic,
    Stall,
    Flat,
}

#[derive(Debug)]
pub(crate) struct LinearOracle {
    mode: Mode,
    calls: AtomicUsize,
}

impl LinearOracle {
    pub(crate) fn new(mode: Mode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn flat(&self) -> bool {
        self.mode == Mode::Flat
    }

    fn respond<T: Send>(
        &self,
        compute: impl FnOnce() -> Result<T, OracleError>,
    ) -> impl Future<Output = Result<T, OracleError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mode = self.mode;
        let result = match mode {
            Mode::Fail => Err(OracleError::Unavailable("test oracle offline".into())),
            Mode::Panic => panic!("test oracle panicked"),
            Mode::Normal | Mode::Stall | Mode::Flat => compute(),
        };
        async move {
            if mode == Mode::Stall {
                futures::future::pending::<()>().await;
            }
            result
        }
    }
}

// -- curve helpers ----------------------------------------------------------

fn term(point: &CurvePoint) -> Result<u128, OracleError> {
    point
        .pool
        .maturity
        .checked_sub(point.now)
        .filter(|d| *d > 0)
        .map(u128::from)
        .ok_or_else(|| OracleError::Rejected("pool matured".into()))
}

fn rate_bps(p: Percent) -> u128 {
    1_000 + 4_000 * u128::from(p.get()) / P_MAX
}

fn with_interest(a: u128, rate: u128, d: u128) -> u128 {
    a + a * rate * d / (10_000 * u128::from(YEAR))
}

fn cover(a: u128, p: Percent) -> u128 {
    3 * a - 2 * a * u128::from(p.get()) / P_MAX
}

fn clamp_percent(raw: u128) -> Percent {
    #[allow(clippy::cast_possible_truncation)]
    Percent::new(raw.min(P_MAX) as u32)
}

fn percent_for_repayment(a: u128, repayment: u128, d: u128) -> Percent {
    let rate = repayment.saturating_sub(a) * 10_000 * u128::from(YEAR) / (a * d);
    clamp_percent(rate.saturating_sub(1_000) * P_MAX / 4_000)
}

fn percent_for_cover(a: u128, c: u128) -> Percent {
    clamp_percent((3 * a).saturating_sub(c) * P_MAX / (2 * a))
}

fn u112(v: u128) -> Result<Uint112, OracleError> {
    Uint112::new(v).map_err(|e| OracleError::Rejected(e.to_string()))
}

fn borrow_at(
    point: &CurvePoint,
    a: Uint112,
    p: Percent,
    flat: bool,
    debt: Option<u128>,
    collateral: Option<u128>,
) -> Result<BorrowOutcome, OracleError> {
    let d = term(point)?;
    let a_raw = a.get();
    let debt = debt.unwrap_or_else(|| with_interest(a_raw, rate_bps(p), d));
    let collateral = collateral.unwrap_or_else(|| cover(a_raw, p));
    Ok(BorrowOutcome {
        due: Due::new(u112(debt)?, u112(collateral)?),
        x_decrease: a,
        y_increase: u112(if flat { a_raw } else { a_raw * (1 + u128::from(p.get())) })?,
        z_increase: u112(collateral)?,
    })
}

fn lend_at(
    point: &CurvePoint,
    a: Uint112,
    p: Percent,
    flat: bool,
    bond: Option<u128>,
    insurance: Option<u128>,
) -> Result<LendOutcome, OracleError> {
    let d = term(point)?;
    let a_raw = a.get();
    let bond = bond.unwrap_or_else(|| with_interest(a_raw, rate_bps(p), d));
    let insurance = insurance.unwrap_or_else(|| cover(a_raw, p));
    let y = point.state.y.get();
    Ok(LendOutcome {
        claims: Claims::new(Amount::new(bond), Amount::new(insurance)),
        x_increase: a,
        y_decrease: u112(if flat { 0 } else { y * u128::from(p.get()) / (2 * P_MAX) })?,
        z_decrease: u112(insurance.min(point.state.z.get()))?,
    })
}

fn liquidity_at(
    point: &CurvePoint,
    a: Uint112,
    debt: Option<u128>,
    collateral: Option<u128>,
) -> Result<LiquidityOutcome, OracleError> {
    let d = term(point)?;
    let CurveState { x, y, z } = point.state;
    let (a_raw, x) = (a.get(), x.get());
    if x == 0 {
        return Err(OracleError::Rejected("empty pool".into()));
    }
    let total = point.pool.total_liquidity.get();
    let liquidity_out = if total == 0 { a_raw } else { a_raw * total / x };
    let z_increase = a_raw * z.get() / x;
    Ok(LiquidityOutcome {
        liquidity_out: Liquidity::new(liquidity_out),
        due: Due::new(
            u112(debt.unwrap_or_else(|| with_interest(a_raw, 1_000, d)))?,
            u112(collateral.unwrap_or(z_increase))?,
        ),
        x_increase: a,
        y_increase: u112(a_raw * y.get() / x)?,
        z_increase: u112(z_increase)?,
    })
}

impl CurveOracle for LinearOracle {
    fn borrow_given_percent(
        &self,
        point: CurvePoint,
        asset_out: Uint112,
        percent: Percent,
    ) -> impl Future<Output = Result<BorrowOutcome, OracleError>> + Send {
        let flat = self.flat();
        self.respond(move || borrow_at(&point, asset_out, percent, flat, None, None))
    }

    fn borrow_given_debt(
        &self,
        point: CurvePoint,
        asset_out: Uint112,
        debt_in: Uint112,
    ) -> impl Future<Output = Result<BorrowOutcome, OracleError>> + Send {
        let flat = self.flat();
        self.respond(move || {
            let p = percent_for_repayment(asset_out.get(), debt_in.get(), term(&point)?);
            borrow_at(&point, asset_out, p, flat, Some(debt_in.get()), None)
        })
    }

    fn borrow_given_collateral(
        &self,
        point: CurvePoint,
        asset_out: Uint112,
        collateral_in: Uint112,
    ) -> impl Future<Output = Result<BorrowOutcome, OracleError>> + Send {
        let flat = self.flat();
        self.respond(move || {
            let p = percent_for_cover(asset_out.get(), collateral_in.get());
            borrow_at(&point, asset_out, p, flat, None, Some(collateral_in.get()))
        })
    }

    fn lend_given_percent(
        &self,
        point: CurvePoint,
        asset_in: Uint112,
        percent: Percent,
    ) -> impl Future<Output = Result<LendOutcome, OracleError>> + Send {
        let flat = self.flat();
        self.respond(move || lend_at(&point, asset_in, percent, flat, None, None))
    }

    fn lend_given_bond(
        &self,
        point: CurvePoint,
        asset_in: Uint112,
        bond_out: Amount,
    ) -> impl Future<Output = Result<LendOutcome, OracleError>> + Send {
        let flat = self.flat();
        self.respond(move || {
            let p = percent_for_repayment(asset_in.get(), bond_out.get(), term(&point)?);
            lend_at(&point, asset_in, p, flat, Some(bond_out.get()), None)
        })
    }

    fn lend_given_insurance(
        &self,
        point: CurvePoint,
        asset_in: Uint112,
        insurance_out: Amount,
    ) -> impl Future<Output = Result<LendOutcome, OracleError>> + Send {
        let flat = self.flat();
        self.respond(move || {
            let p = percent_for_cover(asset_in.get(), insurance_out.get());
            lend_at(&point, asset_in, p, flat, None, Some(insurance_out.get()))
        })
    }

    fn liquidity_given_asset(
        &self,
        point: CurvePoint,
        asset_in: Uint112,
    ) -> impl Future<Output = Result<LiquidityOutcome, OracleError>> + Send {
        self.respond(move || liquidity_at(&point, asset_in, None, None))
    }

    fn liquidity_given_debt(
        &self,
        point: CurvePoint,
        debt_in: Uint112,
    ) -> impl Future<Output = Result<LiquidityOutcome, OracleError>> + Send {
        self.respond(move || {
            let d = term(&point)?;
            let scale = 10_000 * u128::from(YEAR);
            let a = debt_in.get() * scale / (scale + 1_000 * d);
            liquidity_at(&point, u112(a)?, Some(debt_in.get()), None)
        })
    }

    fn liquidity_given_collateral(
        &self,
        point: CurvePoint,
        collateral_in: Uint112,
    ) -> impl Future<Output = Result<LiquidityOutcome, OracleError>> + Send {
        self.respond(move || {
            let z = point.state.z.get();
            if z == 0 {
                return Err(OracleError::Rejected("empty pool".into()));
            }
            let a = collateral_in.get() * point.state.x.get() / z;
            liquidity_at(&point, u112(a)?, None, Some(collateral_in.get()))
        })
    }
}

// -- fixtures ---------------------------------------------------------------

pub(crate) fn engine() -> QuoteEngine<LinearOracle> {
    engine_with(Mode::Normal)
}

pub(crate) fn engine_with(mode: Mode) -> QuoteEngine<LinearOracle> {
    QuoteEngine::with_default_config(LinearOracle::new(mode))
}

pub(crate) fn pool() -> Pool {
    Pool {
        asset: Token::new(TokenAddress::from_bytes([0xaa; 20]), Decimals::ZERO),
        collateral: Token::new(TokenAddress::from_bytes([0xbb; 20]), Decimals::ZERO),
        maturity: NOW + YEAR,
        fee_stored: Amount::ZERO,
        total_liquidity: Liquidity::new(1_000_000),
    }
}

pub(crate) fn state() -> CurveState {
    CurveState::new(
        Uint112::from_u64(1_000_000),
        Uint112::from_u64(500_000),
        Uint112::from_u64(200_000),
    )
}

pub(crate) fn context() -> QueryContext {
    let Ok(slippage) = Slippage::from_ppm(10_000) else {
        panic!("valid slippage");
    };
    QueryContext {
        pool: pool(),
        state: state(),
        slippage,
        now: NOW,
        spot_prices: None,
    }
}

pub(crate) fn borrow_query(asset_out: u64, given: BorrowGiven) -> BorrowQuery {
    BorrowQuery {
        context: context(),
        asset_out: Uint112::from_u64(asset_out),
        given,
    }
}

pub(crate) fn lend_query(asset_in: u64, given: LendGiven) -> LendQuery {
    LendQuery {
        context: context(),
        asset_in: Uint112::from_u64(asset_in),
        given,
    }
}

pub(crate) fn liquidity_query(given: LiquidityGiven) -> LiquidityQuery {
    LiquidityQuery {
        context: context(),
        given,
    }
}
