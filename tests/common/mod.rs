//! Shared fixtures for the integration tests.
//!
//! [`RateBandOracle`] prices every trade off a rate band: percent `0`
//! borrows at `min_bps`, percent `2^32 − 1` at `max_bps`, linearly in
//! between, accrued over the seconds left to maturity.  Collateral and
//! insurance fall from `2A` to `A` across the domain.

#![allow(dead_code)]

use core::future::Future;

use maturity_quote::config::SECONDS_PER_YEAR;
use maturity_quote::domain::{
    Amount, BorrowOutcome, Claims, CurveState, Decimals, Due, LendOutcome, Liquidity,
    LiquidityOutcome, Percent, Pool, Slippage, Token, TokenAddress, Uint112,
};
use maturity_quote::error::OracleError;
use maturity_quote::message::QueryContext;
use maturity_quote::traits::{CurveOracle, CurvePoint};

pub const YEAR: u64 = SECONDS_PER_YEAR;
pub const NOW: u64 = 1_750_000_000;
const TOP: u128 = u32::MAX as u128;

// ---------------------------------------------------------------------------
// Oracle double
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct RateBandOracle {
    pub min_bps: u128,
    pub max_bps: u128,
    pub offline: bool,
}

impl Default for RateBandOracle {
    fn default() -> Self {
        Self {
            min_bps: 1_000,
            max_bps: 5_000,
            offline: false,
        }
    }
}

impl RateBandOracle {
    fn seconds_left(point: &CurvePoint) -> Result<u128, OracleError> {
        match point.pool.maturity.checked_sub(point.now) {
            Some(d) if d > 0 => Ok(u128::from(d)),
            _ => Err(OracleError::Rejected("matured".into())),
        }
    }

    fn repayment(&self, a: u128, p: Percent, d: u128) -> u128 {
        let bps = self.min_bps + (self.max_bps - self.min_bps) * u128::from(p.get()) / TOP;
        a + a * bps * d / (10_000 * u128::from(YEAR))
    }

    fn percent_for_repayment(&self, a: u128, repayment: u128, d: u128) -> Percent {
        let bps = repayment.saturating_sub(a) * 10_000 * u128::from(YEAR) / (a * d);
        let raw = bps.saturating_sub(self.min_bps) * TOP / (self.max_bps - self.min_bps);
        to_percent(raw)
    }

    fn ready<T: Send>(
        &self,
        value: impl FnOnce() -> Result<T, OracleError>,
    ) -> impl Future<Output = Result<T, OracleError>> + Send {
        let result = if self.offline {
            Err(OracleError::Unavailable("offline".into()))
        } else {
            value()
        };
        async move { result }
    }

    fn borrow(
        &self,
        point: &CurvePoint,
        a: Uint112,
        p: Percent,
        debt: Option<u128>,
        collateral: Option<u128>,
    ) -> Result<BorrowOutcome, OracleError> {
        let d = Self::seconds_left(point)?;
        let debt = debt.unwrap_or_else(|| self.repayment(a.get(), p, d));
        let collateral = collateral.unwrap_or_else(|| cover(a.get(), p));
        Ok(BorrowOutcome {
            due: Due::new(u112(debt)?, u112(collateral)?),
            x_decrease: a,
            y_increase: u112(a.get() + a.get() * u128::from(p.get()))?,
            z_increase: u112(collateral)?,
        })
    }

    fn lend(
        &self,
        point: &CurvePoint,
        a: Uint112,
        p: Percent,
        bond: Option<u128>,
        insurance: Option<u128>,
    ) -> Result<LendOutcome, OracleError> {
        let d = Self::seconds_left(point)?;
        let bond = bond.unwrap_or_else(|| self.repayment(a.get(), p, d));
        let insurance = insurance.unwrap_or_else(|| cover(a.get(), p));
        Ok(LendOutcome {
            claims: Claims::new(Amount::new(bond), Amount::new(insurance)),
            x_increase: a,
            y_decrease: u112(point.state.y.get() * u128::from(p.get()) / (4 * TOP))?,
            z_decrease: u112(insurance.min(point.state.z.get()))?,
        })
    }

    fn liquidity(
        &self,
        point: &CurvePoint,
        a: Uint112,
        debt: Option<u128>,
        collateral: Option<u128>,
    ) -> Result<LiquidityOutcome, OracleError> {
        let d = Self::seconds_left(point)?;
        let CurveState { x, y, z } = point.state;
        let share = |v: Uint112| u112(a.get() * v.get() / x.get());
        let z_increase = share(z)?;
        Ok(LiquidityOutcome {
            liquidity_out: Liquidity::new(a.get()),
            due: Due::new(
                u112(debt.unwrap_or_else(|| self.repayment(a.get(), Percent::ZERO, d)))?,
                collateral.map_or(Ok(z_increase), u112)?,
            ),
            x_increase: a,
            y_increase: share(y)?,
            z_increase,
        })
    }
}

fn cover(a: u128, p: Percent) -> u128 {
    2 * a - a * u128::from(p.get()) / TOP
}

fn to_percent(raw: u128) -> Percent {
    Percent::new(u32::try_from(raw.min(TOP)).unwrap_or(u32::MAX))
}

fn u112(v: u128) -> Result<Uint112, OracleError> {
    Uint112::new(v).map_err(|e| OracleError::Rejected(e.to_string()))
}

impl CurveOracle for RateBandOracle {
    fn borrow_given_percent(
        &self,
        point: CurvePoint,
        asset_out: Uint112,
        percent: Percent,
    ) -> impl Future<Output = Result<BorrowOutcome, OracleError>> + Send {
        self.ready(move || self.borrow(&point, asset_out, percent, None, None))
    }

    fn borrow_given_debt(
        &self,
        point: CurvePoint,
        asset_out: Uint112,
        debt_in: Uint112,
    ) -> impl Future<Output = Result<BorrowOutcome, OracleError>> + Send {
        self.ready(move || {
            let d = Self::seconds_left(&point)?;
            let p = self.percent_for_repayment(asset_out.get(), debt_in.get(), d);
            self.borrow(&point, asset_out, p, Some(debt_in.get()), None)
        })
    }

    fn borrow_given_collateral(
        &self,
        point: CurvePoint,
        asset_out: Uint112,
        collateral_in: Uint112,
    ) -> impl Future<Output = Result<BorrowOutcome, OracleError>> + Send {
        self.ready(move || {
            let a = asset_out.get();
            let p = to_percent((2 * a).saturating_sub(collateral_in.get()) * TOP / a);
            self.borrow(&point, asset_out, p, None, Some(collateral_in.get()))
        })
    }

    fn lend_given_percent(
        &self,
        point: CurvePoint,
        asset_in: Uint112,
        percent: Percent,
    ) -> impl Future<Output = Result<LendOutcome, OracleError>> + Send {
        self.ready(move || self.lend(&point, asset_in, percent, None, None))
    }

    fn lend_given_bond(
        &self,
        point: CurvePoint,
        asset_in: Uint112,
        bond_out: Amount,
    ) -> impl Future<Output = Result<LendOutcome, OracleError>> + Send {
        self.ready(move || {
            let d = Self::seconds_left(&point)?;
            let p = self.percent_for_repayment(asset_in.get(), bond_out.get(), d);
            self.lend(&point, asset_in, p, Some(bond_out.get()), None)
        })
    }

    fn lend_given_insurance(
        &self,
        point: CurvePoint,
        asset_in: Uint112,
        insurance_out: Amount,
    ) -> impl Future<Output = Result<LendOutcome, OracleError>> + Send {
        self.ready(move || {
            let a = asset_in.get();
            let p = to_percent((2 * a).saturating_sub(insurance_out.get()) * TOP / a);
            self.lend(&point, asset_in, p, None, Some(insurance_out.get()))
        })
    }

    fn liquidity_given_asset(
        &self,
        point: CurvePoint,
        asset_in: Uint112,
    ) -> impl Future<Output = Result<LiquidityOutcome, OracleError>> + Send {
        self.ready(move || self.liquidity(&point, asset_in, None, None))
    }

    fn liquidity_given_debt(
        &self,
        point: CurvePoint,
        debt_in: Uint112,
    ) -> impl Future<Output = Result<LiquidityOutcome, OracleError>> + Send {
        self.ready(move || {
            let d = Self::seconds_left(&point)?;
            let year = 10_000 * u128::from(YEAR);
            let a = debt_in.get() * year / (year + self.min_bps * d);
            self.liquidity(&point, u112(a)?, Some(debt_in.get()), None)
        })
    }

    fn liquidity_given_collateral(
        &self,
        point: CurvePoint,
        collateral_in: Uint112,
    ) -> impl Future<Output = Result<LiquidityOutcome, OracleError>> + Send {
        self.ready(move || {
            let a = collateral_in.get() * point.state.x.get() / point.state.z.get();
            self.liquidity(&point, u112(a)?, None, Some(collateral_in.get()))
        })
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn pool() -> Pool {
    let Ok(decimals) = Decimals::new(0) else {
        panic!("valid decimals");
    };
    Pool {
        asset: Token::new(TokenAddress::from_bytes([0x11; 20]), decimals),
        collateral: Token::new(TokenAddress::from_bytes([0x22; 20]), decimals),
        maturity: NOW + YEAR,
        fee_stored: Amount::ZERO,
        total_liquidity: Liquidity::new(1_000_000),
    }
}

pub fn context() -> QueryContext {
    let Ok(slippage) = Slippage::from_ppm(5_000) else {
        panic!("valid slippage");
    };
    QueryContext {
        pool: pool(),
        state: CurveState::new(
            Uint112::from_u64(1_000_000),
            Uint112::from_u64(500_000),
            Uint112::from_u64(200_000),
        ),
        slippage,
        now: NOW,
        spot_prices: None,
    }
}

/// Wire fragment for [`context`], to splice into request JSON.
pub fn context_json() -> String {
    format!(
        r#""pool": {{
            "asset": {{"address": "0x{a}", "decimals": 0}},
            "collateral": {{"address": "0x{c}", "decimals": 0}},
            "maturity": {maturity},
            "totalLiquidity": "1000000"
        }},
        "state": {{"x": "1000000", "y": "500000", "z": "200000"}},
        "slippage": 0.005,
        "now": {NOW}"#,
        a = "11".repeat(20),
        c = "22".repeat(20),
        maturity = NOW + YEAR,
    )
}
