//! Annualised rate and collateralization metrics.
//!
//! Current metrics read the quoted amounts; futuristic metrics read the
//! curve state projected after the trade settles.  All integer work
//! happens in 256 bits and rounds toward zero; only the final
//! presentation divides into an `f64`.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, CurveState, Decimals, Percent, Pool, SpotPrices};
use crate::error::{QuoteError, Result};
use crate::math::{mul, mul_div, NativeWidth, U256};

/// Basis-point scale used before the final division.
const BPS: u64 = 10_000;

/// Collateral held per unit of principal.
///
/// `ratio` is raw collateral per whole asset token (collateral native
/// precision).  `percent_of_value` compares the collateral's market value
/// with the principal's; it is absent whenever spot prices are not known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collateralization {
    /// `collateral × 10^assetDecimals / principal`, floored.
    pub ratio: Amount,
    /// `ratio × collateralPrice / assetPrice`, in whole units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_of_value: Option<f64>,
}

impl Collateralization {
    fn new(ratio: Amount, collateral_decimals: Decimals, prices: Option<&SpotPrices>) -> Self {
        let percent_of_value = prices
            .and_then(SpotPrices::collateral_per_asset)
            .map(|per_asset| collateral_decimals.to_units(ratio.get()) * per_asset);
        Self {
            ratio,
            percent_of_value,
        }
    }
}

/// Converts a basis-point count into a fraction.
fn from_bps(bps: U256) -> Result<f64> {
    let bps = u128::narrow(bps)?;
    #[allow(clippy::cast_precision_loss)]
    let fraction = bps as f64 / BPS as f64;
    Ok(fraction)
}

/// Annualised rate of a fixed-term loan.
///
/// `floor((repayment − principal) × year × 10000 / (principal × term)) / 10000`.
///
/// # Errors
///
/// - [`QuoteError::Underflow`] if `repayment < principal`.
/// - [`QuoteError::DivisionByZero`] for a zero principal or term.
///
/// # Examples
///
/// ```
/// use maturity_quote::quote::metrics::apr;
///
/// let r = apr(100, 110, 31_556_926, 31_556_926).expect("valid inputs");
/// assert_eq!(r, 0.1);
/// ```
pub fn apr(principal: u128, repayment: u128, term_secs: u64, seconds_per_year: u64) -> Result<f64> {
    let interest = repayment
        .checked_sub(principal)
        .ok_or(QuoteError::Underflow("repayment below principal"))?;
    let numerator = mul(interest.widen(), U256::from(seconds_per_year))?;
    let denominator = mul(principal.widen(), U256::from(term_secs))?;
    from_bps(mul_div(numerator, U256::from(BPS), denominator)?)
}

/// Collateral per unit of principal.
///
/// # Errors
///
/// Returns [`QuoteError::DivisionByZero`] for a zero principal and an
/// overflow error if the ratio exceeds 128 bits.
pub fn collateralization(
    pool: &Pool,
    principal: u128,
    collateral: u128,
    prices: Option<&SpotPrices>,
) -> Result<Collateralization> {
    let ratio = Amount::narrow(mul_div(
        collateral.widen(),
        U256::from(pool.asset.decimals().factor()),
        principal.widen(),
    )?)?;
    Ok(Collateralization::new(
        ratio,
        pool.collateral.decimals(),
        prices,
    ))
}

/// Rate implied by a curve state: `floor(y × year × 10000 / (x × 2^32)) / 10000`.
///
/// # Errors
///
/// Returns [`QuoteError::DivisionByZero`] if `x` is zero.
pub fn futuristic_apr(state: &CurveState, seconds_per_year: u64) -> Result<f64> {
    let numerator = mul(state.y.widen(), U256::from(seconds_per_year))?;
    let denominator = mul(state.x.widen(), U256::from(Percent::SCALE))?;
    from_bps(mul_div(numerator, U256::from(BPS), denominator)?)
}

/// Collateral factor implied by a curve state: `floor(z × 10^assetDecimals / x)`.
///
/// # Errors
///
/// Returns [`QuoteError::DivisionByZero`] if `x` is zero.
pub fn futuristic_collateralization(
    pool: &Pool,
    state: &CurveState,
    prices: Option<&SpotPrices>,
) -> Result<Collateralization> {
    collateralization(pool, state.x.get(), state.z.get(), prices)
}

/// Current and futuristic metrics of one quote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskMetrics {
    /// Annualised rate of the quoted due.
    pub apr: f64,
    /// Collateralization of the quoted due.
    pub cdp: Collateralization,
    /// Rate implied by the projected curve.
    pub futuristic_apr: f64,
    /// Collateralization implied by the projected curve.
    pub futuristic_cdp: Collateralization,
}

/// Metrics implied by a projected curve only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuturisticMetrics {
    /// Rate implied by the projected curve.
    pub apr: f64,
    /// Collateralization implied by the projected curve.
    pub cdp: Collateralization,
}

impl FuturisticMetrics {
    /// Computes both futuristic metrics of `projected`.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::DivisionByZero`] if the projected `x` is zero.
    pub fn of(
        pool: &Pool,
        projected: &CurveState,
        prices: Option<&SpotPrices>,
        seconds_per_year: u64,
    ) -> Result<Self> {
        Ok(Self {
            apr: futuristic_apr(projected, seconds_per_year)?,
            cdp: futuristic_collateralization(pool, projected, prices)?,
        })
    }
}

/// Inputs for [`RiskMetrics::compute`].
#[derive(Debug, Clone, Copy)]
pub struct MetricInputs<'a> {
    /// Pool being quoted.
    pub pool: &'a Pool,
    /// Amount lent or borrowed.
    pub principal: u128,
    /// Amount repaid at maturity.
    pub repayment: u128,
    /// Collateral backing the principal.
    pub collateral: u128,
    /// Seconds until maturity.
    pub term_secs: u64,
    /// Curve after the trade.
    pub projected: &'a CurveState,
    /// Optional spot prices.
    pub prices: Option<&'a SpotPrices>,
}

impl RiskMetrics {
    /// Computes current and futuristic metrics.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`apr`], [`collateralization`] and
    /// [`FuturisticMetrics::of`].
    pub fn compute(inputs: &MetricInputs<'_>, seconds_per_year: u64) -> Result<Self> {
        let futuristic =
            FuturisticMetrics::of(inputs.pool, inputs.projected, inputs.prices, seconds_per_year)?;
        Ok(Self {
            apr: apr(
                inputs.principal,
                inputs.repayment,
                inputs.term_secs,
                seconds_per_year,
            )?,
            cdp: collateralization(
                inputs.pool,
                inputs.principal,
                inputs.collateral,
                inputs.prices,
            )?,
            futuristic_apr: futuristic.apr,
            futuristic_cdp: futuristic.cdp,
        })
    }
}
