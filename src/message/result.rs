//! Success payloads of the three quote families.
//!
//! The bound on the field the caller fixed is omitted: a borrower who
//! names the exact debt gets no `maxDebt`.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Liquidity, Percent, Uint112};
use crate::quote::metrics::Collateralization;

/// Terms of a borrow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowQuote {
    /// Debt owed at maturity.
    pub debt: Uint112,
    /// Collateral locked.
    pub collateral: Uint112,
    /// Position in the percent domain.
    pub percent: Percent,
    /// Most debt the caller should accept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_debt: Option<Uint112>,
    /// Most collateral the caller should lock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_collateral: Option<Uint112>,
    /// Annualised rate of the debt.
    pub apr: f64,
    /// Collateralization of the due.
    pub cdp: Collateralization,
    /// Rate implied by the post-trade curve.
    pub futuristic_apr: f64,
    /// Collateralization implied by the post-trade curve.
    pub futuristic_cdp: Collateralization,
}

/// Terms of a lend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendQuote {
    /// Bond received.
    pub bond: Amount,
    /// Insurance received.
    pub insurance: Amount,
    /// Position in the percent domain.
    pub percent: Percent,
    /// Least bond the caller should accept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_bond: Option<Amount>,
    /// Least insurance the caller should accept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_insurance: Option<Amount>,
    /// Annualised rate of the bond.
    pub apr: f64,
    /// Insurance per unit of principal.
    pub cdp: Collateralization,
    /// Rate implied by the post-trade curve.
    pub futuristic_apr: f64,
    /// Collateralization implied by the post-trade curve.
    pub futuristic_cdp: Collateralization,
}

/// Terms of a liquidity provision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityQuote {
    /// Asset supplied.
    pub asset_in: Uint112,
    /// Shares minted.
    pub liquidity_out: Liquidity,
    /// Debt taken on.
    pub debt: Uint112,
    /// Collateral locked.
    pub collateral: Uint112,
    /// Least shares the caller should accept.
    pub min_liquidity: Liquidity,
    /// Most asset the caller should supply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_asset: Option<Uint112>,
    /// Most debt the caller should accept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_debt: Option<Uint112>,
    /// Most collateral the caller should lock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_collateral: Option<Uint112>,
    /// Rate implied by the post-trade curve.
    pub futuristic_apr: f64,
    /// Collateralization implied by the post-trade curve.
    pub futuristic_cdp: Collateralization,
}
