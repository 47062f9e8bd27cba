//! Inbound query shapes.
//!
//! Each family carries exactly one known field, chosen by a tagged enum,
//! so dispatch never inspects which optional field happens to be set.

use serde::{Deserialize, Serialize};

use crate::aggregate::RepaymentChoice;
use crate::domain::{
    Amount, Claims, CurveState, Due, Percent, Pool, Position, Slippage, SpotPrices, Uint112,
};
use crate::traits::CurvePoint;

/// Everything a quote needs besides its known field.
///
/// Supplied in full by the caller on every query; the core keeps no
/// ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryContext {
    /// Pool being quoted.
    pub pool: Pool,
    /// Curve snapshot to quote against.
    pub state: CurveState,
    /// Tolerance applied to the worst-case amounts.
    pub slippage: Slippage,
    /// Quote time, unix seconds.
    pub now: u64,
    /// Optional market prices for value-weighted collateralization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot_prices: Option<SpotPrices>,
}

impl QueryContext {
    /// Oracle evaluation point at the quote time.
    #[must_use]
    pub const fn point(&self) -> CurvePoint {
        CurvePoint::new(self.pool, self.state, self.now)
    }
}

/// Known field of a borrow query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "given", rename_all = "camelCase")]
pub enum BorrowGiven {
    /// Borrow at a position of the percent domain.
    #[serde(rename_all = "camelCase")]
    Percent {
        /// Requested position.
        percent: Percent,
    },
    /// Borrow owing exactly this debt.
    #[serde(rename_all = "camelCase")]
    Debt {
        /// Debt to owe.
        debt_in: Uint112,
    },
    /// Borrow locking exactly this collateral.
    #[serde(rename_all = "camelCase")]
    Collateral {
        /// Collateral to lock.
        collateral_in: Uint112,
    },
}

/// Borrow `asset_out` from a pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowQuery {
    /// Pool, curve, slippage and time.
    #[serde(flatten)]
    pub context: QueryContext,
    /// Asset to receive.
    pub asset_out: Uint112,
    /// Known field.
    #[serde(flatten)]
    pub given: BorrowGiven,
}

/// Known field of a lend query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "given", rename_all = "camelCase")]
pub enum LendGiven {
    /// Lend at a position of the percent domain.
    #[serde(rename_all = "camelCase")]
    Percent {
        /// Requested position.
        percent: Percent,
    },
    /// Lend receiving exactly this bond.
    #[serde(rename_all = "camelCase")]
    Bond {
        /// Bond to receive.
        bond_out: Amount,
    },
    /// Lend receiving exactly this insurance.
    #[serde(rename_all = "camelCase")]
    Insurance {
        /// Insurance to receive.
        insurance_out: Amount,
    },
}

/// Lend `asset_in` to a pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendQuery {
    /// Pool, curve, slippage and time.
    #[serde(flatten)]
    pub context: QueryContext,
    /// Asset to supply.
    pub asset_in: Uint112,
    /// Known field.
    #[serde(flatten)]
    pub given: LendGiven,
}

/// Known field of an add-liquidity query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "given", rename_all = "camelCase")]
pub enum LiquidityGiven {
    /// Provide exactly this much asset.
    #[serde(rename_all = "camelCase")]
    Asset {
        /// Asset to supply.
        asset_in: Uint112,
    },
    /// Provide liquidity taking on exactly this debt.
    #[serde(rename_all = "camelCase")]
    Debt {
        /// Debt to take on.
        debt_in: Uint112,
    },
    /// Provide liquidity locking exactly this collateral.
    #[serde(rename_all = "camelCase")]
    Collateral {
        /// Collateral to lock.
        collateral_in: Uint112,
    },
}

/// Add liquidity to a pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityQuery {
    /// Pool, curve, slippage and time.
    #[serde(flatten)]
    pub context: QueryContext,
    /// Known field.
    #[serde(flatten)]
    pub given: LiquidityGiven,
}

/// Sum the dues of a caller's borrow positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuesQuery {
    /// Positions to sum, in caller order.
    pub positions: Vec<Position<Due>>,
}

/// Sum the claims of a caller's lend positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimsQuery {
    /// Positions to sum, in caller order.
    pub positions: Vec<Position<Claims>>,
}

/// Plan a partial repayment across positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepaymentQuery {
    /// Chosen repayments, in caller order.
    pub choices: Vec<RepaymentChoice>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const POOL: &str = r#""pool": {
        "asset": {"address": "0x0101010101010101010101010101010101010101", "decimals": 6},
        "collateral": {"address": "0x0202020202020202020202020202020202020202", "decimals": 18},
        "maturity": 1700000000
    },
    "state": {"x": "1000000", "y": "500000", "z": "200000"},
    "slippage": 0.005,
    "now": 1690000000"#;

    #[test]
    fn borrow_given_debt_decodes() {
        let json = format!(r#"{{ {POOL}, "assetOut": "100", "given": "debt", "debtIn": "120" }}"#);
        let Ok(q) = serde_json::from_str::<BorrowQuery>(&json) else {
            panic!("borrow query must decode");
        };
        assert_eq!(q.asset_out, Uint112::from_u64(100));
        assert_eq!(
            q.given,
            BorrowGiven::Debt {
                debt_in: Uint112::from_u64(120)
            }
        );
        assert_eq!(Ok(q.context.slippage), Slippage::from_ppm(5_000));
        assert_eq!(q.context.spot_prices, None);
    }

    #[test]
    fn lend_given_percent_decodes() {
        let json =
            format!(r#"{{ {POOL}, "assetIn": "100", "given": "percent", "percent": 2147483648 }}"#);
        let Ok(q) = serde_json::from_str::<LendQuery>(&json) else {
            panic!("lend query must decode");
        };
        assert_eq!(
            q.given,
            LendGiven::Percent {
                percent: Percent::new(1 << 31)
            }
        );
    }

    #[test]
    fn missing_known_field_is_rejected() {
        let json = format!(r#"{{ {POOL}, "assetOut": "100" }}"#);
        assert!(serde_json::from_str::<BorrowQuery>(&json).is_err());
        let json = format!(r#"{{ {POOL}, "assetOut": "100", "given": "bond", "bondOut": "1" }}"#);
        assert!(serde_json::from_str::<BorrowQuery>(&json).is_err());
    }

    #[test]
    fn out_of_range_slippage_is_rejected() {
        let json = format!(r#"{{ {POOL}, "given": "asset", "assetIn": "1" }}"#)
            .replace("0.005", "1.5");
        assert!(serde_json::from_str::<LiquidityQuery>(&json).is_err());
    }
}
