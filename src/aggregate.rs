//! Cross-position totals for settlement planning.
//!
//! - [`sum_dues`] and [`sum_claims`] total a caller's positions.
//! - [`plan_repayment`] releases collateral in proportion to the debt
//!   repaid on each position.
//!
//! Sums accumulate in 256 bits and narrow once at the end, so the order
//! of positions never changes the result and no intermediate overflows.
//! A single invalid entry fails the whole batch.

use serde::{Deserialize, Serialize};

use crate::domain::{Claims, Due, Position, PositionId, Uint112};
use crate::error::{QuoteError, Result};
use crate::math::{mul_div, NativeWidth, U256};

/// Adds `value` to a 256-bit accumulator.
fn accumulate(total: U256, value: U256) -> Result<U256> {
    total
        .checked_add(value)
        .ok_or(QuoteError::Overflow("256-bit accumulator"))
}

/// Total debt and collateral across borrow positions.
///
/// # Errors
///
/// Returns [`QuoteError::Overflow`] if either total exceeds 112 bits.
///
/// # Examples
///
/// ```
/// use maturity_quote::aggregate::sum_dues;
/// use maturity_quote::domain::{Due, Position, PositionId, Uint112};
///
/// let positions = [
///     Position::new(PositionId::new(1), Due::new(Uint112::from_u64(100), Uint112::from_u64(40))),
///     Position::new(PositionId::new(2), Due::new(Uint112::from_u64(50), Uint112::from_u64(10))),
/// ];
/// let total = sum_dues(&positions).expect("fits");
/// assert_eq!(total, Due::new(Uint112::from_u64(150), Uint112::from_u64(50)));
/// ```
pub fn sum_dues(positions: &[Position<Due>]) -> Result<Due> {
    let (mut debt, mut collateral) = (U256::zero(), U256::zero());
    for position in positions {
        debt = accumulate(debt, position.value.debt.widen())?;
        collateral = accumulate(collateral, position.value.collateral.widen())?;
    }
    Ok(Due::new(Uint112::narrow(debt)?, Uint112::narrow(collateral)?))
}

/// Total bond and insurance across lend positions.
///
/// # Errors
///
/// Returns [`QuoteError::Overflow`] if either total exceeds 128 bits.
pub fn sum_claims(positions: &[Position<Claims>]) -> Result<Claims> {
    let (mut bond, mut insurance) = (U256::zero(), U256::zero());
    for position in positions {
        bond = accumulate(bond, position.value.bond.widen())?;
        insurance = accumulate(insurance, position.value.insurance.widen())?;
    }
    Ok(Claims::new(
        NativeWidth::narrow(bond)?,
        NativeWidth::narrow(insurance)?,
    ))
}

/// One position's share of a partial repayment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepaymentChoice {
    /// Position identifier.
    pub id: PositionId,
    /// Outstanding due of the position.
    pub due: Due,
    /// Debt the caller chooses to repay, at most `due.debt`.
    pub repay: Uint112,
}

impl RepaymentChoice {
    /// Creates a choice.
    #[must_use]
    pub const fn new(id: PositionId, due: Due, repay: Uint112) -> Self {
        Self { id, due, repay }
    }

    /// Collateral released by this choice: `repay × collateral / debt`, floored.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::RepaymentExceedsDebt`] if `repay > debt`.
    pub fn release(&self) -> Result<Uint112> {
        let Due { debt, collateral } = self.due;
        if self.repay > debt {
            return Err(QuoteError::RepaymentExceedsDebt {
                position: self.id.get(),
                requested: self.repay.get(),
                debt: debt.get(),
            });
        }
        if debt.is_zero() {
            // repay == 0 here, and nothing is owed against the collateral.
            return Ok(Uint112::ZERO);
        }
        Uint112::narrow(mul_div(self.repay.widen(), collateral.widen(), debt.widen())?)
    }
}

/// Per-position line of a [`RepaymentPlan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepaymentEntry {
    /// Position identifier.
    pub id: PositionId,
    /// Debt repaid on the position.
    pub debt_paid: Uint112,
    /// Collateral released from the position.
    pub collateral_released: Uint112,
}

/// Outcome of [`plan_repayment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepaymentPlan {
    /// One entry per choice, in caller order.
    pub entries: Vec<RepaymentEntry>,
    /// Sum of `debt_paid`.
    pub total_debt_paid: Uint112,
    /// Sum of `collateral_released`.
    pub total_collateral_released: Uint112,
}

/// Plans a partial repayment across several positions.
///
/// # Errors
///
/// - [`QuoteError::RepaymentExceedsDebt`] if any choice repays more than
///   its position owes; no plan is produced.
/// - [`QuoteError::Overflow`] if a total exceeds 112 bits.
///
/// # Examples
///
/// ```
/// use maturity_quote::aggregate::{plan_repayment, RepaymentChoice};
/// use maturity_quote::domain::{Due, PositionId, Uint112};
///
/// let due = Due::new(Uint112::from_u64(200), Uint112::from_u64(90));
/// let choice = RepaymentChoice::new(PositionId::new(1), due, Uint112::from_u64(100));
/// let plan = plan_repayment(&[choice]).expect("within debt");
/// assert_eq!(plan.total_collateral_released, Uint112::from_u64(45));
/// ```
pub fn plan_repayment(choices: &[RepaymentChoice]) -> Result<RepaymentPlan> {
    let mut entries = Vec::with_capacity(choices.len());
    let (mut paid, mut released) = (U256::zero(), U256::zero());
    for choice in choices {
        let collateral_released = choice.release()?;
        paid = accumulate(paid, choice.repay.widen())?;
        released = accumulate(released, collateral_released.widen())?;
        entries.push(RepaymentEntry {
            id: choice.id,
            debt_paid: choice.repay,
            collateral_released,
        });
    }
    Ok(RepaymentPlan {
        entries,
        total_debt_paid: Uint112::narrow(paid)?,
        total_collateral_released: Uint112::narrow(released)?,
    })
}
