//! Borrower obligation.

use serde::{Deserialize, Serialize};

use super::Uint112;

/// Amount owed by a borrower position: debt to repay and collateral
/// locked against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Due {
    /// Asset owed at maturity, principal plus interest.
    pub debt: Uint112,
    /// Collateral locked until the debt is repaid.
    pub collateral: Uint112,
}

impl Due {
    /// Creates a due.
    pub const fn new(debt: Uint112, collateral: Uint112) -> Self {
        Self { debt, collateral }
    }
}
