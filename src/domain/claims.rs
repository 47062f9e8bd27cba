//! Lender claims.

use serde::{Deserialize, Serialize};

use super::Amount;

/// Redeemable claims held by a lender.
///
/// The bond pays out asset at maturity; the insurance pays out collateral
/// seized from borrowers who defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Claims {
    /// Asset claim, principal plus interest.
    pub bond: Amount,
    /// Collateral claim covering defaults.
    pub insurance: Amount,
}

impl Claims {
    /// Creates a claims pair.
    pub const fn new(bond: Amount, insurance: Amount) -> Self {
        Self { bond, insurance }
    }
}
