//! Identity and immutable parameters of a fixed-maturity pool.

use serde::{Deserialize, Serialize};

use super::{Amount, Liquidity, Token};
use crate::error::QuoteError;

/// A curve instance for one asset/collateral pair and one maturity.
///
/// Maturity is an absolute unix timestamp in seconds.  The pool quotes
/// only while `now < maturity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    /// Token lent and borrowed.
    pub asset: Token,
    /// Token locked by borrowers.
    pub collateral: Token,
    /// Absolute maturity timestamp (seconds).
    pub maturity: u64,
    /// Protocol fees accumulated in the pool.
    #[serde(default)]
    pub fee_stored: Amount,
    /// Outstanding liquidity-provider shares.
    #[serde(default)]
    pub total_liquidity: Liquidity,
}

impl Pool {
    /// Returns `true` while the pool has not matured.
    #[must_use]
    pub const fn is_active(&self, now: u64) -> bool {
        now < self.maturity
    }

    /// Seconds left until maturity.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::PoolMatured`] once `now >= maturity`.
    pub const fn seconds_to_maturity(&self, now: u64) -> Result<u64, QuoteError> {
        if !self.is_active(now) {
            return Err(QuoteError::PoolMatured {
                maturity: self.maturity,
                now,
            });
        }
        Ok(self.maturity - now)
    }
}
