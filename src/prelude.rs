//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use maturity_quote::prelude::*;
//! ```

pub use crate::domain::{
    Amount, Claims, CurveState, Decimals, Due, Liquidity, Percent, Pool, Position, PositionId,
    Price, Slippage, SpotPrices, Token, TokenAddress, Uint112,
};

pub use crate::traits::{CurveOracle, CurvePoint};

pub use crate::config::QuoteConfig;

pub use crate::error::{FailureCode, OracleError, QuoteError, Result};

pub use crate::message::{
    Answer, BorrowGiven, BorrowQuery, BorrowQuote, LendGiven, LendQuery, LendQuote,
    LiquidityGiven, LiquidityQuery, LiquidityQuote, Outcome, QueryContext, Request, Response,
};

pub use crate::quote::QuoteEngine;

#[cfg(feature = "service")]
pub use crate::service::QuoteService;
