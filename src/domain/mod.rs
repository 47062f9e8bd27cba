//! Value types of the quoting domain.
//!
//! Numeric newtypes validate their bounds at construction, so a live
//! value always satisfies its invariant: a [`Uint112`] fits 112 bits, a
//! [`Slippage`] lies in `[0, 1]`, a [`Decimals`] is at most 18.  Integer
//! amounts cross the JSON boundary as decimal strings.

mod amount;
mod claims;
mod curve_state;
pub(crate) mod decimal_string;
mod decimals;
mod due;
mod liquidity;
mod outcome;
mod percent;
mod pool;
mod position;
mod price;
mod slippage;
mod token;
mod token_address;
mod uint112;

pub use amount::Amount;
pub use claims::Claims;
pub use curve_state::CurveState;
pub use decimals::Decimals;
pub use due::Due;
pub use liquidity::Liquidity;
pub use outcome::{BorrowOutcome, LendOutcome, LiquidityOutcome};
pub use percent::Percent;
pub use pool::Pool;
pub use position::{Position, PositionId};
pub use price::{Price, SpotPrices};
pub use slippage::Slippage;
pub use token::Token;
pub use token_address::TokenAddress;
pub use uint112::Uint112;
