//! # Maturity Quote
//!
//! Quote derivation and risk bounding for fixed-maturity, curve-priced
//! lending pools.
//!
//! A pool prices a loan along three curve parameters `(x, y, z)`: asset
//! reserve, interest rate and collateral factor.  The curve mathematics
//! itself lives behind the [`CurveOracle`](traits::CurveOracle) trait;
//! this crate turns a caller's request (borrow, lend or add liquidity)
//! into a quote the caller can safely sign:
//!
//! - a user-facing **percent** in `[0, 2^32 − 1]` that parameterises where
//!   on the curve the trade lands, recovered from a target amount by
//!   two-point interpolation;
//! - an **admissible-range gate** that rejects impossible debt, collateral,
//!   bond or insurance targets with a leg-specific code;
//! - **worst-case guarantees**: the oracle is re-evaluated slightly before
//!   and after `now`, and the worst result is widened or narrowed by the
//!   caller's slippage;
//! - **risk metrics**: APR and collateralization of the quote, plus the
//!   rate and collateral factor implied by the curve after the trade;
//! - **aggregation** over positions and proportional partial repayment.
//!
//! Failures never escape the message boundary: every request gets exactly
//! one response, carrying either the result or an integer
//! [`FailureCode`](error::FailureCode).
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `service` | yes | tokio channel worker ([`service::QuoteService`]) |
//!
//! # Quick Start
//!
//! ```rust
//! use std::future::Future;
//!
//! use maturity_quote::domain::{BorrowOutcome, LendOutcome, LiquidityOutcome};
//! use maturity_quote::prelude::*;
//!
//! /// An oracle that cannot be reached.
//! struct Offline;
//!
//! type Eval<T> = std::result::Result<T, OracleError>;
//!
//! fn offline<T: Send>() -> impl Future<Output = Eval<T>> + Send {
//!     async { Err(OracleError::Unavailable("no endpoint".into())) }
//! }
//!
//! impl CurveOracle for Offline {
//!     fn borrow_given_percent(&self, _: CurvePoint, _: Uint112, _: Percent)
//!         -> impl Future<Output = Eval<BorrowOutcome>> + Send { offline() }
//!     fn borrow_given_debt(&self, _: CurvePoint, _: Uint112, _: Uint112)
//!         -> impl Future<Output = Eval<BorrowOutcome>> + Send { offline() }
//!     fn borrow_given_collateral(&self, _: CurvePoint, _: Uint112, _: Uint112)
//!         -> impl Future<Output = Eval<BorrowOutcome>> + Send { offline() }
//!     fn lend_given_percent(&self, _: CurvePoint, _: Uint112, _: Percent)
//!         -> impl Future<Output = Eval<LendOutcome>> + Send { offline() }
//!     fn lend_given_bond(&self, _: CurvePoint, _: Uint112, _: Amount)
//!         -> impl Future<Output = Eval<LendOutcome>> + Send { offline() }
//!     fn lend_given_insurance(&self, _: CurvePoint, _: Uint112, _: Amount)
//!         -> impl Future<Output = Eval<LendOutcome>> + Send { offline() }
//!     fn liquidity_given_asset(&self, _: CurvePoint, _: Uint112)
//!         -> impl Future<Output = Eval<LiquidityOutcome>> + Send { offline() }
//!     fn liquidity_given_debt(&self, _: CurvePoint, _: Uint112)
//!         -> impl Future<Output = Eval<LiquidityOutcome>> + Send { offline() }
//!     fn liquidity_given_collateral(&self, _: CurvePoint, _: Uint112)
//!         -> impl Future<Output = Eval<LiquidityOutcome>> + Send { offline() }
//! }
//!
//! # fn main() -> Result<()> {
//! let engine = QuoteEngine::new(Offline, QuoteConfig::default())?;
//! let request = Request::from_json(
//!     r#"{"kind": "aggregateDues", "positions": [
//!         {"id": 1, "debt": "100", "collateral": "40"},
//!         {"id": 2, "debt": "20", "collateral": "5"}
//!     ]}"#,
//! )?;
//! let response = futures::executor::block_on(engine.answer(request));
//! assert_eq!(response.failure(), None);
//! assert!(response.to_json()?.contains(r#""result":{"debt":"120","collateral":"45"}"#));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller    │  Request (JSON or typed)
//! └──────┬──────┘
//!        │ answer(request)
//!        ▼
//! ┌─────────────┐
//! │ QuoteEngine │  gate → codec → time window → metrics
//! └──────┬──────┘
//!        │ CurveOracle (async, injected)
//!        ▼
//! ┌─────────────┐
//! │   Domain    │  Uint112, Percent, Due, Claims, CurveState, …
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types such as [`Uint112`](domain::Uint112) and trade outcomes |
//! | [`traits`] | The [`CurveOracle`](traits::CurveOracle) seam |
//! | [`quote`] | [`QuoteEngine`](quote::QuoteEngine), gate, codec, time bounds, metrics |
//! | [`aggregate`] | Position totals and repayment plans |
//! | [`message`] | [`Request`](message::Request) / [`Response`](message::Response) wire contract |
//! | [`config`] | [`QuoteConfig`](config::QuoteConfig) policy constants |
//! | [`math`] | 256-bit intermediates and narrowing |
//! | [`error`] | [`QuoteError`](error::QuoteError) and failure codes |
//! | [`prelude`] | Convenience re-exports |

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod message;
pub mod prelude;
pub mod quote;
#[cfg(feature = "service")]
pub mod service;
pub mod traits;

#[cfg(test)]
#[allow(clippy::panic)]
pub(crate) mod testing;
