//! Quote derivation.
//!
//! [`QuoteEngine`] runs one pipeline per trade family over an injected
//! [`CurveOracle`](crate::traits::CurveOracle):
//!
//! | Step | Module | Borrow | Lend | Liquidity |
//! |------|--------|--------|------|-----------|
//! | admissible range | `gate` | debt / collateral target | bond / insurance target | none |
//! | percent encoding | `percent_codec` | target queries | target queries | none |
//! | time window | `time_bounds` | `max_*` | `min_*` | `min_liquidity`, `max_*` |
//! | metrics | [`metrics`] | current + futuristic | current + futuristic | futuristic |

mod borrow;
mod engine;
mod gate;
mod lend;
mod liquidity;
pub mod metrics;
mod percent_codec;
mod time_bounds;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use engine::QuoteEngine;
pub use gate::{AdmissibleRange, Boundaries};
pub use metrics::{Collateralization, FuturisticMetrics, RiskMetrics};
pub use percent_codec::PercentCodec;
pub use time_bounds::{narrow, widen, worst_payable, worst_receivable, TimeWindow};
