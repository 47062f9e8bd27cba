//! Quote policy configuration.
//!
//! [`QuoteConfig`] holds the time-perturbation window, the upper percent
//! evaluated at the domain boundary, the year length used for
//! annualisation and the service's per-request timeout.  It loads from
//! TOML and validates itself on construction.

mod quote_config;

pub use quote_config::{
    QuoteConfig, EARLIER_OFFSET_SECS, LATER_OFFSET_SECS, MAX_IN_FLIGHT, ORACLE_TIMEOUT_MS,
    SECONDS_PER_YEAR,
};
