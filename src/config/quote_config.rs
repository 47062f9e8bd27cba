//! Quote policy constants.

use serde::{Deserialize, Serialize};

use crate::domain::Percent;
use crate::error::{QuoteError, Result};

/// Length of a year used for annualisation, in seconds.
pub const SECONDS_PER_YEAR: u64 = 31_556_926;

/// Default backward time perturbation, in seconds.
pub const EARLIER_OFFSET_SECS: u64 = 60;

/// Default forward time perturbation, in seconds.
pub const LATER_OFFSET_SECS: u64 = 180;

/// Default per-request oracle timeout applied by the service, in ms.
pub const ORACLE_TIMEOUT_MS: u64 = 10_000;

/// Default cap on requests the service answers at once.
pub const MAX_IN_FLIGHT: usize = 64;

/// Policy knobs of the quoting pipeline.
///
/// The time window and the percent ceiling reflect observed settlement
/// latency rather than anything derivable, so they are configuration.
///
/// | Key | Default |
/// |-----|---------|
/// | `earlier_offset_secs` | 60 |
/// | `later_offset_secs` | 180 |
/// | `percent_ceiling` | 4294967295 |
/// | `seconds_per_year` | 31556926 |
/// | `oracle_timeout_ms` | 10000 |
/// | `max_in_flight` | 64 |
///
/// Missing keys take their default, so an empty document is valid.
///
/// # Examples
///
/// ```
/// use maturity_quote::config::QuoteConfig;
///
/// let cfg = QuoteConfig::from_toml_str("later_offset_secs = 300").expect("valid toml");
/// assert_eq!(cfg.later_offset_secs(), 300);
/// assert_eq!(cfg.earlier_offset_secs(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuoteConfig {
    earlier_offset_secs: u64,
    later_offset_secs: u64,
    percent_ceiling: u32,
    seconds_per_year: u64,
    oracle_timeout_ms: u64,
    max_in_flight: usize,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            earlier_offset_secs: EARLIER_OFFSET_SECS,
            later_offset_secs: LATER_OFFSET_SECS,
            percent_ceiling: Percent::MAX.get(),
            seconds_per_year: SECONDS_PER_YEAR,
            oracle_timeout_ms: ORACLE_TIMEOUT_MS,
            max_in_flight: MAX_IN_FLIGHT,
        }
    }
}

impl QuoteConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidConfiguration`] if any invariant of
    /// [`validate`](Self::validate) fails.
    pub fn new(
        earlier_offset_secs: u64,
        later_offset_secs: u64,
        percent_ceiling: Percent,
        seconds_per_year: u64,
        oracle_timeout_ms: u64,
    ) -> Result<Self> {
        let config = Self {
            earlier_offset_secs,
            later_offset_secs,
            percent_ceiling: percent_ceiling.get(),
            seconds_per_year,
            oracle_timeout_ms,
            max_in_flight: MAX_IN_FLIGHT,
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the in-flight cap.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidConfiguration`] for a zero cap.
    pub fn with_max_in_flight(self, max_in_flight: usize) -> Result<Self> {
        let config = Self {
            max_in_flight,
            ..self
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidConfiguration`] if the document does
    /// not parse or fails validation.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|e| QuoteError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidConfiguration`] if serialisation fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| QuoteError::InvalidConfiguration(e.to_string()))
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidConfiguration`] when `seconds_per_year`,
    /// `percent_ceiling`, `oracle_timeout_ms` or `max_in_flight` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.seconds_per_year == 0 {
            return Err(QuoteError::InvalidConfiguration(
                "seconds_per_year must be positive".into(),
            ));
        }
        if self.percent_ceiling == 0 {
            return Err(QuoteError::InvalidConfiguration(
                "percent_ceiling must be positive".into(),
            ));
        }
        if self.oracle_timeout_ms == 0 {
            return Err(QuoteError::InvalidConfiguration(
                "oracle_timeout_ms must be positive".into(),
            ));
        }
        if self.max_in_flight == 0 {
            return Err(QuoteError::InvalidConfiguration(
                "max_in_flight must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Backward perturbation applied to `now`.
    #[must_use]
    pub const fn earlier_offset_secs(&self) -> u64 {
        self.earlier_offset_secs
    }

    /// Forward perturbation applied to `now`.
    #[must_use]
    pub const fn later_offset_secs(&self) -> u64 {
        self.later_offset_secs
    }

    /// Upper percent evaluated by the gate and the codec.
    #[must_use]
    pub const fn percent_ceiling(&self) -> Percent {
        Percent::new(self.percent_ceiling)
    }

    /// Year length used by the rate metrics.
    #[must_use]
    pub const fn seconds_per_year(&self) -> u64 {
        self.seconds_per_year
    }

    /// Per-request timeout, in milliseconds.
    #[must_use]
    pub const fn oracle_timeout_ms(&self) -> u64 {
        self.oracle_timeout_ms
    }

    /// Most requests the service answers concurrently; further requests
    /// wait in the channel.
    #[must_use]
    pub const fn max_in_flight(&self) -> usize {
        self.max_in_flight
    }
}
