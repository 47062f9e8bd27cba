//! Unified error types for the quoting library.
//!
//! Every fallible operation in the crate returns [`QuoteError`].  Nothing
//! crosses the message boundary as a fault: the dispatcher converts each
//! error into a [`FailureCode`] through [`QuoteError::failure_code`].

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, QuoteError>;

/// Which leg of a quote a range violation refers to.
///
/// Lending legs mirror borrowing legs: the bond is checked against the
/// same codes as debt, insurance against the same codes as collateral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Leg {
    /// Borrower debt.
    Debt,
    /// Borrower collateral.
    Collateral,
    /// Lender bond claim.
    Bond,
    /// Lender insurance claim.
    Insurance,
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debt => write!(f, "debt"),
            Self::Collateral => write!(f, "collateral"),
            Self::Bond => write!(f, "bond"),
            Self::Insurance => write!(f, "insurance"),
        }
    }
}

/// Failure reported by a [`CurveOracle`](crate::traits::CurveOracle)
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// The oracle refused the inputs (e.g. the curve cannot absorb the trade).
    #[error("oracle rejected evaluation: {0}")]
    Rejected(String),
    /// The oracle could not be reached or did not answer.
    #[error("oracle unavailable: {0}")]
    Unavailable(String),
}

/// All errors produced by the quoting library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    /// An intermediate or narrowed result does not fit its width.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A subtraction went below zero.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// A quantity violates its domain (zero where positive is required, …).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A spot price is negative, NaN or infinite.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),

    /// Token decimals outside `0..=18`.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// Slippage tolerance outside `[0, 1]` or not finite.
    #[error("invalid slippage: {0}")]
    InvalidSlippage(&'static str),

    /// Quote policy configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The pool has reached maturity and no longer quotes.
    #[error("pool matured at {maturity}, quote requested at {now}")]
    PoolMatured {
        /// Pool maturity timestamp.
        maturity: u64,
        /// Requested quote time.
        now: u64,
    },

    /// Both percent-domain boundaries produced the same curve delta.
    #[error("degenerate percent domain: boundary deltas are equal")]
    DegenerateCurve,

    /// The requested amount is below the admissible range.
    #[error("{leg} {requested} is below the admissible minimum {minimum}")]
    BelowRange {
        /// Leg the amount belongs to.
        leg: Leg,
        /// Amount the caller asked for.
        requested: u128,
        /// Smallest admissible amount.
        minimum: u128,
    },

    /// The requested amount is above the admissible range.
    #[error("{leg} {requested} is above the admissible maximum {maximum}")]
    AboveRange {
        /// Leg the amount belongs to.
        leg: Leg,
        /// Amount the caller asked for.
        requested: u128,
        /// Largest admissible amount.
        maximum: u128,
    },

    /// A repayment plan asks to repay more than a position owes.
    #[error("repayment {requested} exceeds debt {debt} of position {position}")]
    RepaymentExceedsDebt {
        /// Offending position.
        position: u64,
        /// Requested repayment.
        requested: u128,
        /// Outstanding debt of the position.
        debt: u128,
    },

    /// The curve oracle failed.
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// The curve oracle panicked while evaluating.
    #[error("oracle evaluation panicked")]
    OraclePanicked,

    /// The request did not complete within the configured timeout.
    #[error("quote timed out after {0} ms")]
    Timeout(u64),

    /// A message could not be encoded or decoded.
    #[error("malformed message: {0}")]
    Message(String),
}

impl QuoteError {
    /// Maps the error onto the integer code reported in an answer.
    #[must_use]
    pub const fn failure_code(&self) -> FailureCode {
        match self {
            Self::BelowRange {
                leg: Leg::Debt | Leg::Bond,
                ..
            } => FailureCode::DebtTooLow,
            Self::AboveRange {
                leg: Leg::Debt | Leg::Bond,
                ..
            } => FailureCode::DebtTooHigh,
            Self::BelowRange {
                leg: Leg::Collateral | Leg::Insurance,
                ..
            } => FailureCode::CollateralTooLow,
            Self::AboveRange {
                leg: Leg::Collateral | Leg::Insurance,
                ..
            } => FailureCode::CollateralTooHigh,
            Self::RepaymentExceedsDebt { .. } => FailureCode::Invalid,
            _ => FailureCode::Generic,
        }
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Message(err.to_string())
    }
}

/// Small integer code carried by a failed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FailureCode {
    /// Unclassified failure: oracle error, overflow, degenerate curve, …
    Generic = 0,
    /// Requested debt (or bond) below the admissible minimum.
    DebtTooLow = 1,
    /// Requested debt (or bond) above the admissible maximum.
    DebtTooHigh = 2,
    /// Requested collateral (or insurance) below the admissible minimum.
    CollateralTooLow = 3,
    /// Requested collateral (or insurance) above the admissible maximum.
    CollateralTooHigh = 4,
    /// An aggregation batch contained an invalid entry.
    Invalid = 5,
}

impl FailureCode {
    /// Returns the wire value.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parses a wire value.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Generic),
            1 => Some(Self::DebtTooLow),
            2 => Some(Self::DebtTooHigh),
            3 => Some(Self::CollateralTooLow),
            4 => Some(Self::CollateralTooHigh),
            5 => Some(Self::Invalid),
            _ => None,
        }
    }
}

impl fmt::Display for FailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for FailureCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for FailureCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let raw = u8::deserialize(deserializer)?;
        Self::from_code(raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown failure code {raw}")))
    }
}
