//! Outbound answers: the query echoed back with its result.

use serde::{Deserialize, Serialize};

use crate::error::{FailureCode, QuoteError};

/// Either a success payload or the integer code of a failure.
///
/// On the wire a success is the payload object and a failure is a bare
/// integer, so `"result": 1` means "debt too low".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome<R> {
    /// Computation failed with a classified code.
    Failure(FailureCode),
    /// Computation succeeded.
    Success(R),
}

impl<R> Outcome<R> {
    /// Returns the payload of a success.
    #[must_use]
    pub fn success(self) -> Option<R> {
        match self {
            Self::Success(r) => Some(r),
            Self::Failure(_) => None,
        }
    }

    /// Returns the code of a failure.
    #[must_use]
    pub const fn failure(&self) -> Option<FailureCode> {
        match self {
            Self::Success(_) => None,
            Self::Failure(code) => Some(*code),
        }
    }

    /// Returns `true` for a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl<R> From<Result<R, QuoteError>> for Outcome<R> {
    fn from(result: Result<R, QuoteError>) -> Self {
        match result {
            Ok(r) => Self::Success(r),
            Err(e) => Self::Failure(e.failure_code()),
        }
    }
}

/// A query together with exactly one result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer<Q, R> {
    /// The query as received.
    #[serde(flatten)]
    pub query: Q,
    /// Success payload or failure code.
    pub result: Outcome<R>,
}

impl<Q, R> Answer<Q, R> {
    /// Pairs a query with its outcome.
    #[must_use]
    pub const fn new(query: Q, result: Outcome<R>) -> Self {
        Self { query, result }
    }
}
