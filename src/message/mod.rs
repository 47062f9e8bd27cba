//! Message contract between callers and the quoting core.
//!
//! A [`Request`] names its family in a `"kind"` tag; the matching
//! [`Response`] echoes the request's fields and adds a `"result"` that is
//! either the success payload or an integer [`FailureCode`].
//!
//! ```text
//! → {"kind":"borrow","pool":{…},"state":{…},"slippage":0.01,"now":…,
//!    "assetOut":"100","given":"debt","debtIn":"120"}
//! ← {"kind":"borrow", …same fields…, "result":{"debt":"120",…}}
//! ← {"kind":"borrow", …same fields…, "result":1}
//! ```
//!
//! Integer amounts are decimal strings; percent, timestamps, slippage and
//! prices are plain JSON numbers.

mod answer;
mod query;
mod result;

use serde::{Deserialize, Serialize};

use crate::aggregate::RepaymentPlan;
use crate::domain::{Claims, Due};
use crate::error::{FailureCode, Result};

pub use answer::{Answer, Outcome};
pub use query::{
    BorrowGiven, BorrowQuery, ClaimsQuery, DuesQuery, LendGiven, LendQuery, LiquidityGiven,
    LiquidityQuery, QueryContext, RepaymentQuery,
};
pub use result::{BorrowQuote, LendQuote, LiquidityQuote};

/// Every inbound message the core understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Request {
    /// Borrow quote.
    Borrow(BorrowQuery),
    /// Lend quote.
    Lend(LendQuery),
    /// Add-liquidity quote.
    Liquidity(LiquidityQuery),
    /// Total of several dues.
    AggregateDues(DuesQuery),
    /// Total of several claims.
    AggregateClaims(ClaimsQuery),
    /// Proportional partial-repayment plan.
    PlanRepayment(RepaymentQuery),
}

impl Request {
    /// Wire name of the request family, for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Borrow(_) => "borrow",
            Self::Lend(_) => "lend",
            Self::Liquidity(_) => "liquidity",
            Self::AggregateDues(_) => "aggregateDues",
            Self::AggregateClaims(_) => "aggregateClaims",
            Self::PlanRepayment(_) => "planRepayment",
        }
    }

    /// Decodes a request from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Message`](crate::error::QuoteError::Message)
    /// for malformed JSON, an unknown `kind` or `given` tag, or a field
    /// that violates its domain.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Encodes the request as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Message`](crate::error::QuoteError::Message)
    /// if serialisation fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Every outbound message: one per [`Request`], same `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Response {
    /// Borrow answer.
    Borrow(Answer<BorrowQuery, BorrowQuote>),
    /// Lend answer.
    Lend(Answer<LendQuery, LendQuote>),
    /// Add-liquidity answer.
    Liquidity(Answer<LiquidityQuery, LiquidityQuote>),
    /// Dues total.
    AggregateDues(Answer<DuesQuery, Due>),
    /// Claims total.
    AggregateClaims(Answer<ClaimsQuery, Claims>),
    /// Repayment plan.
    PlanRepayment(Answer<RepaymentQuery, RepaymentPlan>),
}

impl Response {
    /// Answers `request` with `code` without computing anything.
    ///
    /// Used when a request cannot be served at all, e.g. after a timeout.
    #[must_use]
    pub fn failed(request: Request, code: FailureCode) -> Self {
        match request {
            Request::Borrow(q) => Self::Borrow(Answer::new(q, Outcome::Failure(code))),
            Request::Lend(q) => Self::Lend(Answer::new(q, Outcome::Failure(code))),
            Request::Liquidity(q) => Self::Liquidity(Answer::new(q, Outcome::Failure(code))),
            Request::AggregateDues(q) => {
                Self::AggregateDues(Answer::new(q, Outcome::Failure(code)))
            }
            Request::AggregateClaims(q) => {
                Self::AggregateClaims(Answer::new(q, Outcome::Failure(code)))
            }
            Request::PlanRepayment(q) => {
                Self::PlanRepayment(Answer::new(q, Outcome::Failure(code)))
            }
        }
    }

    /// Code of a failed response, `None` on success.
    #[must_use]
    pub fn failure(&self) -> Option<FailureCode> {
        match self {
            Self::Borrow(a) => a.result.failure(),
            Self::Lend(a) => a.result.failure(),
            Self::Liquidity(a) => a.result.failure(),
            Self::AggregateDues(a) => a.result.failure(),
            Self::AggregateClaims(a) => a.result.failure(),
            Self::PlanRepayment(a) => a.result.failure(),
        }
    }

    /// Decodes a response from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Message`](crate::error::QuoteError::Message)
    /// for malformed JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Encodes the response as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Message`](crate::error::QuoteError::Message)
    /// if serialisation fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
