//! Caller-owned positions used by the aggregation helpers.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a position (the on-chain due or claims index).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PositionId(u64);

impl PositionId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One position of a caller: an identifier and what it holds.
///
/// `T` is [`Due`](super::Due) for borrower positions and
/// [`Claims`](super::Claims) for lender positions.
///
/// # Examples
///
/// ```
/// use maturity_quote::domain::{Due, Position, PositionId, Uint112};
///
/// let pos = Position::new(
///     PositionId::new(3),
///     Due::new(Uint112::from_u64(110), Uint112::from_u64(250)),
/// );
/// assert_eq!(pos.id.get(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position<T> {
    /// Position identifier.
    pub id: PositionId,
    /// Position contents.
    #[serde(flatten)]
    pub value: T,
}

impl<T> Position<T> {
    /// Creates a position.
    #[must_use]
    pub const fn new(id: PositionId, value: T) -> Self {
        Self { id, value }
    }
}
