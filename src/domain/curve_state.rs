//! Snapshot of a pool's pricing-curve parameters.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Uint112;

/// The three parameters `{x, y, z}` of a pool's pricing curve.
///
/// `x` tracks the asset reserve, `y` the interest-rate parameter and `z`
/// the collateral-factor parameter.  A quote only ever reads a snapshot
/// supplied by the caller; projected post-trade states are new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CurveState {
    /// Asset reserve parameter.
    pub x: Uint112,
    /// Interest parameter.
    pub y: Uint112,
    /// Collateral parameter.
    pub z: Uint112,
}

impl CurveState {
    /// Creates a snapshot from its three parameters.
    pub const fn new(x: Uint112, y: Uint112, z: Uint112) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for CurveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CurveState(x={}, y={}, z={})", self.x, self.y, self.z)
    }
}
