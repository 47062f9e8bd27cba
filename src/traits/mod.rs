//! Capabilities the quoting core consumes.
//!
//! [`CurveOracle`] is the single injected seam.  Engines are generic over
//! it (static dispatch), so no trait objects are involved.

mod curve_oracle;

pub use curve_oracle::{CurveOracle, CurvePoint};
