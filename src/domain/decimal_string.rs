//! Decimal-string wire encoding shared by the integer newtypes.
//!
//! Amounts routinely exceed the 53-bit integer range of JSON consumers, so
//! they cross the message boundary as base-10 strings.  Small JSON integers
//! are accepted on input for convenience.

use core::fmt;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

/// Serializes a raw `u128` as a decimal string.
pub(crate) fn serialize<S: Serializer>(value: u128, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&value)
}

/// Deserializes a raw `u128` from a decimal string or an unsigned integer.
pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
    deserializer.deserialize_any(DecimalVisitor)
}

struct DecimalVisitor;

impl Visitor<'_> for DecimalVisitor {
    type Value = u128;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative decimal integer string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u128, E> {
        if v.is_empty() || !v.bytes().all(|b| b.is_ascii_digit()) {
            return Err(E::invalid_value(de::Unexpected::Str(v), &self));
        }
        v.parse::<u128>()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u128, E> {
        Ok(u128::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<u128, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u128, E> {
        u128::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }
}
