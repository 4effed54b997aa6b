//! Leaf value coercion.
//!
//! Element text arrives as a string; typed fields convert it here so every
//! entity reports domain violations the same way.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{DecodeError, DecodeResult};

/// Literal for `true` on the wire.
pub const TRUE_LITERAL: &str = "true";
/// Literal for `false` on the wire.
pub const FALSE_LITERAL: &str = "false";

/// Parse a boolean-valued field.
///
/// Only the exact literals `true` and `false` are accepted.
pub fn parse_bool(field: &str, text: &str) -> DecodeResult<bool> {
    match text {
        TRUE_LITERAL => Ok(true),
        FALSE_LITERAL => Ok(false),
        _ => Err(DecodeError::unexpected(field, text, "true or false")),
    }
}

/// Parse a count, index or other integer-valued field.
pub fn parse_int<T: FromStr>(field: &str, text: &str) -> DecodeResult<T> {
    text.parse::<T>()
        .map_err(|_| DecodeError::unexpected(field, text, "an integer"))
}

/// Parse a monetary or rate value without going through floating point.
///
/// Values that cannot be represented exactly are rejected rather than rounded.
pub fn parse_decimal(field: &str, text: &str) -> DecodeResult<Decimal> {
    Decimal::from_str_exact(text).map_err(|_| DecodeError::unexpected(field, text, "a decimal"))
}
