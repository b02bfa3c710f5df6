//! Per-component normalization filters.
//!
//! Every filter takes whatever value a mapping holds and returns the
//! normalized component, falling back to the component's empty value when
//! the input does not fit. Nothing here fails.

use crate::constants::{MAX_PORT, MIN_PORT, SCHEME_TRIM_CHARS};
use crate::value::Value;

/// Normalizes a scheme: lowercased, with `:` and `/` trimmed from both ends.
///
/// Any string is accepted; non-strings yield an empty scheme.
///
/// # Examples
///
/// ```
/// use uri_parts::{filter, Value};
///
/// assert_eq!(filter::scheme(&Value::from(":/Http/:")), "http");
/// assert_eq!(filter::scheme(&Value::from(42)), "");
/// ```
#[must_use]
pub fn scheme(value: &Value) -> String {
    value.as_str().map_or_else(String::new, |s| {
        s.to_lowercase().trim_matches(SCHEME_TRIM_CHARS).to_string()
    })
}

/// Normalizes a port to `1..=65535`, or `None`.
///
/// Integers, decimal strings and integral floats are accepted when in
/// range. Zero, negatives, out-of-range numbers, booleans and anything
/// non-numeric yield `None`.
///
/// # Examples
///
/// ```
/// use uri_parts::{filter, Value};
///
/// assert_eq!(filter::port(&Value::from(8080)), Some(8080));
/// assert_eq!(filter::port(&Value::from(" 443 ")), Some(443));
/// assert_eq!(filter::port(&Value::from(0)), None);
/// assert_eq!(filter::port(&Value::from("http")), None);
/// ```
#[must_use]
pub fn port(value: &Value) -> Option<u16> {
    let n = match value {
        Value::Int(n) => *n,
        Value::Str(s) => s.trim_ascii().parse::<i64>().ok()?,
        Value::Float(x) => integral_float(*x)?,
        Value::Bool(_) | Value::Null => return None,
    };
    u16::try_from(n)
        .ok()
        .filter(|port| (MIN_PORT..=MAX_PORT).contains(port))
}

/// Passes a string component through unchanged; non-strings yield `""`.
///
/// Used for `user`, `pass`, `host`, `path`, `query` and `fragment`.
#[must_use]
pub fn text(value: &Value) -> String {
    value.as_str().map_or_else(String::new, str::to_string)
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn integral_float(x: f64) -> Option<i64> {
    if x.is_finite() && x.fract() == 0.0 && x.abs() <= f64::from(u32::MAX) {
        Some(x as i64)
    } else {
        None
    }
}
