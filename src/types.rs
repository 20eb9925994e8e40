use std::num::ParseFloatError;

use crate::errors::{Error, Result};

/// Parse a string to an f64
pub fn strp(s: &str) -> Result<f64> {
    s.trim().parse().map_err(|e: ParseFloatError| e.into())
}

/// Parse an optional attribute value, using `default` if it is
/// missing or doesn't hold a number.
pub fn strp_or(s: Option<&str>, default: f64) -> f64 {
    s.and_then(|v| strp(v).ok()).unwrap_or(default)
}

/// Returns iterator over whitespace-or-comma separated values
pub fn attr_split(input: &str) -> impl Iterator<Item = String> + '_ {
    input
        .split_whitespace()
        .flat_map(|v| v.split(','))
        .filter(|&v| !v.is_empty())
        .map(|v| v.to_string())
}

/// Check a command line value is finite and non-negative
#[cfg_attr(not(feature = "cli"), allow(dead_code))]
pub fn finite_non_negative(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0. {
        Ok(value)
    } else {
        Err(Error::Cli(format!(
            "{name} must be a finite, non-negative number (got {value})"
        )))
    }
}
