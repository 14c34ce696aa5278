//! House number normalization and magnitude extraction

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{HousesError, Result};
use crate::houses::compiler::leading_digits;
use crate::houses::rule::Parity;

static LEADING_INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+").unwrap());

static LEADING_FLOAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap()
});

/// A queried house number ready to be matched against rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseNumber {
    /// Whitespace-free, lowercased form used by literal rules
    pub normalized: String,
    /// Leading positive integer
    pub magnitude: u64,
}

impl HouseNumber {
    /// Parse a raw house number such as `"17/1"` or `" 15 А"`.
    ///
    /// Errors carry `raw` exactly as given.
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = normalize_house_number(raw);
        let digits = leading_positive_digits(&normalized)
            .ok_or_else(|| HousesError::MalformedNumber(raw.to_string()))?;

        if is_fractional(&normalized, digits) {
            return Err(HousesError::NotAnInteger(raw.to_string()));
        }

        let magnitude = leading_digits(digits);
        Ok(Self { normalized, magnitude })
    }

    #[inline]
    pub fn parity(&self) -> Parity {
        Parity::of(self.magnitude)
    }
}

/// Strip all whitespace and lowercase
pub fn normalize_house_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Digits of the leading signed integer, if it is positive.
///
/// Values beyond `u64` are still valid house numbers; their magnitude saturates.
fn leading_positive_digits(normalized: &str) -> Option<&str> {
    let text = LEADING_INTEGER_RE.find(normalized)?.as_str();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text.trim_start_matches('+')),
    };
    if negative || digits.bytes().all(|b| b == b'0') {
        return None;
    }
    Some(digits)
}

/// True when the leading text reads as a number other than its integer part, e.g. `1.1`
fn is_fractional(normalized: &str, digits: &str) -> bool {
    let Ok(integer) = digits.parse::<f64>() else {
        return false;
    };
    LEADING_FLOAT_RE
        .find(normalized)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .is_some_and(|value| value != integer)
}
