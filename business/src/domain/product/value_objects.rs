use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ProductError;

/// Supplier recorded when the caller does not name one.
pub const DEFAULT_SUPPLIER: &str = "Unspecified";

/// Numeric product identifier assigned by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(ProductId)
            .map_err(|_| format!("Invalid product id: {}", s))
    }
}

/// Freshness tier of a product, ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessStatus {
    Expired,
    Warning,
    Good,
}

impl std::fmt::Display for FreshnessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FreshnessStatus::Expired => write!(f, "expired"),
            FreshnessStatus::Warning => write!(f, "warning"),
            FreshnessStatus::Good => write!(f, "good"),
        }
    }
}

impl std::str::FromStr for FreshnessStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expired" => Ok(FreshnessStatus::Expired),
            "warning" => Ok(FreshnessStatus::Warning),
            "good" => Ok(FreshnessStatus::Good),
            _ => Err(format!("Invalid freshness status: {}", s)),
        }
    }
}

/// Coerces a raw quantity into a non-negative integer.
///
/// Numbers are truncated and numeric strings are read by their leading
/// integer prefix (`"12 boxes"` is 12). Anything else, including negative
/// values, becomes 0.
pub fn parse_quantity(raw: &Value) -> u64 {
    match raw {
        Value::Number(n) => match n.as_u64() {
            Some(qty) => qty,
            None => n
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
                .unwrap_or(0),
        },
        Value::String(s) => numeric_prefix(s, false).parse::<u64>().unwrap_or(0),
        _ => 0,
    }
}

/// Coerces a raw unit price into a non-negative decimal.
///
/// Strings are read by their leading decimal prefix (`"2.50 EUR"` is 2.5).
/// Invalid, negative or non-finite input becomes 0.
pub fn parse_unit_price(raw: &Value) -> f64 {
    let price = match raw {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => numeric_prefix(s, true).parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };

    if price.is_finite() && price >= 0.0 {
        price
    } else {
        0.0
    }
}

/// Parses a calendar date given as `YYYY-MM-DD` or as an RFC 3339 timestamp.
pub fn parse_calendar_date(field: &'static str, raw: &str) -> Result<NaiveDate, ProductError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| ProductError::InvalidDate(field))
}

/// Returns the leading unsigned numeric part of `s`, or `""` when it is
/// negative or does not start with a digit.
fn numeric_prefix(s: &str, allow_fraction: bool) -> &str {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);

    let mut end = 0;
    let mut seen_dot = false;
    for (idx, ch) in s.char_indices() {
        if ch.is_ascii_digit() {
            end = idx + 1;
        } else if ch == '.' && allow_fraction && !seen_dot {
            seen_dot = true;
        } else {
            break;
        }
    }

    &s[..end]
}
