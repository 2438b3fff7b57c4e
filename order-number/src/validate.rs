//! Structural validation of order numbers
//!
//! Pure pattern matching, no state. Digits are ASCII only.

use crate::config::OrderNumberFormat;
use regex::Regex;
use std::sync::LazyLock;

static STANDARD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,4}-[0-9]{8}-[0-9]{4}$").expect("valid regex"));

static COMPACT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,4}[0-9]{6}[0-9]{3,4}$").expect("valid regex"));

static DETAILED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2,4}-[0-9]{4}-[0-9]{2}-[0-9]{2}(-[0-9]{2}-[0-9]{2})?-[0-9]{4}$")
        .expect("valid regex")
});

fn pattern(format: OrderNumberFormat) -> &'static Regex {
    match format {
        OrderNumberFormat::Standard => &STANDARD_PATTERN,
        OrderNumberFormat::Compact => &COMPACT_PATTERN,
        OrderNumberFormat::Detailed => &DETAILED_PATTERN,
    }
}

/// Which known format `candidate` matches, checked standard, compact, detailed
pub fn detect_format(candidate: &str) -> Option<OrderNumberFormat> {
    OrderNumberFormat::ALL
        .into_iter()
        .find(|format| pattern(*format).is_match(candidate))
}

/// Whether `candidate` matches any known format
///
/// Fallback numbers produced after exhausted retries usually do not match.
pub fn validate_order_number(candidate: &str) -> bool {
    detect_format(candidate).is_some()
}
