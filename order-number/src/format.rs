//! Order number rendering
//!
//! | Format | Shape | Example |
//! |--------|-------|---------|
//! | standard | `<PREFIX>-<YYYYMMDD>-<SEQ>` | `RB-20240601-0001` |
//! | compact | `<PREFIX><YYMMDD><SEQ>` | `RB2406010001` |
//! | detailed | `<PREFIX>-<YYYY-MM-DD>[-<HH-MM>]-<SEQ>` | `RB-2024-06-01-14-30-0001` |

use crate::config::OrderNumberFormat;
use chrono::{DateTime, Local};

/// Render an order number for the given local time and sequence.
///
/// `include_time` is ignored by every format except detailed.
pub fn render(
    format: OrderNumberFormat,
    prefix: &str,
    now: &DateTime<Local>,
    include_time: bool,
    sequence: &str,
) -> String {
    match format {
        OrderNumberFormat::Standard => {
            format!("{}-{}-{}", prefix, now.format("%Y%m%d"), sequence)
        }
        OrderNumberFormat::Compact => {
            format!("{}{}{}", prefix, now.format("%y%m%d"), sequence)
        }
        OrderNumberFormat::Detailed if include_time => {
            format!("{}-{}-{}", prefix, now.format("%Y-%m-%d-%H-%M"), sequence)
        }
        OrderNumberFormat::Detailed => {
            format!("{}-{}-{}", prefix, now.format("%Y-%m-%d"), sequence)
        }
    }
}

/// `<PREFIX>-<YYYYMMDD>-<SELLERCODE><SEQ>`
pub fn render_business(
    prefix: &str,
    now: &DateTime<Local>,
    seller_code: &str,
    sequence: &str,
) -> String {
    format!(
        "{}-{}-{}{}",
        prefix,
        now.format("%Y%m%d"),
        seller_code,
        sequence
    )
}

/// `<PREFIX>-<ms timestamp>-<suffix>`, used once collision retries run out
pub fn render_fallback(prefix: &str, timestamp_ms: i64, suffix: &str) -> String {
    format!("{}-{}-{}", prefix, timestamp_ms, suffix)
}

/// Short human description of a format
pub fn describe(format: OrderNumberFormat) -> &'static str {
    match format {
        OrderNumberFormat::Standard => "Prefix, full date and sequence separated by dashes",
        OrderNumberFormat::Compact => "Prefix, short date and sequence without separators",
        OrderNumberFormat::Detailed => "Prefix, dashed date, optional time and sequence",
    }
}
