//! Per-call generation config
//!
//! [`OrderNumberConfig`] describes one call to
//! [`OrderNumberGenerator::generate`](crate::OrderNumberGenerator::generate).
//! The sequence length is validated on construction so that generation is
//! total for every config that can exist.

use crate::error::{OrderNumberError, OrderNumberResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default order number prefix
pub const DEFAULT_PREFIX: &str = "RB";

/// Default sequence digit count
pub const DEFAULT_SEQUENCE_LENGTH: u32 = 4;

/// Largest sequence digit count (10^12 plus a 13-digit timestamp fits in u64)
pub const MAX_SEQUENCE_LENGTH: u32 = 12;

/// Textual shape of a generated order number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderNumberFormat {
    /// `RB-20240601-0001`
    #[default]
    Standard,
    /// `RB2406010001`
    Compact,
    /// `RB-2024-06-01-14-30-0001` or `RB-2024-06-01-0001`
    Detailed,
}

impl OrderNumberFormat {
    pub const ALL: [OrderNumberFormat; 3] = [Self::Standard, Self::Compact, Self::Detailed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Compact => "compact",
            Self::Detailed => "detailed",
        }
    }
}

impl fmt::Display for OrderNumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OrderNumberFormat {
    type Err = OrderNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "compact" => Ok(Self::Compact),
            "detailed" => Ok(Self::Detailed),
            _ => Err(OrderNumberError::UnknownFormat(s.to_string())),
        }
    }
}

/// Digit count of the numeric sequence suffix, always in `1..=12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SequenceLength(u32);

impl SequenceLength {
    pub fn new(digits: u32) -> OrderNumberResult<Self> {
        if (1..=MAX_SEQUENCE_LENGTH).contains(&digits) {
            Ok(Self(digits))
        } else {
            Err(OrderNumberError::InvalidSequenceLength(digits))
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// `10^digits`, the exclusive upper bound of the sequence value
    pub fn modulus(&self) -> u64 {
        10u64.pow(self.0)
    }
}

impl Default for SequenceLength {
    fn default() -> Self {
        Self(DEFAULT_SEQUENCE_LENGTH)
    }
}

impl TryFrom<u32> for SequenceLength {
    type Error = OrderNumberError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SequenceLength> for u32 {
    fn from(value: SequenceLength) -> Self {
        value.0
    }
}

/// Normalize a prefix: trimmed, uppercased, ASCII alphanumeric, non-empty.
pub fn normalize_prefix(prefix: &str) -> OrderNumberResult<String> {
    let trimmed = prefix.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(OrderNumberError::InvalidPrefix(prefix.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

/// Options for a single `generate` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderNumberConfig {
    pub prefix: String,
    pub format: OrderNumberFormat,
    /// Only used by [`OrderNumberFormat::Detailed`]
    pub include_time: bool,
    pub sequence_length: SequenceLength,
}

impl Default for OrderNumberConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            format: OrderNumberFormat::default(),
            include_time: false,
            sequence_length: SequenceLength::default(),
        }
    }
}

impl OrderNumberConfig {
    pub fn new(format: OrderNumberFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Set the prefix verbatim.
    ///
    /// The prefix is not normalized here; use [`normalize_prefix`] when the
    /// value comes from user input.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_format(mut self, format: OrderNumberFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_time(mut self, include_time: bool) -> Self {
        self.include_time = include_time;
        self
    }

    pub fn with_sequence_length(mut self, digits: u32) -> OrderNumberResult<Self> {
        self.sequence_length = SequenceLength::new(digits)?;
        Ok(self)
    }
}
