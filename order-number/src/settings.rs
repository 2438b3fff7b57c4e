//! Generator defaults loaded from `ORDER_NUMBER_*` environment variables

use crate::config::{
    DEFAULT_PREFIX, OrderNumberConfig, OrderNumberFormat, SequenceLength, normalize_prefix,
};
use crate::error::{OrderNumberError, OrderNumberResult};

/// Generator settings - defaults applied to every generator instance
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ORDER_NUMBER_PREFIX | RB | Default prefix |
/// | ORDER_NUMBER_FORMAT | standard | Default format |
/// | ORDER_NUMBER_SEQUENCE_LENGTH | 4 | Default sequence digits |
/// | ORDER_NUMBER_INCLUDE_TIME | false | Default time segment for detailed |
/// | ORDER_NUMBER_MAX_TRACKED | (unset) | Cap on tracked numbers, unbounded when unset |
///
/// # Example
///
/// ```ignore
/// ORDER_NUMBER_PREFIX=SH ORDER_NUMBER_FORMAT=compact orderno generate
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Already normalized (uppercase alphanumeric)
    pub prefix: String,
    pub format: OrderNumberFormat,
    pub sequence_length: SequenceLength,
    pub include_time: bool,
    /// Oldest numbers are forgotten past this many
    pub max_tracked: Option<usize>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            format: OrderNumberFormat::default(),
            sequence_length: SequenceLength::default(),
            include_time: false,
            max_tracked: None,
        }
    }
}

impl GeneratorSettings {
    /// Load settings from the environment.
    ///
    /// Missing or malformed values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lenient loader over an arbitrary key lookup
    ///
    /// A zero `ORDER_NUMBER_MAX_TRACKED` means no cap.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            prefix: lookup("ORDER_NUMBER_PREFIX")
                .and_then(|p| normalize_prefix(&p).ok())
                .unwrap_or(defaults.prefix),
            format: lookup("ORDER_NUMBER_FORMAT")
                .and_then(|f| f.parse().ok())
                .unwrap_or(defaults.format),
            sequence_length: lookup("ORDER_NUMBER_SEQUENCE_LENGTH")
                .and_then(|n| n.trim().parse::<u32>().ok())
                .and_then(|n| SequenceLength::new(n).ok())
                .unwrap_or(defaults.sequence_length),
            include_time: lookup("ORDER_NUMBER_INCLUDE_TIME")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.include_time),
            max_tracked: lookup("ORDER_NUMBER_MAX_TRACKED")
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|&cap| cap > 0),
        }
    }

    /// Load settings from the environment, rejecting malformed values.
    pub fn try_from_env() -> OrderNumberResult<Self> {
        Self::try_from_lookup(|key| std::env::var(key).ok())
    }

    /// Strict loader over an arbitrary key lookup
    pub fn try_from_lookup<F>(lookup: F) -> OrderNumberResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(prefix) = lookup("ORDER_NUMBER_PREFIX") {
            settings.prefix = normalize_prefix(&prefix)?;
        }
        if let Some(format) = lookup("ORDER_NUMBER_FORMAT") {
            settings.format = format.parse()?;
        }
        if let Some(raw) = lookup("ORDER_NUMBER_SEQUENCE_LENGTH") {
            let digits = raw
                .trim()
                .parse::<u32>()
                .map_err(|_| invalid("ORDER_NUMBER_SEQUENCE_LENGTH", &raw))?;
            settings.sequence_length = SequenceLength::new(digits)?;
        }
        if let Some(raw) = lookup("ORDER_NUMBER_INCLUDE_TIME") {
            settings.include_time = raw
                .trim()
                .parse()
                .map_err(|_| invalid("ORDER_NUMBER_INCLUDE_TIME", &raw))?;
        }
        if let Some(raw) = lookup("ORDER_NUMBER_MAX_TRACKED") {
            let cap = raw
                .trim()
                .parse::<usize>()
                .map_err(|_| invalid("ORDER_NUMBER_MAX_TRACKED", &raw))?;
            if cap == 0 {
                return Err(invalid("ORDER_NUMBER_MAX_TRACKED", &raw));
            }
            settings.max_tracked = Some(cap);
        }

        Ok(settings)
    }

    /// Per-call config seeded from these settings
    pub fn default_config(&self) -> OrderNumberConfig {
        OrderNumberConfig {
            prefix: self.prefix.clone(),
            format: self.format,
            include_time: self.include_time,
            sequence_length: self.sequence_length,
        }
    }
}

fn invalid(key: &str, value: &str) -> OrderNumberError {
    OrderNumberError::InvalidSetting {
        key: key.to_string(),
        value: value.to_string(),
    }
}
