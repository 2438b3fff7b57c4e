//! Order number generator
//!
//! Produces display-friendly order numbers with collision avoidance local to
//! the generator instance. Numbers are NOT globally unique: the backend stays
//! the authority for real order identifiers.

use crate::clock::{Clock, SystemClock};
use crate::config::{OrderNumberConfig, OrderNumberFormat};
use crate::format;
use crate::sequence;
use crate::settings::GeneratorSettings;
use crate::tracked::TrackedNumbers;
use crate::validate;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Candidate attempts before falling back to the timestamp form
pub const MAX_ATTEMPTS: u32 = 100;

/// Suffix used in suggested-format examples
const EXAMPLE_SEQUENCE: &str = "0001";

/// Format listing entry for settings/demo screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedFormat {
    pub format: OrderNumberFormat,
    pub example: String,
    pub description: String,
}

/// Order number generator
///
/// Construct one per session and pass it to whoever needs it; share across
/// threads with `Arc`. The tracked set is guarded by a mutex and the
/// collision retry loop runs under that lock.
pub struct OrderNumberGenerator<C: Clock = SystemClock> {
    settings: GeneratorSettings,
    clock: C,
    seen: Mutex<TrackedNumbers>,
}

impl OrderNumberGenerator<SystemClock> {
    pub fn new() -> Self {
        Self::with_settings(GeneratorSettings::default())
    }

    pub fn with_settings(settings: GeneratorSettings) -> Self {
        Self::with_clock(settings, SystemClock)
    }
}

impl Default for OrderNumberGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> OrderNumberGenerator<C> {
    pub fn with_clock(settings: GeneratorSettings, clock: C) -> Self {
        let seen = Mutex::new(TrackedNumbers::new(settings.max_tracked));
        Self {
            settings,
            clock,
            seen,
        }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Config seeded from this generator's settings
    pub fn default_config(&self) -> OrderNumberConfig {
        self.settings.default_config()
    }

    /// Generate an order number and remember it.
    ///
    /// Retries up to [`MAX_ATTEMPTS`] times on collision with a previously
    /// generated number, then falls back to
    /// `<PREFIX>-<ms timestamp>-<4 base36 chars>`, which does not match any
    /// of the validated formats.
    pub fn generate(&self, config: &OrderNumberConfig) -> String {
        let mut rng = rand::thread_rng();
        let mut seen = self.seen.lock();

        let mut number = None;
        for _ in 0..MAX_ATTEMPTS {
            let now = self.clock.now();
            let seq = sequence::sequence_suffix(
                now.timestamp_millis(),
                config.sequence_length,
                &mut rng,
            );
            let candidate = format::render(
                config.format,
                &config.prefix,
                &now,
                config.include_time,
                &seq,
            );
            if !seen.contains(&candidate) {
                number = Some(candidate);
                break;
            }
        }

        let number = number.unwrap_or_else(|| {
            let ts = self.clock.now().timestamp_millis();
            let fallback =
                format::render_fallback(&config.prefix, ts, &sequence::fallback_suffix(&mut rng));
            tracing::warn!(
                format = %config.format,
                attempts = MAX_ATTEMPTS,
                order_number = %fallback,
                "Order number collisions exhausted, using fallback"
            );
            fallback
        });

        if let Some(evicted) = seen.insert(number.clone()) {
            tracing::debug!(evicted = %evicted, "Tracked order numbers at capacity, evicted oldest");
        }
        tracing::debug!(order_number = %number, format = %config.format, "Generated order number");
        number
    }

    /// Generate with this generator's default config
    pub fn generate_default(&self) -> String {
        self.generate(&self.default_config())
    }

    /// `<PREFIX>-<YYYYMMDD>-<SELLERCODE><SEQ>` with a 4-digit sequence.
    ///
    /// The seller code is the last two characters of `seller_id`, uppercased.
    /// Business numbers are not tracked: they neither check nor populate the
    /// set consulted by [`generate`](Self::generate).
    pub fn generate_business_order_number(&self, seller_id: Option<&str>) -> String {
        let mut rng = rand::thread_rng();
        let now = self.clock.now();
        let seq = sequence::business_sequence(now.timestamp_millis(), &mut rng);
        let code = sequence::seller_code(seller_id);
        let number = format::render_business(&self.settings.prefix, &now, &code, &seq);
        tracing::debug!(order_number = %number, "Generated business order number");
        number
    }

    /// See [`validate::validate_order_number`]
    pub fn validate_order_number(&self, candidate: &str) -> bool {
        validate::validate_order_number(candidate)
    }

    /// One example per format, dated today, using the default prefix
    pub fn suggested_formats(&self) -> Vec<SuggestedFormat> {
        let now = self.clock.now();
        OrderNumberFormat::ALL
            .into_iter()
            .map(|fmt| SuggestedFormat {
                format: fmt,
                example: format::render(
                    fmt,
                    &self.settings.prefix,
                    &now,
                    true,
                    EXAMPLE_SEQUENCE,
                ),
                description: format::describe(fmt).to_string(),
            })
            .collect()
    }

    /// Forget every generated number.
    ///
    /// Previously generated numbers may be produced again afterwards.
    pub fn clear_cache(&self) {
        let mut seen = self.seen.lock();
        let cleared = seen.len();
        seen.clear();
        tracing::info!(cleared, "Cleared tracked order numbers");
    }

    pub fn is_generated(&self, candidate: &str) -> bool {
        self.seen.lock().contains(candidate)
    }

    /// Number of order numbers currently tracked
    pub fn tracked_count(&self) -> usize {
        self.seen.lock().len()
    }
}
