//! # order-number
//!
//! Human-readable order number generation and validation for order-creation
//! screens.
//!
//! ## Scope
//!
//! This crate handles display-friendly order numbers:
//! - Three textual formats (standard, compact, detailed)
//! - Collision avoidance within one generator instance
//! - Seller-coded business numbers
//! - Structural validation
//!
//! The authoritative order identifier is still assigned by the backend.
//! Numbers from this crate are a pre-fill / preview convenience.
//!
//! ## Example
//!
//! ```
//! use order_number::{OrderNumberConfig, OrderNumberFormat, OrderNumberGenerator};
//!
//! let generator = OrderNumberGenerator::new();
//!
//! let number = generator.generate(&OrderNumberConfig::default());
//! assert!(generator.validate_order_number(&number));
//! assert!(generator.is_generated(&number));
//!
//! let compact = OrderNumberConfig::new(OrderNumberFormat::Compact)
//!     .with_sequence_length(3)
//!     .unwrap();
//! let number = generator.generate(&compact);
//! assert!(number.starts_with("RB"));
//! ```

mod clock;
mod config;
mod error;
mod format;
mod generator;
mod sequence;
mod settings;
mod tracked;
mod validate;

// Re-exports
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{
    DEFAULT_PREFIX, DEFAULT_SEQUENCE_LENGTH, MAX_SEQUENCE_LENGTH, OrderNumberConfig,
    OrderNumberFormat, SequenceLength, normalize_prefix,
};
pub use error::{OrderNumberError, OrderNumberResult};
pub use generator::{MAX_ATTEMPTS, OrderNumberGenerator, SuggestedFormat};
pub use settings::GeneratorSettings;
pub use validate::{detect_format, validate_order_number};
