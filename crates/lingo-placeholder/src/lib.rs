//! Placeholder extraction and validation.
//!
//! Translation strings carry interpolation tokens such as `{name}` or
//! `{count}`. A translation is only acceptable when it keeps every token its
//! base string has.
//!
//! # Key Types
//!
//! - [`extract_placeholders`] / [`validate_placeholders`] -- Single-string checks
//! - [`audit_placeholders`] / [`PlaceholderViolation`] -- Whole-file check
//! - [`PlaceholderError`] -- The first token a translation dropped

pub mod audit;
pub mod error;
pub mod extract;

pub use audit::{audit_placeholders, PlaceholderViolation};
pub use error::{PlaceholderError, PlaceholderResult};
pub use extract::{extract_placeholders, validate_placeholders};
