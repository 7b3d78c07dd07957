//! High-level API for lingo.
//!
//! A translation project pairs a base-language file with a target-language
//! file. This crate wraps the flattening, diff and placeholder crates into the
//! flows an editor needs: showing what is left to translate, listing keys to
//! edit, and accepting edits only when they keep the base placeholders.

pub mod config;
pub mod error;
pub mod file;
pub mod project;

pub use config::{LingoConfig, ViewMode, CONFIG_FILE_NAME};
pub use error::{SdkError, SdkResult};
pub use file::{FileType, TranslationFile};
pub use project::{EditOutcome, TranslationProject};

// Re-export key types
pub use lingo_diff::{DiffReport, Difference, Values};
pub use lingo_flat::{ConflictPolicy, FlatMap, JsonObject};
pub use lingo_placeholder::{PlaceholderError, PlaceholderViolation};
