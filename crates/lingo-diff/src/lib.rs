//! Diff engine for lingo.
//!
//! Compares a flattened base-language file against a flattened target-language
//! file and classifies every key.
//!
//! # Key Types
//!
//! - [`Difference`] / [`Values`] -- Missing, extra and changed keys
//! - [`DiffReport`] -- A difference together with its completion percentage

pub mod difference;
pub mod report;

pub use difference::{compare, completion_percentage, Difference, Values};
pub use report::DiffReport;
