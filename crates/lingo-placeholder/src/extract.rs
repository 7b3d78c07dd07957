//! Token extraction and the single-string validation gate.
//!
//! A placeholder is an opening brace, one or more characters other than `}`,
//! and a closing brace. Matches never overlap.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PlaceholderError, PlaceholderResult};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]+\}").expect("placeholder pattern is valid"));

/// Extract the distinct placeholders of `text`, sorted ascending.
///
/// # Examples
///
/// ```
/// use lingo_placeholder::extract_placeholders;
///
/// assert_eq!(extract_placeholders("{b} and {a} and {b}"), vec!["{a}", "{b}"]);
/// assert!(extract_placeholders("no tokens").is_empty());
/// ```
pub fn extract_placeholders(text: &str) -> Vec<String> {
    placeholder_set(text).into_iter().map(str::to_string).collect()
}

fn placeholder_set(text: &str) -> BTreeSet<&str> {
    PLACEHOLDER.find_iter(text).map(|m| m.as_str()).collect()
}

/// Check that `target` keeps every placeholder found in `base`.
///
/// Extra placeholders in `target` are allowed. On failure the error names the
/// first missing token in sorted order.
///
/// # Examples
///
/// ```
/// use lingo_placeholder::{validate_placeholders, PlaceholderError};
///
/// assert!(validate_placeholders("Hello {name}", "Hola {name}!").is_ok());
/// assert_eq!(
///     validate_placeholders("Hello {name}", "Hola"),
///     Err(PlaceholderError::MissingPlaceholder("{name}".into())),
/// );
/// ```
pub fn validate_placeholders(base: &str, target: &str) -> PlaceholderResult<()> {
    let required = placeholder_set(base);
    if required.is_empty() {
        return Ok(());
    }
    let present = placeholder_set(target);

    match required.iter().find(|token| !present.contains(*token)) {
        Some(token) => Err(PlaceholderError::MissingPlaceholder((*token).to_string())),
        None => Ok(()),
    }
}
