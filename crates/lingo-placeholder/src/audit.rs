//! Whole-file placeholder check.
//!
//! Runs [`validate_placeholders`] over every translated key of a target file.
//! Untranslated (empty or absent) keys are skipped; the differ already reports
//! them as missing.

use lingo_flat::FlatMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extract::validate_placeholders;

/// A translated key whose value dropped a base placeholder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderViolation {
    /// The dotted key.
    pub key: String,
    /// The first missing token.
    pub token: String,
}

/// Validate every key present in both maps with a non-empty target value.
///
/// Violations come back sorted by key.
pub fn audit_placeholders(base: &FlatMap, target: &FlatMap) -> Vec<PlaceholderViolation> {
    let violations: Vec<PlaceholderViolation> = base
        .iter()
        .filter_map(|(key, base_val)| {
            let target_val = target.get(key).filter(|v| !v.is_empty())?;
            validate_placeholders(base_val, target_val)
                .err()
                .map(|err| PlaceholderViolation {
                    key: key.clone(),
                    token: err.token().to_string(),
                })
        })
        .collect();

    debug!(checked = base.len(), violations = violations.len(), "placeholder audit");
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_map(pairs: &[(&str, &str)]) -> FlatMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn clean_translation_has_no_violations() {
        let base = make_map(&[("greet", "Hello {name}"), ("bye", "Bye")]);
        let target = make_map(&[("greet", "Hola {name}"), ("bye", "Adios")]);
        assert!(audit_placeholders(&base, &target).is_empty());
    }

    #[test]
    fn dropped_tokens_are_reported_per_key() {
        let base = make_map(&[
            ("b.msg", "{count} items"),
            ("a.greet", "Hello {name}"),
            ("c.ok", "{x}"),
        ]);
        let target = make_map(&[("b.msg", "items"), ("a.greet", "Hola"), ("c.ok", "{x}")]);

        assert_eq!(
            audit_placeholders(&base, &target),
            vec![
                PlaceholderViolation {
                    key: "a.greet".into(),
                    token: "{name}".into(),
                },
                PlaceholderViolation {
                    key: "b.msg".into(),
                    token: "{count}".into(),
                },
            ]
        );
    }

    #[test]
    fn untranslated_keys_are_skipped() {
        let base = make_map(&[("greet", "Hello {name}"), ("other", "{x}")]);
        let target = make_map(&[("greet", "")]);
        assert!(audit_placeholders(&base, &target).is_empty());
    }

    #[test]
    fn extra_target_keys_are_ignored() {
        let base = make_map(&[("greet", "Hello")]);
        let target = make_map(&[("greet", "Hola"), ("stray", "{oops}")]);
        assert!(audit_placeholders(&base, &target).is_empty());
    }
}
