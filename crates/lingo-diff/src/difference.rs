//! Key-level comparison of two flat maps.
//!
//! A key is *missing* when the base has it and the target either lacks it or
//! holds an empty string: blank translations count as not done. A key is
//! *extra* when only the target has it. Keys present in both with unequal
//! values are recorded with both sides.

use std::collections::BTreeMap;

use lingo_flat::FlatMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The result of comparing a base map against a target map.
///
/// Every collection is sorted by key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difference {
    /// Keys present in base but absent or empty in target.
    pub missing_keys: Vec<String>,
    /// Keys present in target but not in base.
    pub extra_keys: Vec<String>,
    /// Keys present in both with different values.
    pub different_values: BTreeMap<String, Values>,
}

impl Difference {
    /// Create an empty difference.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if any base key still lacks a translation.
    pub fn has_missing_translations(&self) -> bool {
        !self.missing_keys.is_empty()
    }

    /// Total number of entries across all three categories.
    pub fn total_differences(&self) -> usize {
        self.missing_keys.len() + self.extra_keys.len() + self.different_values.len()
    }

    /// Returns `true` if nothing differs.
    pub fn is_empty(&self) -> bool {
        self.total_differences() == 0
    }
}

/// Base and target values for one key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Values {
    pub base: String,
    pub target: String,
}

/// Compare two flat maps.
///
/// # Examples
///
/// ```
/// use lingo_diff::compare;
/// use lingo_flat::FlatMap;
///
/// let base: FlatMap = [("a", "1"), ("b", "2")]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v.to_string()))
///     .collect();
/// let target: FlatMap = [("a", "1"), ("c", "3")]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v.to_string()))
///     .collect();
///
/// let diff = compare(&base, &target);
/// assert_eq!(diff.missing_keys, vec!["b"]);
/// assert_eq!(diff.extra_keys, vec!["c"]);
/// assert!(diff.different_values.is_empty());
/// ```
pub fn compare(base: &FlatMap, target: &FlatMap) -> Difference {
    let mut diff = Difference::new();

    for (key, base_val) in base {
        match target.get(key) {
            Some(target_val) => {
                if target_val.is_empty() {
                    diff.missing_keys.push(key.clone());
                }
                if base_val != target_val {
                    diff.different_values.insert(
                        key.clone(),
                        Values {
                            base: base_val.clone(),
                            target: target_val.clone(),
                        },
                    );
                }
            }
            None => diff.missing_keys.push(key.clone()),
        }
    }

    diff.extra_keys = target
        .keys()
        .filter(|key| !base.contains_key(*key))
        .cloned()
        .collect();

    debug!(
        missing = diff.missing_keys.len(),
        extra = diff.extra_keys.len(),
        different = diff.different_values.len(),
        "compared flat maps"
    );
    diff
}

/// Share of base keys that have a non-empty translation, in percent.
///
/// An empty base counts as fully translated (`100.0`).
pub fn completion_percentage(base: &FlatMap, target: &FlatMap) -> f64 {
    if base.is_empty() {
        return 100.0;
    }
    let missing = compare(base, target).missing_keys.len();
    completion_from_counts(base.len(), missing)
}

pub(crate) fn completion_from_counts(total: usize, missing: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (total - missing) as f64 / total as f64 * 100.0
}
