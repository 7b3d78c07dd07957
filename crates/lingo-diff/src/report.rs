//! Difference plus completion, as handed to callers that render or serve it.

use lingo_flat::FlatMap;
use serde::{Deserialize, Serialize};

use crate::difference::{compare, completion_from_counts, Difference};

/// A [`Difference`] together with the completion percentage of the target.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffReport {
    #[serde(flatten)]
    pub difference: Difference,
    /// Number of keys in the base map.
    pub total: usize,
    /// Percentage of base keys with a non-empty translation.
    pub completion: f64,
}

impl DiffReport {
    /// Compare `base` against `target` and compute completion in one pass.
    pub fn compute(base: &FlatMap, target: &FlatMap) -> Self {
        let difference = compare(base, target);
        let completion = completion_from_counts(base.len(), difference.missing_keys.len());
        Self {
            difference,
            total: base.len(),
            completion,
        }
    }

    /// Number of base keys that are translated.
    pub fn translated(&self) -> usize {
        self.total.saturating_sub(self.difference.missing_keys.len())
    }
}
