use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use lingo_flat::ConflictPolicy;

use crate::error::{SdkError, SdkResult};

/// File name looked up by [`LingoConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "lingo.toml";

/// Which keys an editor lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Every base key.
    #[default]
    Full,
    /// Only keys still missing a translation.
    Missing,
}

/// Project-level settings, read from `lingo.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LingoConfig {
    /// How edits are reassembled when a key runs through an existing leaf.
    pub conflict_policy: ConflictPolicy,
    /// The key listing shown when none is requested explicitly.
    pub default_view: ViewMode,
    /// Treat missing translations as a failure in `lingo diff`.
    pub fail_on_missing: bool,
}

impl LingoConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> SdkResult<Self> {
        toml::from_str(text).map_err(|e| SdkError::Config(e.to_string()))
    }

    /// Read a configuration file.
    pub fn load(path: impl AsRef<Path>) -> SdkResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loaded config");
        Self::from_toml(&text)
    }

    /// Load `lingo.toml` from `dir`, or fall back to defaults when absent.
    pub fn discover(dir: impl AsRef<Path>) -> SdkResult<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> SdkResult<String> {
        toml::to_string(self).map_err(|e| SdkError::Config(e.to_string()))
    }
}
