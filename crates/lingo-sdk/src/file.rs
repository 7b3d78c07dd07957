//! Stored translation files.

use std::fmt;

use serde::{Deserialize, Serialize};

use lingo_flat::{parse_document, validate_document, FlatResult, JsonObject};

/// Role of a file within a project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// The source-language file every translation is measured against.
    Base,
    /// The file being translated.
    Target,
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => f.write_str("base"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// A translation file as it is stored: its role, language and raw JSON text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationFile {
    pub file_type: FileType,
    pub language_code: String,
    /// The JSON document as text.
    pub content: String,
}

impl TranslationFile {
    pub fn new(
        file_type: FileType,
        language_code: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            file_type,
            language_code: language_code.into(),
            content: content.into(),
        }
    }

    /// A base-language file.
    pub fn base(language_code: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(FileType::Base, language_code, content)
    }

    /// A target-language file.
    pub fn target(language_code: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(FileType::Target, language_code, content)
    }

    /// Check the content is a non-empty JSON object.
    pub fn validate(&self) -> FlatResult<()> {
        validate_document(self.content.as_bytes())
    }

    /// Parse the content.
    pub fn parse(&self) -> FlatResult<JsonObject> {
        parse_document(self.content.as_bytes())
    }
}
