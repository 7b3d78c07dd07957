use thiserror::Error;

use lingo_flat::FlatError;
use lingo_placeholder::PlaceholderError;

use crate::file::FileType;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("invalid {role} file: {source}")]
    InvalidFile {
        role: FileType,
        #[source]
        source: FlatError,
    },

    #[error("expected a {expected} file, got a {actual} file")]
    WrongFileType { expected: FileType, actual: FileType },

    #[error("project must have both base and target files: no {0} file")]
    MissingFile(FileType),

    #[error("rejected value for {key}: {source}")]
    FieldRejected {
        key: String,
        base: String,
        value: String,
        #[source]
        source: PlaceholderError,
    },

    #[error("no file for language: {0}")]
    LanguageNotFound(String),

    #[error("document error: {0}")]
    Flat(#[from] FlatError),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SdkResult<T> = Result<T, SdkError>;
