//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum Error {
    /// A required input is missing or empty
    #[error("{0}")]
    Input(String),

    #[error("Path {path:?} does not exist or is invalid: {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed front-matter in {path:?}: {fault}")]
    MalformedFrontMatter { path: PathBuf, fault: FrontMatterFault },

    #[error("Level 1 heading {marker:?} not found in {path:?}. Nothing written")]
    AnchorNotFound { path: PathBuf, marker: String },

    #[error("Cannot derive a slug from {name:?}: name must be longer than {prefix_len} characters")]
    InvalidSlug { name: String, prefix_len: usize },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a front-matter block was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontMatterFault {
    #[error("the file does not open with a `---` line")]
    MissingOpening,

    #[error("end of file reached before the closing `---` line")]
    Unterminated,

    #[error("the file is not valid UTF-8")]
    InvalidUtf8,

    #[error("the block has no {}", .0.join(" or "))]
    MissingFields(Vec<&'static str>),
}

impl Error {
    pub(crate) fn malformed(path: impl Into<PathBuf>, fault: FrontMatterFault) -> Self {
        Error::MalformedFrontMatter {
            path: path.into(),
            fault,
        }
    }
}
