// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TwitterverseError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Dataset parse error at line {line}: {message}")]
    DatasetParse { line: usize, message: String },

    #[error("Query parse error at line {line}: {message}")]
    QueryParse { line: usize, message: String },

    /// `line` is the dataset line of the repeated record, or its 1-based
    /// position when the graph is built from an in-memory list.
    #[error("Duplicate user '{username}' at line {line}")]
    DuplicateUser { username: String, line: usize },

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Unrecognized {field} value: '{value}'")]
    MalformedSpec { field: &'static str, value: String },
}

impl TwitterverseError {
    /// True for errors caused by the shape of the input text or spec values.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::DatasetParse { .. }
                | Self::QueryParse { .. }
                | Self::DuplicateUser { .. }
                | Self::MalformedSpec { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TwitterverseError>;

// Allow `?` on std::io::Error by converting to TwitterverseError::Io with unknown path.
impl From<std::io::Error> for TwitterverseError {
    fn from(source: std::io::Error) -> Self {
        TwitterverseError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
