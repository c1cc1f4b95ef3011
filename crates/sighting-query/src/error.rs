//! Error types for queries and summaries.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    /// A summary setting is out of range.
    #[error("invalid summary option {name}: {reason}")]
    InvalidOption { name: &'static str, reason: String },

    #[error("unknown summary kind: {0}")]
    UnknownSummary(String),
}

impl From<polars::prelude::PolarsError> for QueryError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;
