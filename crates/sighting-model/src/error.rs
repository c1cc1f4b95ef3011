use thiserror::Error;

/// Errors raised when parsing user-facing labels into model types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown shape category: {0}")]
    UnknownShape(String),
    #[error("unknown duration bucket: {0}")]
    UnknownDurationBucket(String),
    #[error("unknown decade label: {0}")]
    UnknownDecade(String),
    #[error("decade {0} is not configured")]
    DecadeNotConfigured(i32),
    #[error("no pre-threshold bucket is configured (got {0})")]
    PreThresholdNotConfigured(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
