use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("fixture '{}': {source}", path.display())]
    Fixture {
        path: PathBuf,
        source: Box<RewriteError>,
    },
    #[error("fixture root must be a JSON array")]
    NotAnArray,
    #[error("record {index}: {reason}")]
    InvalidRecord { index: usize, reason: &'static str },
    #[error("record {index}: payload.{field} is missing")]
    MissingField { index: usize, field: &'static str },
    #[error("record {index}: payload.{field} is not a number")]
    NonNumeric { index: usize, field: &'static str },
    #[error("record {index}: scaled payload.{field} is not finite")]
    OutOfRange { index: usize, field: &'static str },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl RewriteError {
    pub fn in_fixture(self, path: impl Into<PathBuf>) -> Self {
        Self::Fixture {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

pub type RewriteResult<T> = Result<T, RewriteError>;
