// Errors raised while interpreting a benchmark log.

use thiserror::Error;

pub type Result<T, E = LogError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("malformed header: {0}")]
    MalformedHeader(String),
    #[error("unknown benchmark family: {0}")]
    UnknownFamily(String),
    #[error("record pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl LogError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedHeader(msg.into())
    }
}
