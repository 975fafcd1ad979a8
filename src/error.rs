use thiserror::Error;

pub type MarkResult<T> = Result<T, MarkError>;

#[derive(Debug, Error)]
pub enum MarkError {
    #[error("no usable label font: {0}")]
    FontUnavailable(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("painter backend failure: {0}")]
    Backend(String),
}
