use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures of the upstream farm backend. `Rejected` carries the single
/// message the backend gave for a non-success response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("upstream unavailable: {0}")]
    Unavailable(String),
    #[error("unexpected upstream response: {0}")]
    Decode(String),
}
