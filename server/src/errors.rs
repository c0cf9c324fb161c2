use thiserror::Error;
use uuid::Uuid;
use warp::reject;

/// Enumerates high-level errors returned by this library.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Represents a request for a film that does not exist.
    #[error("film {0} not found")]
    NotFound(Uuid),

    /// Represents a path parameter that could not be parsed as an ID.
    #[error("invalid film ID: {0}")]
    InvalidId(String),
}

impl reject::Reject for BackendError {}
