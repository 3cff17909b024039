//! Error types for the trends client.

use thiserror::Error;

pub type TrendsResult<T> = Result<T, TrendsError>;

/// Errors from the trends provider. These stay internal to the client;
/// callers always receive a score.
#[derive(Debug, Error)]
pub enum TrendsError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("provider returned an empty interest series")]
    EmptySeries,
}
