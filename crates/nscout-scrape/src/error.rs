//! Error types for scraper operations.

use thiserror::Error;

/// Result type for scraper operations.
pub type ScrapeResult<T> = Result<T, ScrapeError>;

/// Errors that can occur while driving the scraping subprocess.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("yt-dlp not found in PATH")]
    ToolNotFound,

    #[error("scraper timed out after {0} seconds")]
    Timeout(u64),

    #[error("scraper failed: {message}")]
    Failed {
        message: String,
        /// Short excerpt of the tool's stderr; logged, never sent to clients.
        stderr: Option<String>,
    },

    #[error("scraper produced no parseable records")]
    Empty,

    #[error("channel unavailable: {0}")]
    ChannelUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    /// Create a failure error with an stderr excerpt.
    pub fn failed(message: impl Into<String>, stderr: Option<String>) -> Self {
        Self::Failed {
            message: message.into(),
            stderr,
        }
    }
}
