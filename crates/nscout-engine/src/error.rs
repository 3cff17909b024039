//! Error types for the analysis core.

use nscout_scrape::ScrapeError;
use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Errors from the analysis pipeline.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no search results for the niche")]
    NoResults,

    #[error(transparent)]
    Scrape(#[from] ScrapeError),
}
