//! Scraper gateway: invokes the external yt-dlp tool and normalizes its
//! JSON-lines output into the shared search/video/channel models.
//!
//! Every operation is cache-aware; on a miss the subprocess runs under a
//! hard wall-clock timeout and is killed on expiry.

pub mod command;
pub mod error;
pub mod gateway;
pub mod normalize;

pub use command::{check_ytdlp, SearchKind, YtdlpRequest, YtdlpRunner, YTDLP_BIN};
pub use error::{ScrapeError, ScrapeResult};
pub use gateway::ScraperGateway;
