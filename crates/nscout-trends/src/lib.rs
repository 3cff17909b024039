//! Trends service HTTP client.
//!
//! Wraps the external trend-popularity provider behind a minimum inter-call
//! interval and the shared cache. Provider failures never surface: the score
//! degrades to a keyword-table heuristic with injectable jitter.

pub mod client;
pub mod error;
pub mod fallback;
pub mod types;

pub use client::{TrendsClient, TrendsClientConfig};
pub use error::{TrendsError, TrendsResult};
pub use fallback::FallbackScorer;
pub use types::{InterestPoint, InterestSeries};
