//! Niche analysis core.
//!
//! Composes the scraper gateway, trends client, and shared cache into the
//! analysis pipeline: CPM estimation, content-type classification, the
//! two-mode niche scorer, the two-phase recommendation engine, rising-star
//! discovery, and competitor saturation analysis.

pub mod competitors;
pub mod content_type;
pub mod cpm;
pub mod discovery;
pub mod error;
pub mod recommend;
pub mod scorer;

pub use competitors::{CompetitorAnalyzer, CompetitorReport};
pub use content_type::{ContentTypeAnalyzer, VideoSample};
pub use cpm::{CpmEstimator, CpmOptions};
pub use discovery::{DiscoveryAnalysis, RisingStarFinder, RisingStarsReport};
pub use error::{EngineError, EngineResult};
pub use recommend::{Confidence, Recommendation, RecommendationEngine};
pub use scorer::{NicheMetrics, NicheScorer};
