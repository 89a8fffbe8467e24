//! Single-supplement analysis: section resolution, catalog matching,
//! personalization and the composite score.

pub mod engine;
pub mod matcher;
pub mod personalize;
pub mod resolver;
pub mod score;
pub mod types;

pub use engine::analyze;
pub use personalize::{personalize, validate_profile, UserProfile};
pub use types::{
    AnalysisResult, EnhancerMatch, FoodInteractionReport, FormRanking, InhibitorMatch,
    Recommendation, TimingReport, DEFAULT_GUIDANCE,
};
