pub mod alerts;
pub mod engine;
pub mod messages;
pub mod recommendations;
pub mod thresholds;
pub mod types;

pub use alerts::evaluate_alerts;
pub use engine::DefaultGuidelineEngine;
pub use recommendations::{
    anemia_recommendations, bone_mineral_recommendations, evaluate_recommendations,
};
pub use thresholds::{ReferenceRange, ReferenceRanges};
pub use types::{
    Alert, AlertOutcome, EvaluationReport, FindingCounts, GuidelineEngine, GuidelineError,
    Recommendation, RecommendationReport,
};
