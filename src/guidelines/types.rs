use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::enums::{
    AlertCategory, AlertSeverity, EsaStatus, GuidelineDomain, Parameter, RecommendationKind,
};
use crate::models::LabPanel;

// ---------------------------------------------------------------------------
// Alert
// ---------------------------------------------------------------------------

/// An out-of-range finding derived from one lab panel.
/// Transient: persistence, if any, belongs to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: Uuid,
    pub parameter: Parameter,
    pub severity: AlertSeverity,
    pub category: AlertCategory,
    pub message: String,
    /// The measured value that breached the range.
    pub value: f64,
    pub detected_at: NaiveDateTime,
}

/// Outcome of the alert pass.
///
/// "Evaluated, nothing abnormal" and "could not evaluate" are different
/// states; the enum keeps callers from conflating them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AlertOutcome {
    /// No lab panel has ever been recorded for the patient.
    NoLabData,
    /// The panel was evaluated; the list may be empty.
    Evaluated(Vec<Alert>),
}

impl AlertOutcome {
    pub fn alerts(&self) -> &[Alert] {
        match self {
            Self::NoLabData => &[],
            Self::Evaluated(alerts) => alerts,
        }
    }
}

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

/// Advisory guidance derived from one guideline rule. Never an order and
/// never references dosing directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub domain: GuidelineDomain,
    pub kind: RecommendationKind,
    pub text: String,
}

impl Recommendation {
    pub fn guideline(domain: GuidelineDomain, text: impl Into<String>) -> Self {
        Self {
            domain,
            kind: RecommendationKind::Guideline,
            text: text.into(),
        }
    }

    pub fn within_target(domain: GuidelineDomain, text: impl Into<String>) -> Self {
        Self {
            domain,
            kind: RecommendationKind::WithinTarget,
            text: text.into(),
        }
    }

    pub fn insufficient_data(domain: GuidelineDomain, text: impl Into<String>) -> Self {
        Self {
            domain,
            kind: RecommendationKind::InsufficientData,
            text: text.into(),
        }
    }
}

/// Recommendation output, one list per guideline domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub anemia: Vec<Recommendation>,
    pub bone_mineral: Vec<Recommendation>,
}

// ---------------------------------------------------------------------------
// EvaluationReport & FindingCounts
// ---------------------------------------------------------------------------

/// Counts of guideline findings. Sentinels (within-target,
/// insufficient-data) are not findings and are not counted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FindingCounts {
    pub alerts: usize,
    pub anemia: usize,
    pub bone_mineral: usize,
}

impl FindingCounts {
    pub fn total(&self) -> usize {
        self.alerts + self.anemia + self.bone_mineral
    }
}

/// Aggregated result of one full evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub alerts: AlertOutcome,
    pub recommendations: RecommendationReport,
    pub counts: FindingCounts,
    pub processing_time_ms: u64,
}

// ---------------------------------------------------------------------------
// GuidelineError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum GuidelineError {
    #[error("No reference range configured for parameter: {0}")]
    UnknownParameter(String),

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Reference range load failed ({0}): {1}")]
    ThresholdLoad(String, String),

    #[error("Reference range parse failed ({0}): {1}")]
    ThresholdParse(String, String),
}

// ---------------------------------------------------------------------------
// GuidelineEngine trait
// ---------------------------------------------------------------------------

/// The guideline evaluation seam. Every method is a pure function of its
/// arguments plus the engine's immutable reference ranges.
pub trait GuidelineEngine {
    /// Out-of-range alerts for the patient's most recent panel.
    fn evaluate_alerts(&self, panel: Option<&LabPanel>) -> AlertOutcome;

    /// Guideline recommendations across both domains.
    fn evaluate_recommendations(
        &self,
        panel: Option<&LabPanel>,
        esa: EsaStatus,
    ) -> RecommendationReport;

    /// Both evaluators plus aggregation into one report.
    fn evaluate(&self, panel: Option<&LabPanel>, esa: EsaStatus) -> EvaluationReport;
}
