use std::time::Instant;

use crate::models::enums::{EsaStatus, RecommendationKind};
use crate::models::LabPanel;

use super::alerts::evaluate_alerts;
use super::recommendations::evaluate_recommendations;
use super::thresholds::ReferenceRanges;
use super::types::{
    AlertOutcome, EvaluationReport, FindingCounts, GuidelineEngine, Recommendation,
    RecommendationReport,
};

/// Default implementation of the guideline engine.
/// Runs the alert and recommendation evaluators over the caller-supplied
/// most-recent panel and aggregates their output. Holds no state beyond the
/// immutable reference range table, so one engine serves any number of
/// concurrent evaluations.
pub struct DefaultGuidelineEngine {
    ranges: ReferenceRanges,
}

impl DefaultGuidelineEngine {
    pub fn new(ranges: ReferenceRanges) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &ReferenceRanges {
        &self.ranges
    }

    fn count_findings(recs: &[Recommendation]) -> usize {
        recs.iter()
            .filter(|r| r.kind == RecommendationKind::Guideline)
            .count()
    }
}

impl Default for DefaultGuidelineEngine {
    fn default() -> Self {
        Self::new(ReferenceRanges::builtin())
    }
}

impl GuidelineEngine for DefaultGuidelineEngine {
    fn evaluate_alerts(&self, panel: Option<&LabPanel>) -> AlertOutcome {
        evaluate_alerts(panel, &self.ranges)
    }

    fn evaluate_recommendations(
        &self,
        panel: Option<&LabPanel>,
        esa: EsaStatus,
    ) -> RecommendationReport {
        evaluate_recommendations(panel, esa, &self.ranges)
    }

    fn evaluate(&self, panel: Option<&LabPanel>, esa: EsaStatus) -> EvaluationReport {
        let start = Instant::now();

        // The two evaluators share no state; order is immaterial.
        let alerts = evaluate_alerts(panel, &self.ranges);
        let recommendations = evaluate_recommendations(panel, esa, &self.ranges);

        let counts = FindingCounts {
            alerts: alerts.alerts().len(),
            anemia: Self::count_findings(&recommendations.anemia),
            bone_mineral: Self::count_findings(&recommendations.bone_mineral),
        };

        let processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            patient_id = ?panel.map(|p| p.patient_id),
            alerts = counts.alerts,
            anemia = counts.anemia,
            bone_mineral = counts.bone_mineral,
            processing_ms = processing_time_ms,
            "Guideline evaluation complete"
        );

        EvaluationReport {
            alerts,
            recommendations,
            counts,
            processing_time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use crate::guidelines::messages::MessageTemplates;
    use crate::models::enums::Parameter;

    use super::*;

    fn panel_with(values: &[(Parameter, f64)]) -> LabPanel {
        let mut panel = LabPanel::new(
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2026, 3, 2)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
        );
        for (parameter, value) in values {
            match parameter {
                Parameter::Hemoglobin => panel.hemoglobin = Some(*value),
                Parameter::Ferritin => panel.ferritin = Some(*value),
                Parameter::Tsat => panel.tsat = Some(*value),
                Parameter::Phosphorus => panel.phosphorus = Some(*value),
                Parameter::Calcium => panel.calcium = Some(*value),
                Parameter::Pth => panel.pth = Some(*value),
            }
        }
        panel
    }

    #[test]
    fn full_evaluation_counts_findings_not_sentinels() {
        let engine = DefaultGuidelineEngine::default();
        let panel = panel_with(&[
            (Parameter::Hemoglobin, 9.5),
            (Parameter::Ferritin, 180.0),
            (Parameter::Tsat, 18.0),
            (Parameter::Phosphorus, 6.2),
            (Parameter::Calcium, 8.8),
            (Parameter::Pth, 450.0),
        ]);

        let report = engine.evaluate(Some(&panel), EsaStatus::Active);
        assert_eq!(report.counts.alerts, 4);
        assert_eq!(report.counts.anemia, 3);
        assert_eq!(report.counts.bone_mineral, 2);
        assert_eq!(report.counts.total(), 9);
    }

    #[test]
    fn full_evaluation_without_panel() {
        let engine = DefaultGuidelineEngine::default();
        let report = engine.evaluate(None, EsaStatus::Inactive);
        assert!(matches!(report.alerts, AlertOutcome::NoLabData));
        assert_eq!(report.counts.total(), 0);
        assert_eq!(
            report.recommendations.anemia[0].text,
            MessageTemplates::ANEMIA_NO_DATA,
        );
        assert_eq!(
            report.recommendations.bone_mineral[0].text,
            MessageTemplates::BONE_NO_DATA,
        );
    }

    #[test]
    fn in_range_panel_counts_zero_but_reports_sentinels() {
        let engine = DefaultGuidelineEngine::default();
        let panel = panel_with(&[
            (Parameter::Hemoglobin, 11.0),
            (Parameter::Phosphorus, 4.5),
        ]);
        let report = engine.evaluate(Some(&panel), EsaStatus::Active);
        assert_eq!(report.counts.total(), 0);
        assert_eq!(report.recommendations.anemia.len(), 1);
        assert_eq!(
            report.recommendations.anemia[0].kind,
            RecommendationKind::WithinTarget,
        );
    }

    #[test]
    fn report_preserves_evaluator_order() {
        let engine = DefaultGuidelineEngine::default();
        let panel = panel_with(&[
            (Parameter::Phosphorus, 6.8),
            (Parameter::Pth, 750.0),
        ]);
        let report = engine.evaluate(Some(&panel), EsaStatus::Active);
        let bone: Vec<&str> = report
            .recommendations
            .bone_mineral
            .iter()
            .map(|r| r.text.as_str())
            .collect();
        assert_eq!(
            bone,
            [
                MessageTemplates::PHOSPHATE_BINDERS,
                MessageTemplates::PHOSPHATE_DIET,
                MessageTemplates::PTH_HIGH_THERAPY,
            ],
        );
    }

    #[test]
    fn report_serializes_to_json() {
        let engine = DefaultGuidelineEngine::default();
        let panel = panel_with(&[(Parameter::Hemoglobin, 9.5)]);
        let report = engine.evaluate(Some(&panel), EsaStatus::Active);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("Hemoglobin out of range"));
    }
}
