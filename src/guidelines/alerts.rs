use uuid::Uuid;

use crate::models::enums::{AlertSeverity, Parameter};
use crate::models::LabPanel;

use super::messages::MessageTemplates;
use super::thresholds::ReferenceRanges;
use super::types::{Alert, AlertOutcome};

/// Evaluate one panel against the reference ranges.
///
/// Pure function: one panel in, zero or more alerts out, in
/// `Parameter::EVALUATION_ORDER`. Missing measurements are skipped
/// silently; they are an expected state, not an error. `None` panel means
/// no lab was ever recorded and yields the `NoLabData` sentinel so callers
/// can tell "nothing abnormal" from "could not evaluate".
pub fn evaluate_alerts(panel: Option<&LabPanel>, ranges: &ReferenceRanges) -> AlertOutcome {
    let Some(panel) = panel else {
        return AlertOutcome::NoLabData;
    };

    let mut alerts = Vec::new();

    for parameter in Parameter::EVALUATION_ORDER {
        let Some(value) = panel.value(parameter) else {
            continue;
        };
        let Ok(range) = ranges.bounds_for(parameter) else {
            // Override table shipped without this parameter: nothing to
            // evaluate against.
            continue;
        };

        if !range.is_breach(value) {
            continue;
        }

        let severity = if range.is_critical(value) {
            AlertSeverity::Critical
        } else {
            AlertSeverity::Moderate
        };

        // One-sided ranges can only be breached downward; word them as such.
        let message = if range.high.is_none() {
            MessageTemplates::below_range(parameter, value)
        } else {
            MessageTemplates::out_of_range(parameter, value)
        };

        alerts.push(Alert {
            id: Uuid::new_v4(),
            parameter,
            severity,
            category: parameter.category(),
            message,
            value,
            detected_at: chrono::Local::now().naive_local(),
        });
    }

    AlertOutcome::Evaluated(alerts)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use crate::models::enums::AlertCategory;

    use super::*;

    fn empty_panel() -> LabPanel {
        LabPanel::new(
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2026, 3, 2)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
        )
    }

    /// The reference panel from the acceptance checklist: four breaches,
    /// calcium and PTH in range.
    fn reference_panel() -> LabPanel {
        let mut panel = empty_panel();
        panel.hemoglobin = Some(9.5);
        panel.ferritin = Some(180.0);
        panel.tsat = Some(18.0);
        panel.phosphorus = Some(6.2);
        panel.calcium = Some(8.8);
        panel.pth = Some(450.0);
        panel
    }

    #[test]
    fn absent_panel_yields_no_data_sentinel() {
        let outcome = evaluate_alerts(None, &ReferenceRanges::builtin());
        assert!(matches!(outcome, AlertOutcome::NoLabData));
    }

    #[test]
    fn empty_panel_yields_empty_findings_not_sentinel() {
        let panel = empty_panel();
        let outcome = evaluate_alerts(Some(&panel), &ReferenceRanges::builtin());
        match outcome {
            AlertOutcome::Evaluated(alerts) => assert!(alerts.is_empty()),
            AlertOutcome::NoLabData => panic!("present panel must be evaluated"),
        }
    }

    #[test]
    fn reference_panel_fires_exactly_four_alerts_in_order() {
        let panel = reference_panel();
        let outcome = evaluate_alerts(Some(&panel), &ReferenceRanges::builtin());
        let fired: Vec<Parameter> = outcome.alerts().iter().map(|a| a.parameter).collect();
        assert_eq!(
            fired,
            [
                Parameter::Hemoglobin,
                Parameter::Ferritin,
                Parameter::Tsat,
                Parameter::Phosphorus,
            ],
        );
    }

    #[test]
    fn alert_carries_value_category_and_message() {
        let panel = reference_panel();
        let outcome = evaluate_alerts(Some(&panel), &ReferenceRanges::builtin());
        let hb = &outcome.alerts()[0];
        assert_eq!(hb.value, 9.5);
        assert_eq!(hb.category, AlertCategory::Anemia);
        assert_eq!(hb.message, "Hemoglobin out of range: 9.5 g/dL");
        let phos = &outcome.alerts()[3];
        assert_eq!(phos.category, AlertCategory::MineralBone);
    }

    #[test]
    fn boundary_values_fire_nothing() {
        let mut panel = empty_panel();
        panel.phosphorus = Some(5.5);
        panel.calcium = Some(10.2);
        let outcome = evaluate_alerts(Some(&panel), &ReferenceRanges::builtin());
        assert!(outcome.alerts().is_empty());
    }

    #[test]
    fn severity_defaults_moderate_and_escalates_past_critical_bound() {
        let ranges = ReferenceRanges::builtin();

        let mut panel = empty_panel();
        panel.hemoglobin = Some(9.5);
        let outcome = evaluate_alerts(Some(&panel), &ranges);
        assert_eq!(outcome.alerts()[0].severity, AlertSeverity::Moderate);

        panel.hemoglobin = Some(7.5);
        let outcome = evaluate_alerts(Some(&panel), &ranges);
        assert_eq!(outcome.alerts()[0].severity, AlertSeverity::Critical);
    }

    #[test]
    fn one_sided_parameters_use_low_wording() {
        let mut panel = empty_panel();
        panel.ferritin = Some(180.0);
        let outcome = evaluate_alerts(Some(&panel), &ReferenceRanges::builtin());
        assert_eq!(outcome.alerts()[0].message, "Ferritin low: 180 ng/mL");
    }

    #[test]
    fn repeated_evaluation_is_order_stable() {
        let panel = reference_panel();
        let ranges = ReferenceRanges::builtin();
        let first: Vec<String> = evaluate_alerts(Some(&panel), &ranges)
            .alerts()
            .iter()
            .map(|a| a.message.clone())
            .collect();
        let second: Vec<String> = evaluate_alerts(Some(&panel), &ranges)
            .alerts()
            .iter()
            .map(|a| a.message.clone())
            .collect();
        assert_eq!(first, second);
    }
}
