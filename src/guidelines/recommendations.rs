use crate::models::enums::{EsaStatus, GuidelineDomain, Parameter};
use crate::models::LabPanel;

use super::messages::MessageTemplates;
use super::thresholds::ReferenceRanges;
use super::types::{Recommendation, RecommendationReport};

fn below(panel: &LabPanel, parameter: Parameter, ranges: &ReferenceRanges) -> bool {
    match (panel.value(parameter), ranges.bounds_for(parameter)) {
        (Some(value), Ok(range)) => range.low.is_some_and(|low| value < low),
        _ => false,
    }
}

fn above(panel: &LabPanel, parameter: Parameter, ranges: &ReferenceRanges) -> bool {
    match (panel.value(parameter), ranges.bounds_for(parameter)) {
        (Some(value), Ok(range)) => range.high.is_some_and(|high| value > high),
        _ => false,
    }
}

/// Anemia management sub-rule, in priority order. The two hemoglobin
/// branches are mutually exclusive; everything else is independently
/// triggerable. A patient without active ESA therapy always gets the
/// initiation line, which counts as a finding for sentinel purposes.
pub fn anemia_recommendations(
    panel: Option<&LabPanel>,
    esa: EsaStatus,
    ranges: &ReferenceRanges,
) -> Vec<Recommendation> {
    let domain = GuidelineDomain::Anemia;
    let Some(panel) = panel else {
        return vec![Recommendation::insufficient_data(
            domain,
            MessageTemplates::ANEMIA_NO_DATA,
        )];
    };

    let mut recs = Vec::new();

    if below(panel, Parameter::Hemoglobin, ranges) {
        recs.push(Recommendation::guideline(domain, MessageTemplates::INCREASE_ESA));
    } else if above(panel, Parameter::Hemoglobin, ranges) {
        recs.push(Recommendation::guideline(domain, MessageTemplates::DECREASE_ESA));
    }

    if below(panel, Parameter::Ferritin, ranges) {
        recs.push(Recommendation::guideline(domain, MessageTemplates::IV_IRON));
    }

    if below(panel, Parameter::Tsat, ranges) {
        recs.push(Recommendation::guideline(domain, MessageTemplates::EVALUATE_IRON));
    }

    if esa == EsaStatus::Inactive {
        recs.push(Recommendation::guideline(domain, MessageTemplates::INITIATE_ESA));
    }

    if recs.is_empty() {
        recs.push(Recommendation::within_target(
            domain,
            MessageTemplates::ANEMIA_IN_TARGET,
        ));
    }
    recs
}

/// Mineral-bone disorder sub-rule. Rules are independently triggerable
/// except the two PTH branches, which test disjoint ranges. Paired lines
/// are always emitted together, never singly.
pub fn bone_mineral_recommendations(
    panel: Option<&LabPanel>,
    ranges: &ReferenceRanges,
) -> Vec<Recommendation> {
    let domain = GuidelineDomain::BoneMineral;
    let Some(panel) = panel else {
        return vec![Recommendation::insufficient_data(
            domain,
            MessageTemplates::BONE_NO_DATA,
        )];
    };

    let mut recs = Vec::new();

    if above(panel, Parameter::Phosphorus, ranges) {
        recs.push(Recommendation::guideline(domain, MessageTemplates::PHOSPHATE_BINDERS));
        recs.push(Recommendation::guideline(domain, MessageTemplates::PHOSPHATE_DIET));
    }

    if above(panel, Parameter::Calcium, ranges) {
        recs.push(Recommendation::guideline(domain, MessageTemplates::CALCIMIMETIC_EVAL));
        recs.push(Recommendation::guideline(domain, MessageTemplates::REDUCE_CALCIUM));
    }

    if above(panel, Parameter::Pth, ranges) {
        recs.push(Recommendation::guideline(domain, MessageTemplates::PTH_HIGH_THERAPY));
    }

    if below(panel, Parameter::Pth, ranges) {
        recs.push(Recommendation::guideline(domain, MessageTemplates::ADYNAMIC_BONE));
        recs.push(Recommendation::guideline(domain, MessageTemplates::ADJUST_VITAMIN_D));
    }

    if recs.is_empty() {
        recs.push(Recommendation::within_target(
            domain,
            MessageTemplates::BONE_IN_TARGET,
        ));
    }
    recs
}

/// Both guideline domains, run independently, never reordered across
/// domains.
pub fn evaluate_recommendations(
    panel: Option<&LabPanel>,
    esa: EsaStatus,
    ranges: &ReferenceRanges,
) -> RecommendationReport {
    RecommendationReport {
        anemia: anemia_recommendations(panel, esa, ranges),
        bone_mineral: bone_mineral_recommendations(panel, ranges),
    }
}
