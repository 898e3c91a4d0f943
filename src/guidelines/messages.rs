use crate::models::enums::Parameter;

/// Message template builder. Every user-facing string the engine produces
/// lives here so clinics see consistent wording across alerts and
/// recommendations. Advisory framing throughout: guidance, never orders.
pub struct MessageTemplates;

impl MessageTemplates {
    /// Alert for a two-sided range breach.
    pub fn out_of_range(parameter: Parameter, value: f64) -> String {
        format!(
            "{} out of range: {} {}",
            parameter.label(),
            value,
            parameter.unit(),
        )
    }

    /// Alert for a one-sided (lower bound only) breach.
    pub fn below_range(parameter: Parameter, value: f64) -> String {
        format!(
            "{} low: {} {}",
            parameter.label(),
            value,
            parameter.unit(),
        )
    }

    // -- Anemia recommendations --------------------------------------------

    pub const INCREASE_ESA: &'static str =
        "Increase erythropoiesis-stimulating agent dose to raise hemoglobin";
    pub const DECREASE_ESA: &'static str =
        "Decrease erythropoiesis-stimulating agent dose to lower hemoglobin";
    pub const IV_IRON: &'static str = "Supplement intravenous iron";
    pub const EVALUATE_IRON: &'static str = "Evaluate additional iron supplementation";
    pub const INITIATE_ESA: &'static str =
        "Consider initiating erythropoiesis-stimulating therapy";
    pub const ANEMIA_IN_TARGET: &'static str = "Anemia parameters within target range";
    pub const ANEMIA_NO_DATA: &'static str = "Insufficient data for anemia recommendations";

    // -- Mineral-bone recommendations --------------------------------------

    pub const PHOSPHATE_BINDERS: &'static str = "Initiate or adjust phosphate binders";
    pub const PHOSPHATE_DIET: &'static str =
        "Reinforce dietary phosphate-restriction education";
    pub const CALCIMIMETIC_EVAL: &'static str = "Evaluate calcimimetic therapy";
    pub const REDUCE_CALCIUM: &'static str =
        "Consider reducing or discontinuing calcium supplements";
    pub const PTH_HIGH_THERAPY: &'static str =
        "Consider calcimimetic or active vitamin D therapy";
    pub const ADYNAMIC_BONE: &'static str = "Evaluate for adynamic bone disease";
    pub const ADJUST_VITAMIN_D: &'static str = "Consider adjusting vitamin D therapy";
    pub const BONE_IN_TARGET: &'static str = "Mineral-bone parameters within target range";
    pub const BONE_NO_DATA: &'static str =
        "Insufficient data for mineral-bone recommendations";
}
