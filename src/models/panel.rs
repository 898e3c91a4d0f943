use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Parameter;

/// One patient's lab panel at one point in time.
///
/// A panel is immutable once created; a new measurement event produces a new
/// panel rather than mutating a prior one. Every measurement is
/// independently optional: `None` means "not measured", never zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabPanel {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub recorded_at: NaiveDateTime,
    pub hemoglobin: Option<f64>,
    pub ferritin: Option<f64>,
    pub tsat: Option<f64>,
    pub calcium: Option<f64>,
    pub phosphorus: Option<f64>,
    pub pth: Option<f64>,
    /// Recorded for history but not evaluated by current guideline rules.
    pub hematocrit: Option<f64>,
    pub albumin: Option<f64>,
    pub ktv: Option<f64>,
}

impl LabPanel {
    /// Empty panel for a patient: identity and timestamp, no measurements.
    pub fn new(patient_id: Uuid, recorded_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id,
            recorded_at,
            hemoglobin: None,
            ferritin: None,
            tsat: None,
            calcium: None,
            phosphorus: None,
            pth: None,
            hematocrit: None,
            albumin: None,
            ktv: None,
        }
    }

    /// Value of one evaluated parameter, if it was measured.
    pub fn value(&self, parameter: Parameter) -> Option<f64> {
        match parameter {
            Parameter::Hemoglobin => self.hemoglobin,
            Parameter::Ferritin => self.ferritin,
            Parameter::Tsat => self.tsat,
            Parameter::Phosphorus => self.phosphorus,
            Parameter::Calcium => self.calcium,
            Parameter::Pth => self.pth,
        }
    }

    /// True when none of the evaluated parameters were measured.
    pub fn is_empty(&self) -> bool {
        Parameter::EVALUATION_ORDER
            .iter()
            .all(|p| self.value(*p).is_none())
    }
}

/// Select the panel eligible for evaluation: maximum `recorded_at`, ties
/// broken by later slice position (last inserted wins).
pub fn most_recent(panels: &[LabPanel]) -> Option<&LabPanel> {
    let mut latest: Option<&LabPanel> = None;
    for panel in panels {
        match latest {
            Some(current) if panel.recorded_at < current.recorded_at => {}
            _ => latest = Some(panel),
        }
    }
    latest
}
