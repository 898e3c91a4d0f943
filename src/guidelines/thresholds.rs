use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::enums::Parameter;

use super::types::GuidelineError;

/// Reference range for one parameter. `low`/`high` are inclusive of the
/// normal range: a breach is strictly beyond a bound. The `critical_*`
/// bounds only escalate severity; they never change whether a rule fires.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReferenceRange {
    pub low: Option<f64>,
    pub high: Option<f64>,
    pub critical_low: Option<f64>,
    pub critical_high: Option<f64>,
}

impl ReferenceRange {
    /// True when the value lies strictly outside [low, high].
    pub fn is_breach(&self, value: f64) -> bool {
        self.low.is_some_and(|low| value < low) || self.high.is_some_and(|high| value > high)
    }

    /// True when the value also crosses a critical escalation bound.
    pub fn is_critical(&self, value: f64) -> bool {
        self.critical_low.is_some_and(|low| value < low)
            || self.critical_high.is_some_and(|high| value > high)
    }
}

/// Process-wide, read-only reference range table. Bounds never change at
/// runtime; a change is a configuration update, not a state mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceRanges {
    ranges: BTreeMap<String, ReferenceRange>,
}

impl ReferenceRanges {
    /// Canonical KDIGO-aligned table for hemodialysis monitoring.
    /// low/high bounds encode the clinical intent and must not drift.
    pub fn builtin() -> Self {
        let entries = [
            (Parameter::Hemoglobin, Some(10.0), Some(12.0), Some(8.0), Some(13.0)),
            (Parameter::Ferritin, Some(200.0), None, Some(100.0), None),
            (Parameter::Tsat, Some(20.0), None, None, None),
            (Parameter::Phosphorus, Some(3.5), Some(5.5), None, Some(7.0)),
            (Parameter::Calcium, Some(8.4), Some(10.2), Some(7.5), Some(11.0)),
            (Parameter::Pth, Some(150.0), Some(600.0), None, Some(1000.0)),
        ];

        let ranges = entries
            .into_iter()
            .map(|(parameter, low, high, critical_low, critical_high)| {
                (
                    parameter.as_str().to_string(),
                    ReferenceRange {
                        low,
                        high,
                        critical_low,
                        critical_high,
                    },
                )
            })
            .collect();

        Self { ranges }
    }

    /// Load an override table from a JSON file. Deployments that pin their
    /// own ranges use this; everyone else uses `builtin`.
    pub fn load(path: &std::path::Path) -> Result<Self, GuidelineError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            GuidelineError::ThresholdLoad(path.display().to_string(), e.to_string())
        })?;
        let ranges: BTreeMap<String, ReferenceRange> =
            serde_json::from_str(&json).map_err(|e| {
                GuidelineError::ThresholdParse(path.display().to_string(), e.to_string())
            })?;
        Ok(Self { ranges })
    }

    /// Pure lookup of the range configured for a parameter.
    pub fn bounds_for(&self, parameter: Parameter) -> Result<&ReferenceRange, GuidelineError> {
        self.ranges
            .get(parameter.as_str())
            .ok_or_else(|| GuidelineError::UnknownParameter(parameter.as_str().to_string()))
    }
}

impl Default for ReferenceRanges {
    fn default() -> Self {
        Self::builtin()
    }
}
