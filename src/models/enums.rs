use serde::{Deserialize, Serialize};

use crate::guidelines::GuidelineError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = GuidelineError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(GuidelineError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Parameter {
    Hemoglobin => "hemoglobin",
    Ferritin => "ferritin",
    Tsat => "tsat",
    Phosphorus => "phosphorus",
    Calcium => "calcium",
    Pth => "pth",
});

str_enum!(AlertCategory {
    Anemia => "anemia",
    MineralBone => "mineral_bone",
    VascularAccess => "vascular_access",
    Other => "other",
});

str_enum!(GuidelineDomain {
    Anemia => "anemia",
    BoneMineral => "bone_mineral",
});

/// Whether an erythropoiesis-stimulating agent is currently prescribed.
/// Resolved by the caller from the therapy history; never derived here.
str_enum!(EsaStatus {
    Active => "active",
    Inactive => "inactive",
});

str_enum!(RecommendationKind {
    Guideline => "guideline",
    WithinTarget => "within_target",
    InsufficientData => "insufficient_data",
});

/// Severity determines surfacing behavior downstream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlertSeverity {
    /// Informational: routine follow-ups, never produced by a range breach.
    Informational,
    /// Moderate: value outside the reference range.
    Moderate,
    /// Critical: value beyond the secondary escalation threshold.
    Critical,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Informational => "informational",
            Self::Moderate => "moderate",
            Self::Critical => "critical",
        }
    }
}

impl Parameter {
    /// Fixed evaluation order. Alert output follows this order; it is a
    /// stable contract, not an artifact of iteration.
    pub const EVALUATION_ORDER: [Parameter; 6] = [
        Parameter::Hemoglobin,
        Parameter::Ferritin,
        Parameter::Tsat,
        Parameter::Phosphorus,
        Parameter::Calcium,
        Parameter::Pth,
    ];

    /// Display name used in alert messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hemoglobin => "Hemoglobin",
            Self::Ferritin => "Ferritin",
            Self::Tsat => "TSAT",
            Self::Phosphorus => "Phosphorus",
            Self::Calcium => "Calcium",
            Self::Pth => "PTH",
        }
    }

    /// Measurement unit used in alert messages.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Hemoglobin => "g/dL",
            Self::Ferritin => "ng/mL",
            Self::Tsat => "%",
            Self::Phosphorus => "mg/dL",
            Self::Calcium => "mg/dL",
            Self::Pth => "pg/mL",
        }
    }

    /// Guideline family the parameter belongs to.
    pub fn category(&self) -> AlertCategory {
        match self {
            Self::Hemoglobin | Self::Ferritin | Self::Tsat => AlertCategory::Anemia,
            Self::Phosphorus | Self::Calcium | Self::Pth => AlertCategory::MineralBone,
        }
    }
}
