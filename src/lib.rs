//! Nephra: a deterministic clinical alert and recommendation engine for
//! hemodialysis patient monitoring.
//!
//! The caller supplies a patient's most recent [`LabPanel`] (and whether an
//! erythropoiesis-stimulating agent is currently active); the engine derives
//! out-of-range alerts and guideline recommendations across the anemia and
//! mineral-bone-disorder domains. Evaluation is pure and stateless: no
//! storage, no I/O, no ambient context. Fetching the most recent panel and
//! persisting any findings belong to the caller.
//!
//! ```
//! use nephra::guidelines::{DefaultGuidelineEngine, GuidelineEngine};
//! use nephra::models::enums::EsaStatus;
//! use nephra::models::LabPanel;
//!
//! let mut panel = LabPanel::new(
//!     uuid::Uuid::new_v4(),
//!     chrono::NaiveDate::from_ymd_opt(2026, 3, 2)
//!         .unwrap()
//!         .and_hms_opt(8, 30, 0)
//!         .unwrap(),
//! );
//! panel.hemoglobin = Some(9.5);
//!
//! let engine = DefaultGuidelineEngine::default();
//! let report = engine.evaluate(Some(&panel), EsaStatus::Active);
//! assert_eq!(report.counts.alerts, 1);
//! ```

pub mod config;
pub mod guidelines;
pub mod models;

pub use guidelines::{DefaultGuidelineEngine, GuidelineEngine};
pub use models::{most_recent, LabPanel};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries embedding the engine.
/// RUST_LOG wins when set; otherwise the crate-scoped default applies.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
