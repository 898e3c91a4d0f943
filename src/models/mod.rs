pub mod enums;
pub mod panel;

pub use panel::{most_recent, LabPanel};
