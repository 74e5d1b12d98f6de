//! Data model for the risk assessment dataset.
//!
//! The dataset is fixed: ten assessed features identified "A" through "J",
//! each with a severity level, a probability of occurrence, a combined
//! impact score and a qualitative risk classification.

mod record;
mod table;

pub use record::{RiskLevel, RiskRecord};
pub use table::RiskTable;
