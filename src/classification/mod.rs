//! Classification logic for the Workforce Report Engine.
//!
//! This module owns the fixed employment taxonomy and the pure functions
//! that map a snapshot record's raw fields onto it. The taxonomy is closed:
//! adding a category is a schema change, never runtime configuration.

mod category;
mod engine;

pub use category::{EmploymentCategory, PayrollStatus};
pub use engine::{
    RecordClassification, classify_employment_category, classify_payroll_status, classify_record,
};
