//! Registry employee model and related types.
//!
//! This module defines the shape of employee records as read from the live
//! employee registry. The engine never writes to the registry; these records
//! exist only long enough to be captured into a snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gender of an employee as recorded in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Unspecified or other.
    Other,
}

/// One employee record as returned by the registry collaborator.
///
/// The `employment_type_name` field is free text maintained by HR (e.g.
/// "Karyawan Tetap", "PKWT", "Outsource Security"); the classification
/// engine maps it onto the fixed taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryEmployee {
    /// Unique identifier in the registry.
    pub id: String,
    /// Display name of the employee.
    pub name: String,
    /// Organizational unit (department) the employee belongs to.
    pub unit: String,
    /// Gender as recorded in the registry.
    pub gender: Gender,
    /// Raw employment type label maintained by HR.
    pub employment_type_name: String,
    /// End date of a fixed-term contract, if any.
    #[serde(default)]
    pub contract_end_date: Option<NaiveDate>,
    /// Whether the employee is active at read time.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}
