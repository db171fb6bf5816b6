//! Core data models for the Workforce Report Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod period;
mod snapshot_record;

pub use employee::{Gender, RegistryEmployee};
pub use period::{PeriodState, ReportPeriod, month_name, month_name_short};
pub use snapshot_record::EmployeeSnapshotRecord;
