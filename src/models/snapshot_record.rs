//! Immutable snapshot record model.
//!
//! One record is captured per (period, employee) pair at snapshot generation
//! time. After the period is finalized the record never changes, even if the
//! live registry does.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::employee::{Gender, RegistryEmployee};
use super::period::ReportPeriod;

/// A point-in-time copy of one employee's reportable state.
///
/// The record carries the raw fields the classification engine needs rather
/// than pre-computed categories, so that a period can always be re-derived
/// from its frozen inputs. `employee_id` is kept only as a weak traceability
/// reference back to the registry; it is never followed after capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSnapshotRecord {
    /// The period that owns this record.
    pub period: ReportPeriod,
    /// Registry identifier of the employee (traceability only).
    pub employee_id: String,
    /// Employee display name at capture time.
    pub employee_name: String,
    /// Organizational unit at capture time.
    pub unit: String,
    /// Gender at capture time.
    pub gender: Gender,
    /// Raw employment type label at capture time.
    pub employment_type_name: String,
    /// Contract end date at capture time, if any.
    pub contract_end_date: Option<NaiveDate>,
    /// Whether the employee was active at capture time.
    pub is_active: bool,
}

impl EmployeeSnapshotRecord {
    /// Captures a registry employee into a record owned by `period`.
    pub fn capture(employee: &RegistryEmployee, period: ReportPeriod) -> Self {
        Self {
            period,
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            unit: employee.unit.clone(),
            gender: employee.gender,
            employment_type_name: employee.employment_type_name.clone(),
            contract_end_date: employee.contract_end_date,
            is_active: employee.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_employee() -> RegistryEmployee {
        RegistryEmployee {
            id: "emp_010".to_string(),
            name: "Dewi Lestari".to_string(),
            unit: "IT".to_string(),
            gender: Gender::Female,
            employment_type_name: "PKWT".to_string(),
            contract_end_date: NaiveDate::from_ymd_opt(2026, 6, 30),
            active: true,
        }
    }

    #[test]
    fn test_capture_copies_all_reportable_fields() {
        let period = ReportPeriod::new(2025, 1).unwrap();
        let employee = sample_employee();

        let record = EmployeeSnapshotRecord::capture(&employee, period);

        assert_eq!(record.period, period);
        assert_eq!(record.employee_id, "emp_010");
        assert_eq!(record.employee_name, "Dewi Lestari");
        assert_eq!(record.unit, "IT");
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.employment_type_name, "PKWT");
        assert_eq!(
            record.contract_end_date,
            NaiveDate::from_ymd_opt(2026, 6, 30)
        );
        assert!(record.is_active);
    }

    #[test]
    fn test_capture_preserves_inactive_flag() {
        let period = ReportPeriod::new(2025, 1).unwrap();
        let mut employee = sample_employee();
        employee.active = false;

        let record = EmployeeSnapshotRecord::capture(&employee, period);
        assert!(!record.is_active);
    }

    #[test]
    fn test_record_serde_round_trip() {
        let period = ReportPeriod::new(2025, 2).unwrap();
        let record = EmployeeSnapshotRecord::capture(&sample_employee(), period);

        let json = serde_json::to_string(&record).unwrap();
        let back: EmployeeSnapshotRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
