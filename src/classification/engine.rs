//! Deterministic mapping from raw snapshot fields to the fixed taxonomy.
//!
//! Both functions here are pure: they read nothing but the record passed in
//! and have no side effects, so classifying the same frozen snapshot twice
//! always yields the same result.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeSnapshotRecord;

use super::category::{EmploymentCategory, PayrollStatus};

/// Keyword table mapping normalized type-name fragments to categories.
///
/// Checked in order; the first fragment contained in the raw label wins.
const CATEGORY_KEYWORDS: [(&str, EmploymentCategory); 12] = [
    ("tetap", EmploymentCategory::Tetap),
    ("permanent", EmploymentCategory::Tetap),
    ("pkwt", EmploymentCategory::Pkwt),
    ("kontrak", EmploymentCategory::Pkwt),
    ("contract", EmploymentCategory::Pkwt),
    ("spk", EmploymentCategory::Spk),
    ("thl", EmploymentCategory::Thl),
    ("hju", EmploymentCategory::Hju),
    ("honorer", EmploymentCategory::Hju),
    ("pns dpk", EmploymentCategory::PnsDpk),
    ("pns_dpk", EmploymentCategory::PnsDpk),
    ("pns", EmploymentCategory::PnsDpk),
];

/// Type-name fragments that mark an arrangement as outside payroll.
const NON_PAYROLL_KEYWORDS: [&str; 9] = [
    "outsource",
    "intern",
    "freelance",
    "contractor",
    "magang",
    "harian",
    "thl",
    "hju",
    "spk",
];

/// Both classification dimensions of one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordClassification {
    /// The fine-grained employment category.
    pub category: EmploymentCategory,
    /// The orthogonal payroll dimension.
    pub payroll_status: PayrollStatus,
}

/// Maps a record's raw fields to exactly one [`EmploymentCategory`].
///
/// The raw type label is matched against the fixed keyword table; if no
/// fragment matches, a record carrying a contract end date is treated as
/// fixed-term (PKWT). Anything else is a data-quality failure and raises
/// [`EngineError::UnclassifiableRecord`]. The engine never defaults a
/// category, since a silently mislabeled employee would corrupt an
/// audit-grade figure.
///
/// # Example
///
/// ```
/// use workforce_engine::classification::{EmploymentCategory, classify_employment_category};
/// use workforce_engine::models::{EmployeeSnapshotRecord, Gender, RegistryEmployee, ReportPeriod};
///
/// let employee = RegistryEmployee {
///     id: "emp_001".to_string(),
///     name: "Budi".to_string(),
///     unit: "IT".to_string(),
///     gender: Gender::Male,
///     employment_type_name: "Karyawan Tetap".to_string(),
///     contract_end_date: None,
///     active: true,
/// };
/// let period = ReportPeriod::new(2025, 1).unwrap();
/// let record = EmployeeSnapshotRecord::capture(&employee, period);
///
/// let category = classify_employment_category(&record).unwrap();
/// assert_eq!(category, EmploymentCategory::Tetap);
/// ```
pub fn classify_employment_category(
    record: &EmployeeSnapshotRecord,
) -> EngineResult<EmploymentCategory> {
    let label = record.employment_type_name.to_lowercase();

    for (keyword, category) in CATEGORY_KEYWORDS {
        if label.contains(keyword) {
            return Ok(category);
        }
    }

    // A contract end date with no recognizable label still implies a
    // fixed-term arrangement.
    if record.contract_end_date.is_some() {
        return Ok(EmploymentCategory::Pkwt);
    }

    Err(EngineError::UnclassifiableRecord {
        employee_id: record.employee_id.clone(),
        status: record.employment_type_name.clone(),
    })
}

/// Maps a record's raw fields to its [`PayrollStatus`].
///
/// Total function: a label containing any non-payroll marker (outsourcing
/// and casual arrangements, or the THL/HJU/SPK statuses) is Non-Payroll;
/// everything else runs through payroll.
pub fn classify_payroll_status(record: &EmployeeSnapshotRecord) -> PayrollStatus {
    let label = record.employment_type_name.to_lowercase();

    for keyword in NON_PAYROLL_KEYWORDS {
        if label.contains(keyword) {
            return PayrollStatus::NonPayroll;
        }
    }

    PayrollStatus::Payroll
}

/// Classifies both dimensions of a record in one call.
pub fn classify_record(record: &EmployeeSnapshotRecord) -> EngineResult<RecordClassification> {
    Ok(RecordClassification {
        category: classify_employment_category(record)?,
        payroll_status: classify_payroll_status(record),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, RegistryEmployee, ReportPeriod};
    use chrono::NaiveDate;

    fn record_with(type_name: &str, contract_end: Option<NaiveDate>) -> EmployeeSnapshotRecord {
        let employee = RegistryEmployee {
            id: "emp_test".to_string(),
            name: "Test Employee".to_string(),
            unit: "IT".to_string(),
            gender: Gender::Male,
            employment_type_name: type_name.to_string(),
            contract_end_date: contract_end,
            active: true,
        };
        EmployeeSnapshotRecord::capture(&employee, ReportPeriod::new(2025, 1).unwrap())
    }

    #[test]
    fn test_classify_tetap_from_indonesian_label() {
        let record = record_with("Karyawan Tetap", None);
        assert_eq!(
            classify_employment_category(&record).unwrap(),
            EmploymentCategory::Tetap
        );
    }

    #[test]
    fn test_classify_tetap_from_english_label() {
        let record = record_with("Permanent Staff", None);
        assert_eq!(
            classify_employment_category(&record).unwrap(),
            EmploymentCategory::Tetap
        );
    }

    #[test]
    fn test_classify_pkwt_variants() {
        for label in ["PKWT", "Karyawan Kontrak", "Contract Worker"] {
            let record = record_with(label, None);
            assert_eq!(
                classify_employment_category(&record).unwrap(),
                EmploymentCategory::Pkwt,
                "label '{}' should classify as PKWT",
                label
            );
        }
    }

    #[test]
    fn test_classify_spk_thl_hju() {
        assert_eq!(
            classify_employment_category(&record_with("SPK", None)).unwrap(),
            EmploymentCategory::Spk
        );
        assert_eq!(
            classify_employment_category(&record_with("THL", None)).unwrap(),
            EmploymentCategory::Thl
        );
        assert_eq!(
            classify_employment_category(&record_with("HJU", None)).unwrap(),
            EmploymentCategory::Hju
        );
        assert_eq!(
            classify_employment_category(&record_with("Honorer", None)).unwrap(),
            EmploymentCategory::Hju
        );
    }

    #[test]
    fn test_classify_pns_dpk_variants() {
        for label in ["PNS DPK", "pns_dpk", "PNS Diperbantukan"] {
            let record = record_with(label, None);
            assert_eq!(
                classify_employment_category(&record).unwrap(),
                EmploymentCategory::PnsDpk,
                "label '{}' should classify as PNS DPK",
                label
            );
        }
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        let record = record_with("KARYAWAN TETAP", None);
        assert_eq!(
            classify_employment_category(&record).unwrap(),
            EmploymentCategory::Tetap
        );
    }

    #[test]
    fn test_contract_end_date_falls_back_to_pkwt() {
        let record = record_with("Staf Proyek", NaiveDate::from_ymd_opt(2025, 12, 31));
        assert_eq!(
            classify_employment_category(&record).unwrap(),
            EmploymentCategory::Pkwt
        );
    }

    #[test]
    fn test_unrecognized_label_without_contract_is_an_error() {
        let record = record_with("Staf Proyek", None);
        match classify_employment_category(&record) {
            Err(EngineError::UnclassifiableRecord {
                employee_id,
                status,
            }) => {
                assert_eq!(employee_id, "emp_test");
                assert_eq!(status, "Staf Proyek");
            }
            other => panic!("Expected UnclassifiableRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_label_without_contract_is_an_error() {
        let record = record_with("", None);
        assert!(classify_employment_category(&record).is_err());
    }

    #[test]
    fn test_payroll_status_for_regular_staff() {
        assert_eq!(
            classify_payroll_status(&record_with("Karyawan Tetap", None)),
            PayrollStatus::Payroll
        );
        assert_eq!(
            classify_payroll_status(&record_with("PKWT", None)),
            PayrollStatus::Payroll
        );
    }

    #[test]
    fn test_payroll_status_for_outsourced_arrangements() {
        for label in [
            "Outsource Security",
            "Intern",
            "Freelance Designer",
            "Contractor",
            "Magang",
            "Tenaga Harian",
        ] {
            assert_eq!(
                classify_payroll_status(&record_with(label, None)),
                PayrollStatus::NonPayroll,
                "label '{}' should be non-payroll",
                label
            );
        }
    }

    #[test]
    fn test_payroll_status_for_special_statuses() {
        for label in ["THL", "HJU", "SPK"] {
            assert_eq!(
                classify_payroll_status(&record_with(label, None)),
                PayrollStatus::NonPayroll,
                "status '{}' should be non-payroll",
                label
            );
        }
    }

    #[test]
    fn test_classify_record_returns_both_dimensions() {
        let classification = classify_record(&record_with("HJU", None)).unwrap();
        assert_eq!(classification.category, EmploymentCategory::Hju);
        assert_eq!(classification.payroll_status, PayrollStatus::NonPayroll);
    }

    #[test]
    fn test_classify_record_propagates_unclassifiable() {
        assert!(classify_record(&record_with("???", None)).is_err());
    }

    #[test]
    fn test_classification_is_deterministic() {
        let record = record_with("Karyawan Tetap", None);
        let first = classify_record(&record).unwrap();
        let second = classify_record(&record).unwrap();
        assert_eq!(first, second);
    }
}
