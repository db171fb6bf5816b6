//! YAML-backed employee registry.
//!
//! This implementation reads the employee set from a YAML file on every
//! fetch, so snapshot generation always captures the file's current
//! contents. The file plays the role of the live HR registry.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};
use crate::models::RegistryEmployee;

use super::EmployeeRegistry;

/// On-disk shape of the registry file.
#[derive(Debug, Deserialize)]
struct RegistryFile {
    employees: Vec<RegistryEmployee>,
}

/// An [`EmployeeRegistry`] reading from a YAML file.
///
/// # File format
///
/// ```text
/// employees:
///   - id: emp_001
///     name: Budi Santoso
///     unit: IT
///     gender: male
///     employment_type_name: Karyawan Tetap
///   - id: emp_002
///     name: Siti Rahayu
///     unit: HR
///     gender: female
///     employment_type_name: PKWT
///     contract_end_date: 2026-06-30
/// ```
///
/// # Example
///
/// ```no_run
/// use workforce_engine::registry::{EmployeeRegistry, YamlEmployeeRegistry};
///
/// let registry = YamlEmployeeRegistry::new("./config/registry/employees.yaml");
/// let employees = registry.fetch_employees()?;
/// println!("registry holds {} employees", employees.len());
/// # Ok::<(), workforce_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct YamlEmployeeRegistry {
    path: PathBuf,
}

impl YamlEmployeeRegistry {
    /// Creates a registry reading from the given YAML file.
    ///
    /// The file is not touched until the first fetch, mirroring a remote
    /// registry that is only contacted at capture time.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl EmployeeRegistry for YamlEmployeeRegistry {
    fn fetch_employees(&self) -> EngineResult<Vec<RegistryEmployee>> {
        let path_str = self.path.display().to_string();

        let content = fs::read_to_string(&self.path).map_err(|e| {
            EngineError::RegistryUnavailable {
                message: format!("failed to read '{}': {}", path_str, e),
            }
        })?;

        let file: RegistryFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::RegistryUnavailable {
                message: format!("failed to parse '{}': {}", path_str, e),
            })?;

        Ok(file.employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use std::io::Write;

    fn write_temp_registry(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("workforce_registry_{}.yaml", name));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_fetch_parses_employee_list() {
        let path = write_temp_registry(
            "valid",
            r#"
employees:
  - id: emp_001
    name: Budi Santoso
    unit: IT
    gender: male
    employment_type_name: Karyawan Tetap
  - id: emp_002
    name: Siti Rahayu
    unit: HR
    gender: female
    employment_type_name: PKWT
    contract_end_date: 2026-06-30
"#,
        );

        let registry = YamlEmployeeRegistry::new(&path);
        let employees = registry.fetch_employees().unwrap();

        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].id, "emp_001");
        assert_eq!(employees[0].gender, Gender::Male);
        assert_eq!(employees[1].unit, "HR");
        assert!(employees[1].contract_end_date.is_some());

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_registry_unavailable() {
        let registry = YamlEmployeeRegistry::new("/nonexistent/employees.yaml");
        match registry.fetch_employees() {
            Err(EngineError::RegistryUnavailable { message }) => {
                assert!(message.contains("/nonexistent/employees.yaml"));
            }
            other => panic!("Expected RegistryUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_yaml_is_registry_unavailable() {
        let path = write_temp_registry("malformed", "employees: [not, a, record]");

        let registry = YamlEmployeeRegistry::new(&path);
        assert!(matches!(
            registry.fetch_employees(),
            Err(EngineError::RegistryUnavailable { .. })
        ));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_fetch_rereads_file_each_call() {
        let path = write_temp_registry(
            "reread",
            r#"
employees:
  - id: emp_001
    name: Budi Santoso
    unit: IT
    gender: male
    employment_type_name: Karyawan Tetap
"#,
        );

        let registry = YamlEmployeeRegistry::new(&path);
        assert_eq!(registry.fetch_employees().unwrap().len(), 1);

        fs::write(
            &path,
            r#"
employees:
  - id: emp_001
    name: Budi Santoso
    unit: IT
    gender: male
    employment_type_name: Karyawan Tetap
  - id: emp_002
    name: Siti Rahayu
    unit: HR
    gender: female
    employment_type_name: PKWT
"#,
        )
        .unwrap();

        assert_eq!(registry.fetch_employees().unwrap().len(), 2);

        fs::remove_file(path).ok();
    }
}
