//! Employee registry access for the Workforce Report Engine.
//!
//! The live employee registry is an external collaborator: the engine reads
//! the full current employee set from it during snapshot generation and
//! never writes back. The [`EmployeeRegistry`] trait is the seam; the
//! YAML-backed implementation stands in for the HR system of record.

mod loader;

use crate::error::EngineResult;
use crate::models::RegistryEmployee;

pub use loader::YamlEmployeeRegistry;

/// Read access to the live employee registry.
///
/// Implementations must return the complete current employee set on every
/// call; the snapshot store captures whatever this returns at generation
/// time. Failures surface as [`crate::error::EngineError::RegistryUnavailable`].
pub trait EmployeeRegistry: Send + Sync {
    /// Fetches the full current set of employee records.
    fn fetch_employees(&self) -> EngineResult<Vec<RegistryEmployee>>;
}

/// A registry backed by a fixed in-memory employee list.
///
/// Useful for seeding demos and exercising the engine deterministically in
/// tests; the snapshot pipeline does not distinguish it from a live source.
#[derive(Debug, Clone, Default)]
pub struct FixedRegistry {
    employees: Vec<RegistryEmployee>,
}

impl FixedRegistry {
    /// Creates a registry that always returns the given employees.
    pub fn new(employees: Vec<RegistryEmployee>) -> Self {
        Self { employees }
    }
}

impl EmployeeRegistry for FixedRegistry {
    fn fetch_employees(&self) -> EngineResult<Vec<RegistryEmployee>> {
        Ok(self.employees.clone())
    }
}
