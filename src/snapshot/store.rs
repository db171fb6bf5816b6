//! The immutable, period-keyed snapshot arena.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeSnapshotRecord, PeriodState, ReportPeriod};
use crate::registry::EmployeeRegistry;

/// The observable state of one period in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotStatus {
    /// Lifecycle state of the period.
    pub state: PeriodState,
    /// Number of captured records, present only once finalized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_count: Option<usize>,
}

/// Storage entry for a period.
///
/// `Generating` doubles as the period-scoped generation lock: while it is in
/// place, no second generation for the same period can start.
enum PeriodEntry {
    Generating,
    Finalized(Arc<Vec<EmployeeSnapshotRecord>>),
}

/// Produces and guards immutable period captures.
///
/// Writes are only possible through [`SnapshotStore::generate_snapshot`],
/// and only while the target period is absent; a finalized period rejects
/// regeneration at the interface level. Reads of finalized data are
/// lock-free after the initial map lookup because record sets are shared
/// behind `Arc`.
///
/// Generations for different periods run in parallel; a concurrent
/// generation for the same period fails fast with
/// [`EngineError::GenerationInProgress`] rather than queueing.
#[derive(Default)]
pub struct SnapshotStore {
    inner: RwLock<BTreeMap<ReportPeriod, PeriodEntry>>,
}

impl SnapshotStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, BTreeMap<ReportPeriod, PeriodEntry>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, BTreeMap<ReportPeriod, PeriodEntry>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Captures the full employee registry into an immutable snapshot for
    /// `period` and finalizes it.
    ///
    /// The operation is all-or-nothing: if the registry read fails, or
    /// returns no employees, the period reverts to absent and no partial
    /// finalized state is left behind. The store lock is not held across
    /// the registry read, so captures of different periods proceed in
    /// parallel.
    ///
    /// # Errors
    ///
    /// * [`EngineError::PeriodAlreadyFinalized`]: the period is frozen;
    ///   existing records are left untouched.
    /// * [`EngineError::GenerationInProgress`]: another capture for the
    ///   same period is running.
    /// * [`EngineError::RegistryUnavailable`]: the registry read failed or
    ///   produced an empty employee set.
    pub fn generate_snapshot(
        &self,
        registry: &dyn EmployeeRegistry,
        period: ReportPeriod,
    ) -> EngineResult<usize> {
        {
            let mut periods = self.write_guard();
            match periods.get(&period) {
                Some(PeriodEntry::Finalized(_)) => {
                    return Err(EngineError::PeriodAlreadyFinalized {
                        year: period.year(),
                        month: period.month(),
                    });
                }
                Some(PeriodEntry::Generating) => {
                    return Err(EngineError::GenerationInProgress {
                        year: period.year(),
                        month: period.month(),
                    });
                }
                None => {
                    periods.insert(period, PeriodEntry::Generating);
                }
            }
        }

        info!(period = %period, "Capturing employee registry snapshot");

        let employees = match registry.fetch_employees() {
            Ok(employees) => employees,
            Err(err) => {
                warn!(period = %period, error = %err, "Registry read failed, reverting period to absent");
                self.write_guard().remove(&period);
                return Err(err);
            }
        };

        let records: Vec<EmployeeSnapshotRecord> = employees
            .iter()
            .map(|employee| EmployeeSnapshotRecord::capture(employee, period))
            .collect();

        if records.is_empty() {
            warn!(period = %period, "Registry returned no employees, reverting period to absent");
            self.write_guard().remove(&period);
            return Err(EngineError::RegistryUnavailable {
                message: "registry returned no employees to capture".to_string(),
            });
        }

        let count = records.len();
        self.write_guard()
            .insert(period, PeriodEntry::Finalized(Arc::new(records)));

        info!(period = %period, record_count = count, "Snapshot finalized");
        Ok(count)
    }

    /// Returns the state of a period and, if finalized, its record count.
    pub fn status(&self, period: ReportPeriod) -> SnapshotStatus {
        match self.read_guard().get(&period) {
            None => SnapshotStatus {
                state: PeriodState::Absent,
                record_count: None,
            },
            Some(PeriodEntry::Generating) => SnapshotStatus {
                state: PeriodState::Generating,
                record_count: None,
            },
            Some(PeriodEntry::Finalized(records)) => SnapshotStatus {
                state: PeriodState::Finalized,
                record_count: Some(records.len()),
            },
        }
    }

    /// Returns the full immutable record set of a finalized period.
    ///
    /// # Errors
    ///
    /// [`EngineError::SnapshotNotFound`] if the period is absent or still
    /// generating.
    pub fn records(&self, period: ReportPeriod) -> EngineResult<Arc<Vec<EmployeeSnapshotRecord>>> {
        match self.read_guard().get(&period) {
            Some(PeriodEntry::Finalized(records)) => Ok(Arc::clone(records)),
            _ => Err(EngineError::SnapshotNotFound {
                year: period.year(),
                month: period.month(),
            }),
        }
    }
}
