//! Application state for the Workforce Report Engine API.

use std::sync::Arc;

use crate::registry::EmployeeRegistry;
use crate::report::ChartRenderer;
use crate::snapshot::SnapshotStore;

/// Shared application state passed to all handlers.
///
/// All members are reference counted so the state can be cloned cheaply
/// for each request.
#[derive(Clone)]
pub struct AppState {
    store: Arc<SnapshotStore>,
    registry: Arc<dyn EmployeeRegistry>,
    charts: Arc<dyn ChartRenderer>,
}

impl AppState {
    /// Creates new application state from the engine's resources.
    pub fn new(
        store: Arc<SnapshotStore>,
        registry: Arc<dyn EmployeeRegistry>,
        charts: Arc<dyn ChartRenderer>,
    ) -> Self {
        Self {
            store,
            registry,
            charts,
        }
    }

    /// Returns the snapshot store.
    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Returns the employee registry.
    pub fn registry(&self) -> &dyn EmployeeRegistry {
        self.registry.as_ref()
    }

    /// Returns the chart renderer.
    pub fn charts(&self) -> &dyn ChartRenderer {
        self.charts.as_ref()
    }
}
