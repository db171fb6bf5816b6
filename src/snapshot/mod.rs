//! Snapshot storage for the Workforce Report Engine.
//!
//! The snapshot store produces and guards immutable period captures: once a
//! (year, month) period is finalized, its record set never changes.

mod store;

pub use store::{SnapshotStatus, SnapshotStore};
