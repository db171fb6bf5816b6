//! Workforce Report Engine
//!
//! This crate produces the official workforce structural report from immutable
//! monthly snapshots of the employee registry. Snapshots are frozen per
//! (year, month) period, classified against a fixed employment taxonomy,
//! aggregated per organizational unit, and reconciled before any report
//! package is handed to a renderer.

#![warn(missing_docs)]

pub mod api;
pub mod classification;
pub mod error;
pub mod models;
pub mod registry;
pub mod report;
pub mod snapshot;
