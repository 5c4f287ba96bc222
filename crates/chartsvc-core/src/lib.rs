//! Core domain models for the chart catalog service.
//!
//! This crate contains the data structures describing charts, chart
//! versions, chart repositories, and the per-version file bundles produced
//! by the ingestion pipeline. Everything here is read-only from the
//! service's perspective; records are created and updated externally.

pub mod chart;
pub mod files;

// Re-exports for convenience
pub use chart::{Chart, ChartVersion, Maintainer, Repo};
pub use files::{ChartFiles, ValueFile, DEFAULT_VALUES_NAME};
