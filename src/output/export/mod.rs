//! Export of simulation results.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module.
//!
//! # Available formats
//!
//! | Format  | Module   |
//! |---------|----------|
//! | CSV     | [`csv`]  |
//!
//! # Usage example
//!
//! ```rust
//! use heat_rs::grid::Grid;
//! use heat_rs::output::export::{CsvExporter, Exporter};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("grid.csv");
//!
//! CsvExporter::default().export_grid(&Grid::zeros(3).unwrap(), &path).unwrap();
//! assert!(path.exists());
//! ```

pub mod csv;

pub use csv::{CsvConfig, CsvExporter, export_grid_csv, export_snapshots_csv};

use std::path::Path;

use crate::error::Result;
use crate::grid::Grid;
use crate::stepper::SimulationResult;

/// Abstraction over export formats
///
/// Implementations write long-format data: one line per grid cell, keyed by
/// `(row, column)` and, for snapshot series, by step.
pub trait Exporter {
    /// Write a single grid.
    ///
    /// # Errors
    ///
    /// - the path is invalid or the directory does not exist
    /// - the grid holds NaN or Inf
    fn export_grid(&self, grid: &Grid, path: &Path) -> Result<()>;

    /// Write every snapshot of a run, in step order.
    ///
    /// # Errors
    ///
    /// - `result` holds no snapshots
    /// - the path is invalid
    fn export_snapshots(&self, result: &SimulationResult, path: &Path) -> Result<()>;
}
