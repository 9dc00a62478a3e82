//! CSV export of temperature grids
//!
//! Grids are written in long format, one cell per line, so the file loads
//! straight into pandas, R or a spreadsheet pivot table without reshaping.
//!
//! # Single Grid
//!
//! ```rust,ignore
//! use heat_rs::output::export::export_grid_csv;
//!
//! export_grid_csv(&result.final_state, "final.csv", None)?;
//! ```
//!
//! **Output** (`final.csv`):
//! ```csv
//! row,column,temperature
//! 0,0,0.000000
//! 0,1,0.000000
//! ...
//! ```
//!
//! # Snapshot Series
//!
//! ```rust,ignore
//! use heat_rs::output::export::{CsvConfig, CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::new(CsvConfig::default().with_metadata(true));
//! exporter.export_snapshots(&result, "run.csv")?;
//! ```
//!
//! **Output** (`run.csv`):
//! ```csv
//! # Heat Diffusion Simulation Data
//! # Generated: 2026-02-11T15:30:00+00:00
//! # epsilon: 0.2
//! # grid size: 101
//! # stepper: Stencil
//! #
//! step,row,column,temperature
//! 0,0,0,0.000000
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::Exporter;
use crate::error::{HeatError, Result};
use crate::grid::Grid;
use crate::stepper::SimulationResult;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use heat_rs::output::export::CsvConfig;
///
/// let config = CsvConfig::european().precision(10);
/// assert_eq!(config.delimiter, ';');
/// assert_eq!(config.precision, 10);
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for temperatures (default: 6)
    pub precision: usize,

    /// Write `#` comment lines with a timestamp and run metadata (default: false)
    pub include_metadata: bool,

    /// Extra `key: value` lines for the metadata header
    pub custom: Vec<(String, String)>,

    /// Header of the value column (default: "temperature")
    pub value_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            custom: Vec::new(),
            value_header: "temperature".to_string(),
        }
    }
}

impl CsvConfig {
    /// Semicolon delimiter, comma decimal separator
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// 12 decimal places
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Add a `key: value` line to the metadata header
    pub fn add_custom(mut self, key: &str, value: &str) -> Self {
        self.custom.push((key.to_string(), value.to_string()));
        self
    }

    fn validate(&self) -> Result<()> {
        if self.delimiter == self.decimal_separator {
            return Err(HeatError::Export(format!(
                "delimiter and decimal separator are both '{}'",
                self.delimiter
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments, sorted by key so files diff cleanly
fn write_metadata_header<W: Write>(
    out: &mut W,
    run_metadata: Option<&std::collections::HashMap<String, String>>,
    config: &CsvConfig,
) -> Result<()> {
    writeln!(out, "# Heat Diffusion Simulation Data")?;
    writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(metadata) = run_metadata {
        let mut entries: Vec<_> = metadata.iter().collect();
        entries.sort();
        for (key, value) in entries {
            writeln!(out, "# {key}: {value}")?;
        }
    }

    for (key, value) in &config.custom {
        writeln!(out, "# {key}: {value}")?;
    }

    writeln!(out, "#")?;
    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

fn ensure_finite(grid: &Grid, label: &str) -> Result<()> {
    if grid.is_finite() {
        Ok(())
    } else {
        Err(HeatError::Export(format!("NaN or Inf detected in {label}")))
    }
}

fn write_grid_rows<W: Write>(
    out: &mut W,
    grid: &Grid,
    prefix: Option<usize>,
    config: &CsvConfig,
) -> Result<()> {
    let d = config.delimiter;
    for (i, j, value) in grid.cells() {
        if let Some(step) = prefix {
            write!(out, "{step}{d}")?;
        }
        writeln!(out, "{i}{d}{j}{d}{}", format_number(value, config))?;
    }
    Ok(())
}

// =============================================================================
// Export Functions
// =============================================================================

/// Write one grid as `row,column,temperature` lines
///
/// # Errors
///
/// - `Export`: the grid holds NaN or Inf, or the config is ambiguous
/// - `Io`: the file cannot be created or written
pub fn export_grid_csv<P: AsRef<Path>>(
    grid: &Grid,
    output_path: P,
    configuration: Option<&CsvConfig>,
) -> Result<()> {
    let binding = CsvConfig::default();
    let config = configuration.unwrap_or(&binding);
    config.validate()?;
    ensure_finite(grid, "grid")?;

    let mut out = BufWriter::new(File::create(output_path)?);

    if config.include_metadata {
        write_metadata_header(&mut out, None, config)?;
    }

    let d = config.delimiter;
    writeln!(out, "row{d}column{d}{}", config.value_header)?;
    write_grid_rows(&mut out, grid, None, config)?;

    out.flush()?;
    Ok(())
}

/// Write every snapshot of a run as `step,row,column,temperature` lines
///
/// # Errors
///
/// - `Export`: no snapshots, or a snapshot holds NaN or Inf
/// - `Io`: the file cannot be created or written
pub fn export_snapshots_csv<P: AsRef<Path>>(
    result: &SimulationResult,
    output_path: P,
    configuration: Option<&CsvConfig>,
) -> Result<()> {
    let binding = CsvConfig::default();
    let config = configuration.unwrap_or(&binding);
    config.validate()?;

    if result.is_empty() {
        return Err(HeatError::Export("simulation result holds no snapshots".to_string()));
    }
    for (step, grid) in &result.snapshots {
        ensure_finite(grid, &format!("snapshot at step {step}"))?;
    }

    let mut out = BufWriter::new(File::create(output_path)?);

    if config.include_metadata {
        write_metadata_header(&mut out, Some(&result.metadata), config)?;
    }

    let d = config.delimiter;
    writeln!(out, "step{d}row{d}column{d}{}", config.value_header)?;
    for (step, grid) in &result.snapshots {
        write_grid_rows(&mut out, grid, Some(*step), config)?;
    }

    out.flush()?;
    Ok(())
}

// =============================================================================
// Exporter
// =============================================================================

/// [`Exporter`] writing CSV files
#[derive(Clone, Debug, Default)]
pub struct CsvExporter {
    config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CsvConfig {
        &self.config
    }
}

impl Exporter for CsvExporter {
    fn export_grid(&self, grid: &Grid, path: &Path) -> Result<()> {
        export_grid_csv(grid, path, Some(&self.config))
    }

    fn export_snapshots(&self, result: &SimulationResult, path: &Path) -> Result<()> {
        export_snapshots_csv(result, path, Some(&self.config))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
