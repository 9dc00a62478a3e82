//! Output of simulation results
//!
//! - **Visualization**: PNG/SVG heat maps using plotters
//! - **Export**: CSV data for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs
//! ├── visualization/      ← Heat maps
//! │   ├── config.rs
//! │   └── heatmap.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use heat_rs::output::{export_grid_csv, plot_heatmap};
//!
//! plot_heatmap(&result.final_state, "final.png", None)?;
//! export_grid_csv(&result.final_state, "final.csv", None)?;
//! ```
//!
//! Both sub-modules report failures as [`HeatError`](crate::error::HeatError):
//! `Plot` and `Export` for rejected data or backend failures, `Io` for the
//! filesystem.

pub mod visualization;
pub mod export;

pub use visualization::{
    plot_heatmap,
    plot_snapshots,
    ColorScale,
    PlotConfig,
};

pub use export::{
    export_grid_csv,
    export_snapshots_csv,
    CsvConfig,
    CsvExporter,
    Exporter,
};
