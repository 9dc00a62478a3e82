//! Visualization of simulation results
//!
//! Heat maps of temperature grids, drawn with the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`, `ColorScale`)
//! - **heatmap**: Single-grid heat map and snapshot panels
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use heat_rs::output::visualization::{plot_snapshots, PlotConfig};
//!
//! let result = simulation.run(&config)?;
//! plot_snapshots(&result, "evolution.png", Some(&PlotConfig::panel("Heat Diffusion", 3)))?;
//! ```
//!
//! | Use Case | Function |
//! |----------|----------|
//! | One grid | `plot_heatmap` |
//! | Every snapshot of a run, shared colour range | `plot_snapshots` |

pub mod config;
pub mod heatmap;

pub use config::{ColorScale, PlotConfig};

pub use heatmap::{plot_heatmap, plot_snapshots};
