//! Grid state
//!
//! This module holds the data every stepper consumes and produces.
//!
//! # Core Concepts
//!
//! - **Grid**: N×N temperatures, square by construction
//! - **FlattenedGrid**: the same values as a length-N² vector, row-major
//! - **HeatSource**: how the caller fills the grid at time zero
//!
//! # Boundary Convention
//!
//! Cells outside `[0, N-1]` in either axis are held at zero (Dirichlet).
//! They are never stored; operators and stencils simply drop those terms.
//!
//! # Example
//!
//! ```rust
//! use heat_rs::grid::{Grid, HeatSource};
//!
//! let grid: Grid = HeatSource::point(0, 0, 1.0).apply_to(4).unwrap();
//! let flat = grid.flatten();
//! assert_eq!(Grid::from_flattened(4, &flat).unwrap(), grid);
//! ```

pub mod state;
pub mod sources;

pub use state::{FlattenedGrid, Grid};
pub use sources::HeatSource;
