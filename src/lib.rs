//! heat-rs: 2D Heat Diffusion Simulation
//!
//! Explicit finite-difference time stepping of the heat equation on a square
//! N×N plate with zero-temperature edges:
//!
//! ```text
//! u_{k+1} = u_k + ε · L u_k
//! ```
//!
//! where `L` is the five-point discrete Laplacian.
//!
//! # Architecture
//!
//! heat-rs is built on two core principles:
//!
//! 1. **Separation of Operator and Stepping**
//!    - Operators describe the discrete Laplacian (what is applied)
//!    - Steppers advance a grid by one step (how it is applied)
//!
//! 2. **Interchangeable Backends**
//!    - Dense matrix, sparse matrix and direct stencil steppers behind one trait
//!    - All three agree element-wise to rounding for any grid and ε
//!
//! # Quick Start
//!
//! ```rust
//! use heat_rs::prelude::*;
//!
//! # fn main() -> heat_rs::Result<()> {
//! // 1. Configure the run and the initial grid
//! let config = SimulationConfiguration::new(41, 0.2, 200).with_snapshot_interval(50);
//! let initial = HeatSource::centered_point(1.0).apply_to(config.grid_size)?;
//!
//! // 2. Pick a stepper
//! let stepper = StepperKind::Stencil.create(config.grid_size)?;
//!
//! // 3. Run simulation
//! let result = Simulation::new(stepper, initial).run(&config)?;
//!
//! // 4. Access results
//! assert_eq!(result.len(), 5);
//! assert!(result.final_state.total_heat() < 1.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`grid`]: Grid state and initial heat sources
//! - [`operator`]: Dense and sparse five-point operators
//! - [`stepper`]: Single-step backends and the simulation runner
//! - [`output`]: Heat-map visualization and CSV export
//! - [`error`]: Error type shared by every module
//!
//! # Features
//!
//! - `parallel`: parallel stencil sweep (ndarray `Zip` on rayon) on large grids

pub mod error;

pub mod grid;
pub mod operator;
pub mod stepper;

pub mod output;

pub use error::{HeatError, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use heat_rs::prelude::*;
    //! ```
    pub use crate::error::HeatError;
    pub use crate::grid::{FlattenedGrid,
                          Grid,
                          HeatSource};
    pub use crate::operator::{DenseOperator,
                              GridOperator,
                              GridOperatorBuilder,
                              OperatorKind,
                              SparseOperator};
    pub use crate::stepper::{Stepper,
                             StepperKind,
                             SimulationConfiguration,
                             Simulation,
                             SimulationResult,
                             DenseStepper,
                             SparseStepper,
                             StencilStepper};
}
