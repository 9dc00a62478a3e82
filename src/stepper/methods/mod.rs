//! Single-step backends
//!
//! This module contains the concrete implementations of the
//! [`Stepper`](crate::stepper::Stepper) trait.
//!
//! # Available Methods
//!
//! - **[`DenseStepper`]**: `u + ε·A u` with `A` a full N²×N² matrix
//!   - Cost: O(N⁴) per step, O(N⁴) memory
//!   - Use: small grids, reference results
//!
//! - **[`SparseStepper`]**: same product with `A` in CSR form
//!   - Cost: O(N²) per step, O(N²) memory
//!   - Use: large grids when an explicit operator is wanted
//!
//! - **[`StencilStepper`]**: four-neighbour combine on the 2D grid, no operator
//!   - Cost: O(N²) per step, nothing to build
//!   - Use: production runs; optional rayon fast path (feature `parallel`)
//!
//! All three are numerically equivalent: for any grid and ε they agree
//! element-wise to rounding.
//!
//! # Example
//!
//! ```rust
//! use heat_rs::grid::HeatSource;
//! use heat_rs::stepper::{DenseStepper, SparseStepper, Stepper, StencilStepper};
//!
//! let u0 = HeatSource::centered_point(1.0).apply_to(5).unwrap();
//! let steppers: Vec<Box<dyn Stepper>> = vec![
//!     Box::new(DenseStepper::new(5).unwrap()),
//!     Box::new(SparseStepper::new(5).unwrap()),
//!     Box::new(StencilStepper::new()),
//! ];
//! let results: Vec<_> = steppers.iter().map(|s| s.advance(&u0, 0.2).unwrap()).collect();
//! assert!(results[0].max_abs_difference(&results[2]).unwrap() < 1e-12);
//! assert!(results[1].max_abs_difference(&results[2]).unwrap() < 1e-12);
//! ```

pub mod dense;
pub mod sparse;
pub mod stencil;

// Re-exports for convenience
pub use dense::{DenseStepper, advance_matvec};
pub use sparse::{SparseStepper, advance_matvec_sparse};
pub use stencil::{StencilStepper, advance_stencil};
