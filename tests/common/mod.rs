//! Common utilities for integration tests

pub mod initial_states;
pub mod test_helpers;

// Re-export commonly used items
pub use initial_states::{centred_spike, checkerboard, corner_spike, ramp};
pub use test_helpers::{advance_all, assert_grids_close, run_with};
