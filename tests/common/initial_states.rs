//! Initial grids shared by the integration tests

#![allow(dead_code)]

use heat_rs::grid::{Grid, HeatSource};

/// Unit heat in the centre cell
pub fn centred_spike(n: usize) -> Grid {
    HeatSource::centered_point(1.0).apply_to(n).unwrap()
}

/// Unit heat in cell (0, 0)
pub fn corner_spike(n: usize) -> Grid {
    HeatSource::point(0, 0, 1.0).apply_to(n).unwrap()
}

/// Alternating ±1, the highest-frequency mode the grid can hold
pub fn checkerboard(n: usize) -> Grid {
    Grid::from_fn(n, |i, j| if (i + j) % 2 == 0 { 1.0 } else { -1.0 }).unwrap()
}

/// Smooth non-symmetric field: every cell distinct
pub fn ramp(n: usize) -> Grid {
    Grid::from_fn(n, |i, j| 0.1 + (i * n + j) as f64 / (n * n) as f64).unwrap()
}
