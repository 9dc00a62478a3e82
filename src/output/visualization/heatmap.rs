//! Heat-map rendering of temperature grids
//!
//! Row 0 is drawn at the top, column 0 at the left, one filled rectangle per
//! cell. The backend is picked from the file extension: `.svg` gives an SVG,
//! anything else a bitmap.
//!
//! # Usage
//!
//! ```rust,ignore
//! use heat_rs::output::visualization::{plot_heatmap, plot_snapshots, PlotConfig};
//!
//! plot_heatmap(&result.final_state, "final.png", None)?;
//! plot_snapshots(&result, "evolution.png", Some(&PlotConfig::panel("Diffusion", 3)))?;
//! ```

use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::config::PlotConfig;
use crate::error::{HeatError, Result};
use crate::grid::Grid;
use crate::stepper::SimulationResult;

// =================================================================================================
// Helpers
// =================================================================================================

/// Colour-scale range for a set of grids
///
/// Uses the configured range when there is one. A flat field gets a unit
/// range so every cell maps to the low end of the scale.
fn value_range<'a>(grids: impl Iterator<Item = &'a Grid>, config: &PlotConfig) -> Result<(f64, f64)> {
    if let Some((low, high)) = config.value_range {
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(HeatError::Plot(format!("invalid value range ({low}, {high})")));
        }
        return Ok((low, high));
    }

    let mut low = f64::INFINITY;
    let mut high = f64::NEG_INFINITY;
    for grid in grids {
        if !grid.is_finite() {
            return Err(HeatError::Plot("NaN or Inf in grid".to_string()));
        }
        for (_, _, value) in grid.cells() {
            low = low.min(value);
            high = high.max(value);
        }
    }

    if !low.is_finite() {
        return Err(HeatError::Plot("nothing to plot".to_string()));
    }
    if high <= low {
        high = low + 1.0;
    }
    Ok((low, high))
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

fn to_plot_error(err: Box<dyn Error>) -> HeatError {
    HeatError::Plot(err.to_string())
}

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Plot one grid as a heat map
///
/// # Errors
///
/// `Plot` when the grid holds NaN or Inf, the configured value range is
/// empty, or the backend fails to write the file.
pub fn plot_heatmap<P: AsRef<Path>>(
    grid: &Grid,
    output_path: P,
    config: Option<&PlotConfig>,
) -> Result<()> {
    let path = output_path.as_ref();
    let default_config = PlotConfig::heatmap("Temperature");
    let config = config.unwrap_or(&default_config);
    let range = value_range(std::iter::once(grid), config)?;

    let drawn = if is_svg(path) {
        let backend = SVGBackend::new(path, (config.width, config.height));
        draw_single(backend.into_drawing_area(), grid, config, range)
    } else {
        let backend = BitMapBackend::new(path, (config.width, config.height));
        draw_single(backend.into_drawing_area(), grid, config, range)
    };
    drawn.map_err(to_plot_error)
}

/// Plot every snapshot of a run on one image, `config.panel_columns` per row
///
/// All panels share one colour range so they can be compared by eye.
///
/// # Errors
///
/// `Plot` when the result holds no snapshots, `panel_columns` is zero, a
/// snapshot holds NaN or Inf, or the backend fails.
pub fn plot_snapshots<P: AsRef<Path>>(
    result: &SimulationResult,
    output_path: P,
    config: Option<&PlotConfig>,
) -> Result<()> {
    let path = output_path.as_ref();
    let default_config = PlotConfig::panel("Heat Diffusion", 3);
    let config = config.unwrap_or(&default_config);

    if result.is_empty() {
        return Err(HeatError::Plot("simulation result holds no snapshots".to_string()));
    }
    if config.panel_columns == 0 {
        return Err(HeatError::Plot("panel columns must be at least 1".to_string()));
    }
    let range = value_range(result.snapshots.iter().map(|(_, grid)| grid), config)?;

    let drawn = if is_svg(path) {
        let backend = SVGBackend::new(path, (config.width, config.height));
        draw_panel(backend.into_drawing_area(), &result.snapshots, config, range)
    } else {
        let backend = BitMapBackend::new(path, (config.width, config.height));
        draw_panel(backend.into_drawing_area(), &result.snapshots, config, range)
    };
    drawn.map_err(to_plot_error)
}

// =================================================================================================
// Backend-generic implementations
// =================================================================================================

fn draw_single<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    grid: &Grid,
    config: &PlotConfig,
    range: (f64, f64),
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    root.fill(&config.background)?;
    draw_grid(&root, grid, &config.title, config, range, 30)?;
    root.present()?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    snapshots: &[(usize, Grid)],
    config: &PlotConfig,
    range: (f64, f64),
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    root.fill(&config.background)?;
    let root = root.titled(&config.title, ("sans-serif", 36))?;

    let columns = config.panel_columns.min(snapshots.len());
    let rows = snapshots.len().div_ceil(columns);
    let areas = root.split_evenly((rows, columns));

    for ((step, grid), area) in snapshots.iter().zip(areas.iter()) {
        draw_grid(area, grid, &format!("step {step}"), config, range, 18)?;
    }

    root.present()?;
    Ok(())
}

/// Draw one grid into `area`, row 0 at the top
fn draw_grid<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    grid: &Grid,
    caption: &str,
    config: &PlotConfig,
    (low, high): (f64, f64),
    font_size: u32,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let n = grid.size() as f64;

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", font_size).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..n, 0.0..n)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.0}", n - y))
        .draw()?;

    let span = high - low;
    chart.draw_series(grid.cells().map(|(i, j, value)| {
        let color = config.color_scale.color((value - low) / span);
        let (x, top) = (j as f64, n - i as f64);
        Rectangle::new([(x, top), (x + 1.0, top - 1.0)], color.filled())
    }))?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
