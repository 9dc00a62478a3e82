//! Plot configuration shared by the heat-map functions

use plotters::prelude::*;

/// Mapping from a normalised temperature in `[0, 1]` to a colour
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorScale {
    /// Black, red, yellow, white
    #[default]
    Heat,

    /// Black to white
    Grayscale,

    /// Blue through white to red
    Diverging,
}

impl ColorScale {
    fn stops(&self) -> &'static [(u8, u8, u8)] {
        match self {
            ColorScale::Heat => &[(0, 0, 0), (200, 0, 0), (255, 200, 0), (255, 255, 255)],
            ColorScale::Grayscale => &[(0, 0, 0), (255, 255, 255)],
            ColorScale::Diverging => &[(33, 102, 172), (247, 247, 247), (178, 24, 43)],
        }
    }

    /// Colour for `t`, clamped to `[0, 1]`. NaN maps to the low end.
    pub fn color(&self, t: f64) -> RGBColor {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let scaled = t * (stops.len() - 1) as f64;
        let lower = (scaled.floor() as usize).min(stops.len() - 2);
        let frac = scaled - lower as f64;

        let (r0, g0, b0) = stops[lower];
        let (r1, g1, b1) = stops[lower + 1];
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;

        RGBColor(mix(r0, r1), mix(g0, g1), mix(b0, b1))
    }
}

/// Configuration for heat-map plots
///
/// # Example
///
/// ```rust
/// use heat_rs::output::visualization::{ColorScale, PlotConfig};
///
/// let mut config = PlotConfig::heatmap("Final state");
/// config.color_scale = ColorScale::Grayscale;
/// config.value_range = Some((0.0, 1e-3));
/// assert_eq!(config.panel_columns, 3);
/// ```
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Heat Diffusion")
    pub title: String,

    /// X-axis label (default: "column j")
    pub xlabel: String,

    /// Y-axis label (default: "row i")
    pub ylabel: String,

    pub color_scale: ColorScale,

    /// Fixed `(min, max)` for the colour scale. `None` uses the data range;
    /// a snapshot panel then shares one range across all panels.
    pub value_range: Option<(f64, f64)>,

    /// Number of panels per row in a snapshot panel (default: 3)
    pub panel_columns: usize,

    /// Background color (default: WHITE)
    pub background: RGBColor,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Heat Diffusion".to_string(),
            xlabel: "column j".to_string(),
            ylabel: "row i".to_string(),
            color_scale: ColorScale::Heat,
            value_range: None,
            panel_columns: 3,
            background: WHITE,
        }
    }
}

impl PlotConfig {
    /// Square single-grid configuration with a custom title
    pub fn heatmap(title: impl Into<String>) -> Self {
        Self {
            width: 800,
            height: 800,
            title: title.into(),
            ..Default::default()
        }
    }

    /// Snapshot-panel configuration with `columns` panels per row
    pub fn panel(title: impl Into<String>, columns: usize) -> Self {
        Self {
            width: 1200,
            height: 1200,
            title: title.into(),
            panel_columns: columns,
            ..Default::default()
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
