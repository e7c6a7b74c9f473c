// File: crates/barchart-core/src/types.rs
// Summary: Shared input types and constants (data points, chart config, defaults).

use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: f64 = 600.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 450.0;
/// Default margin size as a percentage of each dimension.
pub const AXIS_RATIO_PERCENT: f64 = 10.0;
/// Default label font size as a percentage of each dimension.
pub const FONT_RATIO_PERCENT: f64 = 3.0;

/// One labeled value. Order in the input sequence is the left-to-right bar order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

impl<S: Into<String>> From<(S, f64)> for DataPoint {
    fn from((label, value): (S, f64)) -> Self {
        Self::new(label, value)
    }
}

/// Chart dimensions and proportions.
/// Contract: immutable for the lifetime of one chart; validated by
/// [`crate::layout::compute_axis_bounds`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_axis_ratio")]
    pub axis_ratio_percent: f64,
    #[serde(default = "default_font_ratio")]
    pub font_ratio_percent: f64,
}

impl ChartConfig {
    /// Config with the given pixel size and default ratios.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            axis_ratio_percent: AXIS_RATIO_PERCENT,
            font_ratio_percent: FONT_RATIO_PERCENT,
        }
    }

    pub const fn with_axis_ratio(mut self, percent: f64) -> Self {
        self.axis_ratio_percent = percent;
        self
    }

    pub const fn with_font_ratio(mut self, percent: f64) -> Self {
        self.font_ratio_percent = percent;
        self
    }

    /// Pixel size of a backing surface; fractional dimensions round up.
    pub fn surface_size(&self) -> (u32, u32) {
        (self.width.ceil() as u32, self.height.ceil() as u32)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

fn default_width() -> f64 { WIDTH }
fn default_height() -> f64 { HEIGHT }
fn default_axis_ratio() -> f64 { AXIS_RATIO_PERCENT }
fn default_font_ratio() -> f64 { FONT_RATIO_PERCENT }
