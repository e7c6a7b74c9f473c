// File: crates/barchart-core/src/lib.rs
// Summary: Core library entry point; exports the layout engine, drawing contract and chart construction.

pub mod chart;
pub mod color;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod mount;
pub mod render;
pub mod surface;
pub mod svg;
pub mod theme;
pub mod types;

pub use chart::{create_chart, BarChart};
pub use color::{ColorSource, FixedColors, RandomColors};
pub use error::{ChartError, ValueProblem};
pub use layout::{
    compute_axis_bounds, compute_bar_height, compute_horizontal_slots, compute_value_bounds,
    compute_vertical_ticks, ChartLayout,
};
pub use mount::{Document, Element, MountTarget, Page};
pub use render::ChartRenderer;
pub use surface::{DrawCommand, DrawingSurface, NewSurface, RecordingSurface, TextAlign, TextBaseline};
pub use svg::SvgSurface;
pub use theme::{Font, Rgba, Theme};
pub use types::{ChartConfig, DataPoint};
