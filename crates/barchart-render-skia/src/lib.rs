// File: crates/barchart-render-skia/src/lib.rs
// Summary: Skia renderer crate. Provides a raster DrawingSurface and headless
// PNG export of a bar chart.

use anyhow::{Context, Result};
use log::info;

use barchart_core::{BarChart, ChartConfig, ColorSource, DataPoint, Document, Page, Theme};

pub mod surface;
pub mod text;

pub use surface::SkiaSurface;

const MOUNT_ID: &str = "png";

/// Render a chart off-screen and return the PNG bytes.
pub fn render_png_bytes(
    config: ChartConfig,
    theme: &Theme,
    data: Vec<DataPoint>,
    colors: &mut dyn ColorSource,
) -> Result<Vec<u8>> {
    let mut page: Page<SkiaSurface> = Page::new().with_target(MOUNT_ID);
    BarChart::create_with(&mut page, MOUNT_ID, config, theme, data, colors).context("building bar chart")?;
    let target = page.target_mut(MOUNT_ID).context("mount target vanished")?;
    let surface = target.children_mut().first_mut().context("no surface mounted")?;
    surface.encode_png()
}

/// Render a chart to a PNG file, creating parent directories as needed.
pub fn render_to_png(
    config: ChartConfig,
    theme: &Theme,
    data: Vec<DataPoint>,
    colors: &mut dyn ColorSource,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_png_bytes(config, theme, data, colors)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
