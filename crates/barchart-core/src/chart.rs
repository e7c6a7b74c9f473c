// File: crates/barchart-core/src/chart.rs
// Summary: Chart construction: validate, compute layout, draw into a fresh
// surface and swap it into the mount target.

use log::{debug, info};

use crate::color::{ColorSource, RandomColors};
use crate::error::{ChartError, Result};
use crate::layout::ChartLayout;
use crate::mount::{Document, MountTarget};
use crate::render::ChartRenderer;
use crate::theme::Theme;
use crate::types::{ChartConfig, DataPoint};

/// A rendered chart. Holds its inputs and the geometry it was drawn with;
/// drawing different data means building a new chart.
#[derive(Clone, Debug)]
pub struct BarChart {
    mount_point_id: String,
    config: ChartConfig,
    data: Vec<DataPoint>,
    layout: ChartLayout,
}

impl BarChart {
    /// Render with default ratios, the default theme and random bar colors.
    pub fn create<D: Document>(
        document: &mut D,
        mount_point_id: &str,
        width: f64,
        height: f64,
        data: Vec<DataPoint>,
    ) -> Result<Self> {
        Self::create_with(
            document,
            mount_point_id,
            ChartConfig::new(width, height),
            &Theme::default(),
            data,
            &mut RandomColors::new(),
        )
    }

    /// Full construction. Config, data and the mount point are all checked
    /// before the target is modified; on error it keeps its previous children.
    pub fn create_with<D, C>(
        document: &mut D,
        mount_point_id: &str,
        config: ChartConfig,
        theme: &Theme,
        data: Vec<DataPoint>,
        colors: &mut C,
    ) -> Result<Self>
    where
        D: Document,
        C: ColorSource + ?Sized,
    {
        let layout = ChartLayout::compute(&config, &data)?;
        let target = document
            .target_mut(mount_point_id)
            .ok_or_else(|| ChartError::MountTargetNotFound(mount_point_id.to_string()))?;

        let (width, height) = config.surface_size();
        let mut surface = target.create_surface(width, height)?;
        ChartRenderer::new(&layout, theme).render(&mut surface, colors);
        debug!("rendered {} bars into a {}x{} surface", layout.item_count(), width, height);

        target.clear();
        target.append(surface);
        info!("mounted bar chart on '{}'", mount_point_id);

        Ok(Self { mount_point_id: mount_point_id.to_string(), config, data, layout })
    }

    pub fn mount_point_id(&self) -> &str {
        &self.mount_point_id
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }
}

/// Shorthand for [`BarChart::create`].
pub fn create_chart<D: Document>(
    document: &mut D,
    mount_point_id: &str,
    width: f64,
    height: f64,
    data: Vec<DataPoint>,
) -> Result<BarChart> {
    BarChart::create(document, mount_point_id, width, height, data)
}
