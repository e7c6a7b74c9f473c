// File: crates/barchart-render-skia/src/surface.rs
// Summary: DrawingSurface over a Skia CPU raster surface, with PNG and RGBA8 export.

use anyhow::Result;
use skia_safe as skia;

use barchart_core::{ChartError, DrawingSurface, Font, NewSurface, Rgba, TextAlign, TextBaseline};
use barchart_core::theme::FontSlant;

use crate::text::TextShaper;

/// Raster canvas with canvas-2D style path and paint state.
pub struct SkiaSurface {
    id: String,
    surface: skia::Surface,
    path: skia::Path,
    stroke: skia::Paint,
    fill: skia::Paint,
    font: Font,
    align: TextAlign,
    baseline: TextBaseline,
    shaper: TextShaper,
}

fn to_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.alpha_u8(), c.r, c.g, c.b)
}

fn paint(style: skia::paint::Style) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(style);
    p.set_color(skia::Color::BLACK);
    p
}

impl SkiaSurface {
    /// White background, black stroke and fill, 1px lines.
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Result<Self, ChartError> {
        let id = id.into();
        let w = i32::try_from(width).map_err(|_| ChartError::Surface(format!("width {width} too large")))?;
        let h = i32::try_from(height).map_err(|_| ChartError::Surface(format!("height {height} too large")))?;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| ChartError::Surface(format!("failed to create {width}x{height} raster surface")))?;
        surface.canvas().clear(skia::Color::WHITE);

        let mut stroke = paint(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        Ok(Self {
            id,
            surface,
            path: skia::Path::new(),
            stroke,
            fill: paint(skia::paint::Style::Fill),
            font: Font { family: "sans-serif".to_string(), slant: FontSlant::Normal, weight: 400, size: 10.0 },
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
            shaper: TextShaper::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Snapshot and encode as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA8 pixels: `(pixels, width, height, stride)`.
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let w = self.surface.width();
        let h = self.surface.height();
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading {w}x{h} pixels failed");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}

impl NewSurface for SkiaSurface {
    fn new_surface(id: String, width: u32, height: u32) -> Result<Self, ChartError> {
        Self::new(id, width, height)
    }
}

impl DrawingSurface for SkiaSurface {
    fn width(&self) -> u32 { self.surface.width() as u32 }
    fn height(&self) -> u32 { self.surface.height() as u32 }

    fn begin_path(&mut self) {
        self.path = skia::Path::new();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to((x as f32, y as f32));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to((x as f32, y as f32));
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let (l, t) = (x as f32, y as f32);
        let (r, b) = ((x + width) as f32, (y + height) as f32);
        self.path.move_to((l, t));
        self.path.line_to((r, t));
        self.path.line_to((r, b));
        self.path.line_to((l, b));
        self.path.close();
    }

    fn stroke(&mut self) {
        self.surface.canvas().draw_path(&self.path, &self.stroke);
    }

    fn fill(&mut self) {
        self.surface.canvas().draw_path(&self.path, &self.fill);
    }

    fn set_stroke_style(&mut self, color: Rgba) { self.stroke.set_color(to_color(color)); }
    fn set_fill_style(&mut self, color: Rgba) { self.fill.set_color(to_color(color)); }
    fn set_line_width(&mut self, width: f64) { self.stroke.set_stroke_width(width as f32); }

    fn set_font(&mut self, font: &Font) { self.font = font.clone(); }
    fn set_text_align(&mut self, align: TextAlign) { self.align = align; }
    fn set_text_baseline(&mut self, baseline: TextBaseline) { self.baseline = baseline; }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let mut paragraph = self.shaper.layout(text, &self.font, self.fill.color());
        let width = paragraph.longest_line();
        let left = match self.align {
            TextAlign::Left => x as f32,
            TextAlign::Center => x as f32 - width / 2.0,
            TextAlign::Right => x as f32 - width,
        };
        // Paragraph paints from its top-left corner
        let top = match self.baseline {
            TextBaseline::Top => y as f32,
            TextBaseline::Middle => y as f32 - paragraph.height() / 2.0,
            TextBaseline::Alphabetic => y as f32 - paragraph.alphabetic_baseline(),
            TextBaseline::Bottom => y as f32 - paragraph.height(),
        };
        paragraph.paint(self.surface.canvas(), (left, top));
    }
}
