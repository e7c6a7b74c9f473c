// File: crates/barchart-core/src/svg.rs
// Summary: Drawing surface that emits a standalone SVG document.

use std::fmt::Write as _;

use crate::error::Result;
use crate::surface::{DrawingSurface, NewSurface, TextAlign, TextBaseline};
use crate::theme::{Font, FontSlant, Rgba};

/// Canvas-style state machine: path calls build a `d` attribute, `stroke` and
/// `fill` turn the current path into `<path>` elements.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    id: String,
    width: u32,
    height: u32,
    path: String,
    stroke: Rgba,
    fill: Rgba,
    line_width: f64,
    font: Font,
    align: TextAlign,
    baseline: TextBaseline,
    body: String,
}

impl SvgSurface {
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            path: String::new(),
            stroke: Rgba::rgb(0, 0, 0),
            fill: Rgba::rgb(0, 0, 0),
            line_width: 1.0,
            font: Font { family: "sans-serif".to_string(), slant: FontSlant::Normal, weight: 400, size: 10.0 },
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
            body: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The complete SVG document.
    pub fn to_svg_string(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" id=\"{}\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{}</svg>\n",
            escape(&self.id),
            self.body,
            w = self.width,
            h = self.height,
        )
    }

    pub fn write_to(&self, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg_string())
    }
}

impl NewSurface for SvgSurface {
    fn new_surface(id: String, width: u32, height: u32) -> Result<Self> {
        Ok(Self::new(id, width, height))
    }
}

impl DrawingSurface for SvgSurface {
    fn width(&self) -> u32 { self.width }
    fn height(&self) -> u32 { self.height }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.path, "M{x} {y} ");
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.path, "L{x} {y} ");
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let _ = write!(self.path, "M{x} {y} h{width} v{height} h{} Z ", -width);
    }

    fn stroke(&mut self) {
        if self.path.is_empty() { return; }
        let _ = writeln!(
            self.body,
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-opacity=\"{}\" stroke-width=\"{}\"/>",
            self.path.trim_end(),
            hex(self.stroke),
            self.stroke.a,
            self.line_width,
        );
    }

    fn fill(&mut self) {
        if self.path.is_empty() { return; }
        let _ = writeln!(
            self.body,
            "<path d=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>",
            self.path.trim_end(),
            hex(self.fill),
            self.fill.a,
        );
    }

    fn set_stroke_style(&mut self, color: Rgba) { self.stroke = color; }
    fn set_fill_style(&mut self, color: Rgba) { self.fill = color; }
    fn set_line_width(&mut self, width: f64) { self.line_width = width; }

    fn set_font(&mut self, font: &Font) { self.font = font.clone(); }
    fn set_text_align(&mut self, align: TextAlign) { self.align = align; }
    fn set_text_baseline(&mut self, baseline: TextBaseline) { self.baseline = baseline; }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let anchor = match self.align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        let baseline = match self.baseline {
            TextBaseline::Top => "text-before-edge",
            TextBaseline::Middle => "middle",
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Bottom => "text-after-edge",
        };
        let _ = writeln!(
            self.body,
            "<text x=\"{x}\" y=\"{y}\" font-family=\"{}\" font-size=\"{}\" font-style=\"{}\" font-weight=\"{}\" fill=\"{}\" fill-opacity=\"{}\" text-anchor=\"{anchor}\" dominant-baseline=\"{baseline}\">{}</text>",
            escape(&self.font.family),
            self.font.size,
            self.font.slant.as_css(),
            self.font.weight,
            hex(self.fill),
            self.fill.a,
            escape(text),
        );
    }
}

fn hex(c: Rgba) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
