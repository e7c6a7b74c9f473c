// File: crates/barchart-core/src/theme.rs
// Summary: The chart's fixed visual style (colors, line widths, label font).

use std::fmt;

/// Backend-neutral RGBA color; alpha in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Alpha scaled to a byte, for backends with 8-bit channels.
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

/// CSS `rgba(r,g,b,a)` notation.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontSlant {
    Normal,
    Italic,
}

impl FontSlant {
    pub fn as_css(&self) -> &'static str {
        match self {
            FontSlant::Normal => "normal",
            FontSlant::Italic => "italic",
        }
    }
}

/// Font family/style/weight; the size comes from the layout.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub slant: FontSlant,
    pub weight: u16,
}

/// A sized font as handed to a drawing surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: String,
    pub slant: FontSlant,
    pub weight: u16,
    pub size: f64,
}

impl FontSpec {
    pub fn sized(&self, size: f64) -> Font {
        Font { family: self.family.clone(), slant: self.slant, weight: self.weight, size }
    }
}

/// CSS font shorthand, e.g. `normal 300 13.5px times`.
impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}px {}", self.slant.as_css(), self.weight, self.size, self.family)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub axis_line: Rgba,
    pub axis_line_width: f64,
    pub guideline: Rgba,
    pub guideline_width: f64,
    pub label: Rgba,
    pub label_font: FontSpec,
    pub bar_fill_alpha: f32,
    pub bar_stroke_alpha: f32,
    pub bar_stroke_width: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            axis_line: Rgba::rgb(0xb1, 0xb1, 0xb1),
            axis_line_width: 1.5,
            guideline: Rgba::rgb(0xe5, 0xe5, 0xe5),
            guideline_width: 0.9,
            label: Rgba::rgb(0x66, 0x66, 0x66),
            label_font: FontSpec { family: "times".to_string(), slant: FontSlant::Normal, weight: 300 },
            bar_fill_alpha: 0.3,
            bar_stroke_alpha: 1.0,
            // bars inherit the guideline width
            bar_stroke_width: 0.9,
        }
    }
}
