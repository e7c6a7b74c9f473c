// File: crates/barchart-core/src/surface.rs
// Summary: Canvas-style drawing surface contract plus a recording implementation.

use crate::error::Result;
use crate::theme::{Font, Rgba};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextBaseline {
    Top,
    Middle,
    #[default]
    Alphabetic,
    Bottom,
}

/// 2D primitives a chart is drawn with.
///
/// Path calls accumulate into a current path that `stroke`/`fill` paint with
/// the current style; `begin_path` discards it. Styles persist until changed.
pub trait DrawingSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn stroke(&mut self);
    fn fill(&mut self);

    fn set_stroke_style(&mut self, color: Rgba);
    fn set_fill_style(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f64);

    fn set_font(&mut self, font: &Font);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.begin_path();
        self.rect(x, y, width, height);
        self.fill();
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.begin_path();
        self.rect(x, y, width, height);
        self.stroke();
    }
}

/// Surfaces a mount target can allocate on demand.
pub trait NewSurface: DrawingSurface + Sized {
    fn new_surface(id: String, width: u32, height: u32) -> Result<Self>;
}

/// One recorded call on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Stroke,
    Fill,
    StrokeStyle(Rgba),
    FillStyle(Rgba),
    LineWidth(f64),
    Font(Font),
    TextAlign(TextAlign),
    TextBaseline(TextBaseline),
    FillText { text: String, x: f64, y: f64 },
}

/// Keeps every call in order; the in-memory stand-in for a canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordingSurface {
    id: String,
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self { id: id.into(), width, height, commands: Vec::new() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Replay the recorded calls onto another surface.
    pub fn replay<S: DrawingSurface + ?Sized>(&self, target: &mut S) {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::BeginPath => target.begin_path(),
                DrawCommand::MoveTo { x, y } => target.move_to(*x, *y),
                DrawCommand::LineTo { x, y } => target.line_to(*x, *y),
                DrawCommand::Rect { x, y, width, height } => target.rect(*x, *y, *width, *height),
                DrawCommand::Stroke => target.stroke(),
                DrawCommand::Fill => target.fill(),
                DrawCommand::StrokeStyle(c) => target.set_stroke_style(*c),
                DrawCommand::FillStyle(c) => target.set_fill_style(*c),
                DrawCommand::LineWidth(w) => target.set_line_width(*w),
                DrawCommand::Font(f) => target.set_font(f),
                DrawCommand::TextAlign(a) => target.set_text_align(*a),
                DrawCommand::TextBaseline(b) => target.set_text_baseline(*b),
                DrawCommand::FillText { text, x, y } => target.fill_text(text, *x, *y),
            }
        }
    }
}

impl NewSurface for RecordingSurface {
    fn new_surface(id: String, width: u32, height: u32) -> Result<Self> {
        Ok(Self::new(id, width, height))
    }
}

impl DrawingSurface for RecordingSurface {
    fn width(&self) -> u32 { self.width }
    fn height(&self) -> u32 { self.height }

    fn begin_path(&mut self) { self.commands.push(DrawCommand::BeginPath); }
    fn move_to(&mut self, x: f64, y: f64) { self.commands.push(DrawCommand::MoveTo { x, y }); }
    fn line_to(&mut self, x: f64, y: f64) { self.commands.push(DrawCommand::LineTo { x, y }); }
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Rect { x, y, width, height });
    }
    fn stroke(&mut self) { self.commands.push(DrawCommand::Stroke); }
    fn fill(&mut self) { self.commands.push(DrawCommand::Fill); }

    fn set_stroke_style(&mut self, color: Rgba) { self.commands.push(DrawCommand::StrokeStyle(color)); }
    fn set_fill_style(&mut self, color: Rgba) { self.commands.push(DrawCommand::FillStyle(color)); }
    fn set_line_width(&mut self, width: f64) { self.commands.push(DrawCommand::LineWidth(width)); }

    fn set_font(&mut self, font: &Font) { self.commands.push(DrawCommand::Font(font.clone())); }
    fn set_text_align(&mut self, align: TextAlign) { self.commands.push(DrawCommand::TextAlign(align)); }
    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.commands.push(DrawCommand::TextBaseline(baseline));
    }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(DrawCommand::FillText { text: text.to_string(), x, y });
    }
}
