// File: crates/barchart-core/src/render.rs
// Summary: Issues the draw-call sequence for a computed layout.

use crate::color::ColorSource;
use crate::geometry::Segment;
use crate::layout::ChartLayout;
use crate::surface::{DrawingSurface, TextAlign, TextBaseline};
use crate::theme::Theme;

/// Draws a [`ChartLayout`] with a [`Theme`]; bar colors come from the color source.
pub struct ChartRenderer<'a> {
    layout: &'a ChartLayout,
    theme: &'a Theme,
}

impl<'a> ChartRenderer<'a> {
    pub fn new(layout: &'a ChartLayout, theme: &'a Theme) -> Self {
        Self { layout, theme }
    }

    /// Axes and labels first, then gridlines, then one bar per data point.
    pub fn render<S, C>(&self, surface: &mut S, colors: &mut C)
    where
        S: DrawingSurface + ?Sized,
        C: ColorSource + ?Sized,
    {
        self.draw_vertical_axis(surface);
        self.draw_vertical_labels(surface);
        self.draw_horizontal_axis(surface);
        self.draw_horizontal_labels(surface);
        self.draw_horizontal_guidelines(surface);
        self.draw_vertical_guidelines(surface);
        self.draw_bars(surface, colors);
    }

    fn draw_vertical_axis<S: DrawingSurface + ?Sized>(&self, s: &mut S) {
        s.begin_path();
        s.set_stroke_style(self.theme.axis_line);
        s.set_line_width(self.theme.axis_line_width);
        line(s, &self.layout.vertical_axis);
        s.stroke();
    }

    fn draw_vertical_labels<S: DrawingSurface + ?Sized>(&self, s: &mut S) {
        let labels = &self.layout.labels;
        s.set_font(&self.theme.label_font.sized(labels.vertical_font_size));
        s.set_text_align(TextAlign::Right);
        s.set_text_baseline(TextBaseline::Alphabetic);
        s.set_fill_style(self.theme.label);
        for tick in &self.layout.ticks {
            s.fill_text(&tick.label, labels.vertical_label_x, tick.pixel_y);
        }
    }

    fn draw_horizontal_axis<S: DrawingSurface + ?Sized>(&self, s: &mut S) {
        s.begin_path();
        s.set_stroke_style(self.theme.axis_line);
        s.set_line_width(self.theme.axis_line_width);
        line(s, &self.layout.horizontal_axis);
        s.stroke();
    }

    fn draw_horizontal_labels<S: DrawingSurface + ?Sized>(&self, s: &mut S) {
        let labels = &self.layout.labels;
        s.set_text_align(TextAlign::Center);
        s.set_text_baseline(TextBaseline::Top);
        // slot labels share the vertical label size
        s.set_font(&self.theme.label_font.sized(labels.vertical_font_size));
        s.set_fill_style(self.theme.label);
        for bar in &self.layout.bars {
            s.fill_text(&bar.label, bar.slot.center_x, labels.horizontal_label_y);
        }
    }

    fn draw_horizontal_guidelines<S: DrawingSurface + ?Sized>(&self, s: &mut S) {
        s.set_stroke_style(self.theme.guideline);
        s.set_line_width(self.theme.guideline_width);
        for seg in &self.layout.horizontal_gridlines {
            s.begin_path();
            line(s, seg);
            s.stroke();
        }
    }

    fn draw_vertical_guidelines<S: DrawingSurface + ?Sized>(&self, s: &mut S) {
        s.set_stroke_style(self.theme.guideline);
        s.set_line_width(self.theme.guideline_width);
        for seg in &self.layout.vertical_gridlines {
            s.begin_path();
            line(s, seg);
            s.stroke();
        }
    }

    fn draw_bars<S, C>(&self, s: &mut S, colors: &mut C)
    where
        S: DrawingSurface + ?Sized,
        C: ColorSource + ?Sized,
    {
        s.set_line_width(self.theme.bar_stroke_width);
        for bar in &self.layout.bars {
            let base = colors.next_color();
            s.set_fill_style(base.with_alpha(self.theme.bar_fill_alpha));
            s.set_stroke_style(base.with_alpha(self.theme.bar_stroke_alpha));
            s.begin_path();
            let r = bar.rect;
            s.rect(r.x, r.y, r.width, r.height);
            s.stroke();
            s.fill();
        }
    }
}

fn line<S: DrawingSurface + ?Sized>(s: &mut S, seg: &Segment) {
    s.move_to(seg.from.x, seg.from.y);
    s.line_to(seg.to.x, seg.to.y);
}
