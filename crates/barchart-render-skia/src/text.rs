// File: crates/barchart-render-skia/src/text.rs
// Summary: Label shaping with Skia textlayout; falls back to common system families.

use skia_safe as skia;
use skia::font_style::{Slant, Weight, Width};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use barchart_core::theme::FontSlant;
use barchart_core::Font;

const SERIF_FALLBACKS: [&str; 5] = ["Times New Roman", "Times", "Liberation Serif", "DejaVu Serif", "serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &Font, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size((font.size as f32).max(1.0));
        ts.set_color(color);
        let mut families = vec![font.family.as_str()];
        families.extend(SERIF_FALLBACKS.iter().copied().filter(|f| !f.eq_ignore_ascii_case(&font.family)));
        ts.set_font_families(families.as_slice());
        let slant = match font.slant {
            FontSlant::Normal => Slant::Upright,
            FontSlant::Italic => Slant::Italic,
        };
        ts.set_font_style(skia::FontStyle::new(Weight::from(i32::from(font.weight)), Width::NORMAL, slant));
        ts
    }

    /// Single-line paragraph, laid out unconstrained.
    pub fn layout(&self, text: &str, font: &Font, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(font, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }
}
