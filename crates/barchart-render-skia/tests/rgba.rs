// File: crates/barchart-render-skia/tests/rgba.rs
// Purpose: Validate RGBA buffer shape and a few pixels.

use barchart_core::{BarChart, ChartConfig, DataPoint, Document, FixedColors, Page, Rgba, Theme};
use barchart_render_skia::SkiaSurface;

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let data = vec![DataPoint::new("a", 10.0), DataPoint::new("b", 5.0)];
    let mut page: Page<SkiaSurface> = Page::new().with_target("chart");
    let mut colors = FixedColors::new(vec![Rgba::rgb(0, 0, 255)]);
    BarChart::create_with(&mut page, "chart", ChartConfig::new(200.0, 200.0), &Theme::default(), data, &mut colors)
        .expect("chart");

    let surface = &mut page.target_mut("chart").unwrap().children_mut()[0];
    assert_eq!(surface.id(), "chart-1");
    let (px, w, h, stride) = surface.to_rgba8().expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Background is opaque white
    assert_eq!(pixel(&px, stride, 2, 2), [255, 255, 255, 255]);

    // Inside the first bar: 30% blue over white
    let [r, g, b, a] = pixel(&px, stride, 60, 60);
    assert_eq!(a, 255);
    assert_eq!(b, 255);
    assert!((170..=186).contains(&r), "r = {r}");
    assert!((170..=186).contains(&g), "g = {g}");

    // Above the second (half-height) bar there is only background
    assert_eq!(pixel(&px, stride, 140, 60), [255, 255, 255, 255]);
}
