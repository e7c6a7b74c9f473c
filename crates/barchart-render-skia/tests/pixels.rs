// File: crates/barchart-render-skia/tests/pixels.rs
// Purpose: Raster pixels agree with the computed layout for every bar.

use barchart_core::{BarChart, ChartConfig, ChartLayout, DataPoint, Document, FixedColors, Page, Rgba, Theme};
use barchart_render_skia::SkiaSurface;

const PALETTE: [Rgba; 3] = [Rgba::rgb(230, 97, 1), Rgba::rgb(94, 60, 153), Rgba::rgb(26, 150, 65)];

fn data() -> Vec<DataPoint> {
    vec![
        DataPoint::new("Jan", 120.0),
        DataPoint::new("Feb", 45.0),
        DataPoint::new("March", 180.0),
        DataPoint::new("April", 90.0),
        DataPoint::new("May", 12.0),
    ]
}

fn pixel(px: &[u8], stride: usize, x: f64, y: f64) -> [u8; 4] {
    let i = y as usize * stride + x as usize * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

/// Channel of `c` at the theme's fill alpha blended over white.
fn over_white(c: u8) -> i32 {
    let a = Rgba::new(0, 0, 0, Theme::default().bar_fill_alpha).alpha_u8() as i32;
    (c as i32 * a + 255 * (255 - a)) / 255
}

fn near(got: u8, want: i32) -> bool {
    (got as i32 - want).abs() <= 3
}

#[test]
fn bar_interiors_match_layout_and_palette() {
    let config = ChartConfig::new(600.0, 450.0);
    let layout = ChartLayout::compute(&config, &data()).unwrap();

    let mut page: Page<SkiaSurface> = Page::new().with_target("chart");
    let mut colors = FixedColors::new(PALETTE.to_vec());
    BarChart::create_with(&mut page, "chart", config, &Theme::default(), data(), &mut colors).expect("chart");
    let surface = &mut page.target_mut("chart").unwrap().children_mut()[0];
    let (px, w, h, stride) = surface.to_rgba8().expect("rgba render");
    assert_eq!((w, h), (600, 450));

    for (i, bar) in layout.bars.iter().enumerate() {
        let want = PALETTE[i % PALETTE.len()];
        let cx = bar.rect.x + bar.rect.width / 2.0;
        let cy = bar.rect.y + bar.rect.height / 2.0;
        let [r, g, b, a] = pixel(&px, stride, cx, cy);
        assert_eq!(a, 255, "bar {i}");
        assert!(near(r, over_white(want.r)), "bar {i}: r = {r}");
        assert!(near(g, over_white(want.g)), "bar {i}: g = {g}");
        assert!(near(b, over_white(want.b)), "bar {i}: b = {b}");

        // y = 100 sits between the first two gridlines; only March reaches it
        let above = pixel(&px, stride, cx, 100.0);
        if bar.rect.y > 100.0 {
            assert_eq!(above, [255, 255, 255, 255], "bar {i} above");
        } else {
            assert_ne!(above, [255, 255, 255, 255], "bar {i} above");
        }
    }
}

#[test]
fn guidelines_and_margins() {
    let config = ChartConfig::new(600.0, 450.0);
    let mut page: Page<SkiaSurface> = Page::new().with_target("chart");
    let mut colors = FixedColors::new(PALETTE.to_vec());
    BarChart::create_with(&mut page, "chart", config, &Theme::default(), data(), &mut colors).expect("chart");
    let surface = &mut page.target_mut("chart").unwrap().children_mut()[0];
    let (px, _, _, stride) = surface.to_rgba8().expect("rgba render");

    // the second horizontal guideline runs at y = 117, above the Jan bar
    let rows = [pixel(&px, stride, 100.0, 116.0), pixel(&px, stride, 100.0, 117.0)];
    assert!(rows.iter().any(|p| p[0] < 255), "guideline missing: {rows:?}");
    assert!(rows.iter().all(|p| p[0] == p[1] && p[1] == p[2]), "guideline is gray: {rows:?}");

    // right margin is untouched
    assert_eq!(pixel(&px, stride, 580.0, 200.0), [255, 255, 255, 255]);
}
