// File: crates/barchart-core/src/grid.rs
// Summary: Gridline layout helpers.

use crate::geometry::{Point, Segment};
use crate::layout::{AxisBounds, VerticalTick};

/// One horizontal guideline per vertical tick, spanning the full axis width.
pub fn horizontal_gridlines(axis: &AxisBounds, ticks: &[VerticalTick]) -> Vec<Segment> {
    let left = axis.horizontal_margin;
    let right = axis.horizontal_margin + axis.axis_width;
    ticks
        .iter()
        .map(|t| Segment::new(Point::new(left, t.pixel_y), Point::new(right, t.pixel_y)))
        .collect()
}

/// One vertical guideline per slot boundary (`item_count + 1` lines), drawn bottom to top.
pub fn vertical_gridlines(axis: &AxisBounds, item_count: usize) -> Vec<Segment> {
    let top = axis.vertical_margin;
    let bottom = axis.vertical_margin + axis.axis_height;
    let slot_width = axis.axis_width / item_count as f64;
    (0..=item_count)
        .map(|i| {
            let x = axis.horizontal_margin + i as f64 * slot_width;
            Segment::new(Point::new(x, bottom), Point::new(x, top))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_gridlines_cover_slot_boundaries() {
        let axis = AxisBounds { horizontal_margin: 10.0, vertical_margin: 5.0, axis_width: 500.0, axis_height: 90.0 };
        let lines = vertical_gridlines(&axis, 5);
        assert_eq!(lines.len(), 6);
        let xs: Vec<f64> = lines.iter().map(|s| s.from.x).collect();
        assert_eq!(xs, vec![10.0, 110.0, 210.0, 310.0, 410.0, 510.0]);
        assert_eq!(lines[0].from.y, 95.0);
        assert_eq!(lines[0].to.y, 5.0);
    }
}
