// File: crates/barchart-core/src/layout.rs
// Summary: Pure layout/scaling engine. Maps a config and an ordered value
// sequence to axis bounds, ticks, slots and bar rectangles. No drawing here.

use log::debug;

use crate::error::{ChartError, Result, ValueProblem};
use crate::geometry::{Point, Rect, Segment};
use crate::grid::{horizontal_gridlines, vertical_gridlines};
use crate::types::{ChartConfig, DataPoint};

/// Fraction of a slot left empty on each side of its bar.
const SLOT_INSET: f64 = 0.1;

/// Margins and the pixel span left for the plot area.
/// Margins are symmetric: the same value sits on both sides of an axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub horizontal_margin: f64,
    pub vertical_margin: f64,
    pub axis_width: f64,
    pub axis_height: f64,
}

impl AxisBounds {
    /// Y of the horizontal axis; bars rise from here.
    pub fn baseline(&self) -> f64 {
        self.vertical_margin + self.axis_height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueBounds {
    pub max_value: f64,
    /// `max_value` rounded up to the next multiple of ten.
    pub upper_bound: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VerticalTick {
    pub value: f64,
    pub pixel_y: f64,
    pub label: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalSlot {
    pub start_x: f64,
    pub center_x: f64,
    pub rect_x: f64,
    pub rect_width: f64,
}

/// A data point placed in its slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub slot: HorizontalSlot,
    pub rect: Rect,
}

/// Anchors and sizes for the two label rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelLayout {
    /// Right edge of the vertical tick labels.
    pub vertical_label_x: f64,
    /// Top edge of the slot labels.
    pub horizontal_label_y: f64,
    pub vertical_font_size: f64,
    pub horizontal_font_size: f64,
}

/// Everything the renderer needs, derived once per chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub config: ChartConfig,
    pub axis: AxisBounds,
    pub values: ValueBounds,
    pub ticks: Vec<VerticalTick>,
    pub slots: Vec<HorizontalSlot>,
    pub bars: Vec<Bar>,
    pub labels: LabelLayout,
    pub vertical_axis: Segment,
    pub horizontal_axis: Segment,
    pub horizontal_gridlines: Vec<Segment>,
    pub vertical_gridlines: Vec<Segment>,
}

impl ChartLayout {
    /// Validate `config` and `data` and derive the full geometry.
    ///
    /// Runs bounds -> ticks -> slots -> bar heights. Fails on the first
    /// invalid input; nothing is partially computed.
    pub fn compute(config: &ChartConfig, data: &[DataPoint]) -> Result<Self> {
        let axis = compute_axis_bounds(config)?;
        let values = compute_value_bounds(data.iter().map(|d| d.value))?;
        let item_count = data.len();

        let ticks = compute_vertical_ticks(values.upper_bound, item_count, &axis);
        let slots = compute_horizontal_slots(item_count, axis.axis_width, axis.horizontal_margin);

        let baseline = axis.baseline();
        let bars = data
            .iter()
            .zip(&slots)
            .enumerate()
            .map(|(index, (point, slot))| {
                let height = compute_bar_height(point.value, values.max_value, axis.axis_height)
                    .map_err(|e| match e {
                        ChartError::InvalidValue(p) => p.at_index(index).into(),
                        other => other,
                    })?;
                Ok(Bar {
                    label: point.label.clone(),
                    value: point.value,
                    slot: *slot,
                    rect: Rect::rising_from(slot.rect_x, baseline, slot.rect_width, height),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let labels = compute_label_layout(config, &axis);
        let top = axis.vertical_margin;
        let left = axis.horizontal_margin;
        let right = left + axis.axis_width;
        let vertical_axis = Segment::new(Point::new(left, top), Point::new(left, baseline));
        let horizontal_axis = Segment::new(Point::new(left, baseline), Point::new(right, baseline));

        let horizontal_gridlines = horizontal_gridlines(&axis, &ticks);
        let vertical_gridlines = vertical_gridlines(&axis, item_count);

        debug!(
            "layout: {} items, max={} upper={} axis={}x{} margins=({}, {})",
            item_count,
            values.max_value,
            values.upper_bound,
            axis.axis_width,
            axis.axis_height,
            axis.horizontal_margin,
            axis.vertical_margin,
        );

        Ok(Self {
            config: *config,
            axis,
            values,
            ticks,
            slots,
            bars,
            labels,
            vertical_axis,
            horizontal_axis,
            horizontal_gridlines,
            vertical_gridlines,
        })
    }

    pub fn item_count(&self) -> usize {
        self.bars.len()
    }

    pub fn slot_width(&self) -> f64 {
        self.axis.axis_width / self.item_count() as f64
    }
}

/// Margins are `dimension * axis_ratio / 100`, applied to both sides.
pub fn compute_axis_bounds(config: &ChartConfig) -> Result<AxisBounds> {
    let ChartConfig { width, height, axis_ratio_percent, font_ratio_percent } = *config;
    if !(width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite()) {
        return Err(ChartError::InvalidDimension { width, height });
    }
    // At 50% the two margins meet and nothing is left for the plot.
    if !(axis_ratio_percent > 0.0 && axis_ratio_percent < 50.0) {
        return Err(ChartError::InvalidRatio { name: "axis", value: axis_ratio_percent });
    }
    if !(font_ratio_percent > 0.0 && font_ratio_percent.is_finite()) {
        return Err(ChartError::InvalidRatio { name: "font", value: font_ratio_percent });
    }

    let horizontal_margin = width * axis_ratio_percent / 100.0;
    let vertical_margin = height * axis_ratio_percent / 100.0;
    Ok(AxisBounds {
        horizontal_margin,
        vertical_margin,
        axis_width: width - 2.0 * horizontal_margin,
        axis_height: height - 2.0 * vertical_margin,
    })
}

/// Maximum value and the axis ceiling (`ceil(max / 10) * 10`).
///
/// Every value must be finite and non-negative, and at least one must be
/// positive so bar heights can be scaled against the maximum.
pub fn compute_value_bounds<I>(values: I) -> Result<ValueBounds>
where
    I: IntoIterator<Item = f64>,
{
    let mut max_value: Option<f64> = None;
    for (index, value) in values.into_iter().enumerate() {
        if !value.is_finite() {
            return Err(ValueProblem::NotFinite { index }.into());
        }
        if value < 0.0 {
            return Err(ValueProblem::Negative { index, value }.into());
        }
        max_value = Some(max_value.map_or(value, |m: f64| m.max(value)));
    }

    let max_value = max_value.ok_or(ChartError::InsufficientData)?;
    if max_value == 0.0 {
        return Err(ValueProblem::AllZero.into());
    }
    Ok(ValueBounds { max_value, upper_bound: (max_value / 10.0).ceil() * 10.0 })
}

/// `item_count + 1` ticks, from `upper_bound` at the top of the axis down to 0
/// on the baseline. Tick count follows the number of data points.
pub fn compute_vertical_ticks(upper_bound: f64, item_count: usize, axis: &AxisBounds) -> Vec<VerticalTick> {
    if item_count == 0 {
        return Vec::new();
    }
    let n = item_count as f64;
    let value_step = upper_bound / n;
    let pixel_step = axis.axis_height / n;
    (0..=item_count)
        .map(|i| {
            // the baseline tick is pinned to 0, never a rounding residue
            let value = if i == item_count { 0.0 } else { upper_bound - i as f64 * value_step };
            VerticalTick {
                value,
                pixel_y: axis.vertical_margin + i as f64 * pixel_step,
                label: format_tick(value),
            }
        })
        .collect()
}

/// Equal-width slots across the axis; each bar keeps a 10% inset on both sides.
pub fn compute_horizontal_slots(item_count: usize, axis_width: f64, horizontal_margin: f64) -> Vec<HorizontalSlot> {
    if item_count == 0 {
        return Vec::new();
    }
    let slot_width = axis_width / item_count as f64;
    (0..item_count)
        .map(|i| {
            let start_x = horizontal_margin + i as f64 * slot_width;
            HorizontalSlot {
                start_x,
                center_x: start_x + slot_width / 2.0,
                rect_x: start_x + slot_width * SLOT_INSET,
                rect_width: slot_width * (1.0 - 2.0 * SLOT_INSET),
            }
        })
        .collect()
}

/// Bar height in pixels, scaled against the maximum value (not the rounded
/// upper bound), so the tallest bar always spans the full axis height.
///
/// The ratio is taken first: `value / max_value <= 1` keeps the product
/// finite even for values near `f64::MAX`.
pub fn compute_bar_height(value: f64, max_value: f64, axis_height: f64) -> Result<f64> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(ValueProblem::Unscalable { value }.into());
    }
    if !(max_value > 0.0 && max_value.is_finite()) {
        return Err(ValueProblem::AllZero.into());
    }
    Ok(axis_height * (value / max_value))
}

fn compute_label_layout(config: &ChartConfig, axis: &AxisBounds) -> LabelLayout {
    let ratio = config.axis_ratio_percent;
    LabelLayout {
        vertical_label_x: axis.horizontal_margin - axis.horizontal_margin / ratio,
        horizontal_label_y: axis.baseline() + axis.vertical_margin / ratio,
        vertical_font_size: config.height * config.font_ratio_percent / 100.0,
        horizontal_font_size: config.width * config.font_ratio_percent / 100.0,
    }
}

/// Values at or above this magnitude are printed in exponent form.
const EXPONENT_ABOVE: f64 = 1e21;
/// Non-zero values below this magnitude are printed in exponent form.
const EXPONENT_BELOW: f64 = 1e-6;

/// Shortest decimal that round-trips (`30`, `7.5`, `4.285714285714286`).
/// Very large or very small magnitudes switch to exponent form with a signed
/// exponent (`3.3333333333333335e+307`, `1e-7`).
pub fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || (magnitude > 0.0 && magnitude < EXPONENT_BELOW) {
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        }
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(width: f64, height: f64) -> AxisBounds {
        compute_axis_bounds(&ChartConfig::new(width, height)).unwrap()
    }

    #[test]
    fn margins_are_ten_percent_by_default() {
        let a = axis(600.0, 450.0);
        assert_eq!(a.horizontal_margin, 60.0);
        assert_eq!(a.vertical_margin, 45.0);
        assert_eq!(a.axis_width, 480.0);
        assert_eq!(a.axis_height, 360.0);
        assert_eq!(a.baseline(), 405.0);
    }

    #[test]
    fn rejects_bad_ratios() {
        let cfg = ChartConfig::new(600.0, 450.0).with_axis_ratio(50.0);
        assert!(matches!(compute_axis_bounds(&cfg), Err(ChartError::InvalidRatio { name: "axis", .. })));
        let cfg = ChartConfig::new(600.0, 450.0).with_axis_ratio(0.0);
        assert!(matches!(compute_axis_bounds(&cfg), Err(ChartError::InvalidRatio { name: "axis", .. })));
        let cfg = ChartConfig::new(600.0, 450.0).with_font_ratio(-1.0);
        assert!(matches!(compute_axis_bounds(&cfg), Err(ChartError::InvalidRatio { name: "font", .. })));
    }

    #[test]
    fn rejects_nan_dimensions() {
        let cfg = ChartConfig::new(f64::NAN, 450.0);
        assert!(matches!(compute_axis_bounds(&cfg), Err(ChartError::InvalidDimension { .. })));
    }

    #[test]
    fn ticks_divide_upper_bound_by_item_count() {
        let a = axis(600.0, 450.0);
        let ticks = compute_vertical_ticks(30.0, 4, &a);
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![30.0, 22.5, 15.0, 7.5, 0.0]);
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["30", "22.5", "15", "7.5", "0"]);
        assert_eq!(ticks[0].pixel_y, 45.0);
        assert_eq!(ticks[2].pixel_y, 225.0);
        assert_eq!(ticks[4].pixel_y, 405.0);
    }

    #[test]
    fn last_tick_is_exactly_zero_for_awkward_counts() {
        let a = axis(600.0, 450.0);
        let ticks = compute_vertical_ticks(30.0, 7, &a);
        assert_eq!(ticks.len(), 8);
        assert_eq!(ticks[7].value, 0.0);
        assert_eq!(ticks[7].label, "0");
    }

    #[test]
    fn label_anchors_follow_margins() {
        let cfg = ChartConfig::new(600.0, 450.0);
        let l = compute_label_layout(&cfg, &axis(600.0, 450.0));
        assert_eq!(l.vertical_label_x, 54.0);
        assert_eq!(l.horizontal_label_y, 409.5);
        assert_eq!(l.vertical_font_size, 13.5);
        assert_eq!(l.horizontal_font_size, 18.0);
    }

    #[test]
    fn bar_height_rejects_zero_max() {
        assert_eq!(compute_bar_height(0.0, 0.0, 400.0), Err(ChartError::InvalidValue(ValueProblem::AllZero)));
        assert_eq!(
            compute_bar_height(-1.0, 10.0, 400.0),
            Err(ChartError::InvalidValue(ValueProblem::Unscalable { value: -1.0 }))
        );
        assert!(matches!(
            compute_bar_height(f64::INFINITY, 10.0, 400.0),
            Err(ChartError::InvalidValue(ValueProblem::Unscalable { .. }))
        ));
    }

    #[test]
    fn bar_height_is_finite_near_f64_max() {
        assert_eq!(compute_bar_height(1e308, 1e308, 360.0).unwrap(), 360.0);
        assert_eq!(compute_bar_height(f64::MAX, f64::MAX, 360.0).unwrap(), 360.0);
        assert_eq!(compute_bar_height(5e307, 1e308, 360.0).unwrap(), 180.0);
    }

    #[test]
    fn tick_values_step_down_from_the_upper_bound() {
        let a = axis(600.0, 450.0);
        let labels: Vec<String> = compute_vertical_ticks(10.0, 3, &a).into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["10", "6.666666666666666", "3.333333333333333", "0"]);
        let ticks = compute_vertical_ticks(200.0, 6, &a);
        assert_eq!(ticks[2].label, "133.33333333333331");
        assert_eq!(ticks[6].value, 0.0);
    }

    #[test]
    fn huge_ticks_stay_finite_and_use_exponents() {
        let a = axis(600.0, 450.0);
        let ticks = compute_vertical_ticks(1e308, 3, &a);
        assert!(ticks.iter().all(|t| t.value.is_finite()));
        assert!(ticks.windows(2).all(|p| p[0].value > p[1].value));
        assert_eq!(ticks[0].label, "1e+308");
        assert_eq!(ticks[3].label, "0");
        assert!(ticks.iter().all(|t| t.label.len() < 32));
    }

    #[test]
    fn tick_format_switches_to_exponent_at_the_extremes() {
        assert_eq!(format_tick(3.3333333333333335e307), "3.3333333333333335e+307");
        assert_eq!(format_tick(1e21), "1e+21");
        assert_eq!(format_tick(999_999_999_999_999_900_000.0), "999999999999999900000");
        assert_eq!(format_tick(1e-7), "1e-7");
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(4.285714285714286), "4.285714285714286");
    }
}
