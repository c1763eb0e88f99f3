//! Geometry of one plot pass in logical pixels.
//!
//! Nothing here touches a pixel buffer, so the placement of grid lines,
//! ticks, labels and curve samples can be checked directly.

use crate::style::PlotStyle;
use crate::viewport::{Viewport, AMPLITUDE_TICKS, TIME_TICKS};
use plotters::style::RGBColor;
use sigops_core::SignalFn;

pub const GRID_COLUMNS: u32 = 20;
pub const GRID_ROWS: u32 = 10;
pub const TICK_HALF_LENGTH: f64 = 5.0;
/// Amplitude labels closer than this to the top or bottom edge are dropped.
pub const LABEL_EDGE_MARGIN: f64 = 15.0;
const TIME_LABEL_OFFSET: f64 = 8.0;
const AMPLITUDE_LABEL_OFFSET: f64 = 10.0;

pub type Point = (f64, f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Where a label's anchor point sits relative to its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAnchor {
    TopCenter,
    MiddleRight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub text: String,
    pub at: Point,
    pub anchor: LabelAnchor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Pixel position along the tick's axis
    pub position: f64,
    pub mark: Segment,
    pub label: Option<TickLabel>,
}

/// Vertical then horizontal grid lines, edges included.
pub fn grid_lines(vp: &Viewport) -> Vec<Segment> {
    let w = vp.width() as f64;
    let h = vp.height();
    let columns = (0..=GRID_COLUMNS).map(|i| {
        let x = i as f64 * w / GRID_COLUMNS as f64;
        Segment::new((x, 0.0), (x, h))
    });
    let rows = (0..=GRID_ROWS).map(|i| {
        let y = i as f64 * h / GRID_ROWS as f64;
        Segment::new((0.0, y), (w, y))
    });
    columns.chain(rows).collect()
}

/// Time axis then amplitude axis, both through the geometric center.
pub fn axes(vp: &Viewport) -> [Segment; 2] {
    let w = vp.width() as f64;
    [
        Segment::new((0.0, vp.center_y()), (w, vp.center_y())),
        Segment::new((vp.center_x(), 0.0), (vp.center_x(), vp.height())),
    ]
}

pub fn tick_text(value: f64) -> String {
    format!("{}", value + 0.0)
}

pub fn time_ticks(vp: &Viewport) -> Vec<Tick> {
    let cy = vp.center_y();
    TIME_TICKS
        .iter()
        .map(|&value| {
            let x = vp.x_for_time(value);
            Tick {
                value,
                position: x,
                mark: Segment::new((x, cy - TICK_HALF_LENGTH), (x, cy + TICK_HALF_LENGTH)),
                label: Some(TickLabel {
                    text: tick_text(value),
                    at: (x, cy + TIME_LABEL_OFFSET),
                    anchor: LabelAnchor::TopCenter,
                }),
            }
        })
        .collect()
}

pub fn amplitude_ticks(vp: &Viewport) -> Vec<Tick> {
    let cx = vp.center_x();
    let h = vp.height();
    AMPLITUDE_TICKS
        .iter()
        .map(|&value| {
            let y = vp.y_for_amplitude(value);
            let visible = y >= LABEL_EDGE_MARGIN && y <= h - LABEL_EDGE_MARGIN;
            Tick {
                value,
                position: y,
                mark: Segment::new((cx - TICK_HALF_LENGTH, y), (cx + TICK_HALF_LENGTH, y)),
                label: visible.then(|| TickLabel {
                    text: tick_text(value),
                    at: (cx - AMPLITUDE_LABEL_OFFSET, y),
                    anchor: LabelAnchor::MiddleRight,
                }),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTitle {
    pub text: &'static str,
    pub at: Point,
    /// Alignment in the text's own frame, before any rotation
    pub anchor: LabelAnchor,
    /// Turned a quarter counter-clockwise, reading bottom to top
    pub rotated: bool,
}

/// The two axis titles. The amplitude title is rotated with its top edge on
/// the anchor, so it runs from x = 15 toward the plot and is centered
/// vertically.
pub fn axis_titles(vp: &Viewport) -> [AxisTitle; 2] {
    [
        AxisTitle {
            text: "Time (t)",
            at: (vp.width() as f64 - 40.0, vp.center_y() + 25.0),
            anchor: LabelAnchor::TopCenter,
            rotated: false,
        },
        AxisTitle {
            text: "Amplitude",
            at: (15.0, vp.height() / 2.0),
            anchor: LabelAnchor::TopCenter,
            rotated: true,
        },
    ]
}

/// One sample per pixel column, mapped to logical pixel coordinates.
///
/// Non-finite values are passed through unchanged.
pub fn sample_curve(signal: &SignalFn, vp: &Viewport) -> Vec<Point> {
    (0..vp.width())
        .map(|x| {
            let amplitude = signal.eval(vp.time_at_column(x));
            (x as f64, vp.y_for_amplitude(amplitude))
        })
        .collect()
}

/// Splits a polyline into dashes of length `on` separated by gaps of `off`.
///
/// The pattern runs continuously along the whole polyline, carrying over
/// from one segment to the next. A segment with a non-finite length ends the
/// current dash.
pub fn dash_polyline(points: &[Point], on: f64, off: f64) -> Vec<Vec<Point>> {
    let mut dashes = Vec::new();
    if points.len() < 2 {
        return dashes;
    }
    if on <= 0.0 || off <= 0.0 {
        dashes.push(points.to_vec());
        return dashes;
    }
    let period = on + off;
    let mut phase = 0.0;
    let mut current: Vec<Point> = Vec::new();

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let len = ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
        if !len.is_finite() {
            finish_dash(&mut current, &mut dashes);
            continue;
        }
        if phase < on && current.is_empty() {
            current.push(a);
        }
        let mut travelled = 0.0;
        let mut remaining = len;
        while remaining > 0.0 {
            let drawing = phase < on;
            let to_boundary = if drawing { on - phase } else { period - phase };
            if to_boundary > remaining {
                phase += remaining;
                remaining = 0.0;
                if drawing {
                    current.push(b);
                }
            } else {
                travelled += to_boundary;
                remaining -= to_boundary;
                let f = travelled / len;
                let p = (a.0 + (b.0 - a.0) * f, a.1 + (b.1 - a.1) * f);
                if drawing {
                    current.push(p);
                    finish_dash(&mut current, &mut dashes);
                    phase = on;
                } else {
                    current.clear();
                    current.push(p);
                    phase = 0.0;
                }
            }
        }
    }
    finish_dash(&mut current, &mut dashes);
    dashes
}

fn finish_dash(current: &mut Vec<Point>, dashes: &mut Vec<Vec<Point>>) {
    if current.len() >= 2 {
        dashes.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeKind {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: RGBColor,
    pub stroke: StrokeKind,
}

pub fn legend_entries(show_original: bool, style: &PlotStyle) -> Vec<LegendEntry> {
    let mut entries = Vec::with_capacity(2);
    if show_original {
        entries.push(LegendEntry {
            label: "Original Signal",
            color: style.original,
            stroke: StrokeKind::Dashed,
        });
    }
    entries.push(LegendEntry {
        label: "Transformed Signal",
        color: style.transformed,
        stroke: StrokeKind::Solid,
    });
    entries
}
