use crate::layout::{self, LabelAnchor, Point, Segment};
use crate::style::PlotStyle;
use crate::surface::CanvasSurface;
use crate::RenderError;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use sigops_core::SignalFn;

/// What one plot pass draws.
#[derive(Debug, Clone)]
pub struct PlotInput {
    pub original: SignalFn,
    pub transformed: SignalFn,
    pub show_original: bool,
}

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

fn text_pos(anchor: LabelAnchor) -> Pos {
    match anchor {
        LabelAnchor::TopCenter => Pos::new(HPos::Center, VPos::Top),
        LabelAnchor::MiddleRight => Pos::new(HPos::Right, VPos::Center),
    }
}

fn draw_err(e: impl std::fmt::Display) -> RenderError {
    RenderError::Draw(e.to_string())
}

/// Paints a complete frame into the surface buffer.
///
/// Layers go background, grid, axes, ticks with labels, original curve,
/// transformed curve, axis titles. Text that cannot be rasterized (no usable
/// font on the system) is skipped with a warning; everything else is a hard
/// error.
pub fn draw_plot(
    surface: &mut CanvasSurface,
    input: &PlotInput,
    style: &PlotStyle,
) -> Result<(), RenderError> {
    let vp = *surface.viewport();
    let geometry = Geometry {
        scale: surface.scale(),
    };
    let size = surface.physical_size();

    let grid = layout::grid_lines(&vp);
    let axes = layout::axes(&vp);
    let time_ticks = layout::time_ticks(&vp);
    let amplitude_ticks = layout::amplitude_ticks(&vp);
    let original = input
        .show_original
        .then(|| layout::sample_curve(&input.original, &vp));
    let transformed = layout::sample_curve(&input.transformed, &vp);

    let root = BitMapBackend::with_buffer(surface.pixels_mut(), size).into_drawing_area();
    let mut text = TextPainter::default();

    root.fill(&style.background).map_err(draw_err)?;

    for line in &grid {
        geometry.segment(&root, line, style.grid, style.grid_width)?;
    }
    for axis in &axes {
        geometry.segment(&root, axis, style.axis, style.axis_width)?;
    }

    for tick in time_ticks.iter().chain(amplitude_ticks.iter()) {
        geometry.segment(&root, &tick.mark, style.tick, style.tick_width)?;
        if let Some(label) = &tick.label {
            let font = (style.font_family, style.label_size * geometry.scale)
                .into_font()
                .color(&style.label)
                .pos(text_pos(label.anchor));
            text.draw(&root, &label.text, geometry.point(label.at), font);
        }
    }

    if let Some(points) = &original {
        let (on, off) = style.original_dash;
        for dash in layout::dash_polyline(points, on, off) {
            geometry.polyline(&root, &dash, style.original, style.original_width)?;
        }
    }
    for run in finite_runs(&transformed) {
        geometry.polyline(&root, run, style.transformed, style.transformed_width)?;
    }

    let title_size = style.title_size * geometry.scale;
    for title in layout::axis_titles(&vp) {
        let font = (style.font_family, title_size, FontStyle::Bold).into_font();
        // Alignment applies in the unrotated frame; Rotate270 then turns a
        // top-aligned title so it extends right of its anchor.
        let font = if title.rotated {
            font.transform(FontTransform::Rotate270)
        } else {
            font
        };
        let font = font.color(&style.title).pos(text_pos(title.anchor));
        text.draw(&root, title.text, geometry.point(title.at), font);
    }

    root.present().map_err(draw_err)?;
    Ok(())
}

/// Splits a sampled curve wherever a sample is not finite.
fn finite_runs(points: &[Point]) -> impl Iterator<Item = &[Point]> {
    points
        .split(|(x, y)| !x.is_finite() || !y.is_finite())
        .filter(|run| run.len() >= 2)
}

/// Logical to physical conversion for one pass.
struct Geometry {
    scale: f64,
}

impl Geometry {
    fn point(&self, (x, y): Point) -> (i32, i32) {
        ((x * self.scale).round() as i32, (y * self.scale).round() as i32)
    }

    fn stroke(&self, color: RGBColor, width: f64) -> ShapeStyle {
        color.stroke_width(((width * self.scale).round() as u32).max(1))
    }

    fn segment(
        &self,
        root: &Area<'_>,
        segment: &Segment,
        color: RGBColor,
        width: f64,
    ) -> Result<(), RenderError> {
        self.polyline(root, &[segment.from, segment.to], color, width)
    }

    fn polyline(
        &self,
        root: &Area<'_>,
        points: &[Point],
        color: RGBColor,
        width: f64,
    ) -> Result<(), RenderError> {
        let path: Vec<(i32, i32)> = points.iter().map(|&p| self.point(p)).collect();
        root.draw(&PathElement::new(path, self.stroke(color, width)))
            .map_err(draw_err)
    }
}

#[derive(Default)]
struct TextPainter {
    failed: bool,
}

impl TextPainter {
    fn draw(&mut self, root: &Area<'_>, text: &str, at: (i32, i32), style: TextStyle<'_>) {
        if self.failed {
            return;
        }
        if let Err(e) = root.draw(&Text::new(text.to_string(), at, style)) {
            log::warn!("plot text skipped: {}", e);
            self.failed = true;
        }
    }
}
