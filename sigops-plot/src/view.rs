use crate::layout::{self, LegendEntry};
use crate::rendering::{draw_plot, PlotInput};
use crate::style::PlotStyle;
use crate::surface::CanvasSurface;
use crate::RenderError;

/// A mounted plot: a surface plus the inputs it was last drawn with.
///
/// Redraws happen only when the function identities, the original-curve
/// flag or the container size change. A resize redraws immediately with
/// the functions of the last update.
pub struct SignalPlot {
    surface: CanvasSurface,
    style: PlotStyle,
    caption: Option<String>,
    drawn: Option<PlotInput>,
    // Set when the last draw of `drawn` failed; the next update retries it.
    draw_failed: bool,
    redraw_count: u64,
}

impl SignalPlot {
    pub fn new(width: u32, scale: f64) -> Self {
        Self::with_style(width, scale, PlotStyle::default())
    }

    pub fn with_style(width: u32, scale: f64, style: PlotStyle) -> Self {
        Self {
            surface: CanvasSurface::new(width, scale),
            style,
            caption: None,
            drawn: None,
            draw_failed: false,
            redraw_count: 0,
        }
    }

    pub fn set_caption(&mut self, caption: Option<String>) {
        self.caption = caption;
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Draws `input` unless it is the same as what is already on the surface.
    pub fn update(&mut self, input: &PlotInput) -> Result<bool, RenderError> {
        if let Some(drawn) = self.drawn.as_ref().filter(|_| !self.draw_failed) {
            if drawn.original.same_as(&input.original)
                && drawn.transformed.same_as(&input.transformed)
                && drawn.show_original == input.show_original
            {
                return Ok(false);
            }
        }
        self.draw(input.clone())?;
        Ok(true)
    }

    /// Applies a new container size, redrawing with the last inputs.
    pub fn resize(&mut self, width: u32, scale: f64) -> Result<bool, RenderError> {
        if !self.surface.resize(width, scale) {
            return Ok(false);
        }
        log::debug!(
            "plot resized to {}x{} (scale {})",
            self.surface.viewport().width(),
            self.surface.viewport().height(),
            self.surface.scale()
        );
        match self.drawn.take() {
            Some(input) => {
                self.draw(input)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn draw(&mut self, input: PlotInput) -> Result<(), RenderError> {
        let result = draw_plot(&mut self.surface, &input, &self.style);
        self.draw_failed = result.is_err();
        // Kept even on failure so a later resize can retry with it.
        self.drawn = Some(input);
        result?;
        self.redraw_count += 1;
        Ok(())
    }

    pub fn surface(&self) -> &CanvasSurface {
        &self.surface
    }

    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        let show_original = self.drawn.as_ref().map_or(true, |d| d.show_original);
        layout::legend_entries(show_original, &self.style)
    }

    /// Number of completed draws, used by hosts to know when to re-upload.
    pub fn redraw_count(&self) -> u64 {
        self.redraw_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigops_core::{DemoKind, TransformStore};

    fn input() -> PlotInput {
        let store = TransformStore::new(DemoKind::TimeShift);
        PlotInput {
            original: store.original().clone(),
            transformed: store.transformed().clone(),
            show_original: true,
        }
    }

    #[test]
    fn failed_draw_is_retried_by_identical_update() {
        let input = input();
        let mut plot = SignalPlot::new(400, 1.0);
        assert!(plot.update(&input).expect("draw"));
        assert!(!plot.update(&input).expect("draw"));

        plot.draw_failed = true;
        assert!(plot.update(&input).expect("retry"));
        assert!(!plot.draw_failed);
        assert_eq!(plot.redraw_count(), 2);
        assert!(!plot.update(&input).expect("draw"));
    }
}
