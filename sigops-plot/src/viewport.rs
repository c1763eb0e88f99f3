//! Fixed mapping between logical canvas pixels and time/amplitude.
//!
//! The viewport never depends on the plotted data: the full width always
//! spans t ∈ [−10, 10] and one amplitude unit is always a quarter of the
//! height, so ±2 fills the canvas vertically.

/// Half of the visible time window.
pub const TIME_HALF_SPAN: f64 = 10.0;
/// Half of the visible amplitude range.
pub const AMPLITUDE_HALF_SPAN: f64 = 2.0;

pub const ASPECT_RATIO: f64 = 0.375;
pub const MIN_CANVAS_HEIGHT: f64 = 200.0;
pub const MAX_CANVAS_HEIGHT: f64 = 300.0;

pub const TIME_TICKS: [f64; 5] = [-10.0, -5.0, 0.0, 5.0, 10.0];
pub const AMPLITUDE_TICKS: [f64; 5] = [2.0, 1.0, 0.0, -1.0, -2.0];

/// Canvas height for a container width.
pub fn canvas_height(width: u32) -> f64 {
    (width as f64 * ASPECT_RATIO).clamp(MIN_CANVAS_HEIGHT, MAX_CANVAS_HEIGHT)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: u32,
    height: f64,
}

impl Viewport {
    /// Viewport for a container `width` pixels wide, height derived from it.
    pub fn for_width(width: u32) -> Self {
        let width = width.max(1);
        Self {
            width,
            height: canvas_height(width),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center_x(&self) -> f64 {
        self.width as f64 / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.height / 2.0
    }

    /// Vertical pixels per amplitude unit.
    pub fn pixels_per_unit(&self) -> f64 {
        self.height / (2.0 * AMPLITUDE_HALF_SPAN)
    }

    /// Time sampled at pixel column `x`.
    pub fn time_at_column(&self, x: u32) -> f64 {
        let w = self.width as f64;
        ((x as f64 - w / 2.0) / w) * (2.0 * TIME_HALF_SPAN)
    }

    pub fn x_for_time(&self, t: f64) -> f64 {
        self.center_x() + (t / TIME_HALF_SPAN) * self.center_x()
    }

    pub fn y_for_amplitude(&self, amplitude: f64) -> f64 {
        self.center_y() - amplitude * self.pixels_per_unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_is_clamped() {
        assert_eq!(canvas_height(400), 200.0);
        assert_eq!(canvas_height(640), 240.0);
        assert_eq!(canvas_height(800), 300.0);
        assert_eq!(canvas_height(2000), 300.0);
    }

    #[test]
    fn columns_span_twenty_time_units() {
        let vp = Viewport::for_width(800);
        assert_eq!(vp.time_at_column(0), -10.0);
        assert_eq!(vp.time_at_column(400), 0.0);
        assert_eq!(vp.time_at_column(600), 5.0);
    }

    #[test]
    fn amplitude_quarter_height_per_unit() {
        let vp = Viewport::for_width(800);
        assert_eq!(vp.y_for_amplitude(0.0), 150.0);
        assert_eq!(vp.y_for_amplitude(1.0), 75.0);
        assert_eq!(vp.y_for_amplitude(-2.0), 300.0);
    }

    #[test]
    fn zero_width_is_bumped() {
        assert_eq!(Viewport::for_width(0).width(), 1);
    }
}
