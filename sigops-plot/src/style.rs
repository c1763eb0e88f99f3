pub use plotters::style::RGBColor;

/// Colors, stroke widths and fonts used by the renderer. Widths and sizes are
/// in logical pixels; the surface scale factor is applied when drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotStyle {
    pub background: RGBColor,
    pub grid: RGBColor,
    pub grid_width: f64,
    pub axis: RGBColor,
    pub axis_width: f64,
    pub tick: RGBColor,
    pub tick_width: f64,
    pub label: RGBColor,
    pub label_size: f64,
    pub title: RGBColor,
    pub title_size: f64,
    pub original: RGBColor,
    pub original_width: f64,
    /// Dash pattern of the original curve: drawn length, gap length
    pub original_dash: (f64, f64),
    pub transformed: RGBColor,
    pub transformed_width: f64,
    pub font_family: &'static str,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            background: RGBColor(0xff, 0xff, 0xff),
            grid: RGBColor(0xe5, 0xe7, 0xeb),
            grid_width: 1.0,
            axis: RGBColor(0x9c, 0xa3, 0xaf),
            axis_width: 2.0,
            tick: RGBColor(0x6b, 0x72, 0x80),
            tick_width: 1.0,
            label: RGBColor(0x4b, 0x55, 0x63),
            label_size: 11.0,
            title: RGBColor(0x37, 0x41, 0x51),
            title_size: 12.0,
            original: RGBColor(0x94, 0xa3, 0xb8),
            original_width: 2.0,
            original_dash: (5.0, 5.0),
            transformed: RGBColor(0x63, 0x66, 0xf1),
            transformed_width: 3.0,
            font_family: "sans-serif",
        }
    }
}
