use crate::viewport::Viewport;

/// RGB pixel buffer sized for a viewport at a display scale factor.
///
/// All geometry is expressed in logical pixels; the buffer itself holds
/// `floor(logical * scale)` physical pixels in each direction.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    viewport: Viewport,
    scale: f64,
    physical: (u32, u32),
    pixels: Vec<u8>,
}

impl CanvasSurface {
    pub fn new(width: u32, scale: f64) -> Self {
        let mut surface = Self {
            viewport: Viewport::for_width(width),
            scale: 1.0,
            physical: (0, 0),
            pixels: Vec::new(),
        };
        surface.resize(width, scale);
        surface
    }

    /// Resizes the backing buffer. The contents are cleared to black and
    /// must be redrawn. Returns `false` when size and scale are unchanged.
    pub fn resize(&mut self, width: u32, scale: f64) -> bool {
        let scale = sanitize_scale(scale);
        let viewport = Viewport::for_width(width);
        if viewport == self.viewport && scale == self.scale && !self.pixels.is_empty() {
            return false;
        }
        self.viewport = viewport;
        self.scale = scale;
        let pw = ((viewport.width() as f64 * scale).floor() as u32).max(1);
        let ph = ((viewport.height() * scale).floor() as u32).max(1);
        self.physical = (pw, ph);
        self.pixels = vec![0; pw as usize * ph as usize * 3];
        true
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn physical_size(&self) -> (u32, u32) {
        self.physical
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Color of the physical pixel at (`x`, `y`).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        let (pw, ph) = self.physical;
        if x >= pw || y >= ph {
            return None;
        }
        let i = (y as usize * pw as usize + x as usize) * 3;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }
}

fn sanitize_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}
