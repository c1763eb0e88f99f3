//! Rasterizes an original and a transformed signal onto a fixed
//! t ∈ [−10, 10], amplitude ∈ [−2, 2] canvas.

pub mod layout;
pub mod rendering;
pub mod resize;
pub mod style;
pub mod surface;
pub mod view;
pub mod viewport;

use thiserror::Error;

pub use layout::{LegendEntry, StrokeKind};
pub use rendering::{draw_plot, PlotInput};
pub use resize::{ContainerSize, ResizeNotifier, ResizeSubscription};
pub use style::PlotStyle;
pub use surface::CanvasSurface;
pub use view::SignalPlot;
pub use viewport::Viewport;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    Draw(String),
}
