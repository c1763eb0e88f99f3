use sigops_plot::style::RGBColor;
use sigops_plot::{LegendEntry, SignalPlot, StrokeKind};

/// GPU copy of a plot surface, re-uploaded whenever the plot redraws.
pub(crate) struct CanvasTexture {
    name: String,
    texture: Option<egui::TextureHandle>,
    uploaded: Option<u64>,
}

impl CanvasTexture {
    pub(crate) fn new(demo_id: &str) -> Self {
        Self {
            name: format!("sigops_plot_{demo_id}"),
            texture: None,
            uploaded: None,
        }
    }

    fn sync(&mut self, ctx: &egui::Context, plot: &SignalPlot) {
        if self.uploaded == Some(plot.redraw_count()) && self.texture.is_some() {
            return;
        }
        let surface = plot.surface();
        let (w, h) = surface.physical_size();
        let image = egui::ColorImage::from_rgb([w as usize, h as usize], surface.pixels());
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.texture = Some(ctx.load_texture(
                    self.name.clone(),
                    image,
                    egui::TextureOptions::LINEAR,
                ))
            }
        }
        self.uploaded = Some(plot.redraw_count());
    }

    /// Shows the surface at its logical size.
    pub(crate) fn show(&mut self, ui: &mut egui::Ui, plot: &SignalPlot) {
        self.sync(ui.ctx(), plot);
        let Some(texture) = &self.texture else {
            return;
        };
        let viewport = plot.surface().viewport();
        let size = egui::vec2(viewport.width() as f32, viewport.height() as f32);
        let response = ui.image((texture.id(), size));
        ui.painter().rect_stroke(
            response.rect,
            egui::Rounding::same(4.0),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(0xe5, 0xe7, 0xeb)),
        );
    }
}

/// Legend row under the canvas.
pub(crate) fn legend(ui: &mut egui::Ui, entries: &[LegendEntry]) {
    ui.horizontal(|ui| {
        for entry in entries {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(32.0, 12.0), egui::Sense::hover());
            let color = to_color32(entry.color);
            let y = rect.center().y;
            let points = [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)];
            match entry.stroke {
                StrokeKind::Solid => {
                    ui.painter()
                        .line_segment(points, egui::Stroke::new(3.0, color));
                }
                StrokeKind::Dashed => {
                    ui.painter().extend(egui::Shape::dashed_line(
                        &points,
                        egui::Stroke::new(2.0, color),
                        5.0,
                        5.0,
                    ));
                }
            }
            ui.label(entry.label);
            ui.add_space(16.0);
        }
    });
}

fn to_color32(color: RGBColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.0, color.1, color.2)
}
