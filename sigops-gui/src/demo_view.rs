use crate::ui;
use crate::utils::format_number;
use sigops_core::{DemoKind, ParamValue, TransformStore};
use sigops_plot::{ContainerSize, PlotInput, ResizeNotifier, ResizeSubscription, SignalPlot};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

const FALLBACK_SIZE: ContainerSize = ContainerSize {
    width: 800,
    scale: 1.0,
};

/// One mounted demo: its parameter store, its plot, and the text buffers of
/// its numeric fields. Dropping the view drops the resize subscription.
pub(crate) struct DemoView {
    store: TransformStore,
    plot: Rc<RefCell<SignalPlot>>,
    _resize: ResizeSubscription,
    field_text: HashMap<&'static str, String>,
    canvas: ui::CanvasTexture,
}

impl DemoView {
    pub(crate) fn mount(kind: DemoKind, resize: &ResizeNotifier) -> Self {
        let store = TransformStore::new(kind);
        let size = resize.current().unwrap_or(FALLBACK_SIZE);
        let plot = Rc::new(RefCell::new(SignalPlot::new(size.width, size.scale)));

        let target = Rc::downgrade(&plot);
        let subscription = resize.subscribe(move |size| {
            if let Some(plot) = target.upgrade() {
                if let Err(err) = plot.borrow_mut().resize(size.width, size.scale) {
                    log::error!("plot redraw after resize failed: {}", err);
                }
            }
        });

        let field_text = default_field_text(kind);

        let mut view = Self {
            store,
            plot,
            _resize: subscription,
            field_text,
            canvas: ui::CanvasTexture::new(kind.id()),
        };
        view.refresh_plot();
        log::debug!("mounted {} demo at width {}", kind, size.width);
        view
    }

    pub(crate) fn kind(&self) -> DemoKind {
        self.store.kind()
    }

    pub(crate) fn show(&mut self, ui: &mut egui::Ui, resize: &ResizeNotifier) {
        ui::demo_info(ui, self.kind().info());
        ui.add_space(12.0);

        let mut changed = ui::parameter_controls(ui, &mut self.store, &mut self.field_text);
        if ui.button("Reset to defaults").clicked() {
            self.reset();
            changed = true;
        }
        if changed {
            self.refresh_plot();
        }
        ui.add_space(12.0);

        let width = ui.available_width().floor().max(1.0) as u32;
        let scale = ui.ctx().pixels_per_point() as f64;
        resize.notify(ContainerSize::new(width, scale));

        let plot = self.plot.borrow();
        if let Some(caption) = plot.caption() {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(caption).monospace().size(15.0).strong());
            });
        }
        ui.add_space(6.0);
        self.canvas.show(ui, &plot);
        ui.add_space(6.0);
        ui::legend(ui, &plot.legend());
        drop(plot);

        ui.add_space(10.0);
        ui::explanation(ui, &self.store.explanation());
        ui.add_space(10.0);
        ui::comparison_cards(ui, self.kind().info());
    }

    fn reset(&mut self) {
        self.store.reset();
        self.field_text = default_field_text(self.kind());
    }

    fn refresh_plot(&mut self) {
        let input = PlotInput {
            original: self.store.original().clone(),
            transformed: self.store.transformed().clone(),
            show_original: self.store.show_original(),
        };
        let mut plot = self.plot.borrow_mut();
        plot.set_caption(Some(self.store.caption()));
        if let Err(err) = plot.update(&input) {
            log::error!("plot redraw failed: {}", err);
        }
    }
}

fn default_field_text(kind: DemoKind) -> HashMap<&'static str, String> {
    kind.parameters()
        .iter()
        .filter_map(|param| match param.default {
            ParamValue::Number(value) => Some((param.name, format_number(value))),
            ParamValue::Flag(_) => None,
        })
        .collect()
}
