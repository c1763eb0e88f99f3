use sigops_core::DemoKind;
use sigops_plot::ResizeNotifier;

mod demo_view;
mod ui;
mod utils;

use demo_view::DemoView;

#[derive(Debug, Clone)]
pub struct GuiConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub initial_demo: DemoKind,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: "Signal Operations".to_string(),
            width: 960.0,
            height: 900.0,
            initial_demo: DemoKind::TimeShift,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("gui error: {0}")]
    Gui(String),
}

/// Opens the demo window and blocks until it is closed.
pub fn run_gui(config: GuiConfig) -> Result<(), GuiError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };
    let initial = config.initial_demo;
    log::info!("starting GUI on the {} demo", initial);

    eframe::run_native(
        &config.title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Box::new(GuiApp::new(initial))
        }),
    )
    .map_err(|err| GuiError::Gui(err.to_string()))
}

struct GuiApp {
    resize: ResizeNotifier,
    view: DemoView,
}

impl GuiApp {
    fn new(initial: DemoKind) -> Self {
        let resize = ResizeNotifier::new();
        let view = DemoView::mount(initial, &resize);
        Self { resize, view }
    }

    fn active(&self) -> DemoKind {
        self.view.kind()
    }

    /// Replaces the mounted demo with a fresh one at default parameters.
    fn switch_to(&mut self, kind: DemoKind) {
        if kind == self.active() {
            return;
        }
        log::debug!("switching demo {} -> {}", self.active(), kind);
        self.view = DemoView::mount(kind, &self.resize);
    }
}

impl eframe::App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.style_mut(|style| style.interaction.selectable_labels = false);

        egui::TopBottomPanel::top("demo_tabs").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("Signal Operations");
            ui.add_space(4.0);
            if let Some(kind) = ui::tab_bar(ui, self.active()) {
                self.switch_to(kind);
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| self.view.show(ui, &self.resize));
        });
    }
}
