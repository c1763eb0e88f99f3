use egui::RichText;
use sigops_core::{DemoInfo, DemoKind, InfoCard};

mod canvas;
mod controls;

pub(crate) use canvas::{legend, CanvasTexture};
pub(crate) use controls::parameter_controls;

/// Tab row over the four demos. Returns the tab clicked this frame.
pub(crate) fn tab_bar(ui: &mut egui::Ui, active: DemoKind) -> Option<DemoKind> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        for kind in DemoKind::ALL {
            let label = RichText::new(kind.info().tab_label).size(14.0);
            if ui.selectable_label(kind == active, label).clicked() {
                clicked = Some(kind);
            }
        }
    });
    clicked
}

pub(crate) fn demo_info(ui: &mut egui::Ui, info: &DemoInfo) {
    ui.label(RichText::new(info.heading).size(20.0).strong());
    ui.add_space(4.0);
    ui.label(info.summary);
    ui.add_space(6.0);
    ui.label(RichText::new(info.formula).monospace().size(16.0));
    ui.add_space(6.0);
    for note in info.notes {
        ui.label(format!("• {note}"));
    }
}

/// Comparison cards laid out side by side, then the standalone remark.
pub(crate) fn comparison_cards(ui: &mut egui::Ui, info: &DemoInfo) {
    if !info.cards.is_empty() {
        ui.columns(info.cards.len(), |columns| {
            for (column, card) in columns.iter_mut().zip(info.cards) {
                info_card(column, card, egui::Color32::from_gray(0xf3));
            }
        });
    }
    if let Some(remark) = &info.remark {
        ui.add_space(8.0);
        info_card(ui, remark, egui::Color32::from_rgb(0xfe, 0xf9, 0xc3));
    }
}

fn info_card(ui: &mut egui::Ui, card: &InfoCard, fill: egui::Color32) {
    egui::Frame::none()
        .fill(fill)
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(card.title).strong());
            ui.label(card.body);
            if let Some(example) = card.example {
                ui.label(RichText::new(example).small().italics());
            }
        });
}

pub(crate) fn explanation(ui: &mut egui::Ui, text: &str) {
    egui::Frame::none()
        .fill(egui::Color32::from_rgb(0xee, 0xf2, 0xff))
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(egui::Color32::from_rgb(0x37, 0x30, 0xa3)));
        });
}
