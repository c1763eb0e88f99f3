use crate::utils::format_number;
use sigops_core::{ParamKind, ParamDef, ParamValue, TransformStore};
use std::collections::HashMap;

/// Draws one control row per parameter. Returns true when any stored value
/// changed.
pub(crate) fn parameter_controls(
    ui: &mut egui::Ui,
    store: &mut TransformStore,
    field_text: &mut HashMap<&'static str, String>,
) -> bool {
    let mut changed = false;
    let kind = store.kind();
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(kind.info().control_hint).strong());
            ui.add_space(6.0);
            for param in kind.parameters() {
                let row_changed = match param.kind {
                    ParamKind::Flag => flag_row(ui, store, param),
                    ParamKind::Number => {
                        let text = field_text.entry(param.name).or_default();
                        number_row(ui, store, param, text)
                    }
                };
                changed |= row_changed;
                ui.add_space(8.0);
            }
        });
    changed
}

fn flag_row(ui: &mut egui::Ui, store: &mut TransformStore, param: &ParamDef) -> bool {
    let mut value = store
        .parameter(param.name)
        .ok()
        .and_then(ParamValue::as_flag)
        .unwrap_or(false);
    if !ui.checkbox(&mut value, param.label).changed() {
        return false;
    }
    apply(store, param, ParamValue::Flag(value))
}

fn number_row(
    ui: &mut egui::Ui,
    store: &mut TransformStore,
    param: &ParamDef,
    text: &mut String,
) -> bool {
    let current = stored_number(store, param);
    let mut changed = false;

    ui.label(param.label);
    ui.horizontal(|ui| {
        let mut value = current;
        let slider = egui::Slider::new(&mut value, param.min..=param.max)
            .step_by(param.step)
            .clamp_to_range(false)
            .show_value(false);
        if ui.add(slider).changed() && apply(store, param, ParamValue::Number(value)) {
            *text = format_number(stored_number(store, param));
            changed = true;
        }

        let response = ui.add(egui::TextEdit::singleline(text).desired_width(72.0));
        if response.changed() {
            match store.set_parameter_text(param.name, text) {
                Ok(_) => changed = true,
                Err(err) => log::error!("{}", err),
            }
        }
        if response.lost_focus() {
            *text = format_number(stored_number(store, param));
        }
    });

    let [low, mid, high] = param.range_labels;
    ui.horizontal(|ui| {
        let small = |s: &str| egui::RichText::new(s.to_string()).small().weak();
        ui.label(small(low));
        ui.add_space(24.0);
        ui.label(small(mid));
        ui.add_space(24.0);
        ui.label(small(high));
    });
    changed
}

fn stored_number(store: &TransformStore, param: &ParamDef) -> f64 {
    store
        .parameter(param.name)
        .ok()
        .and_then(ParamValue::as_number)
        .unwrap_or(param.fallback)
}

fn apply(store: &mut TransformStore, param: &ParamDef, value: ParamValue) -> bool {
    match store.set_parameter(param.name, value) {
        Ok(changed) => changed,
        Err(err) => {
            log::error!("{}", err);
            false
        }
    }
}
