use chart_core::HexColor;
use eframe::egui;
use std::ops::RangeInclusive;

/// Builder for drag values with optional range, suffix and speed
pub struct DragValueBuilder<'a, T> {
    value: &'a mut T,
    range: Option<RangeInclusive<T>>,
    suffix: Option<String>,
    speed: Option<f64>,
    decimals: Option<usize>,
}

impl<'a, T> DragValueBuilder<'a, T>
where
    T: egui::emath::Numeric,
{
    pub fn new(value: &'a mut T) -> Self {
        Self {
            value,
            range: None,
            suffix: None,
            speed: None,
            decimals: None,
        }
    }

    pub fn range(mut self, range: RangeInclusive<T>) -> Self {
        self.range = Some(range);
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut drag = egui::DragValue::new(self.value);

        if let Some(range) = self.range {
            drag = drag.range(range);
        }
        if let Some(suffix) = self.suffix {
            drag = drag.suffix(suffix);
        }
        if let Some(speed) = self.speed {
            drag = drag.speed(speed);
        }
        if let Some(decimals) = self.decimals {
            drag = drag.fixed_decimals(decimals);
        }

        ui.add(drag).changed()
    }
}

/// Label followed by a clamped drag value
pub fn labeled_drag_clamped<T>(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut T,
    range: RangeInclusive<T>,
    suffix: &str,
) -> bool
where
    T: egui::emath::Numeric,
{
    ui.horizontal(|ui| {
        ui.label(label);
        DragValueBuilder::new(value).range(range).suffix(suffix).show(ui)
    })
    .inner
}

/// Enum selector using ComboBox
pub fn enum_selector<T>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut T,
    options: &[(T, &str)],
) -> bool
where
    T: PartialEq + Clone,
{
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);

        let current_text = options
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, text)| *text)
            .unwrap_or("Unknown");

        egui::ComboBox::from_id_salt(id)
            .selected_text(current_text)
            .show_ui(ui, |ui| {
                for (option_value, option_text) in options {
                    changed |= ui
                        .selectable_value(value, option_value.clone(), *option_text)
                        .changed();
                }
            });
    });
    changed
}

/// Label, colour button and the hex value next to it
pub fn color_row(ui: &mut egui::Ui, label: &str, color: &mut HexColor) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        let mut rgb = color.to_array();
        let changed = ui.color_edit_button_srgb(&mut rgb).changed();
        if changed {
            *color = HexColor::from_array(rgb);
        }
        ui.monospace(color.to_string());
        changed
    })
    .inner
}

pub fn to_color32(color: HexColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

/// Heading plus separator used at the top of every sidebar section
pub fn section(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.add_space(8.0);
    ui.strong(title);
    ui.separator();
    add_contents(ui);
}
