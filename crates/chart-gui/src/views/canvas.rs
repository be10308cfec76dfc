//! On-screen page with draggable glyphs
//!
//! The page is scaled to fit the panel; all positions are converted from
//! millimetres with the same pixels-per-millimetre ratio the drag controller
//! uses.

use chart_core::constants::{FIXATION_DIAMETER_MM, FIXATION_OPACITY, FIXATION_STROKE_MM, pt_to_mm};
use chart_core::{DragController, FontFamily};
use eframe::egui;

use crate::state::EditorState;
use crate::ui_components::to_color32;

/// Spacing and offset of the alignment grid (mm)
const GRID_SPACING_MM: f32 = 10.0;
const GRID_OFFSET_MM: (f32, f32) = (8.5, 5.0);
const GRID_OPACITY: f32 = 0.1;

const PAGE_PADDING_PX: f32 = 24.0;

pub fn show_canvas(ui: &mut egui::Ui, state: &mut EditorState, drag: &mut DragController) {
    let geometry = state.geometry();
    let available = ui.available_size() - egui::vec2(PAGE_PADDING_PX, PAGE_PADDING_PX) * 2.0;
    let px_per_mm = (available.x / geometry.width_mm)
        .min(available.y / geometry.height_mm)
        .max(0.1);
    let page_size = egui::vec2(geometry.width_mm, geometry.height_mm) * px_per_mm;

    ui.add_space(PAGE_PADDING_PX);
    let (page_response, painter) = ui
        .vertical_centered(|ui| ui.allocate_painter(page_size, egui::Sense::click()))
        .inner;
    let page = page_response.rect;
    let to_screen = |x: f32, y: f32| page.min + egui::vec2(x, y) * px_per_mm;

    let settings = state.config.page_settings;
    let text_color = to_color32(settings.text_color);

    painter.rect_filled(page.expand(2.0), 2.0, egui::Color32::from_black_alpha(40));
    painter.rect_filled(page, 0.0, to_color32(settings.bg_color));

    if state.config.show_grid {
        let stroke = egui::Stroke::new(1.0, text_color.gamma_multiply(GRID_OPACITY));
        let mut x = GRID_OFFSET_MM.0;
        while x <= geometry.width_mm {
            painter.line_segment([to_screen(x, 0.0), to_screen(x, geometry.height_mm)], stroke);
            x += GRID_SPACING_MM;
        }
        let mut y = GRID_OFFSET_MM.1;
        while y <= geometry.height_mm {
            painter.line_segment([to_screen(0.0, y), to_screen(geometry.width_mm, y)], stroke);
            y += GRID_SPACING_MM;
        }
    }

    if state.config.show_fixation {
        let (cx, cy) = geometry.center();
        painter.circle_stroke(
            to_screen(cx, cy),
            FIXATION_DIAMETER_MM / 2.0 * px_per_mm,
            egui::Stroke::new(
                FIXATION_STROKE_MM * px_per_mm,
                text_color.gamma_multiply(FIXATION_OPACITY),
            ),
        );
    }

    let family = match settings.font_family {
        FontFamily::Monospace => egui::FontFamily::Monospace,
        FontFamily::SansSerif | FontFamily::Serif => egui::FontFamily::Proportional,
    };

    let selected = state.layout.selected();
    let mut letter_hit = false;
    let pointer = ui.ctx().pointer_interact_pos();

    // Snapshot ids and positions first, the layout is mutated while dragging
    let letters: Vec<_> = state.layout.letters().to_vec();
    for letter in &letters {
        let center = to_screen(letter.x, letter.y);
        let font = egui::FontId::new((pt_to_mm(letter.font_size) * px_per_mm).max(1.0), family.clone());
        let glyph_rect = painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            letter.glyph,
            font,
            text_color,
        );

        if selected == Some(letter.id) {
            painter.rect_stroke(
                glyph_rect.expand(3.0),
                2.0,
                egui::Stroke::new(1.5, egui::Color32::from_rgb(59, 130, 246)),
                egui::StrokeKind::Outside,
            );
        }

        let response = ui
            .interact(
                glyph_rect.expand(2.0),
                ui.id().with(("letter", letter.id)),
                egui::Sense::click_and_drag(),
            )
            .on_hover_cursor(egui::CursorIcon::Grab);

        if response.clicked() {
            state.layout.select(letter.id);
            letter_hit = true;
        }
        if response.drag_started() {
            // drag_started fires past the drag threshold; anchor at the press
            let press = ui.input(|i| i.pointer.press_origin());
            if let Some(pos) = drag_anchor(press, pointer) {
                drag.pointer_down(&mut state.layout, letter.id, (pos.x, pos.y));
            }
            letter_hit = true;
        }
        if response.dragged() && drag.dragged_id() == Some(letter.id) {
            if let Some(pos) = pointer {
                drag.pointer_move(&mut state.layout, (pos.x, pos.y), page.width(), geometry);
            }
        }
        if response.drag_stopped() {
            drag.pointer_up();
        }
    }

    // Releasing anywhere ends a drag
    if drag.is_dragging() && !ui.input(|i| i.pointer.any_down()) {
        drag.pointer_up();
    }

    if page_response.clicked() && !letter_hit {
        state.layout.clear_selection();
    }
}

fn drag_anchor(press_origin: Option<egui::Pos2>, pointer: Option<egui::Pos2>) -> Option<egui::Pos2> {
    press_origin.or(pointer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_anchors_at_press_position() {
        let press = egui::pos2(100.0, 50.0);
        let current = egui::pos2(106.0, 50.0);
        assert_eq!(drag_anchor(Some(press), Some(current)), Some(press));
        assert_eq!(drag_anchor(None, Some(current)), Some(current));
        assert_eq!(drag_anchor(None, None), None);
    }
}
