use crate::types::StateColors;
use eframe::emath::{Align2, Vec2};
use eframe::epaint::{FontId, StrokeKind};
use egui::{Response, Sense, Ui};

/// Full-width sidebar row with a leading glyph, painted by hand so hover and
/// selection colors follow `colors` instead of the theme.
pub fn sidebar_item(
    ui: &mut Ui,
    glyph: &str,
    text: &str,
    size: Vec2,
    selected: bool,
    colors: &StateColors,
) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact_selectable(&response, selected);

        let bg_color = if selected {
            colors.selected.unwrap_or(visuals.bg_fill)
        } else if response.hovered() {
            colors.hover
        } else {
            colors.default
        };
        let text_color = if selected {
            egui::Color32::WHITE
        } else {
            visuals.text_color()
        };

        let corner = 6.0;
        ui.painter().rect_filled(rect, corner, bg_color);
        if selected {
            ui.painter()
                .rect_stroke(rect, corner, visuals.bg_stroke, StrokeKind::Inside);
        }

        let glyph_pos = rect.left_center() + Vec2::new(10.0, 0.0);
        ui.painter().text(
            glyph_pos,
            Align2::LEFT_CENTER,
            glyph,
            FontId::proportional(14.0),
            text_color,
        );
        ui.painter().text(
            glyph_pos + Vec2::new(24.0, 0.0),
            Align2::LEFT_CENTER,
            text,
            FontId::proportional(14.0),
            text_color,
        );
    }

    response
}
