use eframe::egui;
use egui::{Color32, Vec2};

use crate::types::{StateColors, Tab};
use crate::ui::GuiState;
use crate::ui::list;

/// Render the left sidebar with the tab list.
pub fn show(ctx: &egui::Context, state: &mut GuiState) {
    let colors = StateColors {
        default: Color32::TRANSPARENT,
        hover: Color32::from_rgb(228, 230, 235),
        selected: Some(Color32::from_rgb(58, 128, 246)),
    };
    egui::SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(190.0)
        .show(ctx, |ui| {
            ui.add_space(12.0);
            for tab in Tab::ALL {
                let width = ui.available_width();
                let resp = list::sidebar_item(
                    ui,
                    tab.glyph(),
                    tab.title(),
                    Vec2::new(width, 28.0),
                    state.tab == tab,
                    &colors,
                );
                if resp.clicked() {
                    state.tab = tab;
                }
            }
        });
}
