//! Light macOS-like theme for egui widgets.

use eframe::{egui, epaint};

/// Install the theme once at startup.
pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.window_fill = epaint::Color32::from_rgb(246, 246, 248);
    visuals.panel_fill = epaint::Color32::from_rgb(252, 252, 253);
    visuals.selection.bg_fill = epaint::Color32::from_rgb(0, 122, 255);
    visuals.widgets.hovered.bg_fill = epaint::Color32::from_rgb(238, 240, 244);
    visuals.widgets.inactive.corner_radius = epaint::CornerRadius::same(8);
    visuals.widgets.hovered.corner_radius = epaint::CornerRadius::same(8);
    visuals.widgets.active.corner_radius = epaint::CornerRadius::same(8);
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
    });
}
