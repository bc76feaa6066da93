use eframe::egui;
use std::time::Instant;

use crate::ui::GuiState;
use crate::ui::panels::folders;

/// Render the Reset tab: pick folders to restore to the system icon.
pub fn show(ui: &mut egui::Ui, state: &mut GuiState) {
    ui.add_space(8.0);
    ui.label("Restore the default system icon on the selected folders.");
    ui.add_space(16.0);
    folders::pick_button(ui, state);
    ui.add_space(8.0);
    folders::list(ui, state);
}

/// Confirmation shown before "Reset All" runs.
pub fn confirm_dialog(ctx: &egui::Context, state: &mut GuiState) {
    if !state.confirm_reset {
        return;
    }
    egui::Window::new("Reset all selected folders?")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            let n = state.session.folders.len();
            ui.label(format!(
                "{} {} will get the default icon back. This cannot be undone.",
                n,
                if n == 1 { "folder" } else { "folders" }
            ));
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    state.confirm_reset = false;
                }
                let reset = egui::Button::new(
                    egui::RichText::new("Reset").color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::from_rgb(220, 68, 68));
                if ui.add(reset).clicked() {
                    state.confirm_reset = false;
                    state.reset_selected_folders(Instant::now());
                }
            });
        });
}
