use eframe::egui;

use crate::types::Tab;

/// Render the header with the current tab's title.
pub fn show(ctx: &egui::Context, tab: Tab) {
    egui::TopBottomPanel::top("top").show(ctx, |ui| {
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.heading(egui::RichText::new(tab.title()).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(format!("FolderGo v{}", env!("CARGO_PKG_VERSION")));
            });
        });
        ui.add_space(6.0);
    });
}
