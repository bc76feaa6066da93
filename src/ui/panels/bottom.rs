use eframe::egui;
use std::time::Instant;

use crate::status::Tone;
use crate::types::Tab;
use crate::ui::panels::folders;
use crate::ui::{GuiState, dialogs};

/// Render the bottom bar: status banner or folder summary, plus the tab's action button.
pub fn show(ctx: &egui::Context, state: &mut GuiState) {
    if state.tab == Tab::MakeIcon && state.status.current().is_none() {
        return;
    }
    egui::TopBottomPanel::bottom("bottom_status")
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.set_height(56.0);
                if let Some(banner) = state.status.current() {
                    let color = match banner.tone {
                        Tone::Success => ui.visuals().selection.bg_fill,
                        Tone::Failure => egui::Color32::from_rgb(200, 70, 70),
                    };
                    ui.label(egui::RichText::new(&banner.text).color(color));
                } else if !state.session.folders.is_empty() {
                    if ui.small_button("✕").on_hover_text("Clear selection").clicked() {
                        state.session.clear_folders();
                    }
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(folders::summary(&state.session.folders)).weak(),
                        )
                        .truncate(),
                    );
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = egui::vec2(120.0, 40.0);
                    match state.tab {
                        Tab::Customize => {
                            let apply = egui::Button::new(egui::RichText::new("Apply").strong())
                                .min_size(size);
                            if ui.add_enabled(state.session.can_apply(), apply).clicked() {
                                state.apply_icon_to_folders(Instant::now());
                            }
                        }
                        Tab::Reset => {
                            let reset = egui::Button::new(egui::RichText::new("Reset All").strong())
                                .min_size(size);
                            if ui.add(reset).clicked() {
                                state.request_reset_all(|| dialogs::pick_directories(true));
                            }
                        }
                        Tab::MakeIcon => {}
                    }
                });
            });
        });
}
