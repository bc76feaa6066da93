use eframe::egui;
use eframe::epaint::StrokeKind;

use crate::builtin;
use crate::types::{BuiltInIcon, IconSource, UserIcon};
use crate::ui::panels::folders;
use crate::ui::{GuiState, dialogs};

const TILE: f32 = 100.0;

/// Render the Customize tab: icon choice and folder selection.
pub fn show(ui: &mut egui::Ui, state: &mut GuiState) {
    let ctx = ui.ctx().clone();

    ui.label(egui::RichText::new("Liquid Glass Icons").strong().size(15.0));
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 36.0;
            for icon in BuiltInIcon::ALL {
                let selected = state.session.icon.as_ref().is_some_and(|s| s.is_builtin(icon));
                let texture = state
                    .textures
                    .get_or_load(&ctx, &format!("builtin:{}", icon.name()), || {
                        builtin::render(icon, 200)
                    });
                ui.vertical(|ui| {
                    if let Some(tex) = texture {
                        if tile(ui, &tex, selected).clicked() {
                            state.session.select_builtin(icon);
                        }
                    }
                    ui.small(icon.label());
                });
            }
        });
        ui.add_space(12.0);
    });

    if !state.session.user_icons.is_empty() {
        ui.add_space(8.0);
        ui.label(egui::RichText::new("My Icons").strong().size(15.0));
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            egui::ScrollArea::horizontal().show(ui, |ui| {
                ui.horizontal(|ui| {
                    let icons = state.session.user_icons.clone();
                    for user_icon in icons {
                        let selected = state
                            .session
                            .icon
                            .as_ref()
                            .is_some_and(|s| s.is_user_icon(user_icon.id));
                        let texture = state.textures.get_or_load(
                            &ctx,
                            &format!("user:{}", user_icon.id),
                            || Some((*user_icon.image).clone()),
                        );
                        ui.vertical(|ui| {
                            if let Some(tex) = texture {
                                if tile(ui, &tex, selected)
                                    .on_hover_text(hover_text(&user_icon))
                                    .clicked()
                                {
                                    state.session.select_user_icon(user_icon.id);
                                }
                            }
                            if selected && ui.small_button("Remove").clicked() {
                                state.remove_user_icon(user_icon.id);
                            }
                        });
                    }
                });
            });
        });
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Use Image File…").clicked() {
            if let Some(path) = dialogs::pick_files(&state.settings.icon_extensions, false)
                .into_iter()
                .next()
            {
                state.session.select_file(path);
            }
        }
        match &state.session.icon {
            Some(IconSource::FileBacked(path)) => {
                ui.weak(format!("Selected file: {}", path.display()));
            }
            Some(IconSource::UserDerived { origin, .. }) => {
                ui.weak(format!("Made from: {}", origin.display()));
            }
            _ => {}
        }
    });

    ui.add_space(16.0);
    folders::pick_button(ui, state);
    ui.add_space(8.0);
    folders::list(ui, state);
}

fn hover_text(icon: &UserIcon) -> String {
    match icon.mask {
        Some(shape) => format!("{} ({})", icon.origin.display(), shape.label()),
        None => icon.origin.display().to_string(),
    }
}

/// Clickable icon tile with an accent outline when selected.
fn tile(ui: &mut egui::Ui, tex: &egui::TextureHandle, selected: bool) -> egui::Response {
    let resp = ui.add(
        egui::Image::new((tex.id(), egui::vec2(TILE, TILE)))
            .corner_radius(20.0)
            .sense(egui::Sense::click()),
    );
    if selected {
        let accent = ui.visuals().selection.bg_fill;
        ui.painter().rect_stroke(
            resp.rect,
            12.0,
            egui::Stroke::new(2.0, accent),
            StrokeKind::Outside,
        );
    }
    resp
}
