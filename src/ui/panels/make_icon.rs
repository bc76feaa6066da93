use eframe::egui;
use image::{RgbaImage, imageops};
use std::time::Instant;

use crate::transform::make_icon;
use crate::types::MaskShape;
use crate::ui::{GuiState, dialogs};

const PREVIEW: f32 = 240.0;

/// Render the Make Icon tab: import an image, then add it as-is or shaped.
pub fn show(ui: &mut egui::Ui, state: &mut GuiState) {
    let ctx = ui.ctx().clone();
    ui.vertical_centered(|ui| {
        ui.set_max_width(600.0);
        ui.add_space(16.0);

        let Some(draft) = state.session.draft.clone() else {
            let button = egui::Button::new(egui::RichText::new("＋ Select Icon Image").size(17.0).strong())
                .min_size(egui::vec2(240.0, 40.0));
            if ui.add(button).clicked() {
                if let Some(path) = dialogs::pick_files(&state.settings.icon_extensions, false)
                    .into_iter()
                    .next()
                {
                    state.import_draft(path, Instant::now());
                }
            }
            return;
        };

        let key = format!("draft:{}", draft.origin.display());
        if let Some(tex) = state
            .textures
            .get_or_load(&ctx, &key, || Some(preview_source(&draft.image)))
        {
            ui.add(
                egui::Image::new(&tex)
                    .max_size(egui::vec2(PREVIEW, PREVIEW))
                    .corner_radius(16.0),
            );
        }
        ui.weak(draft.origin.display().to_string());
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            let size = egui::vec2(140.0, 40.0);
            if ui
                .add(egui::Button::new(egui::RichText::new("Add Now").strong()).min_size(size))
                .clicked()
            {
                state.commit_draft(None, Instant::now());
            }
            if ui
                .add(egui::Button::new(egui::RichText::new("Edit Shape…").strong()).min_size(size))
                .clicked()
            {
                state.show_mask_editor = true;
            }
            if ui.add(egui::Button::new("Discard").min_size(size)).clicked() {
                state.discard_draft();
            }
        });
    });
}

/// Modal shape picker for the current draft.
pub fn mask_editor(ctx: &egui::Context, state: &mut GuiState) {
    if !state.show_mask_editor {
        return;
    }
    let Some(draft) = state.session.draft.clone() else {
        state.show_mask_editor = false;
        return;
    };

    egui::Window::new("Choose Icon Shape")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let shape = state.mask_choice;
                let key = format!("draft:mask:{:?}", shape);
                let texture = state.textures.get_or_load(ctx, &key, || {
                    make_icon(&preview_source(&draft.image), Some(shape))
                });
                if let Some(tex) = texture {
                    ui.add(egui::Image::new(&tex).max_size(egui::vec2(180.0, 180.0)));
                }
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    for shape in MaskShape::ALL {
                        ui.selectable_value(&mut state.mask_choice, shape, shape.label());
                    }
                });
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        state.show_mask_editor = false;
                    }
                    if ui.button("Apply").clicked() {
                        let mask = state.mask_choice;
                        state.show_mask_editor = false;
                        state.commit_draft(Some(mask), Instant::now());
                    }
                });
            });
        });
}

/// Downscale large imports so previews stay cheap to build.
fn preview_source(image: &RgbaImage) -> RgbaImage {
    let (w, h) = image.dimensions();
    let longest = w.max(h);
    if longest <= 480 {
        return image.clone();
    }
    let scale = 480.0 / longest as f32;
    let nw = ((w as f32 * scale).round() as u32).max(1);
    let nh = ((h as f32 * scale).round() as u32).max(1);
    imageops::thumbnail(image, nw, nh)
}
