use eframe::egui;
use std::path::PathBuf;

use crate::core::reveal_in_finder;
use crate::ui::{GuiState, dialogs};

/// "Select Folders" / "Add Folders" button, merging the choice into the selection.
pub fn pick_button(ui: &mut egui::Ui, state: &mut GuiState) {
    let label = if state.session.folders.is_empty() {
        "＋ Select Folders"
    } else {
        "＋ Add Folders"
    };
    ui.vertical_centered(|ui| {
        let button = egui::Button::new(egui::RichText::new(label).size(17.0).strong())
            .min_size(egui::vec2(220.0, 40.0));
        if ui.add(button).clicked() {
            let picked = dialogs::pick_directories(true);
            state.add_folders(picked);
        }
    });
}

/// Scrollable list of selected folders with Reveal / remove buttons.
pub fn list(ui: &mut egui::Ui, state: &mut GuiState) {
    if state.session.folders.is_empty() {
        return;
    }
    let mut removed: Option<usize> = None;
    let mut reveal_error: Option<String> = None;
    egui::ScrollArea::vertical()
        .max_height(180.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.style_mut().wrap_mode = Some(egui::TextWrapMode::Truncate);
            for (i, p) in state.session.folders.iter().enumerate() {
                ui.horizontal(|ui| {
                    if ui.small_button("✕").on_hover_text("Remove from selection").clicked() {
                        removed = Some(i);
                    }
                    if ui.small_button("Reveal").clicked() {
                        if let Err(e) = reveal_in_finder(p) {
                            reveal_error = Some(format!("Cannot reveal {}: {:?}", p.display(), e));
                        }
                    }
                    ui.label(p.display().to_string());
                });
            }
        });
    if let Some(i) = removed {
        state.session.folders.remove(i);
    }
    if let Some(e) = reveal_error {
        tracing::warn!("{}", e);
    }
}

/// "3 folders selected: a, b, c"
pub fn summary(folders: &[PathBuf]) -> String {
    let names: Vec<String> = folders
        .iter()
        .map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| p.display().to_string())
        })
        .collect();
    let noun = if folders.len() == 1 { "folder" } else { "folders" };
    format!("{} {} selected: {}", folders.len(), noun, names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_last_components() {
        let folders = vec![PathBuf::from("/Users/me/Music"), PathBuf::from("/")];
        assert_eq!(summary(&folders), "2 folders selected: Music, /");
        assert_eq!(
            summary(&[PathBuf::from("/tmp/one")]),
            "1 folder selected: one"
        );
    }
}
