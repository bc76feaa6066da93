//! Egui-based UI for FolderGo.
//!
//! This module defines the application state and the eframe App
//! implementation. Button handlers live in ui::actions, rendering in
//! ui::panels.

use std::time::Instant;

use eframe::{App, egui};

use crate::config::Settings;
use crate::core::IconWriter;
use crate::session::Session;
use crate::status::ExpiringStatus;
use crate::types::{MaskShape, Tab};

pub mod actions;
pub mod dialogs;
pub mod list;
pub mod panels;
pub mod textures;

use textures::TextureCache;

/// UI state owned by the main thread.
pub struct GuiState {
    pub settings: Settings,
    pub session: Session,
    pub status: ExpiringStatus,
    pub tab: Tab,

    // Make Icon shape editor
    pub mask_choice: MaskShape,
    pub show_mask_editor: bool,

    pub confirm_reset: bool,
    pub textures: TextureCache,

    writer: Box<dyn IconWriter>,
}

impl GuiState {
    pub fn new(settings: Settings, writer: Box<dyn IconWriter>) -> Self {
        let status = ExpiringStatus::new(settings.status_ttl);
        Self {
            settings,
            session: Session::default(),
            status,
            tab: Tab::default(),
            mask_choice: MaskShape::default(),
            show_mask_editor: false,
            confirm_reset: false,
            textures: TextureCache::default(),
            writer,
        }
    }
}

/// Main eframe application that renders and controls the UI.
pub struct FolderGoApp {
    pub state: GuiState,
}

impl FolderGoApp {
    pub fn new(settings: Settings, writer: Box<dyn IconWriter>) -> Self {
        Self {
            state: GuiState::new(settings, writer),
        }
    }
}

/// Egui frame update: expires status banners and lays out the panels.
impl App for FolderGoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.state.tick(now);

        panels::side::show(ctx, &mut self.state);
        panels::top::show(ctx, self.state.tab);
        panels::bottom::show(ctx, &mut self.state);
        egui::CentralPanel::default().show(ctx, |ui| match self.state.tab {
            Tab::Customize => panels::customize::show(ui, &mut self.state),
            Tab::MakeIcon => panels::make_icon::show(ui, &mut self.state),
            Tab::Reset => panels::reset::show(ui, &mut self.state),
        });
        panels::make_icon::mask_editor(ctx, &mut self.state);
        panels::reset::confirm_dialog(ctx, &mut self.state);

        // wake up exactly when the pending banner expires
        if let Some(remaining) = self.state.status.remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}
