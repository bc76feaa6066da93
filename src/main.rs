mod builtin;
mod config;
mod core;
mod osx;
mod session;
mod status;
mod style;
mod transform;
mod types;
mod ui;

use eframe::egui;

use crate::config::Settings;
use crate::types::BuiltInIcon;

fn main() -> eframe::Result<()> {
    config::init_logging();
    let settings = Settings::default();

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("FolderGo")
        .with_inner_size(settings.window_size)
        .with_min_inner_size(settings.min_window_size);
    if let Some(icon) = builtin::render(BuiltInIcon::Folder, 256) {
        let (width, height) = icon.dimensions();
        viewport = viewport.with_icon(egui::IconData {
            rgba: icon.into_raw(),
            width,
            height,
        });
    }
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    tracing::info!("starting FolderGo v{}", env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        "FolderGo",
        native_options,
        Box::new(move |cc| {
            style::apply_theme(&cc.egui_ctx);
            Ok(Box::new(ui::FolderGoApp::new(
                settings,
                Box::new(osx::WorkspaceIconWriter),
            )))
        }),
    )
}
