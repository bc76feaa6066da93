use std::collections::HashMap;

use eframe::egui;
use image::RgbaImage;

/// GPU textures for icon previews, keyed by a stable string.
#[derive(Default)]
pub struct TextureCache {
    map: HashMap<String, egui::TextureHandle>,
}

impl TextureCache {
    pub fn get_or_load(
        &mut self,
        ctx: &egui::Context,
        key: &str,
        load: impl FnOnce() -> Option<RgbaImage>,
    ) -> Option<egui::TextureHandle> {
        if let Some(handle) = self.map.get(key) {
            return Some(handle.clone());
        }
        let img = load()?;
        let size = [img.width() as usize, img.height() as usize];
        let color = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
        let handle = ctx.load_texture(key, color, egui::TextureOptions::LINEAR);
        self.map.insert(key.to_string(), handle.clone());
        Some(handle)
    }

    pub fn forget(&mut self, key: &str) {
        self.map.remove(key);
    }

    pub fn forget_prefix(&mut self, prefix: &str) {
        self.map.retain(|k, _| !k.starts_with(prefix));
    }
}
