//! Session-scoped selection state: the chosen icon, the target folders and
//! the user's imported icons. Nothing here survives process exit.

use anyhow::{Context, Result};
use image::RgbaImage;
use std::path::PathBuf;
use std::sync::Arc;

use crate::builtin;
use crate::core::{load_image, merge_folder_targets};
use crate::transform::make_icon;
use crate::types::{BuiltInIcon, IconSource, MaskShape, UserIcon};

/// Image imported in the Make Icon tab, waiting to be turned into a user icon.
#[derive(Clone, Debug)]
pub struct Draft {
    pub origin: PathBuf,
    pub image: Arc<RgbaImage>,
}

#[derive(Debug, Default)]
pub struct Session {
    pub icon: Option<IconSource>,
    pub folders: Vec<PathBuf>,
    pub user_icons: Vec<UserIcon>,
    pub draft: Option<Draft>,
    next_icon_id: u64,
}

impl Session {
    pub fn select_builtin(&mut self, icon: BuiltInIcon) {
        self.icon = Some(IconSource::BuiltIn(icon));
    }

    pub fn select_file(&mut self, path: PathBuf) {
        self.icon = Some(IconSource::FileBacked(path));
    }

    /// Select a user icon by id. Unknown ids leave the selection untouched.
    pub fn select_user_icon(&mut self, id: u64) {
        if let Some(icon) = self.user_icons.iter().find(|u| u.id == id) {
            self.icon = Some(IconSource::UserDerived {
                id,
                image: icon.image.clone(),
                origin: icon.origin.clone(),
            });
        }
    }

    /// Remove a user icon; clears the selection when it was the selected one.
    pub fn remove_user_icon(&mut self, id: u64) {
        self.user_icons.retain(|u| u.id != id);
        if self.icon.as_ref().is_some_and(|s| s.is_user_icon(id)) {
            self.icon = None;
        }
    }

    pub fn add_folders(&mut self, folders: impl IntoIterator<Item = PathBuf>) -> usize {
        merge_folder_targets(&mut self.folders, folders)
    }

    pub fn clear_folders(&mut self) {
        self.folders.clear();
    }

    pub fn can_apply(&self) -> bool {
        self.icon.is_some() && !self.folders.is_empty()
    }

    /// Decode an image into the Make Icon draft slot.
    pub fn import_draft(&mut self, path: PathBuf) -> Result<()> {
        let image = load_image(&path)?;
        self.draft = Some(Draft {
            origin: path,
            image: Arc::new(image),
        });
        Ok(())
    }

    pub fn discard_draft(&mut self) {
        self.draft = None;
    }

    /// Turn the draft into a user icon (square crop, optional mask).
    ///
    /// Returns the new icon id, or `None` when there is no draft or the
    /// transform could not produce an image.
    pub fn commit_draft(&mut self, mask: Option<MaskShape>) -> Option<u64> {
        let draft = self.draft.take()?;
        let image = make_icon(&draft.image, mask)?;
        let id = self.next_icon_id;
        self.next_icon_id += 1;
        self.user_icons.push(UserIcon {
            id,
            origin: draft.origin,
            image: Arc::new(image),
            mask,
        });
        Some(id)
    }

    /// Produce the image to hand to the bulk engine for the current selection.
    pub fn resolve_icon(&self, builtin_size: u32) -> Result<Option<Arc<RgbaImage>>> {
        let Some(source) = &self.icon else {
            return Ok(None);
        };
        let image = match source {
            IconSource::BuiltIn(icon) => Arc::new(
                builtin::render(*icon, builtin_size)
                    .with_context(|| format!("Render built-in icon {}", icon.name()))?,
            ),
            IconSource::FileBacked(path) => Arc::new(load_image(path)?),
            IconSource::UserDerived { image, .. } => image.clone(),
        };
        Ok(Some(image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::fs;
    use tempfile::tempdir;

    fn with_draft(session: &mut Session, w: u32, h: u32) {
        session.draft = Some(Draft {
            origin: PathBuf::from("/pics/cat.png"),
            image: Arc::new(RgbaImage::from_pixel(w, h, Rgba([9, 9, 9, 255]))),
        });
    }

    #[test]
    fn selecting_one_source_replaces_another() {
        let mut s = Session::default();
        s.select_builtin(BuiltInIcon::Dark);
        s.select_file(PathBuf::from("/icons/a.png"));
        assert!(matches!(s.icon, Some(IconSource::FileBacked(_))));

        with_draft(&mut s, 10, 10);
        let id = s.commit_draft(None).unwrap();
        s.select_user_icon(id);
        assert!(s.icon.as_ref().unwrap().is_user_icon(id));
        s.select_builtin(BuiltInIcon::Folder);
        assert!(s.icon.as_ref().unwrap().is_builtin(BuiltInIcon::Folder));
    }

    #[test]
    fn commit_draft_crops_and_masks() {
        let mut s = Session::default();
        with_draft(&mut s, 30, 20);
        let id = s.commit_draft(Some(MaskShape::Circle)).unwrap();
        let icon = s.user_icons.iter().find(|u| u.id == id).unwrap();
        assert_eq!(icon.image.dimensions(), (20, 20));
        assert_eq!(icon.image.get_pixel(0, 0).0[3], 0);
        assert_eq!(icon.mask, Some(MaskShape::Circle));
        assert!(s.draft.is_none());
    }

    #[test]
    fn commit_without_draft_does_nothing() {
        let mut s = Session::default();
        assert!(s.commit_draft(None).is_none());
        assert!(s.user_icons.is_empty());
    }

    #[test]
    fn removing_selected_user_icon_clears_selection() {
        let mut s = Session::default();
        with_draft(&mut s, 8, 8);
        let first = s.commit_draft(None).unwrap();
        with_draft(&mut s, 8, 8);
        let second = s.commit_draft(None).unwrap();

        s.select_user_icon(second);
        s.remove_user_icon(first);
        assert!(s.icon.is_some());
        s.remove_user_icon(second);
        assert!(s.icon.is_none());
        assert!(s.user_icons.is_empty());
    }

    #[test]
    fn can_apply_needs_icon_and_folders() {
        let mut s = Session::default();
        assert!(!s.can_apply());
        s.add_folders(vec![PathBuf::from("/tmp/x")]);
        assert!(!s.can_apply());
        s.select_builtin(BuiltInIcon::Folder);
        assert!(s.can_apply());
        s.clear_folders();
        assert!(!s.can_apply());
    }

    #[test]
    fn file_backed_source_is_reread_at_resolve_time() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icon.png");
        RgbaImage::from_pixel(4, 4, Rgba([1, 1, 1, 255])).save(&path).unwrap();

        let mut s = Session::default();
        s.select_file(path.clone());
        assert_eq!(s.resolve_icon(16).unwrap().unwrap().dimensions(), (4, 4));

        RgbaImage::from_pixel(6, 6, Rgba([1, 1, 1, 255])).save(&path).unwrap();
        assert_eq!(s.resolve_icon(16).unwrap().unwrap().dimensions(), (6, 6));

        fs::remove_file(&path).unwrap();
        assert!(s.resolve_icon(16).is_err());
    }

    #[test]
    fn builtin_source_renders_at_configured_size() {
        let mut s = Session::default();
        assert!(s.resolve_icon(32).unwrap().is_none());
        s.select_builtin(BuiltInIcon::Download);
        assert_eq!(s.resolve_icon(32).unwrap().unwrap().dimensions(), (32, 32));
    }
}
