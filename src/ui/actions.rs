//! Handlers behind the UI buttons. Everything runs synchronously on the UI
//! thread; the only deferred work is the status banner expiry.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{error, info};

use crate::core::{apply_icon, clear_icon, summary_message};
use crate::status::StatusBanner;
use crate::types::{BulkOperation, BulkOperationResult, BulkOutcome, MaskShape, Tab};

use super::GuiState;

impl GuiState {
    /// Expire the status banner and clear the folder selection if it asks for it.
    pub fn tick(&mut self, now: Instant) {
        if let Some(expired) = self.status.poll(now) {
            if expired.clears_selection {
                self.session.clear_folders();
            }
        }
    }

    /// Apply the selected icon to every selected folder.
    pub fn apply_icon_to_folders(&mut self, now: Instant) {
        let icon = match self.session.resolve_icon(self.settings.builtin_icon_size) {
            Ok(Some(icon)) => icon,
            Ok(None) => {
                self.status
                    .show(StatusBanner::failure("Choose an icon first."), now);
                return;
            }
            Err(e) => {
                error!("Cannot load selected icon: {:?}", e);
                self.status
                    .show(StatusBanner::failure("Could not apply the icon."), now);
                return;
            }
        };
        let result = apply_icon(self.writer.as_ref(), &icon, &self.session.folders);
        self.report(BulkOperation::Apply, &result, now);
    }

    /// Restore the default icon on every selected folder.
    pub fn reset_selected_folders(&mut self, now: Instant) {
        let result = clear_icon(self.writer.as_ref(), &self.session.folders);
        self.report(BulkOperation::Reset, &result, now);
    }

    fn report(&mut self, op: BulkOperation, result: &BulkOperationResult, now: Instant) {
        let text = summary_message(op, result);
        let banner = match result.outcome() {
            BulkOutcome::AllFailed => StatusBanner::failure(text),
            BulkOutcome::AllSucceeded | BulkOutcome::PartialSuccess => StatusBanner::success(text),
        };
        self.status.show(banner, now);
    }

    pub fn add_folders(&mut self, picked: Vec<PathBuf>) {
        let added = self.session.add_folders(picked);
        info!(added, total = self.session.folders.len(), "folders selected");
    }

    /// "Reset All": folders picked from an empty selection go straight to confirmation.
    pub fn request_reset_all(&mut self, picked_when_empty: impl FnOnce() -> Vec<PathBuf>) {
        if self.session.folders.is_empty() {
            self.add_folders(picked_when_empty());
        }
        self.confirm_reset = !self.session.folders.is_empty();
    }

    /// Load an image into the Make Icon draft.
    pub fn import_draft(&mut self, path: PathBuf, now: Instant) {
        self.textures.forget_prefix("draft:");
        if let Err(e) = self.session.import_draft(path.clone()) {
            error!("Import failed: {:?}", e);
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            self.status
                .show(StatusBanner::failure(format!("Cannot open {}.", name)), now);
        }
    }

    /// Turn the draft into a user icon and go back to Customize.
    pub fn commit_draft(&mut self, mask: Option<MaskShape>, now: Instant) {
        self.textures.forget_prefix("draft:");
        match self.session.commit_draft(mask) {
            Some(id) => {
                info!(id, ?mask, "user icon created");
                self.tab = Tab::Customize;
            }
            None => self.status.show(
                StatusBanner::failure("Could not create an icon from this image."),
                now,
            ),
        }
    }

    pub fn discard_draft(&mut self) {
        self.textures.forget_prefix("draft:");
        self.session.discard_draft();
    }

    pub fn remove_user_icon(&mut self, id: u64) {
        self.textures.forget(&format!("user:{}", id));
        self.session.remove_user_icon(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::core::test_support::RecordingWriter;
    use crate::status::Tone;
    use crate::types::BuiltInIcon;
    use std::time::Duration;

    fn state(writer: &RecordingWriter) -> GuiState {
        let settings = Settings {
            builtin_icon_size: 16,
            ..Settings::default()
        };
        GuiState::new(settings, Box::new(writer.clone()))
    }

    fn folders(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn successful_apply_clears_folders_after_banner_expires() {
        let writer = RecordingWriter::default();
        let mut st = state(&writer);
        st.session.select_builtin(BuiltInIcon::Folder);
        st.add_folders(folders(&["/f/a", "/f/b"]));

        let t0 = Instant::now();
        st.apply_icon_to_folders(t0);
        let banner = st.status.current().unwrap();
        assert_eq!(banner.tone, Tone::Success);
        assert_eq!(banner.text, "Icon applied to 2 folders.");

        st.tick(t0 + Duration::from_millis(1500));
        assert_eq!(st.session.folders.len(), 2);
        st.tick(t0 + Duration::from_secs(2));
        assert!(st.session.folders.is_empty());
        assert!(st.status.current().is_none());
        // icon choice survives
        assert!(st.session.icon.is_some());
    }

    #[test]
    fn failed_apply_keeps_folders_for_retry() {
        let writer = RecordingWriter::always_failing();
        let mut st = state(&writer);
        st.session.select_builtin(BuiltInIcon::Dark);
        st.add_folders(folders(&["/f/a"]));

        let t0 = Instant::now();
        st.apply_icon_to_folders(t0);
        assert_eq!(st.status.current().unwrap().tone, Tone::Failure);
        st.tick(t0 + Duration::from_secs(3));
        assert_eq!(st.session.folders, folders(&["/f/a"]));
    }

    #[test]
    fn partial_reset_reports_counts() {
        let writer = RecordingWriter::failing_on(&["/f/b"]);
        let mut st = state(&writer);
        st.add_folders(folders(&["/f/a", "/f/b", "/f/c"]));
        st.reset_selected_folders(Instant::now());
        let banner = st.status.current().unwrap();
        assert_eq!(banner.text, "Default icon restored on 2 folders; 1 failed.");
        assert!(banner.clears_selection);
        assert!(writer.calls.borrow().iter().all(|c| !c.with_icon));
    }

    #[test]
    fn second_operation_replaces_banner_and_restarts_expiry() {
        let writer = RecordingWriter::default();
        let mut st = state(&writer);
        st.session.select_builtin(BuiltInIcon::Folder);
        st.add_folders(folders(&["/f/a"]));

        let t0 = Instant::now();
        st.apply_icon_to_folders(t0);
        let t1 = t0 + Duration::from_millis(1500);
        st.reset_selected_folders(t1);

        st.tick(t0 + Duration::from_millis(2100));
        assert_eq!(
            st.status.current().map(|b| b.text.as_str()),
            Some("Default icon restored on 1 folder.")
        );
        assert_eq!(st.session.folders.len(), 1);

        st.tick(t1 + Duration::from_secs(2));
        assert!(st.status.current().is_none());
        assert!(st.session.folders.is_empty());
    }

    #[test]
    fn unreadable_file_icon_never_reaches_the_writer() {
        let writer = RecordingWriter::default();
        let mut st = state(&writer);
        st.session.select_file(PathBuf::from("/definitely/missing/icon.png"));
        st.add_folders(folders(&["/f/a"]));

        st.apply_icon_to_folders(Instant::now());
        assert_eq!(st.status.current().unwrap().tone, Tone::Failure);
        assert!(writer.calls.borrow().is_empty());
        assert_eq!(st.session.folders.len(), 1);
    }

    #[test]
    fn reset_all_on_empty_selection_picks_then_confirms() {
        let writer = RecordingWriter::default();
        let mut st = state(&writer);
        st.request_reset_all(Vec::new);
        assert!(!st.confirm_reset);

        st.request_reset_all(|| folders(&["/f/a"]));
        assert!(st.confirm_reset);
        assert_eq!(st.session.folders.len(), 1);
    }

    #[test]
    fn failed_import_shows_banner() {
        let writer = RecordingWriter::default();
        let mut st = state(&writer);
        st.import_draft(PathBuf::from("/missing/photo.png"), Instant::now());
        assert!(st.session.draft.is_none());
        assert_eq!(st.status.current().unwrap().text, "Cannot open photo.png.");
    }
}
