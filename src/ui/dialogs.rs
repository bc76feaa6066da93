//! Native file choosers. Cancelling yields an empty list.

use std::path::PathBuf;

use home::home_dir;
use rfd::FileDialog;

fn dialog(title: &str) -> FileDialog {
    let mut d = FileDialog::new().set_title(title);
    if let Some(home) = home_dir() {
        d = d.set_directory(home);
    }
    d
}

/// Choose image files with one of `extensions`.
pub fn pick_files(extensions: &[&str], allow_multiple: bool) -> Vec<PathBuf> {
    let d = dialog("Select Icon").add_filter("Icon image", extensions);
    if allow_multiple {
        d.pick_files().unwrap_or_default()
    } else {
        d.pick_file().into_iter().collect()
    }
}

/// Choose directories.
pub fn pick_directories(allow_multiple: bool) -> Vec<PathBuf> {
    let d = dialog("Select Folders");
    if allow_multiple {
        d.pick_folders().unwrap_or_default()
    } else {
        d.pick_folder().into_iter().collect()
    }
}
