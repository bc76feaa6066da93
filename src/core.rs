use anyhow::{Context, Result, anyhow, bail};
use icns::{IconFamily, PixelFormat};
use image::RgbaImage;
use std::{
    collections::HashSet,
    fs::{self, File},
    io::BufReader,
    path::{Path, PathBuf},
    process::Command,
};
use tracing::{debug, info, warn};

use crate::types::{BulkOperation, BulkOperationResult, BulkOutcome};

// Core/business logic: the bulk icon engine, folder selection merging,
// image decoding and Finder helpers.

/// OS facility that reads and writes per-folder custom icon metadata.
pub trait IconWriter {
    /// Set `icon` as the custom icon of `path`, or restore the default icon when `None`.
    fn set_custom_icon(&self, path: &Path, icon: Option<&RgbaImage>) -> bool;

    /// Tell other OS views that `path` changed. Best-effort.
    fn notify_metadata_changed(&self, path: &Path);
}

/// Apply `icon` to every target independently and tally the results.
pub fn apply_icon<W: IconWriter + ?Sized>(
    writer: &W,
    icon: &RgbaImage,
    targets: &[PathBuf],
) -> BulkOperationResult {
    run_bulk(writer, BulkOperation::Apply, Some(icon), targets)
}

/// Restore the system default icon on every target.
pub fn clear_icon<W: IconWriter + ?Sized>(writer: &W, targets: &[PathBuf]) -> BulkOperationResult {
    run_bulk(writer, BulkOperation::Reset, None, targets)
}

fn run_bulk<W: IconWriter + ?Sized>(
    writer: &W,
    op: BulkOperation,
    icon: Option<&RgbaImage>,
    targets: &[PathBuf],
) -> BulkOperationResult {
    info!(?op, targets = targets.len(), "starting bulk icon operation");
    let result = targets
        .iter()
        .fold(BulkOperationResult::default(), |mut acc, target| {
            if writer.set_custom_icon(target, icon) {
                writer.notify_metadata_changed(target);
                debug!(path = %target.display(), "icon updated");
                acc.success_count += 1;
            } else {
                warn!(path = %target.display(), ?op, "failed to update folder icon");
                acc.failure_count += 1;
            }
            acc
        });
    info!(
        ?op,
        total = result.total(),
        succeeded = result.success_count,
        failed = result.failure_count,
        "bulk icon operation finished"
    );
    result
}

/// User-facing summary of a finished bulk run.
pub fn summary_message(op: BulkOperation, result: &BulkOperationResult) -> String {
    let ok = result.success_count;
    let failed = result.failure_count;
    match (op, result.outcome()) {
        (BulkOperation::Apply, BulkOutcome::AllSucceeded) => {
            format!("Icon applied to {}.", folders(ok))
        }
        (BulkOperation::Apply, BulkOutcome::PartialSuccess) => {
            format!("Icon applied to {}; {} failed.", folders(ok), failed)
        }
        (BulkOperation::Apply, BulkOutcome::AllFailed) => "Could not apply the icon.".to_string(),
        (BulkOperation::Reset, BulkOutcome::AllSucceeded) => {
            format!("Default icon restored on {}.", folders(ok))
        }
        (BulkOperation::Reset, BulkOutcome::PartialSuccess) => {
            format!("Default icon restored on {}; {} failed.", folders(ok), failed)
        }
        (BulkOperation::Reset, BulkOutcome::AllFailed) => {
            "Could not restore the default icon.".to_string()
        }
    }
}

fn folders(n: usize) -> String {
    if n == 1 {
        "1 folder".to_string()
    } else {
        format!("{} folders", n)
    }
}

/// Merge newly chosen folders into the selection, dropping canonical duplicates.
///
/// Keeps first-appearance order. Returns how many folders were added.
pub fn merge_folder_targets(
    existing: &mut Vec<PathBuf>,
    incoming: impl IntoIterator<Item = PathBuf>,
) -> usize {
    let before = existing.len();
    let mut seen: HashSet<PathBuf> = existing.iter().map(|p| canonical_key(p)).collect();
    for path in incoming {
        if seen.insert(canonical_key(&path)) {
            existing.push(path);
        }
    }
    existing.len() - before
}

fn canonical_key(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Decode an image file into RGBA. `.icns` files yield their largest icon.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let is_icns = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("icns"));
    if is_icns {
        return load_icns(path);
    }
    let img = image::open(path).with_context(|| format!("Decode image {:?}", path))?;
    Ok(img.to_rgba8())
}

fn load_icns(path: &Path) -> Result<RgbaImage> {
    let file = File::open(path).with_context(|| format!("Open {:?}", path))?;
    let family =
        IconFamily::read(BufReader::new(file)).with_context(|| format!("Read icns {:?}", path))?;
    let mut types = family.available_icons();
    if types.is_empty() {
        return Err(anyhow!("No icons in {:?}", path));
    }
    // largest first; entries may be JPEG 2000 or corrupt, so fall back to smaller ones
    types.sort_by_key(|t| std::cmp::Reverse(t.pixel_width() * t.pixel_height()));
    for icon_type in types {
        match family.get_icon_with_type(icon_type) {
            Ok(icon) => {
                let icon = icon.convert_to(PixelFormat::RGBA);
                if let Some(img) =
                    RgbaImage::from_raw(icon.width(), icon.height(), icon.data().to_vec())
                {
                    return Ok(img);
                }
                debug!(?icon_type, "malformed icns entry skipped");
            }
            Err(e) => debug!(?icon_type, "undecodable icns entry skipped: {}", e),
        }
    }
    Err(anyhow!("No decodable icon in {:?}", path))
}

/// Select `folder` in a Finder window.
pub fn reveal_in_finder(folder: &Path) -> Result<()> {
    if !cfg!(target_os = "macos") {
        bail!("Finder is only available on macOS");
    }
    let target = folder
        .canonicalize()
        .with_context(|| format!("Resolve {:?}", folder))?;
    let status = Command::new("open")
        .arg("-R")
        .arg(&target)
        .status()
        .context("Run open -R")?;
    if !status.success() {
        bail!("open -R {:?} exited with {}", target, status);
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::IconWriter;
    use image::RgbaImage;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Call {
        pub path: PathBuf,
        pub with_icon: bool,
    }

    /// Writer double that records calls and fails on a configured set of paths.
    #[derive(Clone, Default)]
    pub struct RecordingWriter {
        pub failing: HashSet<PathBuf>,
        pub fail_all: bool,
        pub calls: Rc<RefCell<Vec<Call>>>,
        pub notified: Rc<RefCell<Vec<PathBuf>>>,
    }

    impl RecordingWriter {
        pub fn failing_on(paths: &[&str]) -> Self {
            Self {
                failing: paths.iter().map(PathBuf::from).collect(),
                ..Self::default()
            }
        }

        pub fn always_failing() -> Self {
            Self {
                fail_all: true,
                ..Self::default()
            }
        }
    }

    impl IconWriter for RecordingWriter {
        fn set_custom_icon(&self, path: &Path, icon: Option<&RgbaImage>) -> bool {
            self.calls.borrow_mut().push(Call {
                path: path.to_path_buf(),
                with_icon: icon.is_some(),
            });
            !(self.fail_all || self.failing.contains(path))
        }

        fn notify_metadata_changed(&self, path: &Path) {
            self.notified.borrow_mut().push(path.to_path_buf());
        }
    }
}
