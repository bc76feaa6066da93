//! macOS-specific utilities: the NSWorkspace-backed icon writer.

use image::RgbaImage;
use std::path::Path;

use crate::core::IconWriter;

/// Writes folder icons through `NSWorkspace`. On other platforms every write fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct WorkspaceIconWriter;

impl IconWriter for WorkspaceIconWriter {
    fn set_custom_icon(&self, path: &Path, icon: Option<&RgbaImage>) -> bool {
        let png = match icon.map(encode_png).transpose() {
            Ok(png) => png,
            Err(e) => {
                tracing::error!("Cannot encode icon for {}: {:?}", path.display(), e);
                return false;
            }
        };
        set_icon_native(path, png.as_deref())
    }

    fn notify_metadata_changed(&self, path: &Path) {
        note_file_system_changed(path);
    }
}

fn encode_png(icon: &RgbaImage) -> anyhow::Result<Vec<u8>> {
    let mut buf = std::io::Cursor::new(Vec::new());
    icon.write_to(&mut buf, image::ImageFormat::Png)?;
    Ok(buf.into_inner())
}

#[cfg(target_os = "macos")]
#[allow(deprecated)]
fn set_icon_native(path: &Path, png: Option<&[u8]>) -> bool {
    use cocoa::appkit::NSImage;
    use cocoa::base::{BOOL, NO, id, nil};
    use cocoa::foundation::{NSAutoreleasePool, NSData, NSString};
    use objc::{class, msg_send, sel, sel_impl};

    unsafe {
        let pool = NSAutoreleasePool::new(nil);

        let image: id = match png {
            Some(bytes) => {
                let data = NSData::dataWithBytes_length_(
                    nil,
                    bytes.as_ptr() as *const std::os::raw::c_void,
                    bytes.len() as u64,
                );
                let img = NSImage::alloc(nil).initWithData_(data);
                if img == nil {
                    pool.drain();
                    return false;
                }
                img
            }
            // nil restores the default icon
            None => nil,
        };

        let ns_path = NSString::alloc(nil).init_str(&path.to_string_lossy());
        let workspace: id = msg_send![class!(NSWorkspace), sharedWorkspace];
        let ok: BOOL = msg_send![workspace, setIcon: image forFile: ns_path options: 0u64];

        if image != nil {
            let _: () = msg_send![image, release];
        }
        let _: () = msg_send![ns_path, release];
        pool.drain();
        ok != NO
    }
}

#[cfg(not(target_os = "macos"))]
fn set_icon_native(path: &Path, _png: Option<&[u8]>) -> bool {
    tracing::warn!(
        "Custom folder icons are supported only on macOS; skipping {}",
        path.display()
    );
    false
}

#[cfg(target_os = "macos")]
#[allow(deprecated)]
fn note_file_system_changed(path: &Path) {
    use cocoa::base::{id, nil};
    use cocoa::foundation::{NSAutoreleasePool, NSString};
    use objc::{class, msg_send, sel, sel_impl};

    unsafe {
        let pool = NSAutoreleasePool::new(nil);
        let ns_path = NSString::alloc(nil).init_str(&path.to_string_lossy());
        let workspace: id = msg_send![class!(NSWorkspace), sharedWorkspace];
        let _: () = msg_send![workspace, noteFileSystemChanged: ns_path];
        let _: () = msg_send![ns_path, release];
        pool.drain();
    }
}

#[cfg(not(target_os = "macos"))]
fn note_file_system_changed(_path: &Path) {}

#[cfg(all(test, not(target_os = "macos")))]
mod tests {
    use super::*;

    #[test]
    fn writer_reports_failure_off_macos() {
        let icon = RgbaImage::new(2, 2);
        assert!(!WorkspaceIconWriter.set_custom_icon(Path::new("/tmp"), Some(&icon)));
        assert!(!WorkspaceIconWriter.set_custom_icon(Path::new("/tmp"), None));
    }
}
