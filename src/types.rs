//! Core data types shared across the application.

use egui::Color32;
use image::RgbaImage;
use std::path::PathBuf;
use std::sync::Arc;

/// Clip shape applied to an imported image in the Make Icon flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MaskShape {
    #[default]
    RoundedSquare,
    Circle,
    Star,
    Heart,
}

impl MaskShape {
    pub const ALL: [MaskShape; 4] = [
        MaskShape::RoundedSquare,
        MaskShape::Circle,
        MaskShape::Star,
        MaskShape::Heart,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MaskShape::RoundedSquare => "Rounded Square",
            MaskShape::Circle => "Circle",
            MaskShape::Star => "Star",
            MaskShape::Heart => "Heart",
        }
    }
}

/// Glass icons bundled with the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltInIcon {
    Folder,
    Dark,
    Transparent,
    Download,
}

impl BuiltInIcon {
    pub const ALL: [BuiltInIcon; 4] = [
        BuiltInIcon::Folder,
        BuiltInIcon::Dark,
        BuiltInIcon::Transparent,
        BuiltInIcon::Download,
    ];

    /// Stable resource name, also used as texture key.
    pub fn name(self) -> &'static str {
        match self {
            BuiltInIcon::Folder => "folder1",
            BuiltInIcon::Dark => "dark",
            BuiltInIcon::Transparent => "transparent",
            BuiltInIcon::Download => "download",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BuiltInIcon::Folder => "Default",
            BuiltInIcon::Dark => "Dark",
            BuiltInIcon::Transparent => "Transparent",
            BuiltInIcon::Download => "Download",
        }
    }
}

/// Icon produced from an imported file and kept for the session.
#[derive(Clone, Debug)]
pub struct UserIcon {
    pub id: u64,
    pub origin: PathBuf,
    pub image: Arc<RgbaImage>,
    pub mask: Option<MaskShape>,
}

/// The icon currently selected for application. Only one can be selected.
#[derive(Clone, Debug)]
pub enum IconSource {
    BuiltIn(BuiltInIcon),
    /// Re-read from disk every time it is applied.
    FileBacked(PathBuf),
    UserDerived {
        id: u64,
        image: Arc<RgbaImage>,
        origin: PathBuf,
    },
}

impl IconSource {
    pub fn is_builtin(&self, icon: BuiltInIcon) -> bool {
        matches!(self, IconSource::BuiltIn(b) if *b == icon)
    }

    pub fn is_user_icon(&self, icon_id: u64) -> bool {
        matches!(self, IconSource::UserDerived { id, .. } if *id == icon_id)
    }
}

/// Which OS primitive a bulk run invokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulkOperation {
    Apply,
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulkOutcome {
    AllSucceeded,
    PartialSuccess,
    AllFailed,
}

/// Per-target tally of a bulk run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BulkOperationResult {
    pub success_count: usize,
    pub failure_count: usize,
}

impl BulkOperationResult {
    pub fn outcome(&self) -> BulkOutcome {
        if self.success_count == 0 {
            BulkOutcome::AllFailed
        } else if self.failure_count == 0 {
            BulkOutcome::AllSucceeded
        } else {
            BulkOutcome::PartialSuccess
        }
    }

    pub fn total(&self) -> usize {
        self.success_count + self.failure_count
    }
}

/// Sidebar navigation tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Customize,
    MakeIcon,
    Reset,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Customize, Tab::MakeIcon, Tab::Reset];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Customize => "Customize",
            Tab::MakeIcon => "Make Icon",
            Tab::Reset => "Reset",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Tab::Customize => "🎨",
            Tab::MakeIcon => "✨",
            Tab::Reset => "↺",
        }
    }
}

pub struct StateColors {
    pub default: Color32,
    pub hover: Color32,
    pub selected: Option<Color32>, // None = use default theme color
}
