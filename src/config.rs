//! Application settings and logging setup.

use std::time::Duration;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter, e.g. `FOLDERGO_LOG=debug`.
pub const LOG_ENV: &str = "FOLDERGO_LOG";

#[derive(Clone, Debug)]
pub struct Settings {
    /// How long a status banner stays visible.
    pub status_ttl: Duration,
    /// Extensions offered by the icon file chooser.
    pub icon_extensions: Vec<&'static str>,
    /// Pixel size at which built-in icons are rendered before being applied.
    pub builtin_icon_size: u32,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            status_ttl: Duration::from_secs(2),
            icon_extensions: vec!["png", "icns"],
            builtin_icon_size: 512,
            window_size: [900.0, 700.0],
            min_window_size: [600.0, 500.0],
        }
    }
}

/// Install the global fmt subscriber. Defaults to `info` when the filter is unset or invalid.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
