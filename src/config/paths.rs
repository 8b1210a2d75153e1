//! Cross-platform application paths using the `dirs` crate.
//!
//! Config dir (settings + lesson catalog):
//!   Windows: %APPDATA%\speech-tutor\
//!   macOS:   ~/Library/Application Support/speech-tutor/
//!   Linux:   ~/.config/speech-tutor/

use std::path::PathBuf;

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for `settings.toml` and `lessons.json`.
    pub config_dir: PathBuf,
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
    /// Full path to the default lesson catalog.
    pub lessons_file: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "speech-tutor";

    /// Resolves all paths using the `dirs` crate.
    ///
    /// Falls back to the current directory if the platform cannot provide a
    /// standard path.
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let settings_file = config_dir.join("settings.toml");
        let lessons_file = config_dir.join("lessons.json");

        Self {
            config_dir,
            settings_file,
            lessons_file,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
