//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across threads.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// SttProvider
// ---------------------------------------------------------------------------

/// Selects which speech-to-text backend transcribes learner recordings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SttProvider {
    /// Google Cloud Speech-to-Text REST API (`v1/speech:recognize`).
    Google,
    /// STT disabled; every evaluation reports a failed transcription.
    Disabled,
}

impl Default for SttProvider {
    fn default() -> Self {
        Self::Google
    }
}

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind (e.g. `"0.0.0.0"`, `"127.0.0.1"`).
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
    /// Largest accepted request body in bytes (uploaded recordings included).
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ---------------------------------------------------------------------------
// SttConfig
// ---------------------------------------------------------------------------

/// Settings for the speech-to-text provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SttConfig {
    /// Which backend to use.
    pub provider: SttProvider,
    /// Base URL of the recognition API.
    pub base_url: String,
    /// API key.  When `None`, the `GOOGLE_API_KEY` environment variable is
    /// consulted at client construction time.
    pub api_key: Option<String>,
    /// BCP-47 language code of the learner's speech.
    pub language_code: String,
    /// Sample rate of uploaded recordings, in Hz.
    pub sample_rate_hertz: u32,
    /// Audio encoding name as understood by the provider (e.g. `"LINEAR16"`).
    pub encoding: String,
    /// Recognition model requested from the provider.
    pub model: String,
    /// Ask the provider to insert punctuation into the transcript.
    pub enable_automatic_punctuation: bool,
    /// Maximum seconds to wait for a transcription response.
    pub timeout_secs: u64,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            provider: SttProvider::default(),
            base_url: "https://speech.googleapis.com".into(),
            api_key: None,
            language_code: "en-US".into(),
            sample_rate_hertz: 16_000,
            encoding: "LINEAR16".into(),
            model: "video".into(),
            enable_automatic_punctuation: true,
            timeout_secs: 15,
        }
    }
}

impl SttConfig {
    /// The configured API key, falling back to `GOOGLE_API_KEY`.
    ///
    /// Empty strings are treated as "no key".
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }
}

// ---------------------------------------------------------------------------
// LessonsConfig
// ---------------------------------------------------------------------------

/// Where the lesson catalog is read from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonsConfig {
    /// Path to the JSON lesson catalog.  `None` means `lessons.json` in the
    /// platform config directory.
    pub catalog_file: Option<PathBuf>,
}

impl LessonsConfig {
    /// The catalog path to load, after applying the platform default.
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog_file
            .clone()
            .unwrap_or_else(|| AppPaths::new().lessons_file)
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// Sections that are missing from the file fall back to their defaults, so a
/// file containing only `[server]\nport = 9000` is valid.
///
/// ```rust,no_run
/// use speech_tutor::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// println!("listening on {}", config.server.bind_addr());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Speech-to-text provider settings.
    pub stt: SttConfig,
    /// Lesson catalog location.
    pub lessons: LessonsConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_config(cfg: &AppConfig, path: &std::path::Path) {
        std::fs::write(path, toml::to_string_pretty(cfg).expect("serialise")).expect("write");
    }

    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = AppConfig::default();
        write_config(&original, &path);

        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(original.server.host, loaded.server.host);
        assert_eq!(original.server.port, loaded.server.port);
        assert_eq!(
            original.server.max_upload_bytes,
            loaded.server.max_upload_bytes
        );

        assert_eq!(original.stt.provider, loaded.stt.provider);
        assert_eq!(original.stt.base_url, loaded.stt.base_url);
        assert_eq!(original.stt.api_key, loaded.stt.api_key);
        assert_eq!(original.stt.language_code, loaded.stt.language_code);
        assert_eq!(original.stt.sample_rate_hertz, loaded.stt.sample_rate_hertz);
        assert_eq!(original.stt.encoding, loaded.stt.encoding);
        assert_eq!(original.stt.model, loaded.stt.model);
        assert_eq!(original.stt.timeout_secs, loaded.stt.timeout_secs);

        assert_eq!(original.lessons.catalog_file, loaded.lessons.catalog_file);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.stt.provider, SttProvider::Google);
        assert!(config.lessons.catalog_file.is_none());
    }

    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:8000");
        assert_eq!(cfg.server.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(cfg.stt.base_url, "https://speech.googleapis.com");
        assert_eq!(cfg.stt.language_code, "en-US");
        assert_eq!(cfg.stt.sample_rate_hertz, 16_000);
        assert_eq!(cfg.stt.encoding, "LINEAR16");
        assert_eq!(cfg.stt.model, "video");
        assert!(cfg.stt.enable_automatic_punctuation);
        assert!(cfg.stt.api_key.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[server]\nport = 9000\n").expect("write");

        let cfg = AppConfig::load_from(&path).expect("load");

        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.stt.language_code, "en-US");
    }

    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("modified.toml");

        let mut cfg = AppConfig::default();
        cfg.server.host = "127.0.0.1".into();
        cfg.server.port = 8080;
        cfg.stt.provider = SttProvider::Disabled;
        cfg.stt.api_key = Some("test-key".into());
        cfg.stt.timeout_secs = 30;
        cfg.lessons.catalog_file = Some(PathBuf::from("/srv/lessons.json"));

        write_config(&cfg, &path);
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.server.bind_addr(), "127.0.0.1:8080");
        assert_eq!(loaded.stt.provider, SttProvider::Disabled);
        assert_eq!(loaded.stt.api_key, Some("test-key".into()));
        assert_eq!(loaded.stt.timeout_secs, 30);
        assert_eq!(
            loaded.lessons.catalog_path(),
            PathBuf::from("/srv/lessons.json")
        );
    }

    #[test]
    fn explicit_api_key_wins() {
        let cfg = SttConfig {
            api_key: Some("from-config".into()),
            ..SttConfig::default()
        };
        assert_eq!(cfg.resolved_api_key().as_deref(), Some("from-config"));
    }

    #[test]
    fn blank_api_key_is_ignored() {
        let cfg = SttConfig {
            api_key: Some("   ".into()),
            ..SttConfig::default()
        };
        assert!(cfg.resolved_api_key().is_none());
    }
}
