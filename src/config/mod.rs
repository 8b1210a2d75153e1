//! Configuration module for the speech tutor service.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for each subsystem,
//! `AppPaths` for cross-platform config locations, and TOML loading via
//! `AppConfig::load`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, LessonsConfig, ServerConfig, SttConfig, SttProvider};
