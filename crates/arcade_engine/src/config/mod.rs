//! Configuration system
//!
//! Any `serde` type with a `Default` can opt into [`Config`] and be read from or
//! written to disk. The format is picked from the file extension.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match Format::from_path(path)? {
            Format::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Format::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Load configuration from file, falling back to defaults when the file is missing
    ///
    /// Parse errors are still reported; only an absent file yields the default.
    fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("Config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match Format::from_path(path)? {
            Format::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Ron,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// # Engine Configuration
///
/// Core loop behavior: logging, frame pacing and an optional frame limit for
/// headless runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default log level, overridden by `RUST_LOG`
    pub log_level: String,
    /// Fixed seconds per frame; `None` measures wall-clock time instead
    pub fixed_timestep: Option<f32>,
    /// Stop the loop after this many frames
    pub max_frames: Option<u64>,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            fixed_timestep: Some(1.0 / 60.0),
            max_frames: None,
        }
    }

    /// Set log level
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Use a fixed timestep of `1 / fps` seconds
    #[must_use]
    pub fn with_fixed_fps(mut self, fps: u32) -> Self {
        self.fixed_timestep = Some(1.0 / fps.max(1) as f32);
        self
    }

    /// Measure frame time from the wall clock
    #[must_use]
    pub fn with_wall_clock(mut self) -> Self {
        self.fixed_timestep = None;
        self
    }

    /// Stop after `frames` frames
    #[must_use]
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for EngineConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("arcade_engine_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_toml_round_trip() {
        let path = temp_path("engine.toml");
        let config = EngineConfig::new().with_log_level("debug").with_max_frames(42);
        config.save_to_file(&path).unwrap();

        let loaded = EngineConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_ron_partial_file_uses_defaults() {
        let path = temp_path("partial.ron");
        std::fs::write(&path, "(log_level: \"warn\")").unwrap();

        let loaded = EngineConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.log_level, "warn");
        assert_eq!(loaded.fixed_timestep, EngineConfig::default().fixed_timestep);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_unsupported_extension() {
        let result = EngineConfig::new().save_to_file(temp_path("engine.json"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let loaded = EngineConfig::load_or_default(temp_path("does_not_exist.toml")).unwrap();
        assert_eq!(loaded, EngineConfig::default());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let path = temp_path("broken.toml");
        std::fs::write(&path, "log_level = [").unwrap();

        let result = EngineConfig::load_or_default(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
        std::fs::remove_file(&path).ok();
    }
}
