//! Scroller and editor configuration.
//!
//! Every section is `#[serde(default)]`, so a config file only needs the
//! keys it wants to override:
//!
//! ```toml
//! [scroller]
//! auto_hide_delay_ms = 1500
//!
//! [editor]
//! theme = "light"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fast scroller behavior
    pub scroller: ScrollerConfig,

    /// Demo editor appearance
    pub editor: EditorConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default config: {}", e);
                Self::default()
            }
        }
    }

    /// Loads and validates config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("fastscroll").join("config.toml"))
    }

    /// Writes the config as pretty TOML.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Rejects values the scroller cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scroller.validate()?;
        if self.editor.font_size <= 0.0 || self.editor.line_height <= 0.0 {
            return Err(ConfigError::Invalid(
                "editor font_size and line_height must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Fast scroller timing, fade and size settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollerConfig {
    /// Inactivity before the thumb starts fading (ms)
    pub auto_hide_delay_ms: u64,

    /// Delay between fade frames (ms)
    pub fade_tick_ms: u64,

    /// Alpha removed per fade frame
    pub fade_step: u8,

    /// Alpha at or below which the fade snaps to hidden
    pub fade_floor: u8,

    /// Alpha used while visible or dragging
    pub max_alpha: u8,

    /// Minimum content/viewport height ratio for the thumb to show
    pub min_content_ratio: f32,

    /// Overlay strip width (px)
    pub thumb_width: u32,

    /// Intrinsic thumb height (px)
    pub thumb_height: u32,
}

impl ScrollerConfig {
    pub fn auto_hide_delay(&self) -> Duration {
        Duration::from_millis(self.auto_hide_delay_ms)
    }

    pub fn fade_tick(&self) -> Duration {
        Duration::from_millis(self.fade_tick_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fade_step == 0 {
            return Err(ConfigError::Invalid("fade_step must be non-zero".into()));
        }
        if self.fade_tick_ms == 0 {
            return Err(ConfigError::Invalid("fade_tick_ms must be non-zero".into()));
        }
        if self.min_content_ratio.is_nan() || self.min_content_ratio <= 0.0 {
            return Err(ConfigError::Invalid(
                "min_content_ratio must be positive".into(),
            ));
        }
        if self.thumb_width == 0 || self.thumb_height == 0 {
            return Err(ConfigError::Invalid("thumb size must be non-zero".into()));
        }
        Ok(())
    }
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            auto_hide_delay_ms: 2000,
            fade_tick_ms: 17,
            fade_step: 25,
            fade_floor: 25,
            max_alpha: 225,
            min_content_ratio: 1.5,
            thumb_width: 24,
            thumb_height: 48,
        }
    }
}

/// Demo editor appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Font size in points
    pub font_size: f32,

    /// Line height multiplier
    pub line_height: f32,

    /// Built-in theme name ("dark" or "light")
    pub theme: String,
}

impl EditorConfig {
    /// Line height in pixels.
    pub fn line_height_px(&self) -> f32 {
        self.font_size * self.line_height
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            line_height: 1.4,
            theme: "dark".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
