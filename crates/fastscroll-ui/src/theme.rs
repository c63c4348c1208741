//! Theme for the demo editor and the scroller tint.
//!
//! Themes are plain data and round-trip through JSON, so a custom theme can
//! be passed on the command line:
//! ```rust,ignore
//! let theme = Theme::load(Path::new("solarized.json"))?;
//! ```

use fastscroll_core::Rgba;
use serde::{Deserialize, Serialize};

/// Color representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Converts to iced Color.
    pub fn to_iced(&self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Converts to the tint used when rasterizing thumbs.
    pub fn to_rgba(&self) -> Rgba {
        Rgba::rgba(self.r, self.g, self.b, self.a)
    }
}

/// Editor theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: String,

    /// Is this a dark theme?
    pub is_dark: bool,

    /// Background colors
    pub background: BackgroundColors,

    /// Foreground colors
    pub foreground: ForegroundColors,

    /// UI element colors
    pub ui: UiColors,
}

/// Background colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundColors {
    /// Editor background
    pub primary: Color,
}

/// Foreground (text) colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForegroundColors {
    /// Editor text
    pub primary: Color,
    pub muted: Color,
    /// Thumb tint
    pub accent: Color,
}

/// UI element colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiColors {
    pub border: Color,
    pub status_bar: Color,
}

impl Theme {
    /// Creates the default dark theme.
    pub fn dark() -> Self {
        Self {
            name: "Fastscroll Dark".to_string(),
            is_dark: true,
            background: BackgroundColors {
                primary: Color::rgb(0.10, 0.10, 0.12),
            },
            foreground: ForegroundColors {
                primary: Color::rgb(0.9, 0.9, 0.9),
                muted: Color::rgb(0.5, 0.5, 0.5),
                accent: Color::rgb(0.4, 0.6, 1.0),
            },
            ui: UiColors {
                border: Color::rgb(0.25, 0.25, 0.28),
                status_bar: Color::rgb(0.15, 0.15, 0.17),
            },
        }
    }

    /// Creates a light theme.
    pub fn light() -> Self {
        Self {
            name: "Fastscroll Light".to_string(),
            is_dark: false,
            background: BackgroundColors {
                primary: Color::rgb(1.0, 1.0, 1.0),
            },
            foreground: ForegroundColors {
                primary: Color::rgb(0.1, 0.1, 0.1),
                muted: Color::rgb(0.5, 0.5, 0.5),
                accent: Color::rgb(0.2, 0.4, 0.8),
            },
            ui: UiColors {
                border: Color::rgb(0.85, 0.85, 0.85),
                status_bar: Color::rgb(0.92, 0.92, 0.92),
            },
        }
    }

    /// Looks up a built-in theme, falling back to dark.
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            other => {
                tracing::warn!("Unknown theme '{}', using dark", other);
                Self::dark()
            }
        }
    }

    /// Loads a theme from a file.
    pub fn load(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Saves the theme to a file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Base iced theme for built-in widgets.
    pub fn iced_theme(&self) -> iced::Theme {
        if self.is_dark {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_by_name() {
        assert!(!Theme::by_name("light").is_dark);
        assert!(Theme::by_name("dark").is_dark);
        assert_eq!(Theme::by_name("neon"), Theme::dark());
    }

    #[test]
    fn test_accent_becomes_tint() {
        let tint = Theme::dark().foreground.accent.to_rgba();
        assert_eq!(tint.to_bytes(), [102, 153, 255, 255]);
    }

    #[test]
    fn test_editor_colors_contrast() {
        let luma = |c: Color| 0.299 * c.r + 0.587 * c.g + 0.114 * c.b;
        let dark = Theme::dark();
        assert!(luma(dark.foreground.primary) > luma(dark.background.primary));
        let light = Theme::light();
        assert!(luma(light.foreground.primary) < luma(light.background.primary));

        let json = serde_json::to_string(&dark).unwrap();
        assert!(!json.contains("secondary"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.json");
        Theme::light().save(&path).unwrap();
        assert_eq!(Theme::load(&path).unwrap(), Theme::light());
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Theme::load(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
