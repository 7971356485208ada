use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::BackdropError;
use crate::render::{BackdropStyle, Rgba, BACKGROUND};
use crate::signal::FastRandom;

/// Returns the path to the settings file: `~/.config/backdrop-rs/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("backdrop-rs");
    path.push("settings.json");
    path
}

/// Persisted application settings.
///
/// Only presentation is configurable; point spacing and scroll speed are
/// fixed. Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // Window
    pub window_width: f32,
    pub window_height: f32,
    pub background: Rgba,

    // Line
    pub line_start: Rgba,
    pub line_end: Rgba,
    pub line_width: f32,

    // Glow
    pub glow_color: Rgba,
    pub glow_blur: f32,

    // Area fill
    pub fill_top: Rgba,
    pub fill_bottom: Rgba,

    /// Fixed seed for a reproducible walk; random when absent
    pub seed: Option<u64>,
}

impl Default for AppSettings {
    fn default() -> Self {
        let style = BackdropStyle::default();
        Self {
            window_width: 1280.0,
            window_height: 720.0,
            background: BACKGROUND,

            line_start: style.line_start,
            line_end: style.line_end,
            line_width: style.line_width,

            glow_color: style.glow_color,
            glow_blur: style.glow_blur,

            fill_top: style.fill_top,
            fill_bottom: style.fill_bottom,

            seed: None,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_or_init(&settings_path())
    }

    /// Load settings from `path`
    ///
    /// A missing file is created from the defaults so there is something to
    /// edit. A file that exists but is rejected is left untouched; the
    /// defaults are used for this run only.
    pub fn load_or_init(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(BackdropError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings file found, writing defaults to {}", path.display());
                let settings = Self::default();
                if let Err(e) = settings.save_to(path) {
                    log::warn!("Failed to write settings: {}", e);
                }
                settings
            }
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Read and parse a settings file
    pub fn load_from(path: &Path) -> Result<Self, BackdropError> {
        let contents = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write settings to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), BackdropError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reject values that cannot be drawn
    fn validate(&self) -> Result<(), BackdropError> {
        let sizes = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("line_width", self.line_width),
            ("glow_blur", self.glow_blur),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                return Err(BackdropError::Settings(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        let colors = [
            self.background,
            self.line_start,
            self.line_end,
            self.glow_color,
            self.fill_top,
            self.fill_bottom,
        ];
        if colors.iter().any(|c| !(0.0..=1.0).contains(&c.a)) {
            return Err(BackdropError::Settings(
                "color alpha must be between 0 and 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Backdrop colors and stroke parameters
    pub fn style(&self) -> BackdropStyle {
        BackdropStyle {
            line_start: self.line_start,
            line_end: self.line_end,
            fill_top: self.fill_top,
            fill_bottom: self.fill_bottom,
            line_width: self.line_width,
            glow_blur: self.glow_blur,
            glow_color: self.glow_color,
        }
    }

    /// Random source for the walk, seeded if configured
    pub fn random_source(&self) -> FastRandom {
        match self.seed {
            Some(seed) => FastRandom::seeded(seed),
            None => FastRandom::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("backdrop-rs-test-{}-{}", std::process::id(), name));
        path.push("settings.json");
        path
    }

    #[test]
    fn test_default_style_matches_backdrop() {
        assert_eq!(AppSettings::default().style(), BackdropStyle::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_file("save");
        let settings = AppSettings {
            seed: Some(1234),
            line_width: 3.5,
            ..AppSettings::default()
        };

        settings.save_to(&path).unwrap();
        let loaded = AppSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{ "glow_blur": 4.0 }"#).unwrap();
        assert_eq!(settings.glow_blur, 4.0);
        assert_eq!(settings.line_width, 2.0);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let path = temp_file("invalid");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{ "line_width": -1.0 }"#).unwrap();

        let result = AppSettings::load_from(&path);
        assert!(matches!(result, Err(BackdropError::Settings(_))));

        std::fs::write(&path, "not json").unwrap();
        let result = AppSettings::load_from(&path);
        assert!(matches!(result, Err(BackdropError::Settings(_))));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_rejected_file_is_kept() {
        let path = temp_file("rejected");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        let contents = r#"{ "line_start": { "r": 0, "g": 243, "b": 255, "a": 1.5 } }"#;
        std::fs::write(&path, contents).unwrap();

        let settings = AppSettings::load_or_init(&path);
        assert_eq!(settings, AppSettings::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), contents);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_gets_defaults_written() {
        let path = temp_file("init");
        let settings = AppSettings::load_or_init(&path);
        assert_eq!(settings, AppSettings::default());
        assert_eq!(AppSettings::load_from(&path).unwrap(), AppSettings::default());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = AppSettings::load_from(&temp_file("missing"));
        assert!(matches!(result, Err(BackdropError::Io(_))));
    }
}
