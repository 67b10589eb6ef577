//! User settings and preferences for Quillpad
//!
//! This module defines the `Settings` struct that holds all user-configurable
//! options, with serde support for JSON persistence.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Theme Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Available color themes for the editor chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Toggle between light and dark.
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Get a display label for the theme.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Window Size Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Window dimensions and position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
    /// Window X position (optional, for restoring position)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    /// Window Y position (optional, for restoring position)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    /// Whether the window was maximized
    #[serde(default)]
    pub maximized: bool,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            x: None,
            y: None,
            maximized: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// User preferences and application settings.
///
/// This struct is serialized to JSON and persisted to the user's config directory.
/// All fields have sensible defaults via the `Default` trait and `#[serde(default)]`.
///
/// Note that only *preferences* persist; document content is deliberately
/// not carried across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Color theme for the editor chrome (light or dark)
    pub theme: Theme,

    /// Default font family for new documents
    pub default_font_family: String,

    /// Default font size in points for new documents
    pub default_font_size: u32,

    /// Default page margin in inches for new documents
    pub default_margin_in: f32,

    /// Last zoom level as a percentage
    pub zoom_percent: u32,

    /// Window dimensions and position
    pub window_size: WindowSize,
}

impl Settings {
    /// Minimum accepted font size (points).
    pub const MIN_FONT_SIZE: u32 = 1;
    /// Maximum accepted font size (points).
    pub const MAX_FONT_SIZE: u32 = 200;
    /// Minimum zoom percentage.
    pub const MIN_ZOOM: u32 = 50;
    /// Maximum zoom percentage.
    pub const MAX_ZOOM: u32 = 200;
    /// Minimum page margin in inches.
    pub const MIN_MARGIN_IN: f32 = 0.0;
    /// Maximum page margin in inches.
    pub const MAX_MARGIN_IN: f32 = 4.0;

    /// Parse settings from JSON, clamping out-of-range values to valid bounds.
    ///
    /// This protects against hand-edited or corrupted config files putting
    /// the UI into an unusable state.
    pub fn from_json_sanitized(json: &str) -> serde_json::Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Clamp all numeric fields to their valid ranges.
    pub fn sanitize(&mut self) {
        self.default_font_size = self
            .default_font_size
            .clamp(Self::MIN_FONT_SIZE, Self::MAX_FONT_SIZE);
        self.zoom_percent = self.zoom_percent.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
        self.default_margin_in = self
            .default_margin_in
            .clamp(Self::MIN_MARGIN_IN, Self::MAX_MARGIN_IN);
        if self.default_font_family.trim().is_empty() {
            self.default_font_family = Self::default().default_font_family;
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            default_font_family: "Georgia".to_string(),
            default_font_size: 16,
            default_margin_in: 1.0,
            zoom_percent: 100,
            window_size: WindowSize::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.default_font_family, "Georgia");
        assert_eq!(settings.default_font_size, 16);
        assert_eq!(settings.zoom_percent, 100);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn test_settings_roundtrip() {
        let mut settings = Settings::default();
        settings.theme = Theme::Dark;
        settings.default_font_size = 24;
        settings.zoom_percent = 150;

        let json = serde_json::to_string_pretty(&settings).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config_uses_defaults_for_missing() {
        let settings: Settings = serde_json::from_str(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.default_font_size, 16);
        assert_eq!(settings.zoom_percent, 100);
    }

    #[test]
    fn test_sanitize_clamps_font_size() {
        let settings = Settings::from_json_sanitized(r#"{"default_font_size": 9999}"#).unwrap();
        assert_eq!(settings.default_font_size, Settings::MAX_FONT_SIZE);

        let settings = Settings::from_json_sanitized(r#"{"default_font_size": 0}"#).unwrap();
        assert_eq!(settings.default_font_size, Settings::MIN_FONT_SIZE);
    }

    #[test]
    fn test_sanitize_clamps_zoom() {
        let settings = Settings::from_json_sanitized(r#"{"zoom_percent": 10}"#).unwrap();
        assert_eq!(settings.zoom_percent, Settings::MIN_ZOOM);

        let settings = Settings::from_json_sanitized(r#"{"zoom_percent": 500}"#).unwrap();
        assert_eq!(settings.zoom_percent, Settings::MAX_ZOOM);
    }

    #[test]
    fn test_sanitize_restores_empty_font_family() {
        let settings = Settings::from_json_sanitized(r#"{"default_font_family": "  "}"#).unwrap();
        assert_eq!(settings.default_font_family, "Georgia");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let result: serde_json::Result<Settings> =
            serde_json::from_str(r#"{"theme": "dark", "future_feature": true}"#);
        assert!(result.is_ok());
        assert_eq!(result.unwrap().theme, Theme::Dark);
    }

    #[test]
    fn test_window_size_default() {
        let ws = WindowSize::default();
        assert_eq!(ws.width, 1200.0);
        assert_eq!(ws.height, 800.0);
        assert!(ws.x.is_none());
        assert!(!ws.maximized);
    }
}
