//! Theme system for Quillpad
//!
//! A single `ThemeColors` palette per theme variant, converted into egui
//! `Visuals` by `light.rs` and `dark.rs` and applied through the
//! `ThemeManager`.

// Allow dead code - palette fields are consumed selectively per panel
#![allow(dead_code)]

pub mod dark;
pub mod light;
pub mod manager;

pub use manager::ThemeManager;

use crate::config::Theme;
use eframe::egui::Color32;

// ─────────────────────────────────────────────────────────────────────────────
// Theme Colors
// ─────────────────────────────────────────────────────────────────────────────

/// The full color palette for one theme variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    /// Main window and panel background
    pub background: Color32,
    /// Toolbar and status bar background
    pub background_secondary: Color32,
    /// Input fields and wells
    pub background_tertiary: Color32,
    /// The desk area behind the page preview
    pub desk: Color32,
    /// Standard border
    pub border: Color32,
    /// Subtle separator border
    pub border_subtle: Color32,
    /// Primary text
    pub text_primary: Color32,
    /// Secondary text (labels, captions)
    pub text_secondary: Color32,
    /// Muted text (hints, counters)
    pub text_muted: Color32,
    /// Accent for active controls and selection strokes
    pub accent: Color32,
    /// Selection background
    pub selection: Color32,
    /// Hover background
    pub hover: Color32,
    /// Success notices
    pub success: Color32,
    /// Warning notices
    pub warning: Color32,
    /// Error notices
    pub error: Color32,
}

impl ThemeColors {
    /// The light palette.
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(250, 250, 250),
            background_secondary: Color32::from_rgb(242, 242, 242),
            background_tertiary: Color32::from_rgb(232, 232, 232),
            desk: Color32::from_rgb(214, 216, 220),
            border: Color32::from_rgb(200, 200, 200),
            border_subtle: Color32::from_rgb(224, 224, 224),
            text_primary: Color32::from_rgb(30, 30, 30),
            text_secondary: Color32::from_rgb(90, 90, 90),
            text_muted: Color32::from_rgb(130, 130, 130),
            accent: Color32::from_rgb(0, 120, 212),
            selection: Color32::from_rgb(200, 225, 250),
            hover: Color32::from_rgb(228, 238, 248),
            success: Color32::from_rgb(22, 130, 60),
            warning: Color32::from_rgb(176, 120, 0),
            error: Color32::from_rgb(196, 43, 28),
        }
    }

    /// The dark palette.
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(32, 33, 36),
            background_secondary: Color32::from_rgb(41, 42, 45),
            background_tertiary: Color32::from_rgb(52, 53, 57),
            desk: Color32::from_rgb(24, 25, 27),
            border: Color32::from_rgb(70, 70, 70),
            border_subtle: Color32::from_rgb(55, 55, 55),
            text_primary: Color32::from_rgb(220, 220, 220),
            text_secondary: Color32::from_rgb(170, 170, 170),
            text_muted: Color32::from_rgb(130, 130, 130),
            accent: Color32::from_rgb(100, 180, 255),
            selection: Color32::from_rgb(45, 70, 95),
            hover: Color32::from_rgb(50, 60, 72),
            success: Color32::from_rgb(85, 190, 120),
            warning: Color32::from_rgb(230, 180, 70),
            error: Color32::from_rgb(240, 110, 100),
        }
    }

    /// Pick the palette for a theme setting.
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    /// Whether this palette is the dark variant.
    pub fn is_dark(&self) -> bool {
        // A dark background has a low average channel value
        let bg = self.background;
        (bg.r() as u16 + bg.g() as u16 + bg.b() as u16) / 3 < 128
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
