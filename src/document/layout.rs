//! Page layout settings and zoom
//!
//! Pure presentation parameters: consumed by the export synthesizer and
//! the page preview styling, never by the editing commands.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Paper Size
// ─────────────────────────────────────────────────────────────────────────────

/// Supported paper sizes for print and PDF export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
    Legal,
    A3,
    A5,
}

impl PaperSize {
    /// Display label for the page setup dialog.
    pub fn label(&self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::Letter => "Letter",
            PaperSize::Legal => "Legal",
            PaperSize::A3 => "A3",
            PaperSize::A5 => "A5",
        }
    }

    /// Width and height in millimeters, portrait orientation.
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A5 => (148.0, 210.0),
        }
    }

    /// All paper sizes in dialog order.
    pub fn all() -> &'static [PaperSize] {
        &[
            PaperSize::A4,
            PaperSize::Letter,
            PaperSize::Legal,
            PaperSize::A3,
            PaperSize::A5,
        ]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Orientation
// ─────────────────────────────────────────────────────────────────────────────

/// Page orientation for print and PDF export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Toggle between portrait and landscape.
    pub fn toggle(&self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }

    /// The CSS `@page size` keyword for this orientation.
    pub fn css_keyword(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }

    /// Display label for the page setup dialog.
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Portrait => "Portrait",
            Orientation::Landscape => "Landscape",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Layout
// ─────────────────────────────────────────────────────────────────────────────

/// Page layout settings for a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    /// Paper size for print and PDF export
    pub paper: PaperSize,
    /// Page orientation
    pub orientation: Orientation,
    /// Uniform page margin in inches
    pub margin_in: f32,
    /// Page background color as a CSS hex string
    pub page_color: String,
    /// Watermark text; empty disables the watermark layer
    pub watermark_text: String,
    /// Watermark font size in points
    pub watermark_size_pt: u32,
    /// Whether exported documents carry a fixed page-number marker
    pub show_page_number: bool,
}

impl PageLayout {
    /// Default watermark font size in points.
    pub const DEFAULT_WATERMARK_SIZE: u32 = 48;

    /// Create a layout seeded from a user-default margin.
    pub fn with_margin(margin_in: f32) -> Self {
        Self {
            margin_in,
            ..Self::default()
        }
    }

    /// Whether the watermark layer should be rendered.
    pub fn has_watermark(&self) -> bool {
        !self.watermark_text.trim().is_empty()
    }

    /// The CSS `@page size` declaration for this layout.
    pub fn css_page_size(&self) -> String {
        let (w, h) = self.paper.dimensions_mm();
        format!(
            "{}mm {}mm {}",
            w,
            h,
            self.orientation.css_keyword()
        )
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            paper: PaperSize::A4,
            orientation: Orientation::Portrait,
            margin_in: 1.0,
            page_color: "#ffffff".to_string(),
            watermark_text: String::new(),
            watermark_size_pt: Self::DEFAULT_WATERMARK_SIZE,
            show_page_number: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Zoom
// ─────────────────────────────────────────────────────────────────────────────

/// Editor zoom level as a percentage.
///
/// Steps by 10 per in/out action, clamped to [50, 200]; "fit" resets
/// unconditionally to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zoom {
    percent: u32,
}

impl Zoom {
    /// Minimum zoom percentage.
    pub const MIN: u32 = 50;
    /// Maximum zoom percentage.
    pub const MAX: u32 = 200;
    /// Step per zoom in/out action.
    pub const STEP: u32 = 10;
    /// The "fit" (reset) zoom percentage.
    pub const FIT: u32 = 100;

    /// Create a zoom at the given percentage, clamped to the valid range.
    pub fn new(percent: u32) -> Self {
        Self {
            percent: percent.clamp(Self::MIN, Self::MAX),
        }
    }

    /// Current zoom percentage.
    pub fn percent(&self) -> u32 {
        self.percent
    }

    /// Zoom as a scale factor (1.0 = 100%).
    pub fn factor(&self) -> f32 {
        self.percent as f32 / 100.0
    }

    /// Increase zoom by one step, saturating at the maximum.
    pub fn zoom_in(&mut self) {
        self.percent = (self.percent + Self::STEP).min(Self::MAX);
    }

    /// Decrease zoom by one step, saturating at the minimum.
    pub fn zoom_out(&mut self) {
        self.percent = self.percent.saturating_sub(Self::STEP).max(Self::MIN);
    }

    /// Reset to the fit zoom level.
    pub fn fit(&mut self) {
        self.percent = Self::FIT;
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self { percent: Self::FIT }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
