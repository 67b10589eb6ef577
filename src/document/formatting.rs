//! Advisory formatting state
//!
//! This is a flat record of the most recent formatting control interactions.
//! It is advisory only: the editable surface applies per-range formatting
//! through commands, so the values here can drift from the formatting that
//! is actually in effect at the caret. The export synthesizer and page
//! preview consume these values as document-wide defaults.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Alignment
// ─────────────────────────────────────────────────────────────────────────────

/// Paragraph alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// The CSS `text-align` value for this alignment.
    pub fn css_value(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }

    /// The editing command dispatched for this alignment.
    pub fn command_name(&self) -> &'static str {
        match self {
            Alignment::Left => "justifyLeft",
            Alignment::Center => "justifyCenter",
            Alignment::Right => "justifyRight",
            Alignment::Justify => "justifyFull",
        }
    }

    /// Display label for toolbar tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            Alignment::Left => "Align Left",
            Alignment::Center => "Align Center",
            Alignment::Right => "Align Right",
            Alignment::Justify => "Justify",
        }
    }

    /// All alignments in toolbar order.
    pub fn all() -> &'static [Alignment] {
        &[
            Alignment::Left,
            Alignment::Center,
            Alignment::Right,
            Alignment::Justify,
        ]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Font Size Validation
// ─────────────────────────────────────────────────────────────────────────────

/// Why a custom font size input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSizeError {
    /// The input was not a whole number
    NotANumber(String),
    /// The parsed value fell outside the accepted range
    OutOfRange(i64),
}

impl fmt::Display for FontSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSizeError::NotANumber(input) => {
                write!(f, "'{}' is not a valid font size", input)
            }
            FontSizeError::OutOfRange(value) => write!(
                f,
                "Font size {} is outside the allowed range {}..={}",
                value,
                FormattingState::MIN_FONT_SIZE,
                FormattingState::MAX_FONT_SIZE
            ),
        }
    }
}

impl std::error::Error for FontSizeError {}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting State
// ─────────────────────────────────────────────────────────────────────────────

/// Current document-wide formatting values.
///
/// Colors are stored as CSS hex strings so they pass straight through to
/// synthesized style blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingState {
    /// Font family name
    pub font_family: String,
    /// Font size in points
    pub font_size_pt: u32,
    /// Text color as a CSS hex string
    pub text_color: String,
    /// Highlight (background) color as a CSS hex string, if any
    pub highlight_color: Option<String>,
    /// Letter spacing in pixels; reapplied as a direct style after every
    /// command dispatch since the command set has no equivalent
    pub letter_spacing_px: f32,
    /// Paragraph alignment
    pub alignment: Alignment,
}

impl FormattingState {
    /// Minimum accepted font size in points.
    pub const MIN_FONT_SIZE: u32 = 1;
    /// Maximum accepted font size in points.
    pub const MAX_FONT_SIZE: u32 = 200;

    /// Font families offered in the toolbar dropdown.
    pub const FONT_FAMILIES: &'static [&'static str] = &[
        "Georgia",
        "Arial",
        "Helvetica",
        "Times New Roman",
        "Courier New",
        "Verdana",
        "Garamond",
        "Trebuchet MS",
    ];

    /// Preset font sizes offered in the toolbar dropdown.
    pub const FONT_SIZE_PRESETS: &'static [u32] = &[8, 10, 12, 14, 16, 18, 24, 32, 48, 72];

    /// Create a formatting state seeded from user defaults.
    pub fn with_defaults(font_family: &str, font_size_pt: u32) -> Self {
        Self {
            font_family: font_family.to_string(),
            font_size_pt,
            ..Self::default()
        }
    }

    /// Validate and apply a custom font size entered as free text.
    ///
    /// Values 1–200 inclusive are accepted and become the active size.
    /// Zero, negative, non-numeric, or over-range inputs are rejected with
    /// no state mutation.
    pub fn set_font_size_from_input(&mut self, input: &str) -> Result<u32, FontSizeError> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| FontSizeError::NotANumber(trimmed.to_string()))?;

        if value < Self::MIN_FONT_SIZE as i64 || value > Self::MAX_FONT_SIZE as i64 {
            return Err(FontSizeError::OutOfRange(value));
        }

        self.font_size_pt = value as u32;
        Ok(self.font_size_pt)
    }
}

impl Default for FormattingState {
    fn default() -> Self {
        Self {
            font_family: "Georgia".to_string(),
            font_size_pt: 16,
            text_color: "#000000".to_string(),
            highlight_color: None,
            letter_spacing_px: 0.0,
            alignment: Alignment::Left,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
