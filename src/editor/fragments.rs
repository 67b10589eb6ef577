//! Fixed insertion fragments
//!
//! Builders for the markup fragments behind the Insert menu: a table
//! skeleton, CSS-drawn shapes, and a catalog of special symbols. Each
//! produces a fragment for the surface's insertion command; none of them
//! are parameterized beyond the variant chosen.

#![allow(dead_code)]

use std::fmt::Write as _;

// ─────────────────────────────────────────────────────────────────────────────
// Table
// ─────────────────────────────────────────────────────────────────────────────

/// Rows in the inserted table skeleton.
pub const TABLE_ROWS: usize = 2;
/// Columns in the inserted table skeleton.
pub const TABLE_COLS: usize = 3;

/// Build the empty bordered table skeleton.
pub fn table_fragment() -> String {
    let mut out = String::from(
        r#"<table style="border-collapse:collapse;width:100%">"#,
    );
    for _ in 0..TABLE_ROWS {
        out.push_str("<tr>");
        for _ in 0..TABLE_COLS {
            let _ = write!(
                out,
                r#"<td style="border:1px solid #999;padding:6px">&nbsp;</td>"#
            );
        }
        out.push_str("</tr>");
    }
    out.push_str("</table>");
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Shapes
// ─────────────────────────────────────────────────────────────────────────────

/// Shapes drawn with border/background CSS tricks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
}

impl Shape {
    /// Display label for the Insert menu.
    pub fn label(&self) -> &'static str {
        match self {
            Shape::Circle => "Circle",
            Shape::Square => "Square",
            Shape::Triangle => "Triangle",
        }
    }

    /// All shapes in menu order.
    pub fn all() -> &'static [Shape] {
        &[Shape::Circle, Shape::Square, Shape::Triangle]
    }

    /// Build this shape's markup fragment.
    pub fn fragment(&self) -> String {
        match self {
            Shape::Circle => concat!(
                r#"<div style="display:inline-block;width:80px;height:80px;"#,
                r#"border-radius:50%;background:#4a90d9"></div>"#
            )
            .to_string(),
            Shape::Square => concat!(
                r#"<div style="display:inline-block;width:80px;height:80px;"#,
                r#"background:#4a90d9"></div>"#
            )
            .to_string(),
            // A zero-size box whose bottom border forms the triangle
            Shape::Triangle => concat!(
                r#"<div style="display:inline-block;width:0;height:0;"#,
                r#"border-left:40px solid transparent;"#,
                r#"border-right:40px solid transparent;"#,
                r#"border-bottom:80px solid #4a90d9"></div>"#
            )
            .to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Symbols
// ─────────────────────────────────────────────────────────────────────────────

/// The special symbol catalog offered by the symbol picker.
pub const SYMBOLS: &[&str] = &[
    "©", "®", "™", "§", "¶", "†", "‡", "•",
    "…", "–", "—", "°", "±", "×", "÷", "≈",
    "≠", "≤", "≥", "∞", "µ", "½", "¼", "¾",
    "€", "£", "¥", "¢", "←", "→", "↑", "↓",
    "★", "☆", "♥", "♦", "♣", "♠", "✓", "✗",
];

/// Build the insertion fragment for one catalog symbol.
pub fn symbol_fragment(symbol: &str) -> String {
    symbol.to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Horizontal Rule
// ─────────────────────────────────────────────────────────────────────────────

/// Build the horizontal rule fragment.
pub fn horizontal_rule_fragment() -> String {
    "<hr>".to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
