//! Light theme configuration
//!
//! Converts the `ThemeColors::light()` palette into egui's `Visuals`.

#![allow(dead_code)]

use eframe::egui::{Rounding, Stroke, Visuals};

use super::ThemeColors;

/// Create egui Visuals configured for the light theme.
pub fn create_light_visuals() -> Visuals {
    let colors = ThemeColors::light();
    let mut visuals = Visuals::light();

    visuals.panel_fill = colors.background;
    visuals.window_fill = colors.background;
    visuals.extreme_bg_color = colors.background_tertiary;
    visuals.faint_bg_color = colors.background_secondary;

    visuals.override_text_color = None;
    visuals.warn_fg_color = colors.warning;
    visuals.error_fg_color = colors.error;
    visuals.hyperlink_color = colors.accent;

    visuals.selection.bg_fill = colors.selection;
    visuals.selection.stroke = Stroke::new(1.0, colors.accent);

    visuals.widgets.noninteractive.bg_fill = colors.background_secondary;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border_subtle);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text_primary);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = colors.background_secondary;
    visuals.widgets.inactive.weak_bg_fill = colors.background_tertiary;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors.text_secondary);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = colors.hover;
    visuals.widgets.hovered.weak_bg_fill = colors.hover;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.accent);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, colors.text_primary);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = colors.selection;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, colors.accent);
    visuals.widgets.active.fg_stroke = Stroke::new(1.5, colors.text_primary);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals
}

/// The palette backing these visuals.
pub fn colors() -> ThemeColors {
    ThemeColors::light()
}
