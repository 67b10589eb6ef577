//! Settings panel
//!
//! Edits the persisted defaults: theme, default font, and default page
//! margin. Changes apply to new documents; the current document keeps
//! its formatting.

use crate::config::{Settings, Theme};
use crate::document::FormattingState;
use eframe::egui::{self, Key, RichText};

/// Output from the settings panel.
#[derive(Debug, Clone, Default)]
pub struct SettingsPanelOutput {
    /// Any setting changed this frame
    pub changed: bool,
    /// Close the panel
    pub close_requested: bool,
}

/// Show the settings panel editing `settings` in place.
pub fn show_settings_panel(
    ctx: &egui::Context,
    settings: &mut Settings,
    is_dark: bool,
) -> SettingsPanelOutput {
    let mut output = SettingsPanelOutput::default();

    egui::Window::new("Settings")
        .id(egui::Id::new("settings_panel"))
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(super::dialogs::dialog_frame(is_dark))
        .show(ctx, |ui| {
            ui.set_min_width(280.0);

            if ui.input(|i| i.key_pressed(Key::Escape)) {
                output.close_requested = true;
            }

            ui.label(RichText::new("Settings").size(14.0).strong());
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Theme:");
                for theme in [Theme::Light, Theme::Dark] {
                    if ui
                        .selectable_value(&mut settings.theme, theme, theme.label())
                        .changed()
                    {
                        output.changed = true;
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.label("Default font:");
                egui::ComboBox::from_id_source("settings_font_combo")
                    .selected_text(&settings.default_font_family)
                    .show_ui(ui, |ui| {
                        for family in FormattingState::FONT_FAMILIES {
                            if ui
                                .selectable_value(
                                    &mut settings.default_font_family,
                                    family.to_string(),
                                    *family,
                                )
                                .changed()
                            {
                                output.changed = true;
                            }
                        }
                    });
            });

            ui.horizontal(|ui| {
                ui.label("Default size (pt):");
                if ui
                    .add(egui::Slider::new(
                        &mut settings.default_font_size,
                        Settings::MIN_FONT_SIZE..=Settings::MAX_FONT_SIZE,
                    ))
                    .changed()
                {
                    output.changed = true;
                }
            });

            ui.horizontal(|ui| {
                ui.label("Default margin (in):");
                if ui
                    .add(
                        egui::Slider::new(
                            &mut settings.default_margin_in,
                            Settings::MIN_MARGIN_IN..=Settings::MAX_MARGIN_IN,
                        )
                        .step_by(0.25),
                    )
                    .changed()
                {
                    output.changed = true;
                }
            });

            ui.add_space(8.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Done").clicked() {
                    output.close_requested = true;
                }
            });
        });

    output
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_defaults_inert() {
        let out = SettingsPanelOutput::default();
        assert!(!out.changed && !out.close_requested);
    }
}
