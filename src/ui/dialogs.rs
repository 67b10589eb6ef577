//! Modal dialogs
//!
//! The floating windows the ribbon opens: find/replace, page setup,
//! watermark, the symbol picker, the save dialog, and the generic
//! confirmation prompt. Each `show_*` function renders one frame and
//! reports what the user did through a small output struct; the app
//! layer owns the open/closed flags and the state being edited.

#![allow(clippy::too_many_arguments)]

use crate::document::{Orientation, PageLayout, PaperSize};
use crate::editor::{fragments, FindState};
use crate::export::SaveFormat;
use eframe::egui::{self, Color32, Key, RichText, Vec2};

/// Preset page background colors for the page setup dialog.
const PAGE_COLORS: &[(&str, &str)] = &[
    ("White", "#ffffff"),
    ("Ivory", "#fffff0"),
    ("Light Gray", "#f2f2f2"),
    ("Sepia", "#f4ecd8"),
    ("Mint", "#eaf7ef"),
];

/// Shared dialog frame.
pub(crate) fn dialog_frame(is_dark: bool) -> egui::Frame {
    let (bg, border) = if is_dark {
        (Color32::from_rgb(40, 40, 45), Color32::from_rgb(70, 70, 80))
    } else {
        (
            Color32::from_rgb(250, 250, 250),
            Color32::from_rgb(180, 180, 190),
        )
    };
    egui::Frame::none()
        .fill(bg)
        .stroke(egui::Stroke::new(1.0, border))
        .inner_margin(egui::Margin::same(16.0))
        .rounding(egui::Rounding::same(6.0))
        .shadow(egui::epaint::Shadow {
            offset: egui::vec2(0.0, 2.0),
            blur: 8.0,
            spread: 0.0,
            color: Color32::from_black_alpha(40),
        })
}

// ─────────────────────────────────────────────────────────────────────────────
// Find / Replace Panel
// ─────────────────────────────────────────────────────────────────────────────

/// Output from the find/replace panel.
#[derive(Debug, Clone, Default)]
pub struct FindReplaceOutput {
    /// Find the first match and select it
    pub find_requested: bool,
    /// Move to the next match
    pub next_requested: bool,
    /// Move to the previous match
    pub prev_requested: bool,
    /// Replace all matches in the markup
    pub replace_all_requested: bool,
    /// Close the panel
    pub close_requested: bool,
}

/// Show the find/replace panel anchored below the ribbon.
pub fn show_find_replace(
    ctx: &egui::Context,
    find: &mut FindState,
    is_dark: bool,
) -> FindReplaceOutput {
    let mut output = FindReplaceOutput::default();

    egui::Window::new("Find and Replace")
        .id(egui::Id::new("find_replace_panel"))
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_TOP, [0.0, 60.0])
        .frame(dialog_frame(is_dark))
        .show(ctx, |ui| {
            ui.set_min_width(380.0);

            let (escape, enter) =
                ui.input(|i| (i.key_pressed(Key::Escape), i.key_pressed(Key::Enter)));
            if escape {
                output.close_requested = true;
            }
            if enter {
                output.find_requested = true;
            }

            ui.horizontal(|ui| {
                ui.label(RichText::new("Find and Replace").size(14.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(egui::Button::new(RichText::new("×").size(16.0)).frame(false))
                        .on_hover_text("Close (Escape)")
                        .clicked()
                    {
                        output.close_requested = true;
                    }
                });
            });
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label("🔍");
                ui.add_sized(
                    Vec2::new(240.0, 24.0),
                    egui::TextEdit::singleline(&mut find.search_term).hint_text("Search..."),
                );
                let match_text = if find.has_matches() {
                    format!("{} of {}", find.current_match + 1, find.match_count())
                } else if find.search_term.is_empty() {
                    String::new()
                } else {
                    "No matches".to_string()
                };
                ui.label(RichText::new(match_text).size(12.0).weak());
            });

            ui.horizontal(|ui| {
                ui.label("↳");
                ui.add_sized(
                    Vec2::new(240.0, 24.0),
                    egui::TextEdit::singleline(&mut find.replace_term)
                        .hint_text("Replace with..."),
                );
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Find").on_hover_text("Select the first match").clicked() {
                    output.find_requested = true;
                }
                if ui
                    .add_enabled(find.has_matches(), egui::Button::new("◀"))
                    .clicked()
                {
                    output.prev_requested = true;
                }
                if ui
                    .add_enabled(find.has_matches(), egui::Button::new("▶"))
                    .clicked()
                {
                    output.next_requested = true;
                }
                ui.add_space(8.0);
                if ui
                    .button("Replace All")
                    .on_hover_text("Rewrites the raw markup; terms inside tags are replaced too")
                    .clicked()
                {
                    output.replace_all_requested = true;
                }
            });
        });

    output
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Setup Dialog
// ─────────────────────────────────────────────────────────────────────────────

/// Output from the page setup dialog.
#[derive(Debug, Clone, Default)]
pub struct PageSetupOutput {
    /// Layout values changed this frame
    pub changed: bool,
    /// Close the dialog
    pub close_requested: bool,
}

/// Show the page setup dialog editing `layout` in place.
pub fn show_page_setup(
    ctx: &egui::Context,
    layout: &mut PageLayout,
    is_dark: bool,
) -> PageSetupOutput {
    let mut output = PageSetupOutput::default();

    egui::Window::new("Page Setup")
        .id(egui::Id::new("page_setup_dialog"))
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(dialog_frame(is_dark))
        .show(ctx, |ui| {
            ui.set_min_width(300.0);

            if ui.input(|i| i.key_pressed(Key::Escape)) {
                output.close_requested = true;
            }

            ui.label(RichText::new("Page Setup").size(14.0).strong());
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Paper size:");
                egui::ComboBox::from_id_source("paper_size_combo")
                    .selected_text(layout.paper.label())
                    .show_ui(ui, |ui| {
                        for paper in PaperSize::all() {
                            if ui
                                .selectable_value(&mut layout.paper, *paper, paper.label())
                                .changed()
                            {
                                output.changed = true;
                            }
                        }
                    });
            });

            ui.horizontal(|ui| {
                ui.label("Orientation:");
                for orientation in [Orientation::Portrait, Orientation::Landscape] {
                    if ui
                        .selectable_value(&mut layout.orientation, orientation, orientation.label())
                        .changed()
                    {
                        output.changed = true;
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.label("Margin (inches):");
                if ui
                    .add(egui::Slider::new(&mut layout.margin_in, 0.0..=4.0).step_by(0.25))
                    .changed()
                {
                    output.changed = true;
                }
            });

            ui.horizontal(|ui| {
                ui.label("Page color:");
                for (name, hex) in PAGE_COLORS {
                    let selected = layout.page_color == *hex;
                    if ui.selectable_label(selected, *name).clicked() {
                        layout.page_color = hex.to_string();
                        output.changed = true;
                    }
                }
            });

            if ui
                .checkbox(&mut layout.show_page_number, "Show page number")
                .changed()
            {
                output.changed = true;
            }

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
// Watermark Dialog
// ─────────────────────────────────────────────────────────────────────────────

/// Output from the watermark dialog.
#[derive(Debug, Clone, Default)]
pub struct WatermarkOutput {
    /// Close the dialog
    pub close_requested: bool,
}

/// Show the watermark dialog editing `layout` in place.
pub fn show_watermark(
    ctx: &egui::Context,
    layout: &mut PageLayout,
    is_dark: bool,
) -> WatermarkOutput {
    let mut output = WatermarkOutput::default();

    egui::Window::new("Watermark")
        .id(egui::Id::new("watermark_dialog"))
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(dialog_frame(is_dark))
        .show(ctx, |ui| {
            ui.set_min_width(280.0);

            if ui.input(|i| i.key_pressed(Key::Escape)) {
                output.close_requested = true;
            }

            ui.label(RichText::new("Watermark").size(14.0).strong());
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Text:");
                ui.add_sized(
                    Vec2::new(180.0, 24.0),
                    egui::TextEdit::singleline(&mut layout.watermark_text)
                        .hint_text("e.g. DRAFT"),
                );
            });

            ui.horizontal(|ui| {
                ui.label("Size (pt):");
                ui.add(egui::Slider::new(&mut layout.watermark_size_pt, 12..=144));
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Remove").clicked() {
                    layout.watermark_text.clear();
                    output.close_requested = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Done").clicked() {
                        output.close_requested = true;
                    }
                });
            });
        });

    output
}

// ─────────────────────────────────────────────────────────────────────────────
// Symbol Picker
// ─────────────────────────────────────────────────────────────────────────────

/// Output from the symbol picker.
#[derive(Debug, Clone, Default)]
pub struct SymbolPickerOutput {
    /// The symbol the user chose, if any
    pub chosen: Option<&'static str>,
    /// Close the picker
    pub close_requested: bool,
}

/// Show the symbol picker grid.
pub fn show_symbol_picker(ctx: &egui::Context, is_dark: bool) -> SymbolPickerOutput {
    let mut output = SymbolPickerOutput::default();

    egui::Window::new("Insert Symbol")
        .id(egui::Id::new("symbol_picker"))
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(dialog_frame(is_dark))
        .show(ctx, |ui| {
            if ui.input(|i| i.key_pressed(Key::Escape)) {
                output.close_requested = true;
            }

            ui.horizontal(|ui| {
                ui.label(RichText::new("Insert Symbol").size(14.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(egui::Button::new(RichText::new("×").size(16.0)).frame(false))
                        .clicked()
                    {
                        output.close_requested = true;
                    }
                });
            });
            ui.add_space(6.0);

            egui::Grid::new("symbol_grid").spacing([4.0, 4.0]).show(ui, |ui| {
                for (i, symbol) in fragments::SYMBOLS.iter().enumerate() {
                    if ui
                        .add(
                            egui::Button::new(RichText::new(*symbol).size(16.0))
                                .min_size(Vec2::new(30.0, 28.0)),
                        )
                        .clicked()
                    {
                        output.chosen = Some(*symbol);
                        output.close_requested = true;
                    }
                    if (i + 1) % 8 == 0 {
                        ui.end_row();
                    }
                }
            });
        });

    output
}

// ─────────────────────────────────────────────────────────────────────────────
// Save Dialog
// ─────────────────────────────────────────────────────────────────────────────

/// Output from the save dialog.
#[derive(Debug, Clone, Default)]
pub struct SaveDialogOutput {
    /// Save in the chosen format
    pub save_requested: Option<SaveFormat>,
    /// Close the dialog
    pub close_requested: bool,
}

/// Show the save dialog.
///
/// `selected` persists the chosen format across frames; `filename`
/// previews the resulting `<name>.<ext>`.
pub fn show_save_dialog(
    ctx: &egui::Context,
    selected: &mut SaveFormat,
    document_name: &str,
    is_dark: bool,
) -> SaveDialogOutput {
    let mut output = SaveDialogOutput::default();

    egui::Window::new("Save Document")
        .id(egui::Id::new("save_dialog"))
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(dialog_frame(is_dark))
        .show(ctx, |ui| {
            ui.set_min_width(260.0);

            if ui.input(|i| i.key_pressed(Key::Escape)) {
                output.close_requested = true;
            }

            ui.label(RichText::new("Save Document").size(14.0).strong());
            ui.add_space(8.0);

            for format in SaveFormat::all() {
                ui.radio_value(selected, *format, format.label());
            }

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("{}.{}", document_name, selected.extension()))
                    .size(12.0)
                    .weak(),
            );

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    output.close_requested = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save").clicked() {
                        output.save_requested = Some(*selected);
                    }
                });
            });
        });

    output
}

// ─────────────────────────────────────────────────────────────────────────────
// Confirmation Dialog
// ─────────────────────────────────────────────────────────────────────────────

/// Output from a confirmation dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfirmOutput {
    pub confirmed: bool,
    pub cancelled: bool,
}

/// Show a generic confirm/cancel prompt.
pub fn show_confirm(
    ctx: &egui::Context,
    title: &str,
    message: &str,
    confirm_label: &str,
    is_dark: bool,
) -> ConfirmOutput {
    let mut output = ConfirmOutput::default();

    egui::Window::new(title)
        .id(egui::Id::new("confirm_dialog"))
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(dialog_frame(is_dark))
        .show(ctx, |ui| {
            ui.set_min_width(260.0);

            if ui.input(|i| i.key_pressed(Key::Escape)) {
                output.cancelled = true;
            }
            if ui.input(|i| i.key_pressed(Key::Enter)) {
                output.confirmed = true;
            }

            ui.label(RichText::new(title).size(14.0).strong());
            ui.add_space(6.0);
            ui.label(message);
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    output.cancelled = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(confirm_label).clicked() {
                        output.confirmed = true;
                    }
                });
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
    fn test_outputs_default_to_inert() {
        let out = FindReplaceOutput::default();
        assert!(!out.find_requested && !out.replace_all_requested && !out.close_requested);

        let out = SaveDialogOutput::default();
        assert!(out.save_requested.is_none());

        let out = ConfirmOutput::default();
        assert!(!out.confirmed && !out.cancelled);
    }

    #[test]
    fn test_page_colors_are_hex() {
        for (_, hex) in PAGE_COLORS {
            assert!(hex.starts_with('#') && hex.len() == 7);
        }
    }
}
