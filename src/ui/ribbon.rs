//! Ribbon UI component
//!
//! The toolbar across the top of the window: file actions, undo/redo,
//! formatting controls, insertion menus, and page tools, organized into
//! labeled groups with separators. Rendering returns at most one action
//! per frame; the app layer translates actions into state mutations and
//! editor commands.

use crate::document::{Alignment, FormattingState};
use crate::editor::{EditorCommand, Shape};
use crate::theme::ThemeColors;
use eframe::egui::{self, Color32, Response, RichText, Ui, Vec2};

/// Height of the ribbon.
const RIBBON_HEIGHT: f32 = 40.0;

/// Size of icon buttons.
const ICON_BUTTON_SIZE: Vec2 = Vec2::new(32.0, 28.0);

/// Preset text colors offered by the color menu.
const TEXT_COLORS: &[(&str, &str)] = &[
    ("Black", "#000000"),
    ("Dark Gray", "#444444"),
    ("Red", "#c0392b"),
    ("Orange", "#d35400"),
    ("Green", "#1e8449"),
    ("Blue", "#1f618d"),
    ("Purple", "#6c3483"),
    ("White", "#ffffff"),
];

/// Preset highlight colors offered by the highlight menu.
const HIGHLIGHT_COLORS: &[(&str, &str)] = &[
    ("Yellow", "#ffff00"),
    ("Lime", "#ccff90"),
    ("Cyan", "#a7ffeb"),
    ("Pink", "#ffc0cb"),
    ("Orange", "#ffcc80"),
    ("None", ""),
];

/// Letter spacing presets in pixels.
const LETTER_SPACINGS: &[(&str, f32)] = &[
    ("Tight", -0.5),
    ("Normal", 0.0),
    ("Wide", 1.0),
    ("Wider", 2.0),
    ("Widest", 4.0),
];

// ─────────────────────────────────────────────────────────────────────────────
// Ribbon Actions
// ─────────────────────────────────────────────────────────────────────────────

/// Actions that can be triggered from the ribbon.
#[derive(Debug, Clone, PartialEq)]
pub enum RibbonAction {
    // File operations
    /// Start a new document
    New,
    /// Open the save dialog
    Save,
    /// Open the print copy
    Print,
    /// Export as PDF via the print dialog
    ExportPdf,
    /// Share (rich clipboard copy)
    Share,

    // Edit operations
    /// Undo last change
    Undo,
    /// Redo last undone change
    Redo,
    /// Open the find/replace panel
    FindReplace,

    // Formatting
    /// Dispatch an editing command to the surface
    Command(EditorCommand),
    /// Apply a custom font size typed into the size box
    ApplyFontSize,
    /// Clear the highlight color
    ClearHighlight,
    /// Set document-wide letter spacing in pixels
    SetLetterSpacing(f32),

    // Insert operations
    /// Insert the table skeleton
    InsertTable,
    /// Insert a CSS shape
    InsertShape(Shape),
    /// Open the symbol picker
    OpenSymbolPicker,
    /// Pick and insert an image file
    InsertImage,
    /// Insert a horizontal rule
    InsertRule,

    // Page tools
    /// Open the page setup dialog
    OpenPageSetup,
    /// Open the watermark dialog
    OpenWatermark,

    // Settings
    /// Toggle light/dark theme
    ToggleTheme,
    /// Open the settings panel
    OpenSettings,
}

// ─────────────────────────────────────────────────────────────────────────────
// Ribbon
// ─────────────────────────────────────────────────────────────────────────────

/// Ribbon UI state and rendering.
#[derive(Debug, Clone, Default)]
pub struct Ribbon;

impl Ribbon {
    /// Create a new ribbon instance.
    pub fn new() -> Self {
        Self
    }

    /// The ribbon height.
    pub fn height(&self) -> f32 {
        RIBBON_HEIGHT
    }

    /// Render the ribbon and return any triggered action.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        colors: &ThemeColors,
        formatting: &FormattingState,
        font_size_input: &mut String,
        can_undo: bool,
        can_redo: bool,
    ) -> Option<RibbonAction> {
        let mut action: Option<RibbonAction> = None;
        let is_dark = colors.is_dark();

        ui.painter()
            .rect_filled(ui.available_rect_before_wrap(), 0.0, colors.background_secondary);

        ui.horizontal(|ui| {
            ui.set_height(self.height());
            ui.spacing_mut().item_spacing.x = 2.0;

            // ═══════════════════════════════════════════════════════════════════
            // File Group
            // ═══════════════════════════════════════════════════════════════════
            ui.label(RichText::new("File").size(10.0).color(colors.text_muted));

            if icon_button(ui, "📄", "New (Ctrl+N)", true, is_dark).clicked() {
                action = Some(RibbonAction::New);
            }
            if icon_button(ui, "💾", "Save (Ctrl+S)", true, is_dark).clicked() {
                action = Some(RibbonAction::Save);
            }
            if icon_button(ui, "🖶", "Print (Ctrl+P)", true, is_dark).clicked() {
                action = Some(RibbonAction::Print);
            }
            if icon_button(ui, "📑", "Export as PDF", true, is_dark).clicked() {
                action = Some(RibbonAction::ExportPdf);
            }
            if icon_button(ui, "📤", "Share (copy to clipboard)", true, is_dark).clicked() {
                action = Some(RibbonAction::Share);
            }

            group_separator(ui, colors, self.height());

            // ═══════════════════════════════════════════════════════════════════
            // Edit Group
            // ═══════════════════════════════════════════════════════════════════
            ui.label(RichText::new("Edit").size(10.0).color(colors.text_muted));

            if icon_button(ui, "↩", "Undo (Ctrl+Z)", can_undo, is_dark).clicked() {
                action = Some(RibbonAction::Undo);
            }
            if icon_button(ui, "↪", "Redo (Ctrl+Y)", can_redo, is_dark).clicked() {
                action = Some(RibbonAction::Redo);
            }
            if icon_button(ui, "🔍", "Find and Replace (Ctrl+F)", true, is_dark).clicked() {
                action = Some(RibbonAction::FindReplace);
            }

            group_separator(ui, colors, self.height());

            // ═══════════════════════════════════════════════════════════════════
            // Font Group
            // ═══════════════════════════════════════════════════════════════════
            egui::ComboBox::from_id_source("font_family_dropdown")
                .selected_text(RichText::new(&formatting.font_family).size(12.0))
                .width(120.0)
                .show_ui(ui, |ui| {
                    for family in FormattingState::FONT_FAMILIES {
                        let selected = formatting.font_family == *family;
                        if ui.selectable_label(selected, *family).clicked() {
                            action = Some(RibbonAction::Command(EditorCommand::FontName(
                                family.to_string(),
                            )));
                        }
                    }
                });

            // Size box accepts presets from the menu or free-typed values
            let size_edit = ui.add_sized(
                Vec2::new(42.0, 22.0),
                egui::TextEdit::singleline(font_size_input).font(egui::FontId::proportional(12.0)),
            );
            if size_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action = Some(RibbonAction::ApplyFontSize);
            }
            egui::ComboBox::from_id_source("font_size_dropdown")
                .selected_text("")
                .width(18.0)
                .show_ui(ui, |ui| {
                    for size in FormattingState::FONT_SIZE_PRESETS {
                        let selected = formatting.font_size_pt == *size;
                        if ui.selectable_label(selected, size.to_string()).clicked() {
                            *font_size_input = size.to_string();
                            action = Some(RibbonAction::ApplyFontSize);
                        }
                    }
                });

            group_separator(ui, colors, self.height());

            // ═══════════════════════════════════════════════════════════════════
            // Format Group
            // ═══════════════════════════════════════════════════════════════════
            ui.label(RichText::new("Format").size(10.0).color(colors.text_muted));

            if format_button(ui, "B", "Bold (Ctrl+B)", is_dark, false).clicked() {
                action = Some(RibbonAction::Command(EditorCommand::Bold));
            }
            if format_button(ui, "I", "Italic (Ctrl+I)", is_dark, false).clicked() {
                action = Some(RibbonAction::Command(EditorCommand::Italic));
            }
            if format_button(ui, "U", "Underline (Ctrl+U)", is_dark, false).clicked() {
                action = Some(RibbonAction::Command(EditorCommand::Underline));
            }
            if format_button(ui, "S̶", "Strikethrough", is_dark, false).clicked() {
                action = Some(RibbonAction::Command(EditorCommand::StrikeThrough));
            }
            if format_button(ui, "x₂", "Subscript", is_dark, false).clicked() {
                action = Some(RibbonAction::Command(EditorCommand::Subscript));
            }
            if format_button(ui, "x²", "Superscript", is_dark, false).clicked() {
                action = Some(RibbonAction::Command(EditorCommand::Superscript));
            }
            if format_button(ui, "⌫", "Clear formatting", is_dark, false).clicked() {
                action = Some(RibbonAction::Command(EditorCommand::RemoveFormat));
            }

            // Color menus
            ui.menu_button(RichText::new("A🖍").size(12.0), |ui| {
                for (name, hex) in TEXT_COLORS {
                    if ui.button(*name).clicked() {
                        action = Some(RibbonAction::Command(EditorCommand::ForeColor(
                            hex.to_string(),
                        )));
                        ui.close_menu();
                    }
                }
            })
            .response
            .on_hover_text("Text color");

            ui.menu_button(RichText::new("🖊").size(12.0), |ui| {
                for (name, hex) in HIGHLIGHT_COLORS {
                    if ui.button(*name).clicked() {
                        action = if hex.is_empty() {
                            Some(RibbonAction::ClearHighlight)
                        } else {
                            Some(RibbonAction::Command(EditorCommand::HiliteColor(
                                hex.to_string(),
                            )))
                        };
                        ui.close_menu();
                    }
                }
            })
            .response
            .on_hover_text("Highlight color");

            // Letter spacing applies to the whole document, not the selection
            ui.menu_button(RichText::new("a↔b").size(11.0), |ui| {
                for (name, px) in LETTER_SPACINGS {
                    let selected = (formatting.letter_spacing_px - px).abs() < f32::EPSILON;
                    if ui.selectable_label(selected, *name).clicked() {
                        action = Some(RibbonAction::SetLetterSpacing(*px));
                        ui.close_menu();
                    }
                }
            })
            .response
            .on_hover_text("Letter spacing");

            // Alignment
            for alignment in Alignment::all() {
                let icon = match alignment {
                    Alignment::Left => "⬅",
                    Alignment::Center => "↔",
                    Alignment::Right => "➡",
                    Alignment::Justify => "☰",
                };
                let active = formatting.alignment == *alignment;
                if format_button(ui, icon, alignment.label(), is_dark, active).clicked() {
                    action = Some(RibbonAction::Command(EditorCommand::Align(*alignment)));
                }
            }

            // Lists
            if format_button(ui, "•≡", "Bulleted list", is_dark, false).clicked() {
                action = Some(RibbonAction::Command(EditorCommand::InsertUnorderedList));
            }
            if format_button(ui, "1≡", "Numbered list", is_dark, false).clicked() {
                action = Some(RibbonAction::Command(EditorCommand::InsertOrderedList));
            }

            group_separator(ui, colors, self.height());

            // ═══════════════════════════════════════════════════════════════════
            // Insert Group
            // ═══════════════════════════════════════════════════════════════════
            ui.label(RichText::new("Insert").size(10.0).color(colors.text_muted));

            if icon_button(ui, "▦", "Insert table", true, is_dark).clicked() {
                action = Some(RibbonAction::InsertTable);
            }
            ui.menu_button(RichText::new("⬟").size(14.0), |ui| {
                for shape in Shape::all() {
                    if ui.button(shape.label()).clicked() {
                        action = Some(RibbonAction::InsertShape(*shape));
                        ui.close_menu();
                    }
                }
            })
            .response
            .on_hover_text("Insert shape");
            if icon_button(ui, "Ω", "Insert symbol", true, is_dark).clicked() {
                action = Some(RibbonAction::OpenSymbolPicker);
            }
            if icon_button(ui, "🖼", "Insert image", true, is_dark).clicked() {
                action = Some(RibbonAction::InsertImage);
            }
            if icon_button(ui, "―", "Insert horizontal rule", true, is_dark).clicked() {
                action = Some(RibbonAction::InsertRule);
            }

            group_separator(ui, colors, self.height());

            // ═══════════════════════════════════════════════════════════════════
            // Page Group
            // ═══════════════════════════════════════════════════════════════════
            ui.label(RichText::new("Page").size(10.0).color(colors.text_muted));

            if icon_button(ui, "📐", "Page setup", true, is_dark).clicked() {
                action = Some(RibbonAction::OpenPageSetup);
            }
            if icon_button(ui, "🏷", "Watermark", true, is_dark).clicked() {
                action = Some(RibbonAction::OpenWatermark);
            }

            // Right-aligned settings controls
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if icon_button(ui, "⚙", "Settings", true, is_dark).clicked() {
                    action = Some(RibbonAction::OpenSettings);
                }
                let theme_icon = if is_dark { "☀" } else { "🌙" };
                if icon_button(ui, theme_icon, "Toggle theme", true, is_dark).clicked() {
                    action = Some(RibbonAction::ToggleTheme);
                }
            });
        });

        action
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Button Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Render an icon button with hover highlight.
fn icon_button(ui: &mut Ui, icon: &str, tooltip: &str, enabled: bool, is_dark: bool) -> Response {
    let text_color = if enabled {
        if is_dark {
            Color32::from_rgb(220, 220, 220)
        } else {
            Color32::from_rgb(50, 50, 50)
        }
    } else if is_dark {
        Color32::from_rgb(100, 100, 100)
    } else {
        Color32::from_rgb(160, 160, 160)
    };

    let hover_bg = if is_dark {
        Color32::from_rgb(60, 60, 60)
    } else {
        Color32::from_rgb(220, 220, 220)
    };

    let btn = ui.add_enabled(
        enabled,
        egui::Button::new(RichText::new(" ").size(16.0))
            .frame(false)
            .min_size(ICON_BUTTON_SIZE),
    );

    if btn.hovered() && enabled {
        ui.painter()
            .rect_filled(btn.rect, egui::Rounding::same(3.0), hover_bg);
    }

    ui.painter().text(
        btn.rect.center(),
        egui::Align2::CENTER_CENTER,
        icon,
        egui::FontId::proportional(16.0),
        text_color,
    );

    btn.on_hover_text(tooltip)
}

/// Render a format button with active-state highlighting.
fn format_button(ui: &mut Ui, icon: &str, tooltip: &str, is_dark: bool, active: bool) -> Response {
    let text_color = if is_dark {
        Color32::from_rgb(220, 220, 220)
    } else {
        Color32::from_rgb(50, 50, 50)
    };

    let active_bg = if is_dark {
        Color32::from_rgb(70, 90, 120)
    } else {
        Color32::from_rgb(200, 220, 240)
    };

    let hover_bg = if is_dark {
        Color32::from_rgb(60, 60, 60)
    } else {
        Color32::from_rgb(220, 220, 220)
    };

    let btn = ui.add(
        egui::Button::new(RichText::new(icon).size(12.0).color(text_color))
            .frame(false)
            .min_size(Vec2::new(24.0, 22.0)),
    );

    if active {
        ui.painter()
            .rect_filled(btn.rect, egui::Rounding::same(3.0), active_bg);
        ui.painter().text(
            btn.rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(12.0),
            text_color,
        );
    } else if btn.hovered() {
        ui.painter()
            .rect_filled(btn.rect, egui::Rounding::same(3.0), hover_bg);
        ui.painter().text(
            btn.rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(12.0),
            text_color,
        );
    }

    btn.on_hover_text(tooltip)
}

/// Draw a vertical group separator with padding.
fn group_separator(ui: &mut Ui, colors: &ThemeColors, height: f32) {
    ui.add_space(4.0);
    let (rect, _response) =
        ui.allocate_exact_size(Vec2::new(1.0, height - 8.0), egui::Sense::hover());
    ui.painter().line_segment(
        [rect.center_top(), rect.center_bottom()],
        egui::Stroke::new(1.0, colors.border),
    );
    ui.add_space(4.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
