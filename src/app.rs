//! Main application for Quillpad
//!
//! The eframe shell: the ribbon along the top, the page-styled editing
//! area in the center, the status bar at the bottom, and the modal
//! dialogs. Every frame translates UI actions into editor commands or
//! state mutations and resynchronizes the document afterwards.

use crate::config::load_config;
use crate::document::name_from_path;
use crate::editor::{fragments, EditorCommand, RichTextHost, Shape};
use crate::export::{self, PasteContent, PdfExportOutcome, SaveFormat};
use crate::files;
use crate::state::{AppState, NoticeKind, PendingAction};
use crate::theme::ThemeManager;
use crate::ui::{self, Ribbon, RibbonAction, StatusBarAction};
use eframe::egui::{self, Key, Modifiers};
use log::{debug, info, warn};

// ─────────────────────────────────────────────────────────────────────────────
// Keyboard Shortcuts
// ─────────────────────────────────────────────────────────────────────────────

/// Actions triggered by keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyboardAction {
    New,
    Save,
    Print,
    Undo,
    Redo,
    Bold,
    Italic,
    Underline,
    OpenFindReplace,
    StructuredPaste,
    ZoomIn,
    ZoomOut,
    ZoomFit,
}

// ─────────────────────────────────────────────────────────────────────────────
// Application
// ─────────────────────────────────────────────────────────────────────────────

/// The Quillpad application.
pub struct QuillpadApp {
    state: AppState,
    theme_manager: ThemeManager,
    ribbon: Ribbon,
    /// Format last chosen in the save dialog
    save_format: SaveFormat,
    /// Last observed window size, compared each frame
    last_window_size: Option<egui::Vec2>,
    /// Last observed window position, compared each frame
    last_window_pos: Option<egui::Pos2>,
}

impl QuillpadApp {
    /// Create the application, loading persisted settings.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_config();
        let theme_manager = ThemeManager::new(settings.theme);
        info!("Quillpad initialized");

        Self {
            state: AppState::new(settings),
            theme_manager,
            ribbon: Ribbon::new(),
            save_format: SaveFormat::default(),
            last_window_size: None,
            last_window_pos: None,
        }
    }

    /// Track the live window geometry into settings so the next session
    /// restores it.
    fn update_window_state(&mut self, ctx: &egui::Context) {
        let mut changed = false;

        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                let size = rect.size();
                let pos = rect.min;

                let size_changed = self
                    .last_window_size
                    .map(|s| (s - size).length() > 1.0)
                    .unwrap_or(true);
                let pos_changed = self
                    .last_window_pos
                    .map(|p| (p - pos).length() > 1.0)
                    .unwrap_or(true);

                if size_changed || pos_changed {
                    self.last_window_size = Some(size);
                    self.last_window_pos = Some(pos);
                    changed = true;
                }
            }
        });

        if changed {
            if let (Some(size), Some(pos)) = (self.last_window_size, self.last_window_pos) {
                let maximized = ctx.input(|i| i.viewport().maximized.unwrap_or(false));
                self.state
                    .remember_window_geometry(size.x, size.y, pos.x, pos.y, maximized);
                debug!(
                    "Window state updated: {}x{} at ({}, {}), maximized: {}",
                    size.x, size.y, pos.x, pos.y, maximized
                );
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Keyboard Handling
    // ─────────────────────────────────────────────────────────────────────────

    fn keyboard_action(&self, ctx: &egui::Context) -> Option<KeyboardAction> {
        ctx.input_mut(|i| {
            if i.consume_key(Modifiers::COMMAND, Key::N) {
                return Some(KeyboardAction::New);
            }
            if i.consume_key(Modifiers::COMMAND, Key::S) {
                return Some(KeyboardAction::Save);
            }
            if i.consume_key(Modifiers::COMMAND, Key::P) {
                return Some(KeyboardAction::Print);
            }
            if i.consume_key(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z) {
                return Some(KeyboardAction::Redo);
            }
            if i.consume_key(Modifiers::COMMAND, Key::Z) {
                return Some(KeyboardAction::Undo);
            }
            if i.consume_key(Modifiers::COMMAND, Key::Y) {
                return Some(KeyboardAction::Redo);
            }
            if i.consume_key(Modifiers::COMMAND, Key::B) {
                return Some(KeyboardAction::Bold);
            }
            if i.consume_key(Modifiers::COMMAND, Key::I) {
                return Some(KeyboardAction::Italic);
            }
            if i.consume_key(Modifiers::COMMAND, Key::U) {
                return Some(KeyboardAction::Underline);
            }
            if i.consume_key(Modifiers::COMMAND, Key::F) {
                return Some(KeyboardAction::OpenFindReplace);
            }
            if i.consume_key(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::V) {
                return Some(KeyboardAction::StructuredPaste);
            }
            if i.consume_key(Modifiers::COMMAND, Key::Plus)
                || i.consume_key(Modifiers::COMMAND, Key::Equals)
            {
                return Some(KeyboardAction::ZoomIn);
            }
            if i.consume_key(Modifiers::COMMAND, Key::Minus) {
                return Some(KeyboardAction::ZoomOut);
            }
            if i.consume_key(Modifiers::COMMAND, Key::Num0) {
                return Some(KeyboardAction::ZoomFit);
            }
            None
        })
    }

    fn handle_keyboard_action(&mut self, action: KeyboardAction, now: f64) {
        match action {
            KeyboardAction::New => self.state.request_new_document(),
            KeyboardAction::Save => self.state.ui.show_save_dialog = true,
            KeyboardAction::Print => self.print(now),
            KeyboardAction::Undo => self.undo(),
            KeyboardAction::Redo => self.redo(),
            KeyboardAction::Bold => self.state.apply_command(&EditorCommand::Bold),
            KeyboardAction::Italic => self.state.apply_command(&EditorCommand::Italic),
            KeyboardAction::Underline => self.state.apply_command(&EditorCommand::Underline),
            KeyboardAction::OpenFindReplace => self.state.ui.show_find_replace = true,
            KeyboardAction::StructuredPaste => self.structured_paste(now),
            KeyboardAction::ZoomIn => {
                self.state.zoom.zoom_in();
                self.state.remember_zoom();
            }
            KeyboardAction::ZoomOut => {
                self.state.zoom.zoom_out();
                self.state.remember_zoom();
            }
            KeyboardAction::ZoomFit => {
                self.state.zoom.fit();
                self.state.remember_zoom();
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Action Handlers
    // ─────────────────────────────────────────────────────────────────────────

    fn undo(&mut self) {
        if self.state.surface.undo() {
            self.state.sync_from_surface();
        }
    }

    fn redo(&mut self) {
        if self.state.surface.redo() {
            self.state.sync_from_surface();
        }
    }

    fn print(&mut self, now: f64) {
        match export::print_document(&self.state.document, &self.state.formatting, &self.state.layout)
        {
            Ok(_) => self.state.notify(NoticeKind::Info, "Opened print preview", now),
            Err(e) => {
                warn!("Print failed: {}", e);
                self.state
                    .notify(NoticeKind::Error, format!("Print failed: {}", e), now);
            }
        }
    }

    fn export_pdf(&mut self, now: f64) {
        match export::export_pdf_via_print(
            &self.state.document,
            &self.state.formatting,
            &self.state.layout,
        ) {
            Ok(PdfExportOutcome::Opened(_)) => self.state.notify(
                NoticeKind::Info,
                "Use the print dialog to save as PDF",
                now,
            ),
            Ok(PdfExportOutcome::OpenerFailed(_)) => {
                // No browser to print from; offer the HTML itself instead
                warn!("No system opener for PDF export; offering HTML save");
                self.state.notify(
                    NoticeKind::Info,
                    "No browser available; saving as HTML instead",
                    now,
                );
                self.save_with_format(SaveFormat::Html, now);
            }
            Err(e) => {
                warn!("PDF export failed: {}", e);
                self.state
                    .notify(NoticeKind::Error, format!("PDF export failed: {}", e), now);
            }
        }
    }

    fn share(&mut self, now: f64) {
        match export::share_document(
            &self.state.document,
            &self.state.formatting,
            &self.state.layout,
        ) {
            Ok(()) => self
                .state
                .notify(NoticeKind::Success, "Document copied to clipboard", now),
            Err(e) => {
                warn!("Share failed: {}", e);
                self.state
                    .notify(NoticeKind::Error, format!("Share failed: {}", e), now);
            }
        }
    }

    fn structured_paste(&mut self, now: f64) {
        match export::read_paste_content() {
            Ok(Some(PasteContent::Image(fragment))) => {
                self.state.apply_command(&EditorCommand::InsertHtml(fragment));
                self.state.notify(NoticeKind::Info, "Pasted image", now);
            }
            Ok(Some(PasteContent::Text(text))) => {
                self.state.apply_command(&EditorCommand::InsertText(text));
            }
            // Nothing structured offered; the text widget's own paste applies
            Ok(None) => {}
            Err(e) => {
                warn!("Clipboard read failed: {}", e);
                self.state
                    .notify(NoticeKind::Error, format!("Paste failed: {}", e), now);
            }
        }
    }

    fn insert_image(&mut self, now: f64) {
        let Some(path) = files::pick_image_dialog(None) else {
            return;
        };
        match files::image_file_fragment(&path) {
            Ok(fragment) => {
                self.state.apply_command(&EditorCommand::InsertHtml(fragment));
            }
            Err(e) => {
                warn!("Image insert failed: {}", e);
                self.state
                    .notify(NoticeKind::Error, format!("Image insert failed: {}", e), now);
            }
        }
    }

    fn apply_font_size_input(&mut self, now: f64) {
        let input = self.state.ui.font_size_input.clone();
        match self.state.formatting.set_font_size_from_input(&input) {
            Ok(size) => {
                self.state.ui.font_size_input = size.to_string();
                self.state.apply_command(&EditorCommand::FontSize(size));
            }
            Err(e) => {
                // Rejected input reverts to the active size
                self.state.ui.font_size_input = self.state.formatting.font_size_pt.to_string();
                self.state.notify(NoticeKind::Error, e.to_string(), now);
            }
        }
    }

    fn handle_ribbon_action(&mut self, action: RibbonAction, now: f64) {
        match action {
            RibbonAction::New => self.state.request_new_document(),
            RibbonAction::Save => self.state.ui.show_save_dialog = true,
            RibbonAction::Print => self.print(now),
            RibbonAction::ExportPdf => self.export_pdf(now),
            RibbonAction::Share => self.share(now),
            RibbonAction::Undo => self.undo(),
            RibbonAction::Redo => self.redo(),
            RibbonAction::FindReplace => self.state.ui.show_find_replace = true,
            RibbonAction::Command(command) => {
                // Formatting state tracks the latest choice before dispatch
                match &command {
                    EditorCommand::FontName(family) => {
                        self.state.formatting.font_family = family.clone();
                    }
                    EditorCommand::ForeColor(color) => {
                        self.state.formatting.text_color = color.clone();
                    }
                    EditorCommand::HiliteColor(color) => {
                        self.state.formatting.highlight_color = Some(color.clone());
                    }
                    EditorCommand::Align(alignment) => {
                        self.state.formatting.alignment = *alignment;
                    }
                    _ => {}
                }
                self.state.apply_command(&command);
            }
            RibbonAction::ApplyFontSize => self.apply_font_size_input(now),
            RibbonAction::ClearHighlight => {
                self.state.formatting.highlight_color = None;
            }
            RibbonAction::SetLetterSpacing(px) => {
                self.state.formatting.letter_spacing_px = px;
            }
            RibbonAction::InsertTable => {
                self.state
                    .apply_command(&EditorCommand::InsertHtml(fragments::table_fragment()));
            }
            RibbonAction::InsertShape(shape) => self.insert_shape(shape),
            RibbonAction::OpenSymbolPicker => self.state.ui.show_symbol_picker = true,
            RibbonAction::InsertImage => self.insert_image(now),
            RibbonAction::InsertRule => {
                self.state.apply_command(&EditorCommand::InsertHtml(
                    fragments::horizontal_rule_fragment(),
                ));
            }
            RibbonAction::OpenPageSetup => self.state.ui.show_page_setup = true,
            RibbonAction::OpenWatermark => self.state.ui.show_watermark = true,
            RibbonAction::ToggleTheme => {
                let theme = self.theme_manager.toggle();
                self.state.settings.theme = theme;
                self.state.settings_dirty = true;
            }
            RibbonAction::OpenSettings => self.state.ui.show_settings = true,
        }
    }

    fn insert_shape(&mut self, shape: Shape) {
        self.state
            .apply_command(&EditorCommand::InsertHtml(shape.fragment()));
    }

    fn save_with_format(&mut self, format: SaveFormat, now: f64) {
        let default_name = self.state.document.export_filename(format.extension());
        let Some(path) = files::save_document_dialog(format, &default_name, None) else {
            return;
        };
        match export::save_document(
            &path,
            &self.state.document,
            &self.state.formatting,
            &self.state.layout,
            format,
        ) {
            Ok(()) => {
                // A name typed into the file dialog becomes the document name
                self.state.document.rename(&name_from_path(&path));
                self.state.ui.show_save_dialog = false;
                self.state.notify(
                    NoticeKind::Success,
                    format!("Saved {}", path.display()),
                    now,
                );
            }
            Err(e) => {
                warn!("Save failed: {}", e);
                self.state
                    .notify(NoticeKind::Error, format!("Save failed: {}", e), now);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────────────────────

    fn show_dialogs(&mut self, ctx: &egui::Context, now: f64) {
        let is_dark = self.theme_manager.is_dark();

        if self.state.ui.show_find_replace {
            let output = ui::show_find_replace(ctx, &mut self.state.find, is_dark);
            if output.find_requested {
                let text = self.state.surface.plain_text();
                self.state.find.find_matches(&text);
                if !self.state.find_and_select_first() {
                    self.state.notify(NoticeKind::Info, "No matches", now);
                }
            }
            if output.next_requested {
                self.state.find.next_match();
                self.select_current_match();
            }
            if output.prev_requested {
                self.state.find.prev_match();
                self.select_current_match();
            }
            if output.replace_all_requested {
                if self.state.replace_all() {
                    self.state.find.clear();
                    self.state.notify(NoticeKind::Success, "Replaced all matches", now);
                } else {
                    self.state.notify(NoticeKind::Info, "Nothing to replace", now);
                }
            }
            if output.close_requested {
                self.state.ui.show_find_replace = false;
            }
        }

        if self.state.ui.show_page_setup {
            let output = ui::show_page_setup(ctx, &mut self.state.layout, is_dark);
            if output.close_requested {
                self.state.ui.show_page_setup = false;
            }
        }

        if self.state.ui.show_watermark {
            let output = ui::show_watermark(ctx, &mut self.state.layout, is_dark);
            if output.close_requested {
                self.state.ui.show_watermark = false;
            }
        }

        if self.state.ui.show_symbol_picker {
            let output = ui::show_symbol_picker(ctx, is_dark);
            if let Some(symbol) = output.chosen {
                self.state
                    .apply_command(&EditorCommand::InsertHtml(fragments::symbol_fragment(symbol)));
            }
            if output.close_requested {
                self.state.ui.show_symbol_picker = false;
            }
        }

        if self.state.ui.show_save_dialog {
            let output = ui::show_save_dialog(
                ctx,
                &mut self.save_format,
                &self.state.document.name,
                is_dark,
            );
            if let Some(format) = output.save_requested {
                self.save_with_format(format, now);
            }
            if output.close_requested {
                self.state.ui.show_save_dialog = false;
            }
        }

        if self.state.ui.show_settings {
            let output = ui::show_settings_panel(ctx, &mut self.state.settings, is_dark);
            if output.changed {
                self.state.settings_dirty = true;
                self.theme_manager.set_theme(self.state.settings.theme);
            }
            if output.close_requested {
                self.state.ui.show_settings = false;
                self.state.save_settings_if_dirty();
            }
        }

        if let Some(pending) = self.state.ui.pending_action.clone() {
            let (title, message, confirm) = match pending {
                PendingAction::NewDocument => (
                    "New Document",
                    "Discard the current document? Unsaved content will be lost.",
                    "Discard",
                ),
                PendingAction::Exit => (
                    "Exit",
                    "Exit Quillpad? Unsaved content will be lost.",
                    "Exit",
                ),
            };
            let output = ui::show_confirm(ctx, title, message, confirm, is_dark);
            if output.confirmed {
                self.state.confirm_pending_action();
            }
            if output.cancelled {
                self.state.cancel_pending_action();
            }
        }
    }

    fn select_current_match(&mut self) {
        if let Some((start, end)) = self.state.find.current_match_position() {
            let text = self.state.surface.plain_text();
            let start_chars = text[..start].chars().count();
            let end_chars = start_chars + text[start..end].chars().count();
            self.state.surface.select_text_range(start_chars, end_chars);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Editor Area
    // ─────────────────────────────────────────────────────────────────────────

    /// The page-styled editing area.
    ///
    /// Font, page frame, and zoom follow the live formatting and layout
    /// values. Letter spacing does not: the text widget cannot render
    /// per-character tracking, so it only shows up in exports.
    fn show_editor(&mut self, ui: &mut egui::Ui) {
        let colors = self.theme_manager.colors();
        let zoom = self.state.zoom.factor();

        // Document name header, editable on click
        ui.horizontal(|ui| {
            match &mut self.state.ui.rename_buffer {
                Some(buffer) => {
                    let response = ui.add_sized(
                        [240.0, 24.0],
                        egui::TextEdit::singleline(buffer).font(egui::FontId::proportional(15.0)),
                    );
                    if response.lost_focus() {
                        self.state.commit_rename();
                    } else {
                        response.request_focus();
                    }
                }
                None => {
                    let name = egui::RichText::new(&self.state.document.name)
                        .size(15.0)
                        .color(colors.text_primary);
                    if ui
                        .add(egui::Label::new(name).sense(egui::Sense::click()))
                        .on_hover_text("Rename document")
                        .clicked()
                    {
                        self.state.ui.rename_buffer = Some(self.state.document.name.clone());
                    }
                }
            }
        });
        ui.add_space(6.0);

        // Page-styled editing area: the markup is edited directly, the
        // page frame and fonts reflect layout, formatting, and zoom
        let (page_width_mm, _) = self.state.layout.paper.dimensions_mm();
        let page_width = page_width_mm * 3.78 * zoom;
        let font_size = self.state.formatting.font_size_pt as f32 * 1.25 * zoom;

        let page_frame = egui::Frame::none()
            .fill(parse_page_color(&self.state.layout.page_color))
            .inner_margin(egui::Margin::same(
                (self.state.layout.margin_in * 48.0 * zoom).max(8.0),
            ))
            .rounding(egui::Rounding::same(2.0))
            .shadow(egui::epaint::Shadow {
                offset: egui::vec2(0.0, 2.0),
                blur: 10.0,
                spread: 0.0,
                color: egui::Color32::from_black_alpha(50),
            });

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(page_width.min(ui.available_width() - 16.0));
                page_frame.show(ui, |ui| {
                    let before = self.state.surface.markup();
                    let output = egui::TextEdit::multiline(self.state.surface.markup_mut())
                        .id(egui::Id::new("editor_surface"))
                        .font(egui::FontId::proportional(font_size))
                        .text_color(egui::Color32::from_rgb(30, 30, 30))
                        .desired_width(f32::INFINITY)
                        .desired_rows(28)
                        .frame(false)
                        .show(ui);

                    if output.response.changed() {
                        self.state.surface.record_edit(before);
                        self.state.sync_from_surface();
                    }

                    // Keep the surface selection in step with the widget cursor
                    if let Some(range) = output.cursor_range {
                        let markup = self.state.surface.markup_ref();
                        let a = char_to_byte(markup, range.primary.ccursor.index);
                        let b = char_to_byte(markup, range.secondary.ccursor.index);
                        self.state.surface.select(Some((a.min(b), a.max(b))));
                    }
                });
            });
            ui.add_space(24.0);
        });
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// eframe Integration
// ─────────────────────────────────────────────────────────────────────────────

impl eframe::App for QuillpadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.theme_manager.apply(ctx);
        let now = ctx.input(|i| i.time);
        self.state.update_notice(now);
        self.update_window_state(ctx);

        // Intercept window close while unsaved content exists
        if ctx.input(|i| i.viewport().close_requested()) && !self.state.ui.should_exit {
            if self.state.has_unsaved_content() {
                ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
                self.state.request_exit();
            } else {
                self.state.ui.should_exit = true;
            }
        }
        if self.state.ui.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        if let Some(action) = self.keyboard_action(ctx) {
            self.handle_keyboard_action(action, now);
        }

        let colors = self.theme_manager.colors();

        egui::TopBottomPanel::top("ribbon")
            .exact_height(self.ribbon.height())
            .show(ctx, |ui| {
                let action = self.ribbon.show(
                    ui,
                    &colors,
                    &self.state.formatting,
                    &mut self.state.ui.font_size_input,
                    self.state.surface.can_undo(),
                    self.state.surface.can_redo(),
                );
                if let Some(action) = action {
                    self.handle_ribbon_action(action, now);
                }
            });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let action = ui::show_status_bar(
                ui,
                &colors,
                &self.state.stats,
                self.state.zoom,
                self.state.ui.notice.as_ref(),
            );
            match action {
                Some(StatusBarAction::ZoomIn) => {
                    self.state.zoom.zoom_in();
                    self.state.remember_zoom();
                }
                Some(StatusBarAction::ZoomOut) => {
                    self.state.zoom.zoom_out();
                    self.state.remember_zoom();
                }
                Some(StatusBarAction::ZoomFit) => {
                    self.state.zoom.fit();
                    self.state.remember_zoom();
                }
                None => {}
            }
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(colors.desk))
            .show(ctx, |ui| {
                self.show_editor(ui);
            });

        self.show_dialogs(ctx, now);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.save_settings_if_dirty();
        info!("Quillpad shutting down");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Convert a char index into a byte offset, clamped to the string end.
fn char_to_byte(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Parse a `#rrggbb` page color, falling back to white.
fn parse_page_color(hex: &str) -> egui::Color32 {
    let hex = hex.trim_start_matches('#');
    if hex.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&hex[0..2], 16),
            u8::from_str_radix(&hex[2..4], 16),
            u8::from_str_radix(&hex[4..6], 16),
        ) {
            return egui::Color32::from_rgb(r, g, b);
        }
    }
    egui::Color32::WHITE
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
