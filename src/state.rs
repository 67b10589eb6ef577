//! Application state management for Quillpad
//!
//! The central `AppState` struct: the document and its editable surface,
//! formatting and page layout, zoom, statistics, find/replace, settings,
//! and transient UI state. Every content mutation flows through here so
//! the document body and statistics are resynchronized from the surface
//! after each command.

// Allow dead code - this module has many state management methods for future use
#![allow(dead_code)]

use crate::config::{save_config_silent, Settings, WindowSize};
use crate::document::{Document, FormattingState, PageLayout, Zoom};
use crate::editor::{dispatch, DocumentStats, EditorCommand, FindState, MarkupSurface, RichTextHost};
use log::{debug, info};

// ─────────────────────────────────────────────────────────────────────────────
// Notices
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of a transient status notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A transient notice shown in the status bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    /// When the notice expires, as seconds since app start
    pub expires_at: f64,
}

/// How long notices stay visible, in seconds.
pub const NOTICE_DURATION: f64 = 3.0;

// ─────────────────────────────────────────────────────────────────────────────
// Pending Actions
// ─────────────────────────────────────────────────────────────────────────────

/// Destructive actions awaiting user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Replace the current document with an empty one
    NewDocument,
    /// Close the application
    Exit,
}

// ─────────────────────────────────────────────────────────────────────────────
// UI State
// ─────────────────────────────────────────────────────────────────────────────

/// Transient UI state: dialog visibility, in-progress input buffers,
/// notices, and confirmations. None of this is persisted.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Whether the find/replace panel is open
    pub show_find_replace: bool,
    /// Whether the page setup dialog is open
    pub show_page_setup: bool,
    /// Whether the watermark dialog is open
    pub show_watermark: bool,
    /// Whether the symbol picker is open
    pub show_symbol_picker: bool,
    /// Whether the save dialog is open
    pub show_save_dialog: bool,
    /// Whether the settings panel is open
    pub show_settings: bool,
    /// Whether the document name is being edited, and the edit buffer
    pub rename_buffer: Option<String>,
    /// Custom font size input buffer for the toolbar
    pub font_size_input: String,
    /// Active transient notice
    pub notice: Option<Notice>,
    /// Action awaiting confirmation
    pub pending_action: Option<PendingAction>,
    /// Whether the application should close
    pub should_exit: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// App State
// ─────────────────────────────────────────────────────────────────────────────

/// The complete application state.
pub struct AppState {
    /// The current document (name + serialized markup)
    pub document: Document,
    /// The editable surface the document body mirrors
    pub surface: MarkupSurface,
    /// Document-wide formatting values
    pub formatting: FormattingState,
    /// Page layout for preview and export
    pub layout: PageLayout,
    /// Editor zoom
    pub zoom: Zoom,
    /// Statistics for the current content
    pub stats: DocumentStats,
    /// Find/replace state
    pub find: FindState,
    /// Persisted settings
    pub settings: Settings,
    /// Whether settings changed since the last save
    pub settings_dirty: bool,
    /// Transient UI state
    pub ui: UiState,
}

impl AppState {
    /// Create application state from loaded settings.
    pub fn new(settings: Settings) -> Self {
        let formatting = FormattingState::with_defaults(
            &settings.default_font_family,
            settings.default_font_size,
        );
        let layout = PageLayout::with_margin(settings.default_margin_in);
        let zoom = Zoom::new(settings.zoom_percent);
        let font_size_input = formatting.font_size_pt.to_string();

        Self {
            document: Document::new(),
            surface: MarkupSurface::new(),
            formatting,
            layout,
            zoom,
            stats: DocumentStats::new(),
            find: FindState::new(),
            settings,
            settings_dirty: false,
            ui: UiState {
                font_size_input,
                ..UiState::default()
            },
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Content Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Dispatch an editing command and resynchronize document state.
    pub fn apply_command(&mut self, command: &EditorCommand) {
        self.document.body = dispatch(&mut self.surface, command);
        self.refresh_stats();
    }

    /// Resynchronize the document body and statistics from the surface.
    ///
    /// Called after the text widget mutates the surface buffer directly.
    pub fn sync_from_surface(&mut self) {
        self.document.body = self.surface.markup();
        self.refresh_stats();
    }

    /// Recompute statistics from the current plain text.
    pub fn refresh_stats(&mut self) {
        self.stats = DocumentStats::from_text(&self.surface.plain_text());
    }

    /// Replace the document with a fresh empty one.
    pub fn new_document(&mut self) {
        info!("Starting new document");
        self.document = Document::new();
        self.surface = MarkupSurface::new();
        self.find.clear();
        self.refresh_stats();
    }

    /// Whether discarding the current document needs confirmation.
    pub fn has_unsaved_content(&self) -> bool {
        !self.document.is_empty()
    }

    /// Rename the document from the rename buffer, if editing.
    pub fn commit_rename(&mut self) {
        if let Some(buffer) = self.ui.rename_buffer.take() {
            self.document.rename(&buffer);
            debug!("Document renamed to '{}'", self.document.name);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Find / Replace
    // ─────────────────────────────────────────────────────────────────────────

    /// Find the first match of the search term and select it.
    ///
    /// Returns `true` if a match was selected.
    pub fn find_and_select_first(&mut self) -> bool {
        let text = self.surface.plain_text();
        match crate::editor::find_first(&text, &self.find.search_term) {
            Some((start, end)) => {
                // Offsets are bytes; the mapper wants char positions
                let start_chars = text[..start].chars().count();
                let end_chars = start_chars + text[start..end].chars().count();
                self.surface.select_text_range(start_chars, end_chars)
            }
            None => false,
        }
    }

    /// Replace all occurrences in the raw markup and resync.
    ///
    /// Returns `true` if anything changed.
    pub fn replace_all(&mut self) -> bool {
        let replaced = crate::editor::replace_all_in_markup(
            &self.surface.markup(),
            &self.find.search_term,
            &self.find.replace_term,
        );
        match replaced {
            Some(markup) => {
                self.surface.set_markup(markup);
                self.sync_from_surface();
                true
            }
            None => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pending Actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Request a new document, asking for confirmation when content exists.
    pub fn request_new_document(&mut self) {
        if self.has_unsaved_content() {
            self.ui.pending_action = Some(PendingAction::NewDocument);
        } else {
            self.new_document();
        }
    }

    /// Request application exit, asking for confirmation when content exists.
    pub fn request_exit(&mut self) {
        if self.has_unsaved_content() {
            self.ui.pending_action = Some(PendingAction::Exit);
        } else {
            self.ui.should_exit = true;
        }
    }

    /// Handle a confirmed pending action.
    pub fn confirm_pending_action(&mut self) {
        if let Some(action) = self.ui.pending_action.take() {
            match action {
                PendingAction::NewDocument => self.new_document(),
                PendingAction::Exit => self.ui.should_exit = true,
            }
        }
    }

    /// Cancel the pending action.
    pub fn cancel_pending_action(&mut self) {
        self.ui.pending_action = None;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Notices
    // ─────────────────────────────────────────────────────────────────────────

    /// Show a transient notice.
    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>, now: f64) {
        self.ui.notice = Some(Notice {
            message: message.into(),
            kind,
            expires_at: now + NOTICE_DURATION,
        });
    }

    /// Clear the notice once expired.
    pub fn update_notice(&mut self, now: f64) {
        if let Some(notice) = &self.ui.notice {
            if now >= notice.expires_at {
                self.ui.notice = None;
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────────────────────

    /// Record the current zoom into settings and mark them dirty.
    pub fn remember_zoom(&mut self) {
        if self.settings.zoom_percent != self.zoom.percent() {
            self.settings.zoom_percent = self.zoom.percent();
            self.settings_dirty = true;
        }
    }

    /// Record the live window geometry into settings and mark them dirty.
    pub fn remember_window_geometry(
        &mut self,
        width: f32,
        height: f32,
        x: f32,
        y: f32,
        maximized: bool,
    ) {
        let window_size = WindowSize {
            width,
            height,
            x: Some(x),
            y: Some(y),
            maximized,
        };
        if self.settings.window_size != window_size {
            self.settings.window_size = window_size;
            self.settings_dirty = true;
        }
    }

    /// Persist settings if anything changed.
    pub fn save_settings_if_dirty(&mut self) {
        if self.settings_dirty {
            save_config_silent(&self.settings);
            self.settings_dirty = false;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Alignment;

    // ─────────────────────────────────────────────────────────────────────────
    // Command Flow Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_apply_command_resyncs_body_and_stats() {
        let mut state = AppState::default();
        state.apply_command(&EditorCommand::InsertText("hello world".to_string()));

        assert_eq!(state.document.body, "hello world");
        assert_eq!(state.stats.words, 2);
        assert_eq!(state.stats.characters, 11);
    }

    #[test]
    fn test_formatting_command_updates_body() {
        let mut state = AppState::default();
        state.apply_command(&EditorCommand::InsertText("hello".to_string()));
        state.surface.select(Some((0, 5)));
        state.apply_command(&EditorCommand::Bold);

        assert_eq!(state.document.body, "<b>hello</b>");
        // Stats see the text content, not the tags
        assert_eq!(state.stats.words, 1);
        assert_eq!(state.stats.characters, 5);
    }

    #[test]
    fn test_alignment_command_through_state() {
        let mut state = AppState::default();
        state.apply_command(&EditorCommand::InsertText("title".to_string()));
        state.surface.select(Some((0, 5)));
        state.apply_command(&EditorCommand::Align(Alignment::Center));

        assert!(state.document.body.contains("text-align:center"));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // New Document Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_new_document_resets_everything() {
        let mut state = AppState::default();
        state.apply_command(&EditorCommand::InsertText("content".to_string()));
        state.document.rename("Report");

        state.new_document();
        assert_eq!(state.document.name, "Untitled");
        assert!(state.document.body.is_empty());
        assert_eq!(state.stats.words, 0);
    }

    #[test]
    fn test_request_new_document_empty_skips_confirmation() {
        let mut state = AppState::default();
        state.request_new_document();
        assert!(state.ui.pending_action.is_none());
    }

    #[test]
    fn test_request_new_document_with_content_asks() {
        let mut state = AppState::default();
        state.apply_command(&EditorCommand::InsertText("content".to_string()));

        state.request_new_document();
        assert_eq!(state.ui.pending_action, Some(PendingAction::NewDocument));
        // Content survives until confirmed
        assert_eq!(state.document.body, "content");

        state.confirm_pending_action();
        assert!(state.document.body.is_empty());
        assert!(state.ui.pending_action.is_none());
    }

    #[test]
    fn test_cancel_pending_action() {
        let mut state = AppState::default();
        state.apply_command(&EditorCommand::InsertText("content".to_string()));
        state.request_exit();
        assert_eq!(state.ui.pending_action, Some(PendingAction::Exit));

        state.cancel_pending_action();
        assert!(state.ui.pending_action.is_none());
        assert!(!state.ui.should_exit);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rename Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_commit_rename() {
        let mut state = AppState::default();
        state.ui.rename_buffer = Some("Quarterly Report".to_string());
        state.commit_rename();
        assert_eq!(state.document.name, "Quarterly Report");
        assert!(state.ui.rename_buffer.is_none());
    }

    #[test]
    fn test_commit_rename_blank_falls_back() {
        let mut state = AppState::default();
        state.ui.rename_buffer = Some("  ".to_string());
        state.commit_rename();
        assert_eq!(state.document.name, "Untitled");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Find / Replace Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_find_and_select_first() {
        let mut state = AppState::default();
        state.surface.set_markup("<p>The Cat sat</p>".to_string());
        state.sync_from_surface();
        state.find.search_term = "cat".to_string();

        assert!(state.find_and_select_first());
        let (start, end) = state.surface.selection().unwrap();
        assert_eq!(&state.surface.markup()[start..end], "Cat");
    }

    #[test]
    fn test_find_absent_term() {
        let mut state = AppState::default();
        state.surface.set_markup("<p>hello</p>".to_string());
        state.find.search_term = "missing".to_string();
        assert!(!state.find_and_select_first());
    }

    #[test]
    fn test_replace_all_resyncs() {
        let mut state = AppState::default();
        state.surface.set_markup("<p>cat sat</p>".to_string());
        state.sync_from_surface();
        state.find.search_term = "cat".to_string();
        state.find.replace_term = "dog".to_string();

        assert!(state.replace_all());
        assert_eq!(state.document.body, "<p>dog sat</p>");
        assert_eq!(state.stats.words, 2);
    }

    #[test]
    fn test_replace_all_no_match() {
        let mut state = AppState::default();
        state.surface.set_markup("<p>hello</p>".to_string());
        state.find.search_term = "missing".to_string();
        assert!(!state.replace_all());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Notice Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_notice_expiry() {
        let mut state = AppState::default();
        state.notify(NoticeKind::Success, "Saved", 10.0);
        assert!(state.ui.notice.is_some());

        state.update_notice(11.0);
        assert!(state.ui.notice.is_some());

        state.update_notice(10.0 + NOTICE_DURATION);
        assert!(state.ui.notice.is_none());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Settings Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_state_seeds_from_settings() {
        let mut settings = Settings::default();
        settings.default_font_family = "Arial".to_string();
        settings.default_font_size = 12;
        settings.zoom_percent = 150;

        let state = AppState::new(settings);
        assert_eq!(state.formatting.font_family, "Arial");
        assert_eq!(state.formatting.font_size_pt, 12);
        assert_eq!(state.zoom.percent(), 150);
        assert_eq!(state.ui.font_size_input, "12");
    }

    #[test]
    fn test_remember_zoom_marks_dirty() {
        let mut state = AppState::default();
        assert!(!state.settings_dirty);

        state.zoom.zoom_in();
        state.remember_zoom();
        assert!(state.settings_dirty);
        assert_eq!(state.settings.zoom_percent, 110);
    }

    #[test]
    fn test_remember_window_geometry_marks_dirty() {
        let mut state = AppState::default();
        assert!(!state.settings_dirty);

        state.remember_window_geometry(1024.0, 700.0, 10.0, 20.0, false);
        assert!(state.settings_dirty);
        assert_eq!(state.settings.window_size.width, 1024.0);
        assert_eq!(state.settings.window_size.height, 700.0);
        assert_eq!(state.settings.window_size.x, Some(10.0));
        assert_eq!(state.settings.window_size.y, Some(20.0));
        assert!(!state.settings.window_size.maximized);
    }

    #[test]
    fn test_remember_window_geometry_unchanged_stays_clean() {
        let mut state = AppState::default();
        state.remember_window_geometry(1024.0, 700.0, 10.0, 20.0, true);
        state.settings_dirty = false;

        state.remember_window_geometry(1024.0, 700.0, 10.0, 20.0, true);
        assert!(!state.settings_dirty);
    }
}
