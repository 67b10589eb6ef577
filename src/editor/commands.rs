//! Editing command dispatch
//!
//! Toolbar and keyboard actions become `EditorCommand` values, which are
//! lowered to the `(name, value)` pairs the editable surface understands.
//! After every dispatch the caller re-reads the surface markup, since the
//! surface, not the dispatcher, owns the document content.

#![allow(dead_code)]

use super::surface::RichTextHost;
use crate::document::Alignment;
use log::debug;

// ─────────────────────────────────────────────────────────────────────────────
// EditorCommand
// ─────────────────────────────────────────────────────────────────────────────

/// A single editing action targeting the editable surface.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    Bold,
    Italic,
    Underline,
    StrikeThrough,
    Subscript,
    Superscript,
    /// Set text color; the value is a CSS hex string
    ForeColor(String),
    /// Set highlight color; the value is a CSS hex string
    HiliteColor(String),
    /// Set font family by name
    FontName(String),
    /// Set font size in points
    FontSize(u32),
    /// Set paragraph alignment
    Align(Alignment),
    InsertOrderedList,
    InsertUnorderedList,
    /// Splice a markup fragment at the caret
    InsertHtml(String),
    /// Insert literal text at the caret (escaped before splicing)
    InsertText(String),
    RemoveFormat,
    Undo,
    Redo,
}

impl EditorCommand {
    /// The command name understood by the surface.
    pub fn name(&self) -> &'static str {
        match self {
            EditorCommand::Bold => "bold",
            EditorCommand::Italic => "italic",
            EditorCommand::Underline => "underline",
            EditorCommand::StrikeThrough => "strikeThrough",
            EditorCommand::Subscript => "subscript",
            EditorCommand::Superscript => "superscript",
            EditorCommand::ForeColor(_) => "foreColor",
            EditorCommand::HiliteColor(_) => "hiliteColor",
            EditorCommand::FontName(_) => "fontName",
            EditorCommand::FontSize(_) => "fontSize",
            EditorCommand::Align(alignment) => alignment.command_name(),
            EditorCommand::InsertOrderedList => "insertOrderedList",
            EditorCommand::InsertUnorderedList => "insertUnorderedList",
            EditorCommand::InsertHtml(_) => "insertHTML",
            EditorCommand::InsertText(_) => "insertText",
            EditorCommand::RemoveFormat => "removeFormat",
            EditorCommand::Undo => "undo",
            EditorCommand::Redo => "redo",
        }
    }

    /// The command value, if the command carries one.
    pub fn value(&self) -> Option<String> {
        match self {
            EditorCommand::ForeColor(color) | EditorCommand::HiliteColor(color) => {
                Some(color.clone())
            }
            EditorCommand::FontName(family) => Some(family.clone()),
            EditorCommand::FontSize(size) => Some(size.to_string()),
            EditorCommand::InsertHtml(fragment) => Some(fragment.clone()),
            EditorCommand::InsertText(text) => Some(text.clone()),
            _ => None,
        }
    }
}

/// Dispatch a command to the surface and return its updated markup.
pub fn dispatch(host: &mut dyn RichTextHost, command: &EditorCommand) -> String {
    debug!("Dispatching editor command '{}'", command.name());
    host.exec(command.name(), command.value().as_deref());
    host.markup()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::surface::{MarkupSurface, RecordingHost};

    // ─────────────────────────────────────────────────────────────────────────
    // Lowering Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_simple_command_names() {
        assert_eq!(EditorCommand::Bold.name(), "bold");
        assert_eq!(EditorCommand::StrikeThrough.name(), "strikeThrough");
        assert_eq!(EditorCommand::RemoveFormat.name(), "removeFormat");
        assert_eq!(EditorCommand::InsertUnorderedList.name(), "insertUnorderedList");
    }

    #[test]
    fn test_alignment_command_names() {
        assert_eq!(EditorCommand::Align(Alignment::Left).name(), "justifyLeft");
        assert_eq!(EditorCommand::Align(Alignment::Justify).name(), "justifyFull");
    }

    #[test]
    fn test_valueless_commands_carry_no_value() {
        assert_eq!(EditorCommand::Bold.value(), None);
        assert_eq!(EditorCommand::Undo.value(), None);
        assert_eq!(EditorCommand::Align(Alignment::Center).value(), None);
    }

    #[test]
    fn test_valued_commands() {
        assert_eq!(
            EditorCommand::ForeColor("#ff0000".to_string()).value(),
            Some("#ff0000".to_string())
        );
        assert_eq!(
            EditorCommand::FontSize(24).value(),
            Some("24".to_string())
        );
        assert_eq!(
            EditorCommand::FontName("Arial".to_string()).value(),
            Some("Arial".to_string())
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dispatch Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_dispatch_records_name_and_value() {
        let mut host = RecordingHost::new();
        dispatch(&mut host, &EditorCommand::Bold);
        dispatch(&mut host, &EditorCommand::HiliteColor("#ffff00".to_string()));

        assert_eq!(host.call_names(), vec!["bold", "hiliteColor"]);
        assert_eq!(host.calls[0].1, None);
        assert_eq!(host.calls[1].1.as_deref(), Some("#ffff00"));
    }

    #[test]
    fn test_dispatch_returns_resynced_markup() {
        let mut surface = MarkupSurface::with_markup("hello");
        surface.select(Some((0, 5)));
        let markup = dispatch(&mut surface, &EditorCommand::Bold);
        assert_eq!(markup, "<b>hello</b>");
    }

    #[test]
    fn test_dispatch_undo_through_command() {
        let mut surface = MarkupSurface::with_markup("hello");
        surface.select(Some((0, 5)));
        dispatch(&mut surface, &EditorCommand::Italic);

        let markup = dispatch(&mut surface, &EditorCommand::Undo);
        assert_eq!(markup, "hello");
    }
}
