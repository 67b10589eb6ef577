//! Save formats and file export
//!
//! Save renders the document in one of three dialects and writes it to a
//! filename derived from the document name. HTML is the synthesized
//! standalone document; plain text strips the markup; the Word dialect is
//! the HTML document re-wrapped with the Office XML envelope so desktop
//! word processors open it natively.

#![allow(dead_code)]

use super::html::synthesize_document;
use crate::document::{html_escape, Document, FormattingState, PageLayout};
use crate::error::{Error, Result};
use log::info;
use std::path::Path;

// ─────────────────────────────────────────────────────────────────────────────
// Save Format
// ─────────────────────────────────────────────────────────────────────────────

/// Formats the Save dialog offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveFormat {
    #[default]
    Html,
    Text,
    Doc,
}

impl SaveFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            SaveFormat::Html => "html",
            SaveFormat::Text => "txt",
            SaveFormat::Doc => "doc",
        }
    }

    /// MIME type of the rendered output.
    pub fn mime_type(&self) -> &'static str {
        match self {
            SaveFormat::Html => "text/html",
            SaveFormat::Text => "text/plain",
            SaveFormat::Doc => "application/msword",
        }
    }

    /// Display label for the save dialog.
    pub fn label(&self) -> &'static str {
        match self {
            SaveFormat::Html => "Web Page (.html)",
            SaveFormat::Text => "Plain Text (.txt)",
            SaveFormat::Doc => "Word Document (.doc)",
        }
    }

    /// All formats in dialog order.
    pub fn all() -> &'static [SaveFormat] {
        &[SaveFormat::Html, SaveFormat::Text, SaveFormat::Doc]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

/// Render the document in the chosen format.
pub fn render(
    document: &Document,
    formatting: &FormattingState,
    layout: &PageLayout,
    format: SaveFormat,
) -> String {
    match format {
        SaveFormat::Html => synthesize_document(document, formatting, layout),
        SaveFormat::Text => document.plain_text(),
        SaveFormat::Doc => render_word_document(document, formatting),
    }
}

/// Render the Word-compatible HTML dialect.
///
/// The Office XML namespaces and the `mso` conditional block are what
/// make word processors treat the file as a print-view document rather
/// than a web page.
fn render_word_document(document: &Document, formatting: &FormattingState) -> String {
    format!(
        r#"<html xmlns:o="urn:schemas-microsoft-com:office:office" xmlns:w="urn:schemas-microsoft-com:office:word" xmlns="http://www.w3.org/TR/REC-html40">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <!--[if gte mso 9]>
    <xml>
        <w:WordDocument>
            <w:View>Print</w:View>
            <w:Zoom>100</w:Zoom>
        </w:WordDocument>
    </xml>
    <![endif]-->
    <style>
        body {{
            font-family: {font_family};
            font-size: {font_size}pt;
            color: {text_color};
        }}
    </style>
</head>
<body>{body}</body>
</html>"#,
        title = html_escape(&document.name),
        font_family = formatting.font_family,
        font_size = formatting.font_size_pt,
        text_color = formatting.text_color,
        body = document.body,
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Saving
// ─────────────────────────────────────────────────────────────────────────────

/// Render the document and write it to `path`.
pub fn save_document(
    path: &Path,
    document: &Document,
    formatting: &FormattingState,
    layout: &PageLayout,
    format: SaveFormat,
) -> Result<()> {
    let content = render(document, formatting, layout, format);
    std::fs::write(path, content).map_err(|source| Error::ExportWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Saved '{}' to {}", document.name, path.display());
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        Document::with_content("Report", "<p>Hello <b>world</b></p>")
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Format Metadata Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_format_extensions() {
        assert_eq!(SaveFormat::Html.extension(), "html");
        assert_eq!(SaveFormat::Text.extension(), "txt");
        assert_eq!(SaveFormat::Doc.extension(), "doc");
    }

    #[test]
    fn test_format_mime_types() {
        assert_eq!(SaveFormat::Html.mime_type(), "text/html");
        assert_eq!(SaveFormat::Text.mime_type(), "text/plain");
        assert_eq!(SaveFormat::Doc.mime_type(), "application/msword");
    }

    #[test]
    fn test_save_filename_from_document_name() {
        let doc = sample_document();
        assert_eq!(
            doc.export_filename(SaveFormat::Html.extension()),
            "Report.html"
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_render_html_wraps_markup() {
        let html = render(
            &sample_document(),
            &FormattingState::default(),
            &PageLayout::default(),
            SaveFormat::Html,
        );
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<p>Hello <b>world</b></p>"));
    }

    #[test]
    fn test_render_text_strips_markup() {
        let text = render(
            &sample_document(),
            &FormattingState::default(),
            &PageLayout::default(),
            SaveFormat::Text,
        );
        assert_eq!(text, "Hello world\n");
    }

    #[test]
    fn test_render_doc_carries_office_envelope() {
        let doc = render(
            &sample_document(),
            &FormattingState::default(),
            &PageLayout::default(),
            SaveFormat::Doc,
        );
        assert!(doc.contains("urn:schemas-microsoft-com:office:word"));
        assert!(doc.contains("<!--[if gte mso 9]>"));
        assert!(doc.contains("<w:View>Print</w:View>"));
        assert!(doc.contains("<p>Hello <b>world</b></p>"));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // File Writing Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_save_document_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let doc = sample_document();
        let path = dir.path().join(doc.export_filename("html"));

        save_document(
            &path,
            &doc,
            &FormattingState::default(),
            &PageLayout::default(),
            SaveFormat::Html,
        )
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<p>Hello <b>world</b></p>"));
    }

    #[test]
    fn test_save_document_unwritable_path_errors() {
        let doc = sample_document();
        let result = save_document(
            Path::new("/nonexistent-dir/out.html"),
            &doc,
            &FormattingState::default(),
            &PageLayout::default(),
            SaveFormat::Html,
        );
        assert!(result.is_err());
    }
}
