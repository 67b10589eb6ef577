//! The document model for Quillpad
//!
//! A document is deliberately flat: a display name plus the serialized
//! markup of the editable surface. There is no element tree; the markup
//! string is authoritative and everything else (plain text, statistics,
//! exports) is derived from it on demand.

use std::path::Path;

// ─────────────────────────────────────────────────────────────────────────────
// Document
// ─────────────────────────────────────────────────────────────────────────────

/// A single in-memory document.
///
/// Documents live only for the current session; settings persist but
/// content does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Display name, used as the base of exported filenames
    pub name: String,
    /// Serialized markup of the editable surface
    pub body: String,
}

impl Document {
    /// Default name for a freshly created document.
    pub const DEFAULT_NAME: &'static str = "Untitled";

    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            body: String::new(),
        }
    }

    /// Create a document with a name and initial markup.
    pub fn with_content(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    /// Rename the document.
    ///
    /// Blank names fall back to the default name.
    pub fn rename(&mut self, name: &str) {
        let trimmed = name.trim();
        self.name = if trimmed.is_empty() {
            Self::DEFAULT_NAME.to_string()
        } else {
            trimmed.to_string()
        };
    }

    /// Whether the document has any non-whitespace text content.
    pub fn is_empty(&self) -> bool {
        self.plain_text().trim().is_empty()
    }

    /// Derive the plain-text rendition of the document body.
    ///
    /// Tags are stripped, block-closing tags become newlines, and the
    /// common named entities are decoded.
    pub fn plain_text(&self) -> String {
        markup_to_text(&self.body)
    }

    /// Build an export filename `<name>.<extension>`.
    ///
    /// Path separators in the name are replaced so the result is always a
    /// bare filename.
    pub fn export_filename(&self, extension: &str) -> String {
        let safe: String = self
            .name
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        format!("{}.{}", safe, extension)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Markup to Plain Text
// ─────────────────────────────────────────────────────────────────────────────

/// Tags whose end (or, for `br`, occurrence) terminates a line of text.
pub const BLOCK_BREAK_TAGS: &[&str] = &[
    "br", "/p", "/div", "/li", "/tr", "/h1", "/h2", "/h3", "/h4", "/h5", "/h6",
];

/// Strip markup down to its visible text content.
///
/// This is a tolerant single-pass scanner, not a parser: unterminated tags
/// swallow the rest of the input, mirroring how the serialized markup is
/// treated everywhere else in the application.
pub fn markup_to_text(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut chars = markup.char_indices().peekable();

    while let Some((_, ch)) = chars.next() {
        match ch {
            '<' => {
                let mut tag = String::new();
                for (_, c) in chars.by_ref() {
                    if c == '>' {
                        break;
                    }
                    tag.push(c);
                }
                let name = tag
                    .split_whitespace()
                    .next()
                    .unwrap_or("")
                    .trim_end_matches('/')
                    .to_ascii_lowercase();
                if BLOCK_BREAK_TAGS.contains(&name.as_str()) && !text.ends_with('\n') {
                    text.push('\n');
                }
            }
            '&' => {
                // Decode the entity if it is one we know; otherwise keep it
                let rest: String = chars.clone().take(6).map(|(_, c)| c).collect();
                let mut decoded = None;
                for (entity, replacement) in ENTITIES {
                    if rest.starts_with(entity) {
                        decoded = Some((*replacement, entity.len()));
                        break;
                    }
                }
                match decoded {
                    Some((replacement, len)) => {
                        text.push_str(replacement);
                        for _ in 0..len {
                            chars.next();
                        }
                    }
                    None => text.push('&'),
                }
            }
            _ => text.push(ch),
        }
    }

    text
}

/// Named entities decoded during plain-text extraction.
pub const ENTITIES: &[(&str, &str)] = &[
    ("amp;", "&"),
    ("lt;", "<"),
    ("gt;", ">"),
    ("quot;", "\""),
    ("#39;", "'"),
    ("nbsp;", " "),
];

/// HTML-escape a string for safe embedding in synthesized markup.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Derive a document name from a file path, falling back to the default.
pub fn name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Document::DEFAULT_NAME.to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────
    // Document Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert_eq!(doc.name, "Untitled");
        assert!(doc.body.is_empty());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_document_rename() {
        let mut doc = Document::new();
        doc.rename("Report");
        assert_eq!(doc.name, "Report");

        doc.rename("   ");
        assert_eq!(doc.name, "Untitled");

        doc.rename("  Quarterly Notes  ");
        assert_eq!(doc.name, "Quarterly Notes");
    }

    #[test]
    fn test_document_is_empty_with_markup_only() {
        let doc = Document::with_content("x", "<p>   </p>");
        assert!(doc.is_empty());

        let doc = Document::with_content("x", "<p>hello</p>");
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_export_filename() {
        let doc = Document::with_content("Report", "");
        assert_eq!(doc.export_filename("html"), "Report.html");
        assert_eq!(doc.export_filename("txt"), "Report.txt");
        assert_eq!(doc.export_filename("doc"), "Report.doc");
    }

    #[test]
    fn test_export_filename_sanitizes_separators() {
        let doc = Document::with_content("a/b\\c", "");
        assert_eq!(doc.export_filename("html"), "a_b_c.html");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Markup Stripping Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_markup_to_text_plain() {
        assert_eq!(markup_to_text("hello world"), "hello world");
    }

    #[test]
    fn test_markup_to_text_strips_inline_tags() {
        assert_eq!(markup_to_text("<b>bold</b> and <i>italic</i>"), "bold and italic");
    }

    #[test]
    fn test_markup_to_text_block_breaks() {
        assert_eq!(markup_to_text("<p>one</p><p>two</p>"), "one\ntwo\n");
        assert_eq!(markup_to_text("a<br>b"), "a\nb");
    }

    #[test]
    fn test_markup_to_text_entities() {
        assert_eq!(markup_to_text("a &amp; b"), "a & b");
        assert_eq!(markup_to_text("&lt;tag&gt;"), "<tag>");
        assert_eq!(markup_to_text("x&nbsp;y"), "x y");
    }

    #[test]
    fn test_markup_to_text_unknown_entity_kept() {
        assert_eq!(markup_to_text("a &bogus; b"), "a &bogus; b");
    }

    #[test]
    fn test_markup_to_text_attributes_ignored() {
        assert_eq!(
            markup_to_text(r#"<span style="color:#ff0000">red</span>"#),
            "red"
        );
    }

    #[test]
    fn test_markup_to_text_no_duplicate_newlines_from_adjacent_blocks() {
        // </li> followed by </ul>? only break tags insert, and consecutive
        // breaks collapse to one newline
        assert_eq!(markup_to_text("<li>a</li><li>b</li>"), "a\nb\n");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Escape Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("Hello"), "Hello");
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_name_from_path() {
        assert_eq!(name_from_path(Path::new("/tmp/Report.html")), "Report");
        assert_eq!(name_from_path(Path::new("notes")), "notes");
    }
}
