//! HTML document synthesis
//!
//! Wraps the editable surface's serialized markup in a standalone HTML
//! shell carrying the document-wide formatting and page layout as inline
//! CSS. The same synthesized document backs save-as-HTML, the Word
//! export dialect, printing, and PDF-via-print.

#![allow(dead_code)]

use crate::document::{html_escape, Document, FormattingState, PageLayout};

// ─────────────────────────────────────────────────────────────────────────────
// Document Synthesis
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a complete standalone HTML document.
///
/// The body carries the raw surface markup unmodified; formatting and
/// layout state become a style block so the exported file renders the
/// way the page preview does.
pub fn synthesize_document(
    document: &Document,
    formatting: &FormattingState,
    layout: &PageLayout,
) -> String {
    let style = page_style(formatting, layout);
    let watermark = watermark_layer(layout);
    let page_number = page_number_marker(layout);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="generator" content="Quillpad">
    <title>{title}</title>
    <style>
{style}
    </style>
</head>
<body>
    <div class="page">
{watermark}        <div class="content">{body}</div>
{page_number}    </div>
</body>
</html>"#,
        title = html_escape(&document.name),
        style = style,
        watermark = watermark,
        body = document.body,
        page_number = page_number,
    )
}

/// Build the style block from formatting and layout state.
fn page_style(formatting: &FormattingState, layout: &PageLayout) -> String {
    let (width_mm, height_mm) = layout.paper.dimensions_mm();
    let highlight = match &formatting.highlight_color {
        Some(color) => format!("background-color: {};", color),
        None => String::new(),
    };

    format!(
        r#"@page {{
    size: {page_size};
    margin: {margin}in;
}}
body {{
    margin: 0;
    background: #e0e0e0;
}}
.page {{
    position: relative;
    width: {width}mm;
    min-height: {height}mm;
    margin: 0 auto;
    padding: {margin}in;
    box-sizing: border-box;
    background: {page_color};
    overflow: hidden;
}}
.content {{
    font-family: {font_family};
    font-size: {font_size}pt;
    color: {text_color};
    {highlight}
    letter-spacing: {letter_spacing}px;
    text-align: {alignment};
    position: relative;
    z-index: 1;
}}
.watermark {{
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%) rotate(-45deg);
    font-size: {watermark_size}pt;
    color: rgba(0, 0, 0, 0.15);
    white-space: nowrap;
    pointer-events: none;
    z-index: 0;
}}
.page-number {{
    position: absolute;
    bottom: 0.3in;
    left: 0;
    right: 0;
    text-align: center;
    font-size: 10pt;
    color: #666;
}}
@media print {{
    body {{ background: none; }}
    .page {{ margin: 0; width: auto; min-height: auto; }}
}}"#,
        page_size = layout.css_page_size(),
        margin = layout.margin_in,
        width = width_mm,
        height = height_mm,
        page_color = layout.page_color,
        font_family = formatting.font_family,
        font_size = formatting.font_size_pt,
        text_color = formatting.text_color,
        highlight = highlight,
        letter_spacing = formatting.letter_spacing_px,
        alignment = formatting.alignment.css_value(),
        watermark_size = layout.watermark_size_pt,
    )
}

/// The watermark layer markup, or an empty string when disabled.
fn watermark_layer(layout: &PageLayout) -> String {
    if !layout.has_watermark() {
        return String::new();
    }
    format!(
        "        <div class=\"watermark\">{}</div>\n",
        html_escape(layout.watermark_text.trim())
    )
}

/// The page-number marker, or an empty string when disabled.
fn page_number_marker(layout: &PageLayout) -> String {
    if !layout.show_page_number {
        return String::new();
    }
    "        <div class=\"page-number\">1</div>\n".to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Orientation, PaperSize};

    fn sample_document() -> Document {
        Document::with_content("Report", "<p>Hello <b>world</b></p>")
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Structure Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_synthesized_document_structure() {
        let html = synthesize_document(
            &sample_document(),
            &FormattingState::default(),
            &PageLayout::default(),
        );

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Report</title>"));
        assert!(html.contains("<p>Hello <b>world</b></p>"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_title_is_escaped() {
        let doc = Document::with_content("A <b> & co", "");
        let html = synthesize_document(&doc, &FormattingState::default(), &PageLayout::default());
        assert!(html.contains("<title>A &lt;b&gt; &amp; co</title>"));
    }

    #[test]
    fn test_body_markup_passes_through_unmodified() {
        let doc = Document::with_content("x", r#"<span style="color:#ff0000">red</span>"#);
        let html = synthesize_document(&doc, &FormattingState::default(), &PageLayout::default());
        assert!(html.contains(r#"<span style="color:#ff0000">red</span>"#));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Style Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_formatting_flows_into_style() {
        let mut formatting = FormattingState::default();
        formatting.font_family = "Courier New".to_string();
        formatting.font_size_pt = 14;
        formatting.text_color = "#123456".to_string();
        formatting.letter_spacing_px = 2.5;

        let html = synthesize_document(&sample_document(), &formatting, &PageLayout::default());
        assert!(html.contains("font-family: Courier New;"));
        assert!(html.contains("font-size: 14pt;"));
        assert!(html.contains("color: #123456;"));
        assert!(html.contains("letter-spacing: 2.5px;"));
    }

    #[test]
    fn test_highlight_color_optional() {
        let mut formatting = FormattingState::default();
        let html = synthesize_document(
            &sample_document(),
            &formatting,
            &PageLayout::default(),
        );
        assert!(!html.contains("background-color: #"));

        formatting.highlight_color = Some("#ffff00".to_string());
        let html = synthesize_document(&sample_document(), &formatting, &PageLayout::default());
        assert!(html.contains("background-color: #ffff00;"));
    }

    #[test]
    fn test_page_size_declaration() {
        let layout = PageLayout {
            paper: PaperSize::Letter,
            orientation: Orientation::Landscape,
            ..PageLayout::default()
        };
        let html = synthesize_document(&sample_document(), &FormattingState::default(), &layout);
        assert!(html.contains("size: 215.9mm 279.4mm landscape;"));
    }

    #[test]
    fn test_margin_in_inches() {
        let layout = PageLayout::with_margin(1.5);
        let html = synthesize_document(&sample_document(), &FormattingState::default(), &layout);
        assert!(html.contains("margin: 1.5in;"));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Watermark and Page Number Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_watermark_absent_by_default() {
        let html = synthesize_document(
            &sample_document(),
            &FormattingState::default(),
            &PageLayout::default(),
        );
        assert!(!html.contains("class=\"watermark\""));
    }

    #[test]
    fn test_watermark_rendered_when_set() {
        let mut layout = PageLayout::default();
        layout.watermark_text = "DRAFT".to_string();
        let html = synthesize_document(&sample_document(), &FormattingState::default(), &layout);

        assert!(html.contains("<div class=\"watermark\">DRAFT</div>"));
        assert!(html.contains("rotate(-45deg)"));
        assert!(html.contains("rgba(0, 0, 0, 0.15)"));
    }

    #[test]
    fn test_watermark_text_is_escaped() {
        let mut layout = PageLayout::default();
        layout.watermark_text = "<secret>".to_string();
        let html = synthesize_document(&sample_document(), &FormattingState::default(), &layout);
        assert!(html.contains("&lt;secret&gt;"));
    }

    #[test]
    fn test_page_number_marker() {
        let mut layout = PageLayout::default();
        let html = synthesize_document(&sample_document(), &FormattingState::default(), &layout);
        assert!(!html.contains("class=\"page-number\""));

        layout.show_page_number = true;
        let html = synthesize_document(&sample_document(), &FormattingState::default(), &layout);
        assert!(html.contains("<div class=\"page-number\">1</div>"));
    }
}
