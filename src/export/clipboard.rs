//! Clipboard operations
//!
//! Structured paste, copy, and the share fallback, all through arboard.
//! Paste probes the clipboard for an image first and falls back to plain
//! text; images are materialized as inline PNG data URIs so documents
//! stay self-contained.

#![allow(dead_code)]

use super::html::synthesize_document;
use crate::document::{Document, FormattingState, PageLayout};
use crate::error::{Error, Result};
use arboard::Clipboard;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use log::debug;

// ─────────────────────────────────────────────────────────────────────────────
// Paste Content
// ─────────────────────────────────────────────────────────────────────────────

/// One structured clipboard representation chosen for pasting.
#[derive(Debug, Clone, PartialEq)]
pub enum PasteContent {
    /// A markup fragment carrying an inline image
    Image(String),
    /// Plain text, inserted as literal text
    Text(String),
}

/// Read the clipboard and pick a representation to paste.
///
/// Images win over text when both are offered. Returns `Ok(None)` when
/// the clipboard holds neither; callers then leave paste to the text
/// widget's own default behavior.
pub fn read_paste_content() -> Result<Option<PasteContent>> {
    let mut clipboard =
        Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;

    if let Ok(image) = clipboard.get_image() {
        debug!(
            "Pasting clipboard image ({}x{})",
            image.width, image.height
        );
        let fragment = image_fragment(&image)?;
        return Ok(Some(PasteContent::Image(fragment)));
    }

    match clipboard.get_text() {
        Ok(text) if !text.is_empty() => Ok(Some(PasteContent::Text(text))),
        _ => Ok(None),
    }
}

/// Build an inline `<img>` fragment from raw RGBA clipboard pixels.
fn image_fragment(image: &arboard::ImageData<'_>) -> Result<String> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(
            &image.bytes,
            image.width as u32,
            image.height as u32,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| Error::Clipboard(format!("image encode failed: {}", e)))?;

    Ok(format!(
        r#"<img src="data:image/png;base64,{}" style="max-width:100%">"#,
        BASE64.encode(&png)
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// Copy and Share
// ─────────────────────────────────────────────────────────────────────────────

/// Copy plain text to the clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard =
        Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| Error::Clipboard(e.to_string()))?;
    Ok(())
}

/// Share the document by copying its synthesized HTML to the clipboard.
///
/// There is no system share target on desktop, so sharing is a rich
/// clipboard copy: HTML for applications that accept it, the plain text
/// as fallback.
pub fn share_document(
    document: &Document,
    formatting: &FormattingState,
    layout: &PageLayout,
) -> Result<()> {
    let html = synthesize_document(document, formatting, layout);
    let plain = document.plain_text();

    let mut clipboard =
        Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .set_html(&html, Some(&plain))
        .map_err(|e| Error::Clipboard(e.to_string()))?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
