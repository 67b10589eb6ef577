//! Print and PDF export
//!
//! There is no direct print path: the synthesized HTML document is
//! written to a temporary file and handed to the system opener, and the
//! browser's print dialog does the actual printing. PDF export rides the
//! same path, since every platform print dialog offers save-to-PDF.

#![allow(dead_code)]

use super::html::synthesize_document;
use crate::document::{Document, FormattingState, PageLayout};
use crate::error::{Error, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Print
// ─────────────────────────────────────────────────────────────────────────────

/// Synthesize the document and open it for printing.
///
/// Returns the path of the temporary file on success so callers can
/// report where the printable copy lives.
pub fn print_document(
    document: &Document,
    formatting: &FormattingState,
    layout: &PageLayout,
) -> Result<PathBuf> {
    let html = synthesize_document(document, formatting, layout);
    let path = write_print_file(document, &html)?;

    open::that(&path).map_err(|source| Error::OpenerFailed {
        path: path.clone(),
        source,
    })?;

    info!("Opened print copy at {}", path.display());
    Ok(path)
}

/// Outcome of the PDF-via-print pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfExportOutcome {
    /// The browser opened; its print dialog handles the PDF save
    Opened(PathBuf),
    /// The opener failed; the synthesized HTML should be offered as a
    /// file save instead
    OpenerFailed(PathBuf),
}

/// Export to PDF by way of the system print dialog.
///
/// The two outcomes need different follow-up in the shell (a notice
/// pointing at the print dialog vs. a save-as fallback), so opener
/// failure is reported as an outcome rather than folded into success.
pub fn export_pdf_via_print(
    document: &Document,
    formatting: &FormattingState,
    layout: &PageLayout,
) -> Result<PdfExportOutcome> {
    export_pdf_with_opener(document, formatting, layout, |path| open::that(path))
}

fn export_pdf_with_opener(
    document: &Document,
    formatting: &FormattingState,
    layout: &PageLayout,
    opener: impl FnOnce(&Path) -> std::io::Result<()>,
) -> Result<PdfExportOutcome> {
    let html = synthesize_document(document, formatting, layout);
    let path = write_print_file(document, &html)?;

    match opener(&path) {
        Ok(()) => {
            info!("Opened PDF export copy at {}", path.display());
            Ok(PdfExportOutcome::Opened(path))
        }
        Err(e) => {
            warn!(
                "System opener unavailable ({}); kept HTML fallback at {}",
                e,
                path.display()
            );
            Ok(PdfExportOutcome::OpenerFailed(path))
        }
    }
}

/// Write the printable HTML to a temporary file named after the document.
fn write_print_file(document: &Document, html: &str) -> Result<PathBuf> {
    let path = std::env::temp_dir().join(document.export_filename("html"));
    std::fs::write(&path, html).map_err(|source| Error::ExportWrite {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
