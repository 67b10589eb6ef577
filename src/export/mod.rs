//! Export pipeline for Quillpad
//!
//! HTML synthesis, save formats, print/PDF, and clipboard operations.

pub mod clipboard;
pub mod html;
pub mod print;
pub mod save;

pub use clipboard::{copy_text, read_paste_content, share_document, PasteContent};
pub use html::synthesize_document;
pub use print::{export_pdf_via_print, print_document, PdfExportOutcome};
pub use save::{save_document, SaveFormat};
