//! File system integration
//!
//! Native dialogs and inline image loading.

pub mod dialogs;
pub mod images;

pub use dialogs::{pick_image_dialog, save_document_dialog};
pub use images::image_file_fragment;
