//! Native file dialog integration using the rfd crate
//!
//! Save-location and image pickers for the export and insert actions.

use crate::export::SaveFormat;
use rfd::FileDialog;
use std::path::PathBuf;

/// File extension filters for supported file types.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Opens a native save dialog for the chosen export format.
///
/// The suggested filename is `<document name>.<extension>`. Returns
/// `Some(PathBuf)` if a location was selected, `None` if cancelled.
pub fn save_document_dialog(
    format: SaveFormat,
    default_name: &str,
    initial_dir: Option<&PathBuf>,
) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title("Save Document")
        .add_filter(format.label(), &[format.extension()])
        .add_filter("All Files", &["*"])
        .set_file_name(default_name);

    if let Some(dir) = initial_dir {
        dialog = dialog.set_directory(dir);
    }

    dialog.save_file()
}

/// Opens a native file dialog for picking an image to insert.
///
/// Returns `Some(PathBuf)` if an image was selected, `None` if cancelled.
pub fn pick_image_dialog(initial_dir: Option<&PathBuf>) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title("Insert Image")
        .add_filter("Image Files", IMAGE_EXTENSIONS);

    if let Some(dir) = initial_dir {
        dialog = dialog.set_directory(dir);
    }

    dialog.pick_file()
}
