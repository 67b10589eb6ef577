//! Inline image loading
//!
//! Images picked from disk are embedded as data URIs so documents remain
//! a single self-contained markup string.

use crate::error::Result;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::path::Path;

/// Build an inline `<img>` fragment from an image file on disk.
pub fn image_file_fragment(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(format!(
        r#"<img src="data:{};base64,{}" style="max-width:100%">"#,
        mime_for_extension(path),
        BASE64.encode(&bytes)
    ))
}

/// Pick a MIME type from the file extension, defaulting to PNG.
fn mime_for_extension(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_file_fragment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let fragment = image_file_fragment(&path).unwrap();
        assert!(fragment.starts_with(r#"<img src="data:image/png;base64,"#));
        assert!(fragment.contains(&BASE64.encode([0x89, b'P', b'N', b'G'])));
    }

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(mime_for_extension(Path::new("a.JPEG")), "image/jpeg");
        assert_eq!(mime_for_extension(Path::new("a.webp")), "image/webp");
        assert_eq!(mime_for_extension(Path::new("a.unknown")), "image/png");
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(image_file_fragment(Path::new("/no/such/file.png")).is_err());
    }
}
