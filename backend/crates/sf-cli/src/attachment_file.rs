use crate::{CliClientResult, ClientError};

use std::path::Path;

/// MIME type guessed from the file extension
pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Read an image file as `(mime, bytes)`
pub fn read_attachment(path: &Path) -> CliClientResult<(&'static str, Vec<u8>)> {
    let bytes = std::fs::read(path).map_err(|e| {
        ClientError::validation(
            format!("Cannot read {}: {}", path.display(), e),
            Some("profileImage"),
        )
    })?;
    Ok((mime_for_path(path), bytes))
}
