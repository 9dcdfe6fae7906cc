// Turns an uploaded image file into a data URL that can be dropped straight
// into an <img src>.

use crate::error::{RecipeError, Result};
use base64::{engine::general_purpose, Engine};
use image::ImageFormat;
use std::path::Path;

/// Content type used when neither the bytes nor the extension say what it is
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Work out the content type: magic bytes first, then the file extension
pub fn detect_mime(bytes: &[u8], path: &Path) -> &'static str {
    image::guess_format(bytes)
        .or_else(|_| ImageFormat::from_path(path))
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}

/// `data:<mime>;base64,<payload>`
pub fn to_data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(bytes))
}

/// Read a file and encode it as a data URL
///
/// Any read failure becomes `RecipeError::ImageRead`.
pub async fn read_as_data_url(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| RecipeError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;

    let mime = detect_mime(&bytes, path);
    tracing::debug!(path = %path.display(), mime, size = bytes.len(), "encoded image");

    Ok(to_data_url(&bytes, mime))
}
