use crate::domain::draft::ProfileImage;
use crate::error::{ConfigError, ValidationError};
use std::path::Path;

/// Guesses an image MIME type from the file extension.
///
/// Unknown extensions map to `application/octet-stream`, which the draft then
/// refuses as a profile picture.
pub fn mime_from_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("avif") => "image/avif",
        _ => "application/octet-stream",
    }
}

/// Reads an image file into a [`ProfileImage`].
///
/// The size limit is checked against file metadata first so oversized files are
/// never read into memory. MIME checks are left to the draft.
pub fn load_profile_image(
    path: &Path,
    mime_override: Option<&str>,
    max_bytes: u64,
) -> Result<ProfileImage, ConfigError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("profile")
        .to_string();
    let mime_type = mime_override
        .map(str::to_string)
        .unwrap_or_else(|| mime_from_extension(path).to_string());

    let size = std::fs::metadata(path)?.len();
    if size > max_bytes {
        return Err(ValidationError::ImageTooLarge {
            size,
            max: max_bytes,
        }
        .into());
    }

    let bytes = std::fs::read(path)?;
    Ok(ProfileImage::new(file_name, mime_type, bytes))
}
