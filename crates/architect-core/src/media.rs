//! Media intake: turn a file on disk into an inline attachment.
//!
//! MIME type is inferred from the extension rather than sniffed, matching
//! what browsers report on upload. Size is capped before reading is wasted
//! on something the API would reject anyway.

use std::path::Path;

use crate::error::{ArchitectError, Result};
use crate::types::MediaAttachment;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Map a file extension (lowercase, no dot) to its MIME type.
///
/// Covers the image and video formats the generateContent API accepts
/// inline. Anything else is unsupported.
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        "mp4" => Some("video/mp4"),
        "mov" => Some("video/quicktime"),
        "webm" => Some("video/webm"),
        "mkv" => Some("video/x-matroska"),
        "avi" => Some("video/x-msvideo"),
        _ => None,
    }
}

/// Load `path` as an attachment, enforcing the configured size cap.
pub fn load_attachment(path: &Path, max_size_mb: u64) -> Result<MediaAttachment> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let mime_type =
        mime_for_extension(&extension).ok_or_else(|| ArchitectError::UnsupportedMedia {
            path: path.to_path_buf(),
            detail: if extension.is_empty() {
                "file has no extension".to_string()
            } else {
                format!("unrecognized extension '.{extension}'")
            },
        })?;

    let metadata = std::fs::metadata(path).map_err(|e| ArchitectError::MediaRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    if metadata.len() > max_size_mb * BYTES_PER_MB {
        return Err(ArchitectError::MediaTooLarge {
            path: path.to_path_buf(),
            size_mb: metadata.len().div_ceil(BYTES_PER_MB),
            max_mb: max_size_mb,
        });
    }

    let bytes = std::fs::read(path).map_err(|e| ArchitectError::MediaRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("attachment")
        .to_string();

    MediaAttachment::from_bytes(&bytes, mime_type, &file_name).ok_or_else(|| {
        ArchitectError::UnsupportedMedia {
            path: path.to_path_buf(),
            detail: format!("MIME type {mime_type} is neither image nor video"),
        }
    })
}
