//! Core data types: synthesis categories, media attachments, and the
//! structured result returned by the model.

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Synthesis mode requested by the user. Mutually exclusive per request.
///
/// `MediaAnalysis` is not user-selectable from the category picker; it is
/// entered automatically when media is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Image,
    Video,
    Seo,
    MediaAnalysis,
}

impl Category {
    /// Upper-case label used in instruction templates and the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Image => "IMAGE",
            Category::Video => "VIDEO",
            Category::Seo => "SEO",
            Category::MediaAnalysis => "MEDIA_ANALYSIS",
        }
    }

    /// The categories a user can pick directly (excludes `MediaAnalysis`).
    pub fn selectable() -> &'static [Category] {
        &[Category::Image, Category::Video, Category::Seo]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Coarse media classification derived from the MIME type prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a MIME type, or `None` when it is neither image nor video.
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        if mime_type.starts_with("video/") {
            Some(MediaKind::Video)
        } else if mime_type.starts_with("image/") {
            Some(MediaKind::Image)
        } else {
            None
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// One attached image or video, base64-encoded and ready to send inline.
///
/// Held only for the duration of a single request/response cycle; a session
/// reset discards it.
#[derive(Debug, Clone)]
pub struct MediaAttachment {
    /// Base64-encoded file bytes
    pub data: String,
    /// MIME type (e.g. "image/png", "video/mp4")
    pub mime_type: String,
    /// Display name shown in the UI
    pub file_name: String,
    /// Coarse kind tag derived from the MIME type
    pub kind: MediaKind,
}

impl MediaAttachment {
    /// Build an attachment from raw bytes, or `None` when the MIME type is
    /// neither an image nor a video.
    pub fn from_bytes(bytes: &[u8], mime_type: &str, file_name: &str) -> Option<Self> {
        let kind = MediaKind::from_mime(mime_type)?;
        Some(Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            mime_type: mime_type.to_string(),
            file_name: file_name.to_string(),
            kind,
        })
    }
}

/// The three-field structured output of one generation call.
///
/// Field names match the response schema on the wire (camelCase). Immutable
/// once parsed; a new request replaces the previous result wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectResult {
    /// Model's breakdown of the idea or media
    pub analysis: String,

    /// The generation-ready prompt string
    pub optimized_prompt: String,

    /// Short advisory note on using the prompt
    pub pro_tip: String,
}
