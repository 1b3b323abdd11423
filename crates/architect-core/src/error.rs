//! Error types for the prompt architect engine.
//!
//! The operational taxonomy mirrors the request lifecycle: configuration
//! problems are caught before dispatch, validation problems never reach the
//! network, and transport failures are kept distinct from decode failures so
//! the front-end can present them differently.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building, dispatching, or decoding a generation request.
#[derive(Error, Debug)]
pub enum ArchitectError {
    /// No API credential is reachable. Checked before any network attempt.
    #[error("API key not configured: {0}")]
    Configuration(String),

    /// The request carries neither free text nor media. Blocks locally.
    #[error("Nothing to generate: {0}")]
    Validation(String),

    /// A request is already in flight; the session accepts one at a time.
    #[error("A generation request is already in flight")]
    Busy,

    /// The provider call itself failed (network, quota, server-side).
    #[error("Provider request failed: {message}")]
    Transport {
        message: String,
        status_code: Option<u16>,
    },

    /// The provider responded, but the body is not the expected JSON shape.
    #[error("Structured response decoding failed: {0}")]
    Decode(String),

    /// A media file could not be read from disk.
    #[error("Failed to read media {path}: {message}")]
    MediaRead { path: PathBuf, message: String },

    /// The file extension maps to no supported image or video MIME type.
    #[error("Unsupported media type for {path}: {detail}")]
    UnsupportedMedia { path: PathBuf, detail: String },

    /// The media file exceeds the configured size limit.
    #[error("Media too large: {path} ({size_mb}MB > {max_mb}MB)")]
    MediaTooLarge {
        path: PathBuf,
        size_mb: u64,
        max_mb: u64,
    },

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration-file-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Convenience type alias for architect results.
pub type Result<T> = std::result::Result<T, ArchitectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_display_keeps_provider_message_verbatim() {
        let err = ArchitectError::Transport {
            message: "HTTP 429 Too Many Requests: quota exceeded".to_string(),
            status_code: Some(429),
        };
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn decode_display_is_distinct_from_transport() {
        let decode = ArchitectError::Decode("missing field `proTip`".to_string());
        let transport = ArchitectError::Transport {
            message: "connection refused".to_string(),
            status_code: None,
        };
        assert!(decode.to_string().contains("decoding failed"));
        assert!(!transport.to_string().contains("decoding failed"));
    }

    #[test]
    fn media_too_large_display_includes_both_sizes() {
        let err = ArchitectError::MediaTooLarge {
            path: PathBuf::from("clip.mp4"),
            size_mb: 48,
            max_mb: 20,
        };
        let msg = err.to_string();
        assert!(msg.contains("48MB"));
        assert!(msg.contains("20MB"));
    }

    #[test]
    fn config_error_wraps_into_architect_error() {
        let err: ArchitectError =
            ConfigError::ValidationError("model.temperature out of range".to_string()).into();
        assert!(err.to_string().contains("temperature"));
    }
}
