//! Sub-configuration structs with defaults matching the shipped behavior.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Model endpoint and generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model identifier sent to the generateContent endpoint
    pub name: String,

    /// API key: a literal value or a `${VAR}` environment reference.
    /// Empty means "use the GEMINI_API_KEY environment variable".
    pub api_key: String,

    /// API base URL (version path included, no trailing slash)
    pub endpoint: String,

    /// Sampling temperature. Kept low for reproducible deconstruction.
    pub temperature: f64,

    /// Internal reasoning token allowance. -1 lets the model decide.
    pub thinking_budget: i32,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-3-pro-preview".to_string(),
            api_key: "${GEMINI_API_KEY}".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            temperature: 0.4,
            thinking_budget: 32768,
            timeout_ms: 90_000,
        }
    }
}

impl ModelConfig {
    /// Per-request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Resource limits for media intake.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum attached media size in megabytes
    pub max_media_size_mb: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_media_size_mb: 20,
        }
    }
}

/// Instruction templates for the two request modes.
///
/// The exact phrasing is configuration, not contract: `{kind}` and
/// `{context}` interpolate into the media template, `{category}` and
/// `{idea}` into the blueprint template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstructionConfig {
    /// Template used when media is attached
    pub media: String,

    /// Template used for text-only synthesis, keyed by category
    pub blueprint: String,
}

impl Default for InstructionConfig {
    fn default() -> Self {
        Self {
            media: "Forensic deconstruction request for {kind}. Context: \"{context}\""
                .to_string(),
            blueprint: "Synthesize {category} prompt blueprint for: \"{idea}\"".to_string(),
        }
    }
}

/// Export/copy formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Midjourney command template; `{prompt}` interpolates the optimized
    /// prompt, the trailing parameters ride along verbatim.
    pub midjourney: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            midjourney: "/imagine prompt: {prompt} --v 6.1 --stylize 250".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", or "error"
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_defaults_match_shipped_behavior() {
        let model = ModelConfig::default();
        assert_eq!(model.name, "gemini-3-pro-preview");
        assert!((model.temperature - 0.4).abs() < f64::EPSILON);
        assert_eq!(model.thinking_budget, 32768);
        assert!(model.endpoint.starts_with("https://"));
        assert!(!model.endpoint.ends_with('/'));
    }

    #[test]
    fn model_timeout_converts_to_duration() {
        let model = ModelConfig {
            timeout_ms: 1500,
            ..ModelConfig::default()
        };
        assert_eq!(model.timeout(), Duration::from_millis(1500));
    }

    #[test]
    fn instruction_defaults_carry_placeholders() {
        let instructions = InstructionConfig::default();
        assert!(instructions.media.contains("{kind}"));
        assert!(instructions.media.contains("{context}"));
        assert!(instructions.blueprint.contains("{category}"));
        assert!(instructions.blueprint.contains("{idea}"));
    }

    #[test]
    fn export_default_has_fixed_trailing_parameters() {
        let export = ExportConfig::default();
        assert!(export.midjourney.starts_with("/imagine prompt: {prompt}"));
        assert!(export.midjourney.ends_with("--v 6.1 --stylize 250"));
    }
}
