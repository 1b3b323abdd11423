//! Export rendering for the optimized prompt.

use crate::config::ExportConfig;

/// How the optimized prompt should be rendered for hand-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// The prompt text exactly as generated.
    #[default]
    Plain,
    /// Wrapped in the configured Midjourney command template.
    Midjourney,
}

/// Render `prompt` in the requested format.
pub fn render_export(format: ExportFormat, config: &ExportConfig, prompt: &str) -> String {
    match format {
        ExportFormat::Plain => prompt.to_string(),
        ExportFormat::Midjourney => config.midjourney.replace("{prompt}", prompt),
    }
}
