//! API key setup: detection, input, and optional persistence.

use architect_core::credentials::from_model_config;
use architect_core::Config;
use console::Style;
use dialoguer::{Password, Select};

use super::theme::architect_theme;

/// Outcome of the key check at the start of a guided composition.
pub enum KeyStatus {
    /// A key is already reachable from the environment or config file.
    Present,
    /// Key entered during this session (possibly also saved to config).
    SessionKey(String),
    /// User declined to provide a key.
    Skipped,
}

/// Make sure a Gemini API key is available before composing.
///
/// Detects keys from the configured source first; otherwise prompts for one
/// and offers to persist it to the config file.
pub fn ensure_api_key(config: &Config) -> anyhow::Result<KeyStatus> {
    let theme = architect_theme();
    let dim = Style::new().for_stderr().dim();
    let warn = Style::new().for_stderr().yellow();

    let source = from_model_config(&config.model);
    if source.api_key().is_some() {
        eprintln!(
            "  {}",
            dim.apply_to(format!("Using API key from {}", source.describe()))
        );
        return Ok(KeyStatus::Present);
    }

    eprintln!(
        "  {}",
        warn.apply_to(format!("No API key found in {}.", source.describe()))
    );

    let key: String = match Password::with_theme(&theme)
        .with_prompt("Enter your Gemini API key (Esc to skip)")
        .allow_empty_password(true)
        .interact()
    {
        Ok(k) if !k.is_empty() => k,
        _ => return Ok(KeyStatus::Skipped), // Empty or error → skip
    };

    // Save or use session-only
    let save_options = &["Yes, save to config file", "No, use for this session only"];
    let save_choice = Select::with_theme(&theme)
        .with_prompt("Save this key for future sessions?")
        .items(save_options)
        .default(0)
        .interact_opt()?;

    match save_choice {
        Some(0) => {
            // Persist to config TOML and also keep for this session
            if let Err(e) = save_key_to_config(&key) {
                eprintln!(
                    "  {}",
                    warn.apply_to(format!("Could not save to config: {e}"))
                );
                eprintln!("  Using key for this session only.");
            }
            Ok(KeyStatus::SessionKey(key))
        }
        Some(1) => Ok(KeyStatus::SessionKey(key)),
        _ => Ok(KeyStatus::Skipped), // Cancelled / Esc
    }
}

/// Save an API key to the Architect config file, preserving existing comments.
fn save_key_to_config(key: &str) -> anyhow::Result<()> {
    let config_path = Config::default_path();

    let content = if config_path.exists() {
        std::fs::read_to_string(&config_path)?
    } else {
        String::new()
    };

    let mut doc: toml_edit::DocumentMut = content.parse().unwrap_or_default();

    // Ensure [model] table exists
    if !doc.contains_key("model") {
        doc["model"] = toml_edit::Item::Table(toml_edit::Table::new());
    }

    doc["model"]["api_key"] = toml_edit::value(key);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&config_path, doc.to_string())?;

    let dim = Style::new().for_stderr().dim();
    eprintln!(
        "  {}",
        dim.apply_to(format!("Key saved to {}", config_path.display()))
    );

    Ok(())
}
