//! Credential lookup behind an injectable trait.
//!
//! A missing key must surface as a setup problem before any network attempt,
//! so the engine consults a `CredentialSource` per request instead of
//! touching the process environment directly. Tests inject fakes.

use crate::config::ModelConfig;

/// Default environment variable consulted for the API key.
pub const DEFAULT_KEY_VAR: &str = "GEMINI_API_KEY";

/// Where the API key comes from.
pub trait CredentialSource: Send + Sync {
    /// The key, or `None` when no credential is reachable right now.
    fn api_key(&self) -> Option<String>;

    /// Human-readable description of where the key is expected, used to
    /// build setup instructions.
    fn describe(&self) -> String;
}

/// Reads the key from a process environment variable at call time.
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_VAR)
    }
}

impl CredentialSource for EnvCredential {
    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|v| !v.is_empty())
    }

    fn describe(&self) -> String {
        format!("the {} environment variable", self.var)
    }
}

/// A fixed in-memory key (config literal or session-entered).
pub struct StaticCredential {
    key: String,
}

impl StaticCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl CredentialSource for StaticCredential {
    fn api_key(&self) -> Option<String> {
        if self.key.is_empty() {
            None
        } else {
            Some(self.key.clone())
        }
    }

    fn describe(&self) -> String {
        "the configured api_key".to_string()
    }
}

/// Parse a `${VAR}` environment reference out of a config string.
///
/// Returns `Some(var_name)` for references, `None` for literals.
fn env_ref(value: &str) -> Option<&str> {
    value
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
}

/// Build the credential source described by `model.api_key`.
///
/// An empty value falls back to `GEMINI_API_KEY`, a `${VAR}` reference reads
/// that variable at call time, and anything else is treated as the literal
/// key.
pub fn from_model_config(model: &ModelConfig) -> Box<dyn CredentialSource> {
    let value = model.api_key.trim();
    if value.is_empty() {
        Box::new(EnvCredential::default())
    } else if let Some(var) = env_ref(value) {
        Box::new(EnvCredential::new(var))
    } else {
        Box::new(StaticCredential::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_ref_parses_reference_syntax() {
        assert_eq!(env_ref("${GEMINI_API_KEY}"), Some("GEMINI_API_KEY"));
        assert_eq!(env_ref("plain-key"), None);
        assert_eq!(env_ref("${unterminated"), None);
    }

    #[test]
    fn env_credential_absent_for_unset_variable() {
        let source = EnvCredential::new("ARCHITECT_TEST_DEFINITELY_NOT_SET_XYZ");
        assert_eq!(source.api_key(), None);
    }

    #[test]
    fn static_credential_returns_key() {
        let source = StaticCredential::new("sk-test-123");
        assert_eq!(source.api_key(), Some("sk-test-123".to_string()));
    }

    #[test]
    fn static_credential_empty_counts_as_absent() {
        let source = StaticCredential::new("");
        assert_eq!(source.api_key(), None);
    }

    #[test]
    fn literal_config_key_wins() {
        let model = ModelConfig {
            api_key: "sk-literal".to_string(),
            ..ModelConfig::default()
        };
        let source = from_model_config(&model);
        assert_eq!(source.api_key(), Some("sk-literal".to_string()));
    }

    #[test]
    fn reference_config_key_reads_environment() {
        let model = ModelConfig {
            api_key: "${ARCHITECT_TEST_DEFINITELY_NOT_SET_XYZ}".to_string(),
            ..ModelConfig::default()
        };
        let source = from_model_config(&model);
        assert_eq!(source.api_key(), None);
        assert!(source
            .describe()
            .contains("ARCHITECT_TEST_DEFINITELY_NOT_SET_XYZ"));
    }

    #[test]
    fn empty_config_key_falls_back_to_default_variable() {
        let model = ModelConfig {
            api_key: String::new(),
            ..ModelConfig::default()
        };
        let source = from_model_config(&model);
        assert!(source.describe().contains(DEFAULT_KEY_VAR));
    }
}
