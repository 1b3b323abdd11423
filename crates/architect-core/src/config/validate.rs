//! Configuration validation with range and placeholder checks.

use crate::error::ConfigError;

use super::Config;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["pretty", "json"];

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.model.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "model.name must not be empty".into(),
            ));
        }
        if !self.model.endpoint.starts_with("http") {
            return Err(ConfigError::ValidationError(
                "model.endpoint must be an http(s) URL".into(),
            ));
        }
        if !(0.0..=2.0).contains(&self.model.temperature) {
            return Err(ConfigError::ValidationError(
                "model.temperature must be between 0.0 and 2.0".into(),
            ));
        }
        if self.model.thinking_budget < -1 {
            return Err(ConfigError::ValidationError(
                "model.thinking_budget must be >= -1".into(),
            ));
        }
        if self.model.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "model.timeout_ms must be > 0".into(),
            ));
        }
        if self.limits.max_media_size_mb == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_media_size_mb must be > 0".into(),
            ));
        }
        if !self.instructions.media.contains("{context}") {
            return Err(ConfigError::ValidationError(
                "instructions.media must contain the {context} placeholder".into(),
            ));
        }
        if !self.instructions.blueprint.contains("{idea}") {
            return Err(ConfigError::ValidationError(
                "instructions.blueprint must contain the {idea} placeholder".into(),
            ));
        }
        if !self.export.midjourney.contains("{prompt}") {
            return Err(ConfigError::ValidationError(
                "export.midjourney must contain the {prompt} placeholder".into(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {LOG_LEVELS:?}"
            )));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be one of {LOG_FORMATS:?}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {
        let mut config = Config::default();
        config.model.temperature = 2.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("temperature"));

        config.model.temperature = -0.1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.model.timeout_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_ms"));
    }

    #[test]
    fn test_validate_rejects_zero_media_limit() {
        let mut config = Config::default();
        config.limits.max_media_size_mb = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_media_size_mb"));
    }

    #[test]
    fn test_validate_allows_dynamic_thinking_budget() {
        let mut config = Config::default();
        config.model.thinking_budget = -1;
        assert!(config.validate().is_ok());

        config.model.thinking_budget = -2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_template_without_placeholder() {
        let mut config = Config::default();
        config.instructions.blueprint = "Synthesize something nice".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("{idea}"));

        let mut config = Config::default();
        config.instructions.media = "Deconstruct the attachment".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("{context}"));

        let mut config = Config::default();
        config.export.midjourney = "--v 6.1".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("{prompt}"));
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut config = Config::default();
        config.logging.level = "chatty".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }
}
