//! The architect engine: one validated request, one call, one blueprint.
//!
//! All ordering guarantees live here. The credential is checked before
//! anything else so no input ever reaches the network without one, then
//! validation runs, then exactly one generation call is dispatched and its
//! reply decoded. Nothing is retried; every failure settles the request.

use std::sync::Arc;

use crate::config::{Config, InstructionConfig};
use crate::credentials::{self, CredentialSource};
use crate::error::{ArchitectError, Result};
use crate::llm::{GeminiModel, TextGenerator};
use crate::parse::parse_blueprint;
use crate::request::build_request;
use crate::types::{ArchitectResult, Category, MediaAttachment};

/// Orchestrates credential lookup, validation, dispatch, and decoding.
pub struct Architect {
    credentials: Arc<dyn CredentialSource>,
    model: Arc<dyn TextGenerator>,
    instructions: InstructionConfig,
}

impl Architect {
    pub fn new(
        credentials: Arc<dyn CredentialSource>,
        model: Arc<dyn TextGenerator>,
        instructions: InstructionConfig,
    ) -> Self {
        Self {
            credentials,
            model,
            instructions,
        }
    }

    /// Wire up the Gemini backend described by `config`.
    pub fn from_config(config: &Config) -> Self {
        let credentials: Arc<dyn CredentialSource> =
            Arc::from(credentials::from_model_config(&config.model));
        let model = Arc::new(GeminiModel::new(credentials.clone(), &config.model));
        Self::new(credentials, model, config.instructions.clone())
    }

    /// Confirm a credential is reachable, or explain where to put one.
    pub fn ensure_credential(&self) -> Result<()> {
        if self.credentials.api_key().is_none() {
            return Err(ArchitectError::Configuration(format!(
                "set {}",
                self.credentials.describe()
            )));
        }
        Ok(())
    }

    /// Run one generation request end to end.
    ///
    /// `input` may be blank when media is attached; with neither, the
    /// request is rejected locally and nothing is dispatched.
    pub async fn architect(
        &self,
        category: Category,
        input: &str,
        media: Option<&MediaAttachment>,
    ) -> Result<ArchitectResult> {
        self.ensure_credential()?;

        if input.trim().is_empty() && media.is_none() {
            return Err(ArchitectError::Validation(
                "provide an idea or attach a media file".to_string(),
            ));
        }

        let request = build_request(&self.instructions, category, input, media);
        tracing::debug!(
            model = self.model.name(),
            category = %category,
            has_media = media.is_some(),
            "Dispatching generation request"
        );

        let text = tokio::time::timeout(self.model.timeout(), self.model.generate(&request))
            .await
            .map_err(|_| ArchitectError::Transport {
                message: format!(
                    "request timed out after {}s",
                    self.model.timeout().as_secs()
                ),
                status_code: None,
            })??;

        parse_blueprint(&text)
    }
}
