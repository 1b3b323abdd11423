//! Gemini model backend using the generateContent REST API.
//!
//! Sends optional inline media plus the rendered instruction in a single
//! user turn, with the response schema embedded in the generation config so
//! the API returns raw JSON matching the blueprint shape.

use super::provider::TextGenerator;
use crate::config::ModelConfig;
use crate::credentials::CredentialSource;
use crate::error::{ArchitectError, Result};
use crate::request::GenerationRequest;
use crate::schema::Schema;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Gemini backend speaking the v1beta generateContent protocol.
pub struct GeminiModel {
    credentials: Arc<dyn CredentialSource>,
    model: String,
    endpoint: String,
    temperature: f64,
    thinking_budget: i32,
    timeout: Duration,
    client: reqwest::Client,
}

impl GeminiModel {
    pub fn new(credentials: Arc<dyn CredentialSource>, config: &ModelConfig) -> Self {
        Self {
            credentials,
            model: config.name.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            temperature: config.temperature,
            thinking_budget: config.thinking_budget,
            timeout: config.timeout(),
            client: reqwest::Client::new(),
        }
    }

    fn request_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    /// Assemble the wire body. Media must precede the instruction text so
    /// the model reads the attachment before the ask.
    fn build_body(&self, request: &GenerationRequest) -> GenerateContentRequest {
        let mut parts = Vec::new();
        if let Some(media) = &request.media {
            parts.push(Part::Inline {
                inline_data: InlineData {
                    mime_type: media.mime_type.clone(),
                    data: media.data.clone(),
                },
            });
        }
        parts.push(Part::Text {
            text: request.instruction.clone(),
        });

        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part::Text {
                    text: request.system_instruction.clone(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: self.temperature,
                response_mime_type: "application/json".to_string(),
                response_schema: request.schema.clone(),
                thinking_config: ThinkingConfig {
                    thinking_budget: self.thinking_budget,
                },
            },
        }
    }
}

// --- Request types ---

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
}

#[derive(Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: Schema,
    #[serde(rename = "thinkingConfig")]
    thinking_config: ThinkingConfig,
}

#[derive(Serialize)]
struct ThinkingConfig {
    #[serde(rename = "thinkingBudget")]
    thinking_budget: i32,
}

// --- Response types ---

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[async_trait]
impl TextGenerator for GeminiModel {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn is_available(&self) -> bool {
        self.credentials.api_key().is_some()
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let api_key = self.credentials.api_key().ok_or_else(|| {
            ArchitectError::Configuration(format!("set {}", self.credentials.describe()))
        })?;

        let body = self.build_body(request);

        let resp = self
            .client
            .post(self.request_url())
            .header("x-goog-api-key", &api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ArchitectError::Transport {
                message: format!("Gemini request failed: {e}"),
                status_code: None,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ArchitectError::Transport {
                message: format!("Gemini HTTP {status}: {text}"),
                status_code: Some(status.as_u16()),
            });
        }

        let content_resp: GenerateContentResponse =
            resp.json().await.map_err(|e| ArchitectError::Transport {
                message: format!("Failed to parse Gemini response: {e}"),
                status_code: None,
            })?;

        // An empty or text-free candidate list surfaces as an empty string;
        // the decode stage owns that failure.
        let text = content_resp
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        Ok(text)
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
