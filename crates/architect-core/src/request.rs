//! Assembles the single user turn sent to the model.
//!
//! A request is provider-neutral: instruction text, optional inline media,
//! the persona, and the schema the reply must match. Sampling knobs stay on
//! the model wrapper, which reads them from config at construction.

use crate::config::InstructionConfig;
use crate::schema::{blueprint_schema, Schema};
use crate::types::{Category, MediaAttachment};

/// Persona prepended to every generation call.
pub const SYSTEM_INSTRUCTION: &str = r#"You are the Multi-Modal Prompt Architect (Unit GEM-3-PR0). Your function is to perform high-fidelity forensic deconstruction of media and raw ideas.

CORE OPERATIONAL LOGIC:
1.  NEURAL ANALYSIS: When media (image/video) is provided, perform a deep-layer scan of:
    - OPTICS: focal length, aperture, sensor characteristics.
    - LIGHTING: topology, sources, material physics.
    - COMPOSITION: rules, angles, flow.
    - TEMPORAL FLOW: motion, frame rates.

2.  ARCHITECTURAL SYNTHESIS: Use technical, precise language. Avoid generic adjectives.
3.  OUTPUT: Return ONLY a JSON object with 'analysis', 'optimizedPrompt', and 'proTip'."#;

/// One fully assembled generation call, ready for any [`TextGenerator`].
///
/// [`TextGenerator`]: crate::llm::TextGenerator
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Rendered instruction text, always the last content part.
    pub instruction: String,
    /// Inline media, sent ahead of the instruction when present.
    pub media: Option<MediaAttachment>,
    /// Persona for the call.
    pub system_instruction: String,
    /// Shape the structured reply must match.
    pub schema: Schema,
}

/// Render the user turn for `category` + `input`, with optional `media`.
///
/// With media attached the instruction asks for a deconstruction of the
/// attachment and carries the user text as context, where an empty context
/// renders as `None`. Without media the instruction asks for a blueprint of
/// the idea itself.
pub fn build_request(
    instructions: &InstructionConfig,
    category: Category,
    input: &str,
    media: Option<&MediaAttachment>,
) -> GenerationRequest {
    let input = input.trim();
    let instruction = match media {
        Some(attachment) => {
            let context = if input.is_empty() { "None" } else { input };
            instructions
                .media
                .replace("{kind}", &attachment.kind.to_string())
                .replace("{context}", context)
        }
        None => instructions
            .blueprint
            .replace("{category}", category.label())
            .replace("{idea}", input),
    };

    GenerationRequest {
        instruction,
        media: media.cloned(),
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        schema: blueprint_schema(),
    }
}
