//! Strict decoding of the model's structured reply.
//!
//! The schema contract makes a malformed reply a provider fault, not
//! something to paper over. Anything short of a complete blueprint maps to
//! [`ArchitectError::Decode`] so callers can retry or surface it.

use crate::error::{ArchitectError, Result};
use crate::types::ArchitectResult;

/// Decode raw model output into a blueprint.
///
/// Tolerates surrounding whitespace and unknown extra fields, rejects
/// everything else: empty replies, non-JSON, and objects missing any of the
/// three required fields.
pub fn parse_blueprint(text: &str) -> Result<ArchitectResult> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ArchitectError::Decode(
            "model returned an empty reply".to_string(),
        ));
    }
    serde_json::from_str(text).map_err(|e| ArchitectError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_blueprint_decodes() {
        let text = r#"{
            "analysis": "Strong central subject.",
            "optimizedPrompt": "A lighthouse at dusk, 35mm, golden hour.",
            "proTip": "Specify the lens."
        }"#;
        let result = parse_blueprint(text).unwrap();
        assert_eq!(result.analysis, "Strong central subject.");
        assert_eq!(
            result.optimized_prompt,
            "A lighthouse at dusk, 35mm, golden hour."
        );
        assert_eq!(result.pro_tip, "Specify the lens.");
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let text = "\n  {\"analysis\":\"a\",\"optimizedPrompt\":\"b\",\"proTip\":\"c\"}  \n";
        assert!(parse_blueprint(text).is_ok());
    }

    #[test]
    fn unknown_extra_fields_are_ignored() {
        let text = r#"{"analysis":"a","optimizedPrompt":"b","proTip":"c","confidence":0.9}"#;
        assert!(parse_blueprint(text).is_ok());
    }

    #[test]
    fn empty_reply_is_a_decode_error() {
        let err = parse_blueprint("   ").unwrap_err();
        assert!(matches!(err, ArchitectError::Decode(_)));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn missing_field_is_a_decode_error() {
        let text = r#"{"analysis":"a","optimizedPrompt":"b"}"#;
        let err = parse_blueprint(text).unwrap_err();
        assert!(matches!(err, ArchitectError::Decode(_)));
        assert!(err.to_string().contains("proTip"));
    }

    #[test]
    fn snake_case_keys_do_not_satisfy_the_contract() {
        let text = r#"{"analysis":"a","optimized_prompt":"b","pro_tip":"c"}"#;
        assert!(parse_blueprint(text).is_err());
    }

    #[test]
    fn non_json_reply_is_a_decode_error() {
        let err = parse_blueprint("I'd be happy to help!").unwrap_err();
        assert!(matches!(err, ArchitectError::Decode(_)));
    }
}
