//! Typed JSON schema fragments for structured generation.
//!
//! The provider is told the exact shape of the blueprint we expect back, so
//! decoding never has to guess. Gemini's schema dialect spells type names in
//! uppercase, which the serde renames pin down.

use std::collections::BTreeMap;

use serde::Serialize;

/// Schema node type, serialized in Gemini's uppercase dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SchemaType {
    #[serde(rename = "OBJECT")]
    Object,
    #[serde(rename = "STRING")]
    String,
}

/// A single schema node. Only the object/string subset the blueprint needs.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub node_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl Schema {
    pub fn string(description: impl Into<String>) -> Self {
        Self {
            node_type: SchemaType::String,
            description: Some(description.into()),
            properties: None,
            required: None,
        }
    }

    pub fn object(properties: BTreeMap<String, Schema>, required: Vec<String>) -> Self {
        Self {
            node_type: SchemaType::Object,
            description: None,
            properties: Some(properties),
            required: Some(required),
        }
    }
}

/// Schema for the three-field prompt blueprint every request expects back.
pub fn blueprint_schema() -> Schema {
    let mut properties = BTreeMap::new();
    properties.insert(
        "analysis".to_string(),
        Schema::string("Expert breakdown of the idea or supplied media."),
    );
    properties.insert(
        "optimizedPrompt".to_string(),
        Schema::string("The production-ready, fully structured prompt."),
    );
    properties.insert(
        "proTip".to_string(),
        Schema::string("One actionable tip to push the result further."),
    );
    Schema::object(
        properties,
        vec![
            "analysis".to_string(),
            "optimizedPrompt".to_string(),
            "proTip".to_string(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blueprint_schema_uses_uppercase_type_names() {
        let value = serde_json::to_value(blueprint_schema()).unwrap();
        assert_eq!(value["type"], "OBJECT");
        assert_eq!(value["properties"]["analysis"]["type"], "STRING");
        assert_eq!(value["properties"]["optimizedPrompt"]["type"], "STRING");
        assert_eq!(value["properties"]["proTip"]["type"], "STRING");
    }

    #[test]
    fn blueprint_schema_requires_all_three_fields() {
        let value = serde_json::to_value(blueprint_schema()).unwrap();
        let required: Vec<&str> = value["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, vec!["analysis", "optimizedPrompt", "proTip"]);
    }

    #[test]
    fn string_nodes_skip_structural_fields() {
        let value = serde_json::to_value(Schema::string("desc")).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("properties"));
        assert!(!object.contains_key("required"));
    }
}
