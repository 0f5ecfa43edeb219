//! Wire types for the Gemini `generateContent` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::domain::{StressLevel, TransportMode};

/// Request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// A single-turn prompt asking for JSON matching `schema`.
    pub fn structured(prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

/// Response body. Only the fields we read are modelled.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if non-empty.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() { None } else { Some(text) }
    }
}

/// Response schema describing a list of itineraries.
pub fn travel_options_schema() -> Value {
    let modes: Vec<&str> = TransportMode::ALL.iter().map(|m| m.as_str()).collect();
    let stress: Vec<&str> = [StressLevel::Low, StressLevel::Medium, StressLevel::High]
        .iter()
        .map(|s| s.as_str())
        .collect();
    let strings = json!({ "type": "ARRAY", "items": { "type": "STRING" } });

    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "mode": { "type": "STRING", "enum": modes },
                "title": { "type": "STRING" },
                "duration": { "type": "STRING" },
                "priceEstimate": { "type": "STRING" },
                "stressLevel": { "type": "STRING", "enum": stress },
                "routeDescription": { "type": "STRING" },
                "stops": strings,
                "pros": strings,
                "cons": strings,
                "bookingSteps": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "stepTitle": { "type": "STRING" },
                            "providerName": { "type": "STRING" },
                            "bookingUrl": { "type": "STRING" },
                            "description": { "type": "STRING" },
                            "isNavigation": { "type": "BOOLEAN" }
                        },
                        "required": ["stepTitle", "providerName", "bookingUrl", "description"]
                    }
                }
            },
            "required": [
                "id", "mode", "title", "duration", "priceEstimate", "stressLevel",
                "routeDescription", "stops", "pros", "cons", "bookingSteps"
            ]
        }
    })
}
