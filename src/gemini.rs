//! Minimal client for the Gemini `generateContent` REST surface.
//!
//! One request shape and one response walk; no streaming, no retries, no
//! cancellation. The search-grounding tool is always enabled so the model
//! can read the target site and source buyer candidates live.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::core::config::GeminiConfig;
use crate::core::error::ProviderError;
use crate::core::types::GroundingSource;

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl GeminiClient {
    /// Build a client from resolved config. Fails when no API key is
    /// configured anywhere; this endpoint has no key-less mode.
    pub fn from_config(
        http: reqwest::Client,
        config: &GeminiConfig,
    ) -> Result<Self, ProviderError> {
        let api_key = config.resolve_api_key().ok_or(ProviderError::MissingApiKey)?;
        Ok(Self {
            http,
            base_url: config.resolve_base_url(),
            model: config.resolve_model(),
            api_key,
        })
    }

    /// Issue the single grounded generation call: prompt + response schema,
    /// `google_search` tool on, JSON response mime type.
    pub async fn generate_grounded(
        &self,
        prompt: &str,
        response_schema: Value,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "tools": [{ "google_search": {} }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema
            }
        });

        // Key travels in a header so it never shows up in traced URLs.
        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        Ok(response.json::<GenerateContentResponse>().await?)
    }
}

// ---------------------------------------------------------------------------
// Response envelope: the subset of generateContent this pipeline consumes.
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
pub struct WebSource {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl GenerateContentResponse {
    /// Primary text payload: the concatenated text parts of the first
    /// candidate. Absent or blank text falls back to an empty JSON object,
    /// which the downstream report parse then rejects as a schema miss.
    pub fn primary_text(&self) -> String {
        let joined: String = self
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect()
            })
            .unwrap_or_default();
        if joined.trim().is_empty() {
            "{}".to_string()
        } else {
            joined
        }
    }

    /// Citations attached to the first candidate, provider order preserved.
    /// Chunks missing a uri or a title are dropped; partial citation
    /// metadata is expected, not an error.
    pub fn grounding_sources(&self) -> Vec<GroundingSource> {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|meta| {
                meta.grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref())
                    .filter_map(|web| match (&web.uri, &web.title) {
                        (Some(uri), Some(title)) => Some(GroundingSource {
                            uri: uri.clone(),
                            title: title.clone(),
                        }),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_grounding_chunks_are_filtered() {
        let raw = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{}" }] },
                "groundingMetadata": {
                    "groundingChunks": [
                        { "web": { "uri": "u1", "title": "t1" } },
                        { "web": { "uri": "u2" } },
                        { "web": { "title": "t3" } },
                        {}
                    ]
                }
            }]
        });

        let response: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        let sources = response.grounding_sources();
        assert_eq!(
            sources,
            vec![GroundingSource {
                uri: "u1".to_string(),
                title: "t1".to_string()
            }]
        );
    }

    #[test]
    fn absent_text_defaults_to_empty_object() {
        let empty: GenerateContentResponse = serde_json::from_value(serde_json::json!({}))
            .unwrap();
        assert_eq!(empty.primary_text(), "{}");

        let no_parts: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({ "candidates": [{}] })).unwrap();
        assert_eq!(no_parts.primary_text(), "{}");
    }

    #[test]
    fn multi_part_text_is_concatenated_in_order() {
        let raw = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] }
            }]
        });
        let response: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.primary_text(), "{\"a\":1}");
        assert!(response.grounding_sources().is_empty());
    }

    #[test]
    fn missing_metadata_yields_no_sources() {
        let raw = serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "{}" }] } }]
        });
        let response: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        assert!(response.grounding_sources().is_empty());
    }
}
