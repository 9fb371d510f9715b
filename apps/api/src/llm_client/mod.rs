/// LLM Client — the single point of entry for all Gemini API calls in the Screener.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All LLM interactions MUST go through this module.
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all LLM calls in the Screener.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.5-flash";
/// Low temperature keeps scoring stable across runs on identical input.
const TEMPERATURE: f32 = 0.2;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned an empty response")]
    EmptyResponse,
}

impl LlmError {
    /// True for 400-class endpoint rejections, which in practice mean the
    /// inline file payload was unreadable (wrong media type, corrupt bytes).
    pub fn is_client_rejection(&self) -> bool {
        matches!(self, LlmError::Api { status, .. } if (400..500).contains(status))
    }
}

/// One part of a multipart request content block: inline text or a
/// base64-encoded file payload tagged with its media type.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn inline_data(mime_type: impl Into<String>, base64_data: String) -> Self {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: mime_type.into(),
                data: base64_data,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Base64-encoded file bytes.
    pub data: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenates the text of all parts of the first candidate.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The single LLM client used by the screening service.
/// Wraps the Gemini `generateContent` API with structured-output helpers.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a raw structured-output call, returning the model's text output.
    ///
    /// `response_schema` is forwarded as the declared output schema; the
    /// endpoint is asked for `application/json` so the returned text is the
    /// JSON document itself.
    pub async fn generate(
        &self,
        parts: Vec<Part>,
        response_schema: Value,
    ) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema,
                temperature: TEMPERATURE,
            },
        };

        let url = format!("{GEMINI_API_BASE}/{MODEL}:generateContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the endpoint's error envelope for a readable message
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: GenerateContentResponse = response.json().await?;
        let text = llm_response.text().trim().to_string();

        if text.is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        debug!("LLM call succeeded: {} chars of output", text.len());
        Ok(text)
    }

    /// Convenience method that calls the model and deserializes the text
    /// output against `T`. The declared schema and `T` must agree.
    pub async fn generate_json<T: DeserializeOwned>(
        &self,
        parts: Vec<Part>,
        response_schema: Value,
    ) -> Result<T, LlmError> {
        let text = self.generate(parts, response_schema).await?;
        serde_json::from_str(&text).map_err(LlmError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_concatenates_candidate_parts() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"score\""}, {"text": ": 75}"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), "{\"score\": 75}");
    }

    #[test]
    fn test_response_text_empty_when_no_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), "");
    }

    #[test]
    fn test_response_text_skips_textless_parts() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{}, {"text": "ok"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), "ok");
    }

    #[test]
    fn test_text_part_serializes_flat() {
        let part = Part::text("hello");
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json, serde_json::json!({"text": "hello"}));
    }

    #[test]
    fn test_inline_data_part_uses_camel_case_keys() {
        let part = Part::inline_data("application/pdf", "aGVsbG8=".to_string());
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "inlineData": {"mimeType": "application/pdf", "data": "aGVsbG8="}
            })
        );
    }

    #[test]
    fn test_is_client_rejection_covers_400_class_only() {
        let bad_request = LlmError::Api {
            status: 400,
            message: "invalid argument".to_string(),
        };
        let server_error = LlmError::Api {
            status: 500,
            message: "internal".to_string(),
        };
        assert!(bad_request.is_client_rejection());
        assert!(!server_error.is_client_rejection());
        assert!(!LlmError::EmptyResponse.is_client_rejection());
    }
}
