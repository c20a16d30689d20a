//! Blocking REST transport for the chat tutor
//!
//! The hosted `generateContent` endpoint sits behind [`TutorBackend`] so the
//! rest of the crate never sees HTTP; tests substitute scripted backends.

use serde::{Deserialize, Serialize};

/// One request to the tutor model
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorPrompt {
    pub system_instruction: String,
    pub message: String,
}

/// Everything that can go wrong between `ask` and an answer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TutorError {
    /// No API key configured; detected before any network call
    MissingCredential,
    /// HTTP 429 from the service
    RateLimited,
    /// Any other non-success HTTP status
    Http(u16),
    /// Connection, IO or serialization trouble
    Transport(String),
    /// HTTP success with no usable text in the body
    EmptyResponse,
}

impl std::fmt::Display for TutorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TutorError::MissingCredential => write!(f, "no API key configured"),
            TutorError::RateLimited => write!(f, "rate limited by the service"),
            TutorError::Http(code) => write!(f, "service returned HTTP {code}"),
            TutorError::Transport(message) => write!(f, "transport failure: {message}"),
            TutorError::EmptyResponse => write!(f, "the model returned an empty response"),
        }
    }
}

impl std::error::Error for TutorError {}

impl From<ureq::Error> for TutorError {
    fn from(error: ureq::Error) -> Self {
        match error {
            ureq::Error::StatusCode(429) => TutorError::RateLimited,
            ureq::Error::StatusCode(code) => TutorError::Http(code),
            other => TutorError::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for TutorError {
    fn from(error: serde_json::Error) -> Self {
        TutorError::Transport(error.to_string())
    }
}

/// Transport seam; production uses [`GeminiBackend`], tests script their own
pub trait TutorBackend {
    fn generate(&self, prompt: &TutorPrompt) -> Result<String, TutorError>;
}

/// Synchronous client for the generative-language REST API
pub struct GeminiBackend {
    agent: ureq::Agent,
    api_key: Option<String>,
    model: String,
    endpoint: String,
    temperature: f32,
    max_output_tokens: u32,
}

impl GeminiBackend {
    pub const DEFAULT_MODEL: &'static str = "gemini-3-flash-preview";
    pub const DEFAULT_ENDPOINT: &'static str = "https://generativelanguage.googleapis.com/v1beta";
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
    pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1000;

    /// Client with default model settings; `None` defers the key failure
    /// to the first request
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            api_key,
            model: Self::DEFAULT_MODEL.to_string(),
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            temperature: Self::DEFAULT_TEMPERATURE,
            max_output_tokens: Self::DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }

    /// Read the key from the `GEMINI_API_KEY` environment variable
    pub fn from_env() -> Self {
        Self::new(std::env::var("GEMINI_API_KEY").ok())
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl TutorBackend for GeminiBackend {
    fn generate(&self, prompt: &TutorPrompt) -> Result<String, TutorError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(TutorError::MissingCredential)?;

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: &prompt.message,
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: &prompt.system_instruction,
                }],
            },
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };
        let body = serde_json::to_string(&request)?;

        let mut response = self
            .agent
            .post(&self.url())
            .header("x-goog-api-key", key)
            .header("Content-Type", "application/json")
            .send(body.as_bytes())?;
        let raw = response.body_mut().read_to_string()?;

        let parsed: GenerateResponse = serde_json::from_str(&raw)?;
        parsed.first_text().ok_or(TutorError::EmptyResponse)
    }
}

// --- Wire types for generateContent ---

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content<'a>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if any arrived
    fn first_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt() -> TutorPrompt {
        TutorPrompt {
            system_instruction: "Be concise.".to_string(),
            message: "What is inertia?".to_string(),
        }
    }

    #[test]
    fn test_missing_key_fails_before_any_network_call() {
        let backend = GeminiBackend::new(None);
        assert_eq!(
            backend.generate(&prompt()),
            Err(TutorError::MissingCredential)
        );
    }

    #[test]
    fn test_url_joins_endpoint_and_model() {
        let backend = GeminiBackend::new(Some("k".into()))
            .with_endpoint("http://localhost:9999/v1beta")
            .with_model("test-model");
        assert_eq!(
            backend.url(),
            "http://localhost:9999/v1beta/models/test-model:generateContent"
        );
    }

    #[test]
    fn test_status_codes_map_onto_the_error_taxonomy() {
        assert_eq!(
            TutorError::from(ureq::Error::StatusCode(429)),
            TutorError::RateLimited
        );
        assert_eq!(
            TutorError::from(ureq::Error::StatusCode(503)),
            TutorError::Http(503)
        );
    }

    #[test]
    fn test_request_wire_shape() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello" }],
            }],
            system_instruction: Content {
                parts: vec![Part { text: "persona" }],
            },
            generation_config: GenerationConfig {
                temperature: 0.7,
                max_output_tokens: 1000,
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "persona");
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 1000);
    }

    #[test]
    fn test_response_text_is_concatenated_candidate_parts() {
        let raw = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "Inertia is " }, { "text": "resistance to change." } ] } }
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.first_text().as_deref(),
            Some("Inertia is resistance to change.")
        );
    }

    #[test]
    fn test_empty_responses_yield_no_text() {
        let no_candidates: GenerateResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(no_candidates.first_text(), None);

        let blank_part: GenerateResponse = serde_json::from_str(
            r#"{ "candidates": [ { "content": { "parts": [ { "text": "" } ] } } ] }"#,
        )
        .unwrap();
        assert_eq!(blank_part.first_text(), None);
    }
}
