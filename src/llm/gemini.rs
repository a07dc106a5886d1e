//! Gemini REST client.
//!
//! Thin blocking client for the `models/{model}:generateContent`
//! endpoint. One request per prompt; errors are reported to the caller
//! without retry, matching the single-pass pipeline.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GenerationParams, TextGenerator};
use crate::error::{Error, Result};

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Blocking client for the Gemini generative-language API.
pub struct Gemini {
    api_key: String,
    model: String,
    endpoint: String,
    http: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl Gemini {
    /// Create a client for `model` authenticated with `api_key`.
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_endpoint(api_key, model, DEFAULT_ENDPOINT.to_string())
    }

    /// Create a client against a custom endpoint (tests, proxies).
    pub fn with_endpoint(api_key: String, model: String, endpoint: String) -> Self {
        Gemini {
            api_key,
            model,
            endpoint,
            http: reqwest::blocking::Client::new(),
        }
    }

    fn request_body(&self, prompt: &str, params: &GenerationParams) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: params.max_tokens,
                temperature: params.temperature,
            },
        }
    }

    /// Extract the generated text from a response body.
    ///
    /// Takes the first candidate and concatenates its parts. A response
    /// without text (safety block, empty candidate list) is an error.
    fn parse_response(body: &str) -> Result<String> {
        let response: GenerateResponse = serde_json::from_str(body)?;
        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();
        if text.is_empty() {
            return Err(Error::EmptyResponse);
        }
        Ok(text)
    }
}

impl TextGenerator for Gemini {
    fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        );
        debug!(model = %self.model, max_tokens = params.max_tokens, "sending generation request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(prompt, params))
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Self::parse_response(&body)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
