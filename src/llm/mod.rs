//! Text-generation provider abstraction.
//!
//! The pipeline treats the generation service as an opaque function:
//! prompt string + generation parameters → response text. [`Gemini`] is
//! the one real implementation; tests substitute scripted generators.

mod gemini;
pub mod prompt;

pub use gemini::Gemini;

use crate::error::{Error, Result};
use crate::settings::Settings;

/// Sampling temperature used for every call (from the original tuning).
pub const TEMPERATURE: f32 = 0.8;

/// Parameters for a single generation call.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    /// Maximum number of output tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl GenerationParams {
    pub fn with_max_tokens(max_tokens: u32) -> Self {
        GenerationParams {
            max_tokens,
            temperature: TEMPERATURE,
        }
    }
}

/// A text-generation provider.
pub trait TextGenerator {
    /// Generate a completion for `prompt`.
    fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String>;

    /// Human-readable provider name for logs and errors.
    fn name(&self) -> &str;
}

/// Build the provider selected by the settings.
///
/// Only Gemini is implemented; any other `api_type` is an error rather
/// than a silent fallback.
pub fn provider_for(settings: &Settings) -> Result<Box<dyn TextGenerator>> {
    if settings.api_type.eq_ignore_ascii_case("gemini") {
        Ok(Box::new(Gemini::new(
            settings.api_key.clone(),
            settings.model.clone(),
        )))
    } else {
        Err(Error::UnsupportedProvider(settings.api_type.clone()))
    }
}
