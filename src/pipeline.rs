//! The generation pipeline.
//!
//! Straight-line orchestration of the three stages: keyword extraction,
//! category expansion, page rendering. No feedback, no retries; the
//! first error aborts and nothing is written.

use tracing::info;

use crate::article::expand_articles;
use crate::error::{Error, Result};
use crate::html::render_page;
use crate::llm::TextGenerator;
use crate::outline::extract_outline;
use crate::settings::Settings;

/// Generate the wiki document for an event.
///
/// Validates the inputs, then runs the pipeline against `provider` and
/// returns the rendered HTML. The caller decides where to write it.
pub fn generate_wiki(
    provider: &dyn TextGenerator,
    event_title: &str,
    event_text: &str,
    settings: &Settings,
) -> Result<String> {
    let event_title = event_title.trim();
    let event_text = event_text.trim();
    if event_title.is_empty() {
        return Err(Error::InvalidInput("event title is empty".to_string()));
    }
    if event_text.is_empty() {
        return Err(Error::InvalidInput("event text is empty".to_string()));
    }

    info!(provider = provider.name(), "extracting keywords");
    let outline = extract_outline(provider, event_text, settings.max_tokens)?;

    info!("expanding categories");
    let articles = expand_articles(provider, event_text, &outline)?;

    info!("rendering page");
    Ok(render_page(event_title, &articles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::GenerationParams;

    struct NeverCalled;

    impl TextGenerator for NeverCalled {
        fn generate(&self, _prompt: &str, _params: &GenerationParams) -> Result<String> {
            panic!("provider should not be called for invalid input");
        }

        fn name(&self) -> &str {
            "never"
        }
    }

    #[test]
    fn test_empty_title_rejected_before_any_call() {
        let err = generate_wiki(&NeverCalled, "  ", "some text", &Settings::default());
        assert!(matches!(err, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_empty_text_rejected_before_any_call() {
        let err = generate_wiki(&NeverCalled, "title", "\n\t", &Settings::default());
        assert!(matches!(err, Err(Error::InvalidInput(_))));
    }
}
