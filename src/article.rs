//! Category expansion: seven independent prompt-and-generate calls.

use tracing::info;

use crate::category::Category;
use crate::error::Result;
use crate::llm::{GenerationParams, TextGenerator, prompt};
use crate::outline::EventOutline;

/// Token budget for each expansion call.
pub const EXPANSION_MAX_TOKENS: u32 = 8192;

/// Generated prose per category.
#[derive(Debug, Clone, Default)]
pub struct ArticleSet {
    articles: [String; Category::COUNT],
}

impl ArticleSet {
    /// Prose for a category (possibly empty).
    pub fn article(&self, category: Category) -> &str {
        &self.articles[category.index()]
    }

    /// Replace the prose for a category.
    pub fn set_article(&mut self, category: Category, text: String) {
        self.articles[category.index()] = text;
    }
}

/// Expand a single category into prose.
pub fn expand_category(
    provider: &dyn TextGenerator,
    event_text: &str,
    category: Category,
    keywords: &[String],
) -> Result<String> {
    provider.generate(
        &prompt::expansion_prompt(event_text, category, keywords),
        &GenerationParams::with_max_tokens(EXPANSION_MAX_TOKENS),
    )
}

/// Expand every category in document order.
///
/// Calls are sequential; the first provider error aborts the whole
/// expansion.
pub fn expand_articles(
    provider: &dyn TextGenerator,
    event_text: &str,
    outline: &EventOutline,
) -> Result<ArticleSet> {
    let mut articles = ArticleSet::default();
    for (i, category) in Category::ALL.into_iter().enumerate() {
        info!(
            category = category.label(),
            "expanding category {}/{}",
            i + 1,
            Category::COUNT
        );
        let text = expand_category(provider, event_text, category, outline.keywords(category))?;
        articles.set_article(category, text);
    }
    Ok(articles)
}
