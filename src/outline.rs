//! Keyword extraction: one prompt-and-parse call.
//!
//! The model is asked for one `Category: kw1, kw2, ...` line per
//! category; everything else in the response is ignored. Categories the
//! model skips end up with empty keyword lists, and the expansion stage
//! still runs for them.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::category::Category;
use crate::error::Result;
use crate::llm::{GenerationParams, TextGenerator, prompt};

static KEYWORD_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([^:]+?)\s*:\s*(.*)$").unwrap());

/// Keyword lists per category, as extracted from the event text.
#[derive(Debug, Clone, Default)]
pub struct EventOutline {
    keywords: [Vec<String>; Category::COUNT],
}

impl EventOutline {
    /// Keywords for a category (possibly empty).
    pub fn keywords(&self, category: Category) -> &[String] {
        &self.keywords[category.index()]
    }

    /// Replace the keywords for a category.
    pub fn set_keywords(&mut self, category: Category, keywords: Vec<String>) {
        self.keywords[category.index()] = keywords;
    }

    /// True if no category has any keywords.
    pub fn is_empty(&self) -> bool {
        self.keywords.iter().all(|k| k.is_empty())
    }
}

/// Run the keyword-extraction call and parse the response.
pub fn extract_outline(
    provider: &dyn TextGenerator,
    event_text: &str,
    max_tokens: u32,
) -> Result<EventOutline> {
    let response = provider.generate(
        &prompt::keyword_prompt(event_text),
        &GenerationParams::with_max_tokens(max_tokens),
    )?;
    let outline = parse_outline(&response);
    if outline.is_empty() {
        warn!("keyword response contained no recognizable category lines");
    }
    Ok(outline)
}

/// Parse a keyword response into an outline.
///
/// Each line is matched against `label: comma, separated, keywords`;
/// lines whose label is not one of the seven categories are skipped.
/// If a category appears twice, the later line wins.
pub fn parse_outline(response: &str) -> EventOutline {
    let mut outline = EventOutline::default();
    for line in response.lines() {
        let Some(caps) = KEYWORD_LINE.captures(line) else {
            continue;
        };
        let Some(category) = Category::from_label(&caps[1]) else {
            debug!(label = &caps[1], "ignoring unknown category line");
            continue;
        };
        let keywords: Vec<String> = caps[2]
            .split(',')
            .map(str::trim)
            .filter(|kw| !kw.is_empty())
            .map(str::to_string)
            .collect();
        outline.set_keywords(category, keywords);
    }
    outline
}
