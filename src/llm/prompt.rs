//! Prompt templates for the two pipeline stages.

use crate::category::Category;

/// Number of keywords requested per category.
pub const KEYWORDS_PER_CATEGORY: usize = 12;

/// Prompt for the keyword-extraction call.
///
/// Asks for one line per category in the form
/// `Category: keyword1, keyword2, ..., keyword12`, which
/// [`crate::outline`] parses back.
pub fn keyword_prompt(event_text: &str) -> String {
    let categories = Category::ALL
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "For the historical event described here: \"{event_text}\", generate \
{KEYWORDS_PER_CATEGORY} related keywords for each of the following categories: {categories}. \
Output one line per category, each line in the form \
'Category: keyword1, keyword2, ..., keyword{KEYWORDS_PER_CATEGORY}'. \
Do not output anything else."
    )
}

/// Prompt for a single category-expansion call.
///
/// The response is expected to mark key terms with square brackets and
/// a few inline asides with parentheses; both are picked up by the
/// markup transform.
pub fn expansion_prompt(event_text: &str, category: Category, keywords: &[String]) -> String {
    format!(
        "Based on this event description: \"{event_text}\", write encyclopedia-style \
prose covering the category \"{category}\" of the event, using these keywords: [{keywords}]. \
Wrap the most important terms in square brackets. Include a few short parenthesized asides; \
they will become footnotes. Do not repeat the category name or the event description in the \
output. Do not mention that the event is fictional. Separate paragraphs with \\n, but do not \
break lines too often.",
        category = category.label(),
        keywords = keywords.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_prompt_lists_all_categories() {
        let prompt = keyword_prompt("a border skirmish in 1884");
        for category in Category::ALL {
            assert!(prompt.contains(category.label()), "missing {}", category.label());
        }
        assert!(prompt.contains("a border skirmish in 1884"));
        assert!(prompt.contains("12 related keywords"));
    }

    #[test]
    fn test_expansion_prompt_includes_keywords() {
        let keywords = vec!["treaty".to_string(), "armistice".to_string()];
        let prompt = expansion_prompt("a border skirmish", Category::Outcome, &keywords);
        assert!(prompt.contains("treaty, armistice"));
        assert!(prompt.contains("\"Outcome\""));
    }

    #[test]
    fn test_expansion_prompt_empty_keywords() {
        let prompt = expansion_prompt("a border skirmish", Category::Trivia, &[]);
        assert!(prompt.contains("using these keywords: []"));
    }
}
