//! Inline markup transform for generated prose.
//!
//! The expansion prompts ask the model to wrap key terms in square
//! brackets and short asides in parentheses. This module turns those
//! markers into HTML:
//!
//! - `[term]` becomes a highlighted keyword span, no bold
//! - `(comment)` becomes a superscript footnote anchor; the comment is
//!   collected for the bottom-of-page note list and shown as a tooltip
//!
//! Footnote numbers run continuously across sections: the caller
//! threads `next_number` from one section into the next.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::escape::escape_html;

static BRACKETED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").unwrap());
static PARENTHESIZED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

/// Footnote collected during the markup pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footnote {
    /// Footnote number (1-based, document-wide).
    pub number: usize,
    /// The comment text (already HTML-escaped).
    pub content: String,
}

/// Result of transforming one section's prose.
#[derive(Debug, Clone)]
pub struct MarkupResult {
    /// The transformed HTML fragment.
    pub html: String,
    /// Footnotes collected from this section, in document order.
    pub footnotes: Vec<Footnote>,
    /// Number to start the next section's footnotes at.
    pub next_number: usize,
}

/// Transform one section's prose, numbering footnotes from `start_number`.
///
/// The text is escaped first, then brackets are replaced, then
/// parentheses, so an aside inside a bracketed term still becomes a
/// footnote. Both patterns are non-nested, shortest match.
pub fn apply_markup(text: &str, start_number: usize) -> MarkupResult {
    let escaped = escape_html(text);

    let keyworded = BRACKETED.replace_all(&escaped, r#"<span class="keyword">$1</span>"#);

    let mut footnotes = Vec::new();
    let mut number = start_number;
    let html = PARENTHESIZED.replace_all(&keyworded, |caps: &Captures| {
        let content = caps[1].to_string();
        let mut anchor = String::new();
        write!(
            anchor,
            r##"<a class="footnote-ref" href="#footnote-{number}" id="footnote-ref-{number}" title="{content}"><sup>[{number}]</sup></a>"##,
        )
        .unwrap();
        footnotes.push(Footnote { number, content });
        number += 1;
        anchor
    });

    MarkupResult {
        html: html.into_owned(),
        footnotes,
        next_number: number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let result = apply_markup("nothing special here", 1);
        assert_eq!(result.html, "nothing special here");
        assert!(result.footnotes.is_empty());
        assert_eq!(result.next_number, 1);
    }

    #[test]
    fn test_bracketed_term_becomes_keyword_span() {
        let result = apply_markup("the [armistice] held", 1);
        assert_eq!(
            result.html,
            r#"the <span class="keyword">armistice</span> held"#
        );
    }

    #[test]
    fn test_parenthesized_aside_becomes_footnote() {
        let result = apply_markup("the war ended (after six years)", 1);
        assert!(result.html.contains(r##"href="#footnote-1""##));
        assert!(result.html.contains(r#"id="footnote-ref-1""#));
        assert!(result.html.contains(r#"title="after six years""#));
        assert!(result.html.contains("<sup>[1]</sup>"));
        assert_eq!(
            result.footnotes,
            vec![Footnote {
                number: 1,
                content: "after six years".to_string()
            }]
        );
        assert_eq!(result.next_number, 2);
    }

    #[test]
    fn test_numbering_starts_at_given_number() {
        let result = apply_markup("(first) and (second)", 5);
        assert_eq!(result.footnotes[0].number, 5);
        assert_eq!(result.footnotes[1].number, 6);
        assert_eq!(result.next_number, 7);
        assert!(result.html.contains("<sup>[5]</sup>"));
        assert!(result.html.contains("<sup>[6]</sup>"));
    }

    #[test]
    fn test_numbering_threads_across_sections() {
        let first = apply_markup("one (a) two (b)", 1);
        let second = apply_markup("three (c)", first.next_number);
        assert_eq!(second.footnotes[0].number, 3);
    }

    #[test]
    fn test_aside_inside_bracketed_term() {
        let result = apply_markup("[the treaty (signed in May)]", 1);
        assert!(result.html.starts_with(r#"<span class="keyword">the treaty "#));
        assert!(result.html.contains(r##"href="#footnote-1""##));
        assert_eq!(result.footnotes[0].content, "signed in May");
    }

    #[test]
    fn test_text_is_escaped_before_markup() {
        let result = apply_markup("[a<b] (x \"y\")", 1);
        assert!(result.html.contains(r#"<span class="keyword">a&lt;b</span>"#));
        // Tooltip and footnote content carry the escaped quote.
        assert!(result.html.contains("title=\"x &quot;y&quot;\""));
        assert_eq!(result.footnotes[0].content, "x &quot;y&quot;");
    }

    #[test]
    fn test_unclosed_markers_left_alone() {
        let result = apply_markup("a [b and (c", 1);
        assert_eq!(result.html, "a [b and (c");
        assert!(result.footnotes.is_empty());
    }

    #[test]
    fn test_empty_markers_left_alone() {
        let result = apply_markup("[] and ()", 1);
        assert_eq!(result.html, "[] and ()");
    }
}
