//! The seven fixed wiki categories.
//!
//! Every generated page has the same seven sections, in the same order.
//! Category labels are stable: they appear in the keyword-extraction
//! prompt and are matched back when parsing the model's response.

/// A section category of the generated wiki page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Overview,
    Background,
    Development,
    Outcome,
    Impact,
    Trivia,
    MediaCoverage,
}

impl Category {
    /// All categories in document order.
    pub const ALL: [Category; 7] = [
        Category::Overview,
        Category::Background,
        Category::Development,
        Category::Outcome,
        Category::Impact,
        Category::Trivia,
        Category::MediaCoverage,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// Stable label used in prompts and response parsing.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Overview => "Overview",
            Category::Background => "Background",
            Category::Development => "Development",
            Category::Outcome => "Outcome",
            Category::Impact => "Impact",
            Category::Trivia => "Trivia",
            Category::MediaCoverage => "Media coverage",
        }
    }

    /// Position in document order (0-based).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Match a response label back to a category.
    ///
    /// Models tend to decorate labels with bullets or bold markers, so
    /// the comparison ignores surrounding `*`, `-`, `#` and whitespace,
    /// and is case-insensitive.
    pub fn from_label(label: &str) -> Option<Category> {
        let cleaned = label.trim().trim_matches(['*', '-', '#']).trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(cleaned))
    }

    /// Display title for the section heading.
    ///
    /// The media section names the event, e.g. "Media coverage of the
    /// Tunguska event".
    pub fn section_title(&self, event_title: &str) -> String {
        match self {
            Category::MediaCoverage => format!("Media coverage of {event_title}"),
            other => other.label().to_string(),
        }
    }
}
