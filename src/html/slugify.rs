//! Slug generation for section anchors.

/// Generate a GitHub-style slug from heading text.
///
/// Lowercases, replaces whitespace with hyphens, drops everything else,
/// and collapses consecutive hyphens.
///
/// # Examples
///
/// ```
/// use wikigen::html::slugify;
///
/// assert_eq!(slugify("Media coverage of The Great Fire"), "media-coverage-of-the-great-fire");
/// assert_eq!(slugify("7. Trivia!"), "7-trivia");
/// ```
pub fn slugify(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|&c| c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_simple() {
        assert_eq!(slugify("Overview"), "overview");
        assert_eq!(slugify("Media coverage"), "media-coverage");
    }

    #[test]
    fn test_slugify_punctuation_and_spaces() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
