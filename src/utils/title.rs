//! Sanitizing of the free-text item title carried through the gate.

use regex::Regex;
use std::sync::LazyLock;

/// Matches markup tags, including unterminated ones at the end of the input.
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*(>|$)").unwrap());

/// Matches any run of whitespace, including line breaks and tabs.
static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Upper bound on the number of characters kept from a title.
pub const MAX_TITLE_CHARS: usize = 200;

/// Strips markup, collapses whitespace and trims. Returns `None` for blank input.
///
/// The result is still HTML-escaped when rendered; stripping only keeps markup
/// fragments from showing up as literal text.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(sanitize_title("  Rotes <b>Fahrrad</b> "), Some("Rotes Fahrrad".to_string()));
/// assert_eq!(sanitize_title("<br>"), None);
/// ```
pub fn sanitize_title(raw: &str) -> Option<String> {
    let without_tags = TAG_REGEX.replace_all(raw, "");
    let collapsed = WHITESPACE_REGEX.replace_all(&without_tags, " ");
    let trimmed = collapsed.trim();

    if trimmed.is_empty() {
        return None;
    }

    Some(trimmed.chars().take(MAX_TITLE_CHARS).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_title_unchanged() {
        assert_eq!(
            sanitize_title("Rotes Fahrrad"),
            Some("Rotes Fahrrad".to_string())
        );
    }

    #[test]
    fn test_strips_tags() {
        assert_eq!(
            sanitize_title("Rotes <b>Fahrrad</b>"),
            Some("Rotes Fahrrad".to_string())
        );
        assert_eq!(
            sanitize_title("<script>alert(1)</script>Schlüssel"),
            Some("alert(1)Schlüssel".to_string())
        );
    }

    #[test]
    fn test_strips_unterminated_tag() {
        assert_eq!(
            sanitize_title("Brille <img src=x onerror=alert(1)"),
            Some("Brille".to_string())
        );
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(
            sanitize_title("  Blaue\n\tJacke   Größe M "),
            Some("Blaue Jacke Größe M".to_string())
        );
    }

    #[test]
    fn test_blank_is_none() {
        assert_eq!(sanitize_title(""), None);
        assert_eq!(sanitize_title("   "), None);
        assert_eq!(sanitize_title("<br/>"), None);
    }

    #[test]
    fn test_keeps_special_characters() {
        assert_eq!(
            sanitize_title("Tom & Jerry's \"Ball\""),
            Some("Tom & Jerry's \"Ball\"".to_string())
        );
    }

    #[test]
    fn test_truncates_long_titles() {
        let long = "ä".repeat(MAX_TITLE_CHARS + 50);
        let sanitized = sanitize_title(&long).unwrap();
        assert_eq!(sanitized.chars().count(), MAX_TITLE_CHARS);
    }
}
