//! Reference parser: `[display text](target)`

use regex::Regex;
use std::sync::LazyLock;

/// Matches `[text](target)` on a single line. Display text and target are
/// matched lazily, so `[a](x) [b](y)` yields two references.
static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[.*?\]\((?P<target>.*?)\)").expect("reference pattern is valid")
});

/// Fast pre-filter: skip regex if no link pattern exists.
#[inline]
fn has_reference(content: &str) -> bool {
    content.contains("](")
}

/// Strip a single leading `./` from a target. No other normalization.
pub fn normalize_target(target: &str) -> &str {
    target.strip_prefix("./").unwrap_or(target)
}

/// Extract every reference target in order of appearance.
///
/// Image syntax (`![alt](src)`) is not distinguished from links. Anchors,
/// URLs and relative paths are returned as written.
pub fn parse_references(content: &str) -> Vec<String> {
    if !has_reference(content) {
        return Vec::new();
    }

    REFERENCE
        .captures_iter(content)
        .filter_map(|caps| caps.name("target"))
        .map(|m| normalize_target(m.as_str()).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_reference() {
        let refs = parse_references("See [b](b.md) for more.");
        assert_eq!(refs, vec!["b.md"]);
    }

    #[test]
    fn test_order_left_to_right_top_to_bottom() {
        let content = "[one](1.md) and [two](2.md)\n[three](3.md)";
        assert_eq!(parse_references(content), vec!["1.md", "2.md", "3.md"]);
    }

    #[test]
    fn test_leading_dot_slash_stripped_once() {
        let content = "[a](./a.md) [b](././b.md) [c](../c.md)";
        assert_eq!(parse_references(content), vec!["a.md", "./b.md", "../c.md"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let content = "[x](a.md) [y](a.md)";
        assert_eq!(parse_references(content), vec!["a.md", "a.md"]);
    }

    #[test]
    fn test_subdirectory_target_verbatim() {
        let refs = parse_references("[deep](sub/note.md)");
        assert_eq!(refs, vec!["sub/note.md"]);
    }

    #[test]
    fn test_empty_display_text() {
        assert_eq!(parse_references("[](empty.md)"), vec!["empty.md"]);
    }

    #[test]
    fn test_does_not_span_lines() {
        let content = "[broken\n](x.md)";
        assert!(parse_references(content).is_empty());
    }

    #[test]
    fn test_wikilinks_ignored() {
        assert!(parse_references("[[Note]] only").is_empty());
    }

    #[test]
    fn test_fast_path_no_links() {
        assert!(parse_references("No links here, just text.").is_empty());
    }
}
