//! Heading parser: any line starting with `#` once leading whitespace is trimmed.

/// Collect heading lines in document order, keeping each line as written.
///
/// Lines are split on `\n` only, so a CRLF heading keeps its trailing `\r`.
pub fn parse_headings(content: &str) -> Vec<String> {
    content
        .split('\n')
        .filter(|line| line.trim_start().starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_in_order() {
        let content = "# Title\ntext\n## Section\n### Sub";
        assert_eq!(
            parse_headings(content),
            vec!["# Title", "## Section", "### Sub"]
        );
    }

    #[test]
    fn test_indented_heading_kept_verbatim() {
        let headings = parse_headings("  # Indented");
        assert_eq!(headings, vec!["  # Indented"]);
    }

    #[test]
    fn test_hash_without_space_counts() {
        // Tags at line start match too; the rule is purely lexical.
        assert_eq!(parse_headings("#tag line"), vec!["#tag line"]);
    }

    #[test]
    fn test_crlf_heading_keeps_carriage_return() {
        assert_eq!(parse_headings("# A\r\nbody"), vec!["# A\r"]);
        assert_eq!(parse_headings("# A\r\nbody\r\n# B\r\n"), vec!["# A\r", "# B\r"]);
    }

    #[test]
    fn test_no_headings() {
        assert!(parse_headings("plain\ntext").is_empty());
    }
}
