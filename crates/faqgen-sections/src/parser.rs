//! Line scanner splitting a markdown document into sections.

use crate::Sections;

/// Split a markdown document into sections keyed by heading title.
///
/// A line starting with `## ` or `### ` opens a new section named by the
/// rest of the line (both levels are equivalent boundaries; no nesting is
/// retained). Everything before the first heading is discarded. Lines after
/// a heading accumulate into its body until the next heading or end of
/// input; finalized bodies are trimmed of leading and trailing whitespace.
///
/// Duplicate titles: the later occurrence's body wins, at the position of
/// the first occurrence. `## ` with nothing after the marker is a legal
/// heading keyed by the empty string; `##` without the trailing space is
/// body text. An empty document yields an empty mapping.
#[must_use]
pub fn parse_sections(markdown: &str) -> Sections {
    let mut sections = Sections::new();
    let mut current: Option<String> = None;
    let mut body: Vec<&str> = Vec::new();

    for line in markdown.split('\n') {
        let heading = line
            .strip_prefix("## ")
            .or_else(|| line.strip_prefix("### "));

        if let Some(title) = heading {
            if let Some(name) = current.take() {
                sections.insert(name, body.join("\n").trim().to_owned());
            }
            current = Some(title.to_owned());
            body.clear();
        } else if current.is_some() {
            body.push(line);
        }
    }

    if let Some(name) = current {
        sections.insert(name, body.join("\n").trim().to_owned());
    }

    sections
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_document_yields_empty_mapping() {
        let sections = parse_sections("");
        assert!(sections.is_empty());
    }

    #[test]
    fn test_splits_on_level_two_headings() {
        let sections = parse_sections("## One\nalpha\n## Two\nbeta");

        assert_eq!(sections.len(), 2);
        assert_eq!(sections.get("One"), Some("alpha"));
        assert_eq!(sections.get("Two"), Some("beta"));
    }

    #[test]
    fn test_level_three_headings_are_equivalent_boundaries() {
        let sections = parse_sections("## One\nalpha\n### Two\nbeta\n## Three\ngamma");

        let titles: Vec<_> = sections.titles().collect();
        assert_eq!(titles, vec!["One", "Two", "Three"]);
        assert_eq!(sections.get("Two"), Some("beta"));
    }

    #[test]
    fn test_preamble_before_first_heading_is_discarded() {
        let sections = parse_sections("# Title\n\nintro text\n\n## First\nbody");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections.get("First"), Some("body"));
    }

    #[test]
    fn test_preserves_source_order() {
        let sections = parse_sections("## C\n1\n## A\n2\n## B\n3");

        let titles: Vec<_> = sections.titles().collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_duplicate_heading_last_body_wins_at_first_position() {
        let sections = parse_sections("## A\nx\n## A\ny");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections.get("A"), Some("y"));
    }

    #[test]
    fn test_duplicate_heading_keeps_original_position() {
        let sections = parse_sections("## A\nx\n## B\nmid\n## A\ny");

        let titles: Vec<_> = sections.titles().collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(sections.get("A"), Some("y"));
        assert_eq!(sections.get("B"), Some("mid"));
    }

    #[test]
    fn test_body_trimmed_of_surrounding_blank_lines() {
        let sections = parse_sections("## A\n\n\nbody line\n\n\n## B\nnext");

        assert_eq!(sections.get("A"), Some("body line"));
    }

    #[test]
    fn test_internal_blank_lines_preserved() {
        let sections = parse_sections("## A\nfirst\n\nsecond\n## B\nx");

        assert_eq!(sections.get("A"), Some("first\n\nsecond"));
    }

    #[test]
    fn test_empty_title_heading_is_legal() {
        let sections = parse_sections("## \nbody");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections.get(""), Some("body"));
    }

    #[test]
    fn test_marker_without_space_is_body_text() {
        let sections = parse_sections("## A\n##\n### B\nend");

        assert_eq!(sections.get("A"), Some("##"));
        assert_eq!(sections.get("B"), Some("end"));
    }

    #[test]
    fn test_deeper_headings_stay_in_body() {
        let sections = parse_sections("## A\n#### Sub\ntext");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections.get("A"), Some("#### Sub\ntext"));
    }

    #[test]
    fn test_heading_title_kept_verbatim() {
        let sections = parse_sections("## Core Work (`/core`)\nbody");

        assert_eq!(sections.get("Core Work (`/core`)"), Some("body"));
    }

    #[test]
    fn test_section_at_end_of_document_without_newline() {
        let sections = parse_sections("## Last\nfinal body");

        assert_eq!(sections.get("Last"), Some("final body"));
    }

    #[test]
    fn test_heading_with_no_body() {
        let sections = parse_sections("## Empty\n## Next\nbody");

        assert_eq!(sections.get("Empty"), Some(""));
        assert_eq!(sections.get("Next"), Some("body"));
    }
}
