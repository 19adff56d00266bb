//! Navigation link building.

use serde::Serialize;

use faqgen_renderer::slug;

use crate::category::CategoryGroup;

/// One top-level navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Link text: the category display name.
    pub label: String,
    /// Anchor href, `#` plus the category name's slug.
    pub href: String,
    /// Whether this link carries the active marker.
    pub active: bool,
}

/// Build one navigation link per category, first link active.
///
/// Hrefs are not deduplicated; two categories slugifying identically will
/// produce the same anchor (see the configuration validation warning).
#[must_use]
pub fn build_nav_links(content: &[CategoryGroup]) -> Vec<NavLink> {
    content
        .iter()
        .enumerate()
        .map(|(index, group)| NavLink {
            label: group.name.clone(),
            href: format!("#{}", slug(&group.name)),
            active: index == 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn group(name: &str) -> CategoryGroup {
        CategoryGroup {
            name: name.to_owned(),
            items: Vec::new(),
        }
    }

    #[test]
    fn test_one_link_per_category_first_active() {
        let links = build_nav_links(&[group("Overview"), group("Data Flow")]);

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].label, "Overview");
        assert_eq!(links[0].href, "#overview");
        assert!(links[0].active);
        assert_eq!(links[1].href, "#data-flow");
        assert!(!links[1].active);
    }

    #[test]
    fn test_empty_content_yields_no_links() {
        assert!(build_nav_links(&[]).is_empty());
    }

    #[test]
    fn test_href_uses_category_slug() {
        let links = build_nav_links(&[group("Working with Layers")]);
        assert_eq!(links[0].href, "#working-with-layers");
    }
}
