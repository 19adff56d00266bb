//! Section-to-category projection.
//!
//! Projects parsed sections into the ordered render tree driving the page:
//! categories in configured order, each holding its resolved sections with
//! display titles and rendered HTML bodies.

use serde::Serialize;

use faqgen_config::SiteConfig;
use faqgen_renderer::render_markdown;
use faqgen_sections::Sections;

/// One render-ready section: resolved display title plus HTML body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionItem {
    /// Display title (mapped, or the raw heading title as fallback).
    pub title: String,
    /// Rendered HTML fragment for the section body.
    pub html: String,
}

/// One navigation category with its resolved sections in configured order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    /// Category display name.
    pub name: String,
    /// Resolved sections; empty when every configured title missed.
    pub items: Vec<SectionItem>,
}

/// Project parsed sections into the category render tree.
///
/// Categories and their section titles are walked in configured order.
/// Titles absent from `sections` are silently skipped — expected when the
/// document is edited independently of the configuration. A category whose
/// titles all miss is still emitted with an empty item list; whether to
/// render it is the caller's call, and dropping it from navigation would
/// break anchors.
#[must_use]
pub fn build_category_tree(sections: &Sections, config: &SiteConfig) -> Vec<CategoryGroup> {
    config
        .categories
        .iter()
        .map(|category| {
            let items = category
                .sections
                .iter()
                .filter_map(|title| {
                    sections.get(title).map(|body| SectionItem {
                        title: config.display_title(title).to_owned(),
                        html: render_markdown(body),
                    })
                })
                .collect();
            CategoryGroup {
                name: category.name.clone(),
                items,
            }
        })
        .collect()
}
