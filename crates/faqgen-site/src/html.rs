//! In-memory HTML render target.
//!
//! Produces the markup the site's stylesheet is written against: BEM-style
//! `docs-nav__link` anchors for navigation and `faq-section` /
//! `docs-section` wrappers for content. Used directly by tests and by hosts
//! that consume the page as strings (static emission, server-side render).

use std::fmt::Write;

use faqgen_renderer::{escape_html, slug};

use crate::category::CategoryGroup;
use crate::nav::NavLink;
use crate::target::RenderTarget;

/// Render target that accumulates navigation and content markup in memory.
///
/// Section and display titles pass through unescaped, like every other
/// piece of trusted document text; only error messages are escaped since
/// they can carry arbitrary I/O detail.
#[derive(Debug, Default)]
pub struct HtmlTarget {
    nav: Vec<NavLink>,
    nav_html: String,
    content_html: String,
    mounted_ids: Vec<String>,
    scrolled_to: Option<String>,
}

impl HtmlTarget {
    /// Create an empty target.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup of the navigation region.
    #[must_use]
    pub fn nav_html(&self) -> &str {
        &self.nav_html
    }

    /// Markup of the content region.
    #[must_use]
    pub fn content_html(&self) -> &str {
        &self.content_html
    }

    /// Id of the element the page was last scrolled to, if any.
    #[must_use]
    pub fn scrolled_to(&self) -> Option<&str> {
        self.scrolled_to.as_deref()
    }

    fn render_nav(&mut self) {
        let mut html = String::new();
        for link in &self.nav {
            let class = if link.active {
                "docs-nav__link docs-nav__link--active"
            } else {
                "docs-nav__link"
            };
            write!(html, r#"<a href="{}" class="{class}">{}</a>"#, link.href, link.label).unwrap();
        }
        self.nav_html = html;
    }
}

fn render_content(content: &[CategoryGroup]) -> (String, Vec<String>) {
    let mut html = String::new();
    let mut ids = Vec::with_capacity(content.len());

    for group in content {
        let id = slug(&group.name);
        write!(html, r#"<section class="faq-section" id="{id}">"#).unwrap();
        write!(
            html,
            r##"<h2 class="faq-section__title">{}<a href="#" class="back-to-top">Back to top</a></h2>"##,
            group.name
        )
        .unwrap();

        for item in &group.items {
            write!(
                html,
                r#"<div class="docs-section"><h3 class="docs-section__title">{}</h3><div class="docs-section__content">{}</div></div>"#,
                item.title, item.html
            )
            .unwrap();
        }

        html.push_str("</section>");
        ids.push(id);
    }

    (html, ids)
}

impl RenderTarget for HtmlTarget {
    fn mount(&mut self, nav: &[NavLink], content: &[CategoryGroup]) {
        self.nav = nav.to_vec();
        self.render_nav();
        let (html, ids) = render_content(content);
        self.content_html = html;
        self.mounted_ids = ids;
        self.scrolled_to = None;
    }

    fn set_active(&mut self, href: &str) {
        for link in &mut self.nav {
            link.active = link.href == href;
        }
        self.render_nav();
    }

    fn scroll_to(&mut self, fragment: &str) -> bool {
        if self.mounted_ids.iter().any(|id| id == fragment) {
            self.scrolled_to = Some(fragment.to_owned());
            true
        } else {
            false
        }
    }

    fn show_error(&mut self, message: &str) {
        self.mounted_ids.clear();
        self.scrolled_to = None;
        self.content_html = format!(
            concat!(
                r#"<div class="faq-item">"#,
                r#"<div class="faq-item__question"><span>Error loading documentation</span></div>"#,
                r#"<div class="faq-item__answer"><p>{}</p></div>"#,
                "</div>"
            ),
            escape_html(message)
        );
    }
}
