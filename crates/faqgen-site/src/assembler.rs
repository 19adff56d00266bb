//! Page assembly orchestration.
//!
//! One load-and-render pass: read the document, parse it into sections,
//! project them through the category configuration, mount navigation and
//! content into the render target, then honor a deep-link fragment. All
//! fallible work runs inside a single guarded region; its one catch point
//! logs the failure and swaps the content region for an error panel, so a
//! failed pass never leaves the page half-rendered.

use faqgen_config::SiteConfig;
use faqgen_sections::parse_sections;

use crate::category::build_category_tree;
use crate::nav::build_nav_links;
use crate::source::{DocumentSource, SourceError};
use crate::target::RenderTarget;

/// Page assembly error.
#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    /// The source document could not be loaded.
    #[error("failed to load documentation: {0}")]
    Load(#[from] SourceError),
}

/// Run one full load-and-render pass against the target.
///
/// `fragment` is the URL fragment identifier, if the page was opened with
/// one; when it names a mounted category anchor, the page scrolls there
/// and the matching navigation link becomes active. A failed load is
/// terminal for the pass — the caller retries by running a fresh pass.
///
/// Never panics and never propagates an error: failures surface as the
/// target's error panel, carrying the underlying message.
pub fn assemble(
    source: &dyn DocumentSource,
    config: &SiteConfig,
    target: &mut dyn RenderTarget,
    fragment: Option<&str>,
) {
    if let Err(error) = try_assemble(source, config, target, fragment) {
        tracing::error!(document = %config.document, error = %error, "documentation render failed");
        target.show_error(&error.to_string());
    }
}

fn try_assemble(
    source: &dyn DocumentSource,
    config: &SiteConfig,
    target: &mut dyn RenderTarget,
    fragment: Option<&str>,
) -> Result<(), AssembleError> {
    let markdown = source.read(&config.document)?;
    let sections = parse_sections(&markdown);
    let content = build_category_tree(&sections, config);
    let nav = build_nav_links(&content);

    target.mount(&nav, &content);

    if let Some(fragment) = fragment
        && target.scroll_to(fragment)
    {
        target.set_active(&format!("#{fragment}"));
    }

    tracing::debug!(
        document = %config.document,
        sections = sections.len(),
        categories = content.len(),
        "documentation rendered"
    );
    Ok(())
}
