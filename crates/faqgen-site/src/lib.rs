//! Categorization, navigation and page assembly for faqgen.
//!
//! This crate turns a parsed document plus a [`SiteConfig`](faqgen_config::SiteConfig)
//! into a mounted FAQ-style page:
//!
//! - [`DocumentSource`]: read access to the source document
//!   ([`FsSource`] for the filesystem, `MockSource` for tests)
//! - [`build_category_tree`]: the section-to-category projection
//! - [`build_nav_links`]: one anchor link per category
//! - [`RenderTarget`]: host surface abstraction, with [`HtmlTarget`] as the
//!   in-memory string-producing implementation
//! - [`assemble`]: the single load-and-render pass with its error boundary
//!
//! # Example
//!
//! ```
//! use faqgen_config::SiteConfig;
//! use faqgen_site::{FsSource, HtmlTarget, assemble};
//!
//! let config = SiteConfig::default();
//! let source = FsSource::new("docs");
//! let mut target = HtmlTarget::new();
//! assemble(&source, &config, &mut target, None);
//! ```

mod assembler;
mod category;
mod html;
mod nav;
mod source;
mod target;

pub use assembler::{AssembleError, assemble};
pub use category::{CategoryGroup, SectionItem, build_category_tree};
pub use html::HtmlTarget;
pub use nav::{NavLink, build_nav_links};
#[cfg(any(test, feature = "mock"))]
pub use source::MockSource;
pub use source::{DocumentSource, FsSource, SourceError};
pub use target::RenderTarget;
