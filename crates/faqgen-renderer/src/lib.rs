//! Slug generation and markdown-to-HTML rendering for faqgen.
//!
//! The renderer converts one section's raw markdown body into an HTML
//! fragment through a fixed sequence of string rewrite passes. The pass
//! order is part of the output contract: reordering changes the result for
//! inputs that mix emphasis markers with list or code syntax, and downstream
//! styling depends on the current shape.
//!
//! Known, deliberate limitations: no nested lists, ordered-list items are
//! not wrapped in `<ol>`, and only fenced-code content is entity-escaped.
//! The source document is authored by the site owners, not untrusted input.
//!
//! # Example
//!
//! ```
//! use faqgen_renderer::{render_markdown, slug};
//!
//! assert_eq!(slug("Hello, World!"), "hello-world");
//! assert_eq!(
//!     render_markdown("**bold** and *italic*"),
//!     "<p><strong>bold</strong> and <em>italic</em></p>"
//! );
//! ```

mod escape;
mod markdown;
mod slug;

pub use escape::escape_html;
pub use markdown::render_markdown;
pub use slug::slug;
