//! Markdown-to-HTML fragment renderer.
//!
//! A sequence of whole-text rewrite passes, applied in a fixed order:
//! fenced code, inline code, bold, italic, unordered list items, list-run
//! wrapping, ordered list items, paragraph wrapping, empty-paragraph
//! cleanup. Later passes see the output of earlier ones, so the order is
//! load-bearing and must not change.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::escape::escape_html;

static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(\w*)\n([\s\S]*?)```").unwrap());
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^- (.+)$").unwrap());
static LIST_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:<li>.*</li>\n?)+").unwrap());
static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\d+\. (.+)$").unwrap());
static EMPTY_PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<p>\s*</p>").unwrap());

/// Line prefixes the paragraph pass treats as already-rendered block markup.
const BLOCK_PREFIXES: [&str; 5] = ["<ul", "<ol", "<li", "<pre", "<code"];

/// Render one section's raw markdown body into an HTML fragment.
///
/// Only fenced-code content is entity-escaped; all other text passes
/// through verbatim (the source document is trusted). Unterminated fences
/// do not match and are left as literal text. Ordered-list items become
/// `<li>` elements without an `<ol>` wrapper. The output never contains
/// unbalanced block markup of its own making, so fragments can be embedded
/// back-to-back.
#[must_use]
pub fn render_markdown(body: &str) -> String {
    let html = FENCED_CODE.replace_all(body, |caps: &Captures<'_>| {
        let lang = &caps[1];
        let code = escape_html(caps[2].trim());
        format!(r#"<pre><code class="language-{lang}">{code}</code></pre>"#)
    });
    let html = INLINE_CODE.replace_all(&html, "<code>$1</code>");
    let html = BOLD.replace_all(&html, "<strong>$1</strong>");
    let html = ITALIC.replace_all(&html, "<em>$1</em>");
    let html = LIST_ITEM.replace_all(&html, "<li>$1</li>");
    let html = LIST_RUN.replace_all(&html, "<ul>$0</ul>");
    let html = ORDERED_ITEM.replace_all(&html, "<li>$1</li>");
    let html = wrap_paragraphs(&html);
    EMPTY_PARAGRAPH.replace_all(&html, "").into_owned()
}

/// Wrap remaining non-empty, non-block lines in `<p>` elements.
fn wrap_paragraphs(html: &str) -> String {
    html.split('\n')
        .map(|line| {
            if line.is_empty() || is_block_line(line) {
                Cow::Borrowed(line)
            } else {
                Cow::Owned(format!("<p>{line}</p>"))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_block_line(line: &str) -> bool {
    BLOCK_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}
