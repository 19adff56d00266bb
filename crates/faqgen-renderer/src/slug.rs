//! URL-fragment slug derivation.

use std::sync::LazyLock;

use regex::Regex;

static NON_ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new("[^a-z0-9]+").unwrap());

/// Derive a URL-fragment-safe slug from a display string.
///
/// Lowercases the input, collapses every maximal run of characters outside
/// `[a-z0-9]` into a single `-`, then strips a leading or trailing `-`.
/// Pure and total; no length cap and no uniqueness guarantee — callers that
/// feed two strings which slugify identically must disambiguate themselves.
///
/// Idempotent: `slug(slug(x)) == slug(x)`.
#[must_use]
pub fn slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let collapsed = NON_ALPHANUMERIC.replace_all(&lowered, "-");
    collapsed.trim_matches('-').to_owned()
}
