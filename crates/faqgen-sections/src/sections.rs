//! Ordered title-to-body mapping.

use indexmap::IndexMap;

/// Ordered mapping from heading title to raw markdown body.
///
/// Iteration follows first-occurrence order of the titles as they appeared
/// in the source document. Inserting an existing title replaces its body but
/// keeps its original position, so a document that repeats a heading keeps
/// the later body at the earlier slot.
///
/// Titles are kept verbatim (no trimming); the empty string is a valid title.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sections(IndexMap<String, String>);

impl Sections {
    /// Create an empty section mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a section body by its heading title.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&str> {
        self.0.get(title).map(String::as_str)
    }

    /// True if the document contained a section with this title.
    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.0.contains_key(title)
    }

    /// Insert a section, replacing the body of an existing title in place.
    ///
    /// Returns the previous body when the title was already present.
    pub fn insert(&mut self, title: impl Into<String>, body: impl Into<String>) -> Option<String> {
        self.0.insert(title.into(), body.into())
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no sections were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(title, body)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate titles in document order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<T: Into<String>, B: Into<String>> FromIterator<(T, B)> for Sections {
    fn from_iter<I: IntoIterator<Item = (T, B)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(t, b)| (t.into(), b.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut sections = Sections::new();
        sections.insert("Philosophy", "Keep it simple.");

        assert_eq!(sections.get("Philosophy"), Some("Keep it simple."));
        assert_eq!(sections.get("Missing"), None);
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_insert_existing_title_keeps_position() {
        let mut sections = Sections::new();
        sections.insert("A", "first");
        sections.insert("B", "middle");
        let previous = sections.insert("A", "second");

        assert_eq!(previous, Some("first".to_owned()));
        let titles: Vec<_> = sections.titles().collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(sections.get("A"), Some("second"));
    }

    #[test]
    fn test_empty_string_is_a_valid_title() {
        let mut sections = Sections::new();
        sections.insert("", "body");

        assert!(sections.contains(""));
        assert_eq!(sections.get(""), Some("body"));
    }

    #[test]
    fn test_iter_preserves_order() {
        let sections: Sections = [("B", "1"), ("A", "2"), ("C", "3")].into_iter().collect();

        let order: Vec<_> = sections.iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
    }
}
