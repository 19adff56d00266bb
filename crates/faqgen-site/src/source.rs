//! Document source abstraction.
//!
//! The assembler reads the source document through the [`DocumentSource`]
//! trait so the pipeline can be exercised without touching a real
//! filesystem, and so hosts can back it with whatever fetch mechanism they
//! have (filesystem, HTTP, embedded assets).

use std::path::PathBuf;

#[cfg(any(test, feature = "mock"))]
use std::collections::HashMap;

/// Document source error.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Document does not exist.
    #[error("document not found: {0}")]
    NotFound(String),
    /// Underlying read failure.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Document path as requested.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Read access to source documents by relative path.
pub trait DocumentSource: Send + Sync {
    /// Read the full document text.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotFound`] if no document exists at `path`,
    /// [`SourceError::Io`] for other read failures.
    fn read(&self, path: &str) -> Result<String, SourceError>;

    /// Check whether a document exists at the given path.
    ///
    /// Returns `false` on errors.
    fn exists(&self, path: &str) -> bool;
}

/// Filesystem-backed document source rooted at a directory.
#[derive(Debug)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Create a source reading documents relative to `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentSource for FsSource {
    fn read(&self, path: &str) -> Result<String, SourceError> {
        let full = self.root.join(path);
        std::fs::read_to_string(&full).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                SourceError::NotFound(path.to_owned())
            } else {
                SourceError::Io {
                    path: path.to_owned(),
                    source,
                }
            }
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.root.join(path).is_file()
    }
}

/// In-memory document source for testing.
///
/// # Example
///
/// ```ignore
/// use faqgen_site::{DocumentSource, MockSource};
///
/// let source = MockSource::new().with_document("CLAUDE.md", "## A\nbody");
/// assert!(source.exists("CLAUDE.md"));
/// ```
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Default)]
pub struct MockSource {
    documents: HashMap<String, String>,
}

#[cfg(any(test, feature = "mock"))]
impl MockSource {
    /// Create an empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document with the given path and content.
    #[must_use]
    pub fn with_document(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.documents.insert(path.into(), content.into());
        self
    }
}

#[cfg(any(test, feature = "mock"))]
impl DocumentSource for MockSource {
    fn read(&self, path: &str) -> Result<String, SourceError> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(path.to_owned()))
    }

    fn exists(&self, path: &str) -> bool {
        self.documents.contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_source_read() {
        let source = MockSource::new().with_document("CLAUDE.md", "## A\nbody");

        assert_eq!(source.read("CLAUDE.md").unwrap(), "## A\nbody");
        assert!(source.exists("CLAUDE.md"));
    }

    #[test]
    fn test_mock_source_missing_is_not_found() {
        let source = MockSource::new();

        let err = source.read("missing.md").unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
        assert!(err.to_string().contains("missing.md"));
        assert!(!source.exists("missing.md"));
    }

    #[test]
    fn test_fs_source_reads_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("doc.md"), "## A\ntext").unwrap();

        let source = FsSource::new(dir.path());
        assert_eq!(source.read("doc.md").unwrap(), "## A\ntext");
        assert!(source.exists("doc.md"));
    }

    #[test]
    fn test_fs_source_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = FsSource::new(dir.path());

        let err = source.read("absent.md").unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
        assert!(!source.exists("absent.md"));
    }
}
