//! Site configuration for faqgen.
//!
//! Parses a TOML configuration describing which document to load, how raw
//! heading titles map to human-facing display titles, and how sections are
//! grouped into navigation categories:
//!
//! ```toml
//! document = "CLAUDE.md"
//!
//! [titles]
//! "Philosophy" = "What is the philosophy behind the project?"
//!
//! [[categories]]
//! name = "Overview"
//! sections = ["Philosophy", "Architecture"]
//! ```
//!
//! The configuration is plain data handed to the categorizer and assembler;
//! nothing here is process-wide state, so the whole pipeline stays a pure
//! function of (document, config).

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use faqgen_renderer::slug;

/// Default source document, relative to the document source root.
const DEFAULT_DOCUMENT: &str = "CLAUDE.md";

/// Site configuration: source document, title mapping, category grouping.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Path of the markdown document to load, relative to the source root.
    pub document: String,
    /// Raw heading title to human-facing display title.
    pub titles: HashMap<String, String>,
    /// Ordered category list driving top-level navigation.
    pub categories: Vec<CategoryConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            document: DEFAULT_DOCUMENT.to_owned(),
            titles: HashMap::new(),
            categories: Vec::new(),
        }
    }
}

/// One navigation category: a display name and the raw heading titles of
/// the sections it groups, in render order.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CategoryConfig {
    /// Category display name; its slug becomes the anchor id.
    pub name: String,
    /// Raw heading titles belonging to this category, in order.
    #[serde(default)]
    pub sections: Vec<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(std::path::PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl SiteConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file doesn't exist, and
    /// parse or validation errors otherwise.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML and
    /// [`ConfigError::Validation`] on invalid values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Category names and the document path must be non-empty. Two category
    /// names that slugify identically are legal (anchors are not
    /// deduplicated) but almost certainly an authoring mistake, so they are
    /// logged as a warning rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if any check fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.document, "document")?;

        let mut seen_slugs: HashMap<String, &str> = HashMap::new();
        for category in &self.categories {
            require_non_empty(&category.name, "categories.name")?;

            let anchor = slug(&category.name);
            if let Some(first) = seen_slugs.get(anchor.as_str()) {
                tracing::warn!(
                    anchor = %anchor,
                    first = %first,
                    second = %category.name,
                    "category names share an anchor slug"
                );
            } else {
                seen_slugs.insert(anchor, &category.name);
            }
        }

        Ok(())
    }

    /// Resolve the display title for a raw heading title.
    ///
    /// Falls back to the raw title when no mapping entry exists.
    #[must_use]
    pub fn display_title<'a>(&'a self, raw: &'a str) -> &'a str {
        self.titles.get(raw).map_or(raw, String::as_str)
    }
}
