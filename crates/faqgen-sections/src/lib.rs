//! Heading-based section model and parser for faqgen.
//!
//! A source document is one markdown file whose `##`/`###` headings split it
//! into named sections. This crate provides:
//!
//! - [`Sections`]: an ordered mapping from heading title to raw body text
//! - [`parse_sections`]: the line scanner that builds it
//!
//! # Example
//!
//! ```
//! use faqgen_sections::parse_sections;
//!
//! let sections = parse_sections("## Philosophy\nKeep it simple.\n## Setup\nRun make.");
//! assert_eq!(sections.get("Philosophy"), Some("Keep it simple."));
//! assert_eq!(sections.len(), 2);
//! ```

mod parser;
mod sections;

pub use parser::parse_sections;
pub use sections::Sections;
