//! Heading Case Lint
//!
//! A sentence-case rule for document headings and front-matter titles.
//!
//! This library provides:
//! - Heading classification (front matter, all caps, numbered, plain)
//! - The sentence-case validator and its violations
//! - An allow-list of proper nouns and technical terms
//! - Configuration of the allow-list
//!
//! Finding headings in a document and reporting violations is left to the
//! host linter.

pub mod allow_list;
pub mod config;
pub mod heading;
pub mod validation;

// Re-exports for clean public API
pub use allow_list::AllowList;
pub use config::Config;
pub use heading::{HeadingKind, HeadingText};
pub use validation::{validate, HeadingCaseValidator, Violation, ViolationKind, RULE_NAME};
