//! Validation Engine
//!
//! Sentence-case rule logic, kept apart from how hosts find headings and
//! report problems.

pub mod engine;

pub use engine::{validate, HeadingCaseValidator, Violation, ViolationKind, RULE_NAME};
