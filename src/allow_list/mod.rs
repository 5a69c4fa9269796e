//! Allow-list of capitalized terms
//!
//! Proper nouns and technical terms that may appear capitalized after the
//! first word of a heading.

pub mod registry;
pub mod schema;

pub use registry::AllowList;
pub use schema::{AllowListFile, AllowListMeta, TermCategories};
