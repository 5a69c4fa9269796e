//! Allow-list Schema Types
//!
//! Serde types for the allow-list TOML document.

use serde::Deserialize;

/// Root allow-list file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AllowListFile {
    pub allow_list: AllowListMeta,
    #[serde(default)]
    pub terms: TermCategories,
}

/// Allow-list metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AllowListMeta {
    pub name: String,
    pub description: Option<String>,
}

/// Terms grouped by why they may keep their capitals.
///
/// Categories only exist to keep the resource readable; membership
/// checks do not care which category a term came from.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TermCategories {
    pub acronyms: Vec<String>,
    pub products: Vec<String>,
    pub languages: Vec<String>,
    pub operating_systems: Vec<String>,
    pub ui_actions: Vec<String>,
}

impl TermCategories {
    /// Iterate over every term in every category
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.acronyms
            .iter()
            .chain(&self.products)
            .chain(&self.languages)
            .chain(&self.operating_systems)
            .chain(&self.ui_actions)
            .map(String::as_str)
    }
}
