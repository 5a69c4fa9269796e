//! Configuration for the heading case rule.
//!
//! Handles:
//! - Whether the embedded default terms are used
//! - Extra allowed terms and removed default terms
//!
//! Hosts read the configuration text from wherever they keep it and hand
//! it over as TOML or JSON.

use crate::allow_list::AllowList;
use anyhow::{Context, Result};
use serde::Deserialize;

/// Allow-list settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Start from the embedded default terms
    pub use_default_terms: bool,
    /// Terms allowed in addition to the defaults
    pub allowed_terms: Vec<String>,
    /// Default terms that should be reported after all
    pub removed_terms: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_default_terms: true,
            allowed_terms: Vec::new(),
            removed_terms: Vec::new(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse heading case config as TOML")
    }

    /// Parse configuration from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse heading case config as JSON")
    }

    /// Build the allow-list described by this configuration
    pub fn allow_list(&self) -> AllowList {
        let mut list = if self.use_default_terms {
            AllowList::embedded()
        } else {
            AllowList::new()
        };

        list.extend(self.allowed_terms.iter().map(String::as_str));
        for term in &self.removed_terms {
            if !list.remove(term) {
                log::debug!("Removed term '{}' was not in the allow-list", term);
            }
        }

        list
    }
}
