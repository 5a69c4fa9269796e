//! Allow-list Registry
//!
//! Immutable set of terms that may keep their capitals inside a
//! sentence-case heading.

use super::schema::AllowListFile;
use crate::heading::words::clean_form;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Embedded default terms, parsed once
static EMBEDDED: LazyLock<AllowList> = LazyLock::new(AllowList::parse_embedded);

/// Case-sensitive set of allowed capitalized terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    terms: HashSet<String>,
}

impl AllowList {
    /// Empty allow-list: every interior capital is a violation
    pub fn new() -> Self {
        Self {
            terms: HashSet::new(),
        }
    }

    /// Allow-list built from the embedded default terms
    pub fn embedded() -> Self {
        EMBEDDED.clone()
    }

    fn parse_embedded() -> Self {
        let embedded_toml = include_str!("../../resources/allow-list.toml");

        match toml::from_str::<AllowListFile>(embedded_toml) {
            Ok(file) => Self::from(file),
            Err(e) => {
                log::warn!(
                    "Failed to parse embedded allow-list: {}. Using minimal fallback.",
                    e
                );
                Self::minimal()
            }
        }
    }

    /// Minimal fallback in case the embedded TOML cannot be parsed
    fn minimal() -> Self {
        ["API", "APIs", "CLI", "GitHub", "I", "ID", "SDK", "URL"]
            .into_iter()
            .collect()
    }

    /// Exact, case-sensitive membership
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Whether a word from a heading is exempt from the interior-capital rule.
    ///
    /// Matches either the word as written or the word with non-word
    /// characters stripped from both ends (`"Desktop?"` matches `"Desktop"`).
    pub fn allows(&self, word: &str) -> bool {
        self.contains(word) || self.contains(clean_form(word))
    }

    pub fn insert(&mut self, term: impl Into<String>) -> bool {
        self.terms.insert(term.into())
    }

    pub fn remove(&mut self, term: &str) -> bool {
        self.terms.remove(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over the terms in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

impl From<AllowListFile> for AllowList {
    fn from(file: AllowListFile) -> Self {
        let list: Self = file.terms.all().collect();
        log::debug!(
            "Loaded allow-list '{}' with {} terms",
            file.allow_list.name,
            list.len()
        );
        list
    }
}

impl<S: Into<String>> FromIterator<S> for AllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for AllowList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.terms.extend(iter.into_iter().map(Into::into));
    }
}
