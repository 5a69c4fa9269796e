//! Validation Engine
//!
//! Sentence-case checks for heading and front-matter title text, separated
//! from document parsing and reporting concerns.

use crate::allow_list::AllowList;
use crate::config::Config;
use crate::heading::words::{has_word_content, is_technical_token, split_words, starts_uppercase};
use crate::heading::{split_number_prefix, HeadingKind, HeadingText};
use serde::Serialize;
use std::fmt;

/// Identifier hosts can use when attaching violations to a report
pub const RULE_NAME: &str = "heading-sentence-case";

/// Which capitalization rule a violation comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Text does not start with an uppercase letter
    FirstLetter,
    /// A later word is capitalized without being an allowed term
    InteriorCapital,
}

/// A single sentence-case violation, tied to the host node it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation<H = ()> {
    pub kind: ViolationKind,
    pub message: String,
    pub node: H,
}

impl<H> Violation<H> {
    /// Attach a different node handle
    pub fn with_node<N>(self, node: N) -> Violation<N> {
        Violation {
            kind: self.kind,
            message: self.message,
            node,
        }
    }
}

impl<H> fmt::Display for Violation<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// What is being checked. Selects the message wording only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subject {
    Heading,
    NumberedHeading,
    Title,
    NumberedTitle,
}

impl Subject {
    fn noun(self) -> &'static str {
        match self {
            Subject::Heading | Subject::NumberedHeading => "heading",
            Subject::Title | Subject::NumberedTitle => "title",
        }
    }

    fn first_letter_message(self, shown: &str) -> String {
        match self {
            Subject::Heading => format!(
                "Heading should start with an uppercase letter (Sentence case): \"{shown}\""
            ),
            Subject::NumberedHeading => format!(
                "Numbered heading should have first letter capitalized after the number: \"{shown}\""
            ),
            Subject::Title => format!(
                "Title should start with an uppercase letter (Sentence case): \"{shown}\""
            ),
            Subject::NumberedTitle => format!(
                "Title should have first letter capitalized after the number: \"{shown}\""
            ),
        }
    }

    fn interior_message(self, word: &str, shown: &str) -> String {
        format!(
            "Only the first word of a sentence\u{2011}case {} may be capitalized \
             (unless it's a proper noun or technical term): \"{word}\" in \"{shown}\"",
            self.noun()
        )
    }
}

/// Checks heading and title text against sentence case.
///
/// Holds the allow-list for its whole lifetime; build one and reuse it for
/// every node of every document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingCaseValidator {
    allow_list: AllowList,
}

impl Default for HeadingCaseValidator {
    fn default() -> Self {
        Self::with_default_allow_list()
    }
}

impl HeadingCaseValidator {
    pub fn new(allow_list: AllowList) -> Self {
        Self { allow_list }
    }

    /// Validator using the embedded default terms
    pub fn with_default_allow_list() -> Self {
        Self::new(AllowList::embedded())
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.allow_list())
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    /// Validate the text of one heading or front-matter block
    pub fn validate(&self, text: &str) -> Vec<Violation> {
        validate(text, &self.allow_list)
    }

    /// Validate one node, tagging every violation with its handle
    pub fn check_node<H: Clone>(&self, text: &str, node: H) -> Vec<Violation<H>> {
        self.validate(text)
            .into_iter()
            .map(|v| v.with_node(node.clone()))
            .collect()
    }

    /// Validate a sequence of nodes, in order
    pub fn check_nodes<'t, H, I>(&self, nodes: I) -> Vec<Violation<H>>
    where
        H: Clone,
        I: IntoIterator<Item = (&'t str, H)>,
    {
        nodes
            .into_iter()
            .flat_map(|(text, node)| self.check_node(text, node))
            .collect()
    }
}

/// Validate text against an allow-list without keeping a validator around
pub fn validate(text: &str, allow_list: &AllowList) -> Vec<Violation> {
    let heading = HeadingText::new(text);
    let kind = heading.classify();
    log::trace!("Classified {:?} as {:?}", heading.as_str(), kind);

    let mut violations = Vec::new();
    match kind {
        HeadingKind::Empty | HeadingKind::AllCaps | HeadingKind::FrontMatter { title: None } => {}
        HeadingKind::FrontMatter { title: Some(title) } => {
            let shown = format!("title: {title}");
            match split_number_prefix(&title) {
                Some(prefix) => check_words(
                    prefix.rest,
                    &shown,
                    Subject::NumberedTitle,
                    allow_list,
                    &mut violations,
                ),
                None => check_words(&title, &shown, Subject::Title, allow_list, &mut violations),
            }
        }
        HeadingKind::Numbered(prefix) => check_words(
            prefix.rest,
            heading.as_str(),
            Subject::NumberedHeading,
            allow_list,
            &mut violations,
        ),
        HeadingKind::Plain(text) => {
            check_words(text, text, Subject::Heading, allow_list, &mut violations);
        }
    }

    if !violations.is_empty() {
        log::debug!("{} violation(s) in {:?}", violations.len(), heading.as_str());
    }
    violations
}

/// First-letter rule followed by the interior-word rule.
///
/// `candidate` is the text the rules apply to (after any number prefix),
/// `shown` is what the messages quote back to the author.
fn check_words(
    candidate: &str,
    shown: &str,
    subject: Subject,
    allow_list: &AllowList,
    violations: &mut Vec<Violation>,
) {
    if !has_word_content(candidate) {
        return;
    }

    if !starts_uppercase(candidate) {
        violations.push(Violation {
            kind: ViolationKind::FirstLetter,
            message: subject.first_letter_message(shown),
            node: (),
        });
    }

    for word in split_words(candidate).into_iter().skip(1) {
        if allow_list.contains(word) || is_technical_token(word) {
            continue;
        }
        // "Desktop?" and "(API)" match their bare forms
        if allow_list.allows(word) {
            continue;
        }
        if starts_uppercase(word) {
            violations.push(Violation {
                kind: ViolationKind::InteriorCapital,
                message: subject.interior_message(word, shown),
                node: (),
            });
        }
    }
}
