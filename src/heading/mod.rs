//! Heading Text
//!
//! Classification of the flattened text of one heading or title node.
//! Everything here is transient and built per validated node.

pub mod frontmatter;
pub mod words;

use regex::Regex;
use std::sync::LazyLock;

pub use frontmatter::{extract_title, is_frontmatter_block};

/// `"<digits>. <rest>"` on a single line
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^([0-9]+)\.\s+(.+)$") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid numbered heading regex: {err}"),
    }
});

/// Leading number of a numbered heading and the text after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberPrefix<'a> {
    pub number: &'a str,
    pub rest: &'a str,
}

/// Split `"3. Deploy the service"` into `3` and `Deploy the service`
pub fn split_number_prefix(text: &str) -> Option<NumberPrefix<'_>> {
    let captures = NUMBERED.captures(text)?;
    Some(NumberPrefix {
        number: captures.get(1)?.as_str(),
        rest: captures.get(2)?.as_str(),
    })
}

/// How a piece of heading text is checked. Exactly one applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadingKind<'a> {
    /// Nothing to check
    Empty,
    /// Front-matter block; only its title (if any) is checked
    FrontMatter { title: Option<String> },
    /// Entirely uppercase, treated as an acronym and exempt
    AllCaps,
    /// `"<n>. <rest>"`, checked from the first word after the number
    Numbered(NumberPrefix<'a>),
    /// Ordinary heading
    Plain(&'a str),
}

/// The text content of one heading or title node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingText<'a> {
    text: &'a str,
}

impl<'a> HeadingText<'a> {
    /// Wrap raw node text. Surrounding whitespace is not significant.
    pub fn new(raw: &'a str) -> Self {
        Self { text: raw.trim() }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Empty, whitespace only or punctuation only
    pub fn is_empty(&self) -> bool {
        !words::has_word_content(self.text)
    }

    pub fn is_all_caps(&self) -> bool {
        self.text == self.text.to_uppercase()
    }

    pub fn is_frontmatter_block(&self) -> bool {
        is_frontmatter_block(self.text)
    }

    pub fn number_prefix(&self) -> Option<NumberPrefix<'a>> {
        split_number_prefix(self.text)
    }

    /// Classify in fixed precedence: empty, front matter, all caps,
    /// numbered, plain.
    pub fn classify(&self) -> HeadingKind<'a> {
        if self.is_empty() {
            return HeadingKind::Empty;
        }

        if self.is_frontmatter_block() {
            return HeadingKind::FrontMatter {
                title: extract_title(self.text),
            };
        }

        if self.is_all_caps() {
            return HeadingKind::AllCaps;
        }

        match self.number_prefix() {
            Some(prefix) => HeadingKind::Numbered(prefix),
            None => HeadingKind::Plain(self.text),
        }
    }
}
