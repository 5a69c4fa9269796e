//! Front-matter Titles
//!
//! Some hosts hand the raw front-matter block to the rule as if it were a
//! heading. Only its `title:` field is subject to sentence case.

use regex::Regex;
use std::sync::LazyLock;

/// Keys that mark text as a front-matter block rather than a heading
const FRONTMATTER_KEYS: [&str; 3] = ["title:", "description:", "keywords:"];

/// Quote characters stripped from either end of a title value
const QUOTES: [char; 6] = ['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

/// First `title:` key (any case) and the rest of its line
static TITLE_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"(?i)title:\s*(.+?)(?:\n|$)") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid title field regex: {err}"),
    }
});

/// Whether the text looks like a front-matter block
pub fn is_frontmatter_block(text: &str) -> bool {
    FRONTMATTER_KEYS.iter().any(|key| text.contains(key))
}

/// Extract the value of the first `title:` field.
///
/// Surrounding whitespace is trimmed, one quote character is removed from
/// each end if present, and whitespace inside the quotes is trimmed too.
/// Returns `None` when there is no title field.
pub fn extract_title(text: &str) -> Option<String> {
    let captures = TITLE_FIELD.captures(text)?;
    let value = captures.get(1)?.as_str().trim();
    Some(strip_quotes(value).trim().to_string())
}

fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix(QUOTES).unwrap_or(value);
    value.strip_suffix(QUOTES).unwrap_or(value)
}
