//! Word Splitting
//!
//! Whitespace tokenization of heading text plus the small predicates the
//! capitalization rules are built from.

/// Word characters are letters, digits and underscore
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into whitespace-separated words
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Strip non-word characters from both ends of a word.
///
/// `"Desktop?"` becomes `"Desktop"`, `"(API)"` becomes `"API"`. Inner
/// punctuation is kept.
pub fn clean_form(word: &str) -> &str {
    word.trim_matches(|c: char| !is_word_char(c))
}

/// Words that look like versions, file names or identifiers.
///
/// Anything containing `.`, `-` or `_`, or made only of digits, is never
/// reported as an unexpected capital.
pub fn is_technical_token(word: &str) -> bool {
    word.contains(['.', '-', '_'])
        || (!word.is_empty() && word.bytes().all(|b| b.is_ascii_digit()))
}

/// Whether the first character is an uppercase letter
pub fn starts_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

/// Whether the text has anything that could be a word at all
pub fn has_word_content(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric)
}
