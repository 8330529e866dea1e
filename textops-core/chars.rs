//! Codepoint classification shared by the transforms and predicates.

/// Whitespace in the Unicode `White_Space` sense, line endings included.
#[inline]
pub fn char_is_whitespace(ch: char) -> bool {
  ch.is_whitespace()
}

/// Letters and digits. Underscores and punctuation count as separators as
/// far as slugs and palindromes are concerned.
#[inline]
pub fn char_is_word(ch: char) -> bool {
  ch.is_alphanumeric()
}
