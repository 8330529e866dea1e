//! Predicates and validating operations over text.
//!
//! Everything that can fail here reports one of the [`Error`] kinds and
//! never coerces silently; the permissive counterparts live in
//! [`crate::transform`] and [`crate::num`].

use crate::{
  Error, Result, Tendril,
  chars::{char_is_whitespace, char_is_word},
};

/// True when nothing remains after trimming whitespace from both ends,
/// i.e. every codepoint is whitespace or the text is empty.
pub fn is_blank(mut text: impl Iterator<Item = char>) -> bool {
  text.all(char_is_whitespace)
}

/// Reads identically forwards and backwards once narrowed to letter/digit
/// codepoints and case-folded. Punctuation and case never affect it.
pub fn is_palindrome(text: impl Iterator<Item = char>) -> bool {
  let folded: Vec<char> = text
    .filter(|&c| char_is_word(c))
    .flat_map(char::to_lowercase)
    .collect();
  folded.iter().eq(folded.iter().rev())
}

/// True if any codepoint of `text` occurs in `charset`. Empty text or an
/// empty charset is always false.
pub fn contains_any(mut text: impl Iterator<Item = char>, charset: &str) -> bool {
  text.any(|c| charset.contains(c))
}

/// Checks that the codepoint count lies within `[min, max]`.
///
/// `min < 0`, `max < 0`, or `min > max` is an [`Error::InvalidRange`];
/// otherwise a count below `min` is [`Error::TooShort`] and a count above
/// `max` is [`Error::TooLong`].
pub fn validate_length(text: impl Iterator<Item = char>, min: isize, max: isize) -> Result<()> {
  if min < 0 || max < 0 || min > max {
    return Err(Error::InvalidRange { low: min, high: max });
  }
  let len = text.count();
  if len < min as usize {
    return Err(Error::TooShort {
      len,
      min: min as usize,
    });
  }
  if len > max as usize {
    return Err(Error::TooLong {
      len,
      max: max as usize,
    });
  }
  Ok(())
}

/// Byte offset of the first occurrence of `needle` in `text`.
///
/// An empty needle matches at offset 0; an absent needle is
/// [`Error::NotFound`].
pub fn try_find(text: &str, needle: &str) -> Result<usize> {
  text.find(needle).ok_or(Error::NotFound)
}

/// Splits `text` on every occurrence of `sep`.
///
/// An empty separator against non-empty text has no well-defined split
/// point and is [`Error::InvalidArgument`]. Splitting an empty string
/// yields no elements for an empty separator and a single empty element
/// for a non-empty one.
pub fn try_split(text: &str, sep: &str) -> Result<Vec<Tendril>> {
  if sep.is_empty() {
    if text.is_empty() {
      return Ok(Vec::new());
    }
    return Err(Error::InvalidArgument("empty separator"));
  }
  Ok(text.split(sep).map(Tendril::from).collect())
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_is_blank() {
    assert!(is_blank("".chars()));
    assert!(is_blank("   \t\n".chars()));
    assert!(is_blank("\u{00A0}\u{2003}".chars()));
    assert!(!is_blank(" a ".chars()));
    assert!(!is_blank("x".chars()));
  }

  #[test]
  fn test_is_palindrome() {
    assert!(is_palindrome("racecar".chars()));
    assert!(is_palindrome("RaceCar".chars()));
    assert!(is_palindrome("A man, a plan, a canal: Panama".chars()));
    assert!(is_palindrome("No 'x' in Nixon".chars()));
    assert!(is_palindrome("".chars()));
    assert!(is_palindrome("!!".chars()));
    assert!(is_palindrome("étÉ".chars()));
    assert!(!is_palindrome("hello".chars()));
    assert!(!is_palindrome("ab".chars()));
  }

  #[test]
  fn test_contains_any() {
    assert!(contains_any("hello".chars(), "xl"));
    assert!(contains_any("héllo".chars(), "é"));
    assert!(!contains_any("hello".chars(), "xyz"));
    assert!(!contains_any("".chars(), "abc"));
    assert!(!contains_any("abc".chars(), ""));
  }

  #[test]
  fn test_validate_length() {
    assert_eq!(validate_length("hello".chars(), 3, 5), Ok(()));
    assert_eq!(
      validate_length("hi".chars(), 3, 5),
      Err(Error::TooShort { len: 2, min: 3 })
    );
    assert_eq!(
      validate_length("hello world".chars(), 3, 5),
      Err(Error::TooLong { len: 11, max: 5 })
    );
    // Codepoint count, not byte count.
    assert_eq!(validate_length("héllo".chars(), 5, 5), Ok(()));
    // Ill-formed bounds are a range error, not a silent swap.
    assert_eq!(
      validate_length("hello".chars(), -1, 5),
      Err(Error::InvalidRange { low: -1, high: 5 })
    );
    assert_eq!(
      validate_length("hello".chars(), 3, -2),
      Err(Error::InvalidRange { low: 3, high: -2 })
    );
    assert_eq!(
      validate_length("hello".chars(), 5, 3),
      Err(Error::InvalidRange { low: 5, high: 3 })
    );
  }

  #[test]
  fn test_try_find() {
    assert_eq!(try_find("hello world", "world"), Ok(6));
    assert_eq!(try_find("hello", "hello"), Ok(0));
    // Byte offset: 'é' is two bytes.
    assert_eq!(try_find("héllo", "llo"), Ok(3));
    assert_eq!(try_find("hello", ""), Ok(0));
    assert_eq!(try_find("", ""), Ok(0));
    assert_eq!(try_find("hello", "z"), Err(Error::NotFound));
  }

  #[test]
  fn test_try_split() {
    assert_eq!(
      try_split("a,b,c", ",").unwrap(),
      vec![Tendril::from("a"), Tendril::from("b"), Tendril::from("c")]
    );
    assert_eq!(
      try_split("a::b", "::").unwrap(),
      vec![Tendril::from("a"), Tendril::from("b")]
    );
    assert_eq!(
      try_split(",a,", ",").unwrap(),
      vec![Tendril::from(""), Tendril::from("a"), Tendril::from("")]
    );
    assert_eq!(try_split("", ""), Ok(Vec::new()));
    assert_eq!(try_split("", ","), Ok(vec![Tendril::from("")]));
    assert_eq!(
      try_split("x", ""),
      Err(Error::InvalidArgument("empty separator"))
    );
  }
}
