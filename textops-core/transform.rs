//! Pure codepoint-sequence transforms.

use crate::{Error, Result, Tendril, chars::char_is_whitespace};

/// Returns the codepoints of `text` in opposite order.
///
/// Reversing twice is the identity.
pub fn reverse(text: impl Iterator<Item = char>) -> Tendril {
  let chars: Vec<char> = text.collect();
  let mut res = Tendril::new();
  res.extend(chars.into_iter().rev());
  res
}

fn take_chars(text: impl Iterator<Item = char>, n: usize, buf: &mut Tendril) {
  buf.extend(text.take(n));
}

/// Returns the first `n` codepoints.
///
/// A negative `n`, like an `n` past the end, yields the input unchanged;
/// this form never fails.
pub fn truncate(text: impl Iterator<Item = char>, n: isize) -> Tendril {
  let mut res = Tendril::new();
  if n < 0 {
    res.extend(text);
  } else {
    take_chars(text, n as usize, &mut res);
  }
  res
}

/// Validating form of [`truncate`]: a negative `n` is an
/// [`Error::InvalidArgument`] instead of an identity.
pub fn try_truncate(text: impl Iterator<Item = char>, n: isize) -> Result<Tendril> {
  if n < 0 {
    return Err(Error::InvalidArgument("negative truncation length"));
  }
  let mut res = Tendril::new();
  take_chars(text, n as usize, &mut res);
  Ok(res)
}

/// Exchanges the codepoints at positions `i` and `j` (0-indexed over
/// codepoints, not bytes).
///
/// An out-of-range index, like `i == j`, leaves the text unchanged; bad
/// input is a no-op here, never an error.
pub fn swap(text: impl Iterator<Item = char>, i: usize, j: usize) -> Tendril {
  let mut chars: Vec<char> = text.collect();
  if i != j && i < chars.len() && j < chars.len() {
    chars.swap(i, j);
  }
  let mut res = Tendril::new();
  res.extend(chars);
  res
}

/// Removes every whitespace codepoint, anywhere in the text.
pub fn trim_all(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  res.extend(text.filter(|&c| !char_is_whitespace(c)));
  res
}

/// Collapses each maximal whitespace run to a single ASCII space and strips
/// leading and trailing space.
pub fn normalize_spaces(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  // State: (has_content, pending_space)
  text.fold((false, false), |(has_content, pending_space), c| {
    if char_is_whitespace(c) {
      return (has_content, has_content);
    }
    if pending_space {
      res.push(' ');
    }
    res.push(c);
    (true, false)
  });
  res
}

/// Concatenates `n` copies of `text`; `n <= 0` yields an empty string.
pub fn repeat(text: impl Iterator<Item = char>, n: isize) -> Tendril {
  if n <= 0 {
    return Tendril::new();
  }
  let unit: String = text.collect();
  // One pre-sized allocation for the whole result.
  unit.repeat(n as usize).into()
}
