use crate::{
  Tendril,
  chars::{char_is_whitespace, char_is_word},
};

pub fn capitalize(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  capitalize_with(text, &mut res);
  res
}

/// Uppercases the first codepoint and copies the rest verbatim.
///
/// Codepoints with no uppercase mapping (digits, CJK, symbols) pass through
/// unchanged. The mapping is the full one, so a single codepoint may expand
/// (e.g. 'ß' becomes "SS").
pub fn capitalize_with(mut text: impl Iterator<Item = char>, buf: &mut Tendril) {
  if let Some(first) = text.next() {
    buf.extend(first.to_uppercase());
  }
  text.for_each(|c| buf.push(c));
}

pub fn to_title_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_title_case_with(text, &mut res);
  res
}

/// The first codepoint and every codepoint that follows whitespace is
/// uppercased, every other non-whitespace codepoint is lowercased, and
/// whitespace passes through verbatim (leading whitespace included).
pub fn to_title_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  text.fold(true, |word_start, c| {
    if char_is_whitespace(c) {
      buf.push(c);
      return true;
    }
    if word_start {
      buf.extend(c.to_uppercase());
    } else {
      buf.extend(c.to_lowercase());
    }
    false
  });
}

pub fn to_upper_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_upper_case_with(text, &mut res);
  res
}

pub fn to_upper_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  text.for_each(|c| buf.extend(c.to_uppercase()));
}

pub fn to_lower_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_lower_case_with(text, &mut res);
  res
}

pub fn to_lower_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  text.for_each(|c| buf.extend(c.to_lowercase()));
}

pub fn slugify(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  slugify_with(text, &mut res);
  res
}

/// Lowercased, hyphen-delimited rendering: letter/digit codepoints pass
/// through, every maximal run of anything else collapses to a single `-`,
/// and the result never starts or ends with a hyphen.
pub fn slugify_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  // State: (has_content, pending_sep)
  text.fold((false, false), |(has_content, pending_sep), c| {
    if !char_is_word(c) {
      // A separator only materializes once real content exists and more
      // content follows, which trims leading and trailing runs for free.
      return (has_content, has_content);
    }
    if pending_sep {
      buf.push('-');
    }
    buf.extend(c.to_lowercase());
    (true, false)
  });
}
