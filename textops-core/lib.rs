//! Stateless, Unicode-correct utilities over text, generic sequences, and
//! bounded integers.
//!
//! Every operation decodes text into codepoints before indexing or
//! measuring, so multi-byte characters are never split. Transforms return
//! freshly allocated [`Tendril`]s; inputs are never mutated and there is no
//! global state, which makes every function safe to call from any thread.

use smartstring::{LazyCompact, SmartString};
use thiserror::Error;

pub mod case;
pub mod chars;
pub mod collection;
pub mod num;
pub mod transform;
pub mod validate;

pub type Tendril = SmartString<LazyCompact>;

/// Failure reasons reported by the validating operations.
///
/// The permissive tier (`truncate`, `swap`, `clamp`, `repeat`) never
/// produces these; it defines a no-op or saturation result for every
/// invalid input instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// A parameter value is nonsensical for the operation on its own.
  #[error("invalid argument: {0}")]
  InvalidArgument(&'static str),
  /// Two related bounds are individually valid but jointly contradictory.
  #[error("invalid range: [{low}, {high}] is not a well-formed bound")]
  InvalidRange { low: isize, high: isize },
  #[error("too short: {len} codepoints, minimum is {min}")]
  TooShort { len: usize, min: usize },
  #[error("too long: {len} codepoints, maximum is {max}")]
  TooLong { len: usize, max: usize },
  /// The search target is absent.
  #[error("not found")]
  NotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
