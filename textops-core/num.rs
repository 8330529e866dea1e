//! Bounded-integer operations.

use crate::{Error, Result};

/// Saturates `value` into `[low, high]`. Assumes `low <= high`; callers
/// that cannot guarantee that use [`try_clamp`].
pub fn clamp(value: isize, low: isize, high: isize) -> isize {
  if value < low {
    low
  } else if value > high {
    high
  } else {
    value
  }
}

/// Validating form of [`clamp`]: inverted bounds are an
/// [`Error::InvalidRange`] instead of an undefined result.
pub fn try_clamp(value: isize, low: isize, high: isize) -> Result<isize> {
  if low > high {
    return Err(Error::InvalidRange { low, high });
  }
  Ok(clamp(value, low, high))
}

/// Magnitude of `n`. `abs(isize::MIN)` saturates to `isize::MAX` since its
/// true magnitude is not representable.
pub fn abs(n: isize) -> isize {
  n.saturating_abs()
}

/// The larger of two values; ties return either input.
pub fn max<T: Ord>(a: T, b: T) -> T {
  if a >= b { a } else { b }
}

/// The smaller of two values; ties return either input.
pub fn min<T: Ord>(a: T, b: T) -> T {
  if a <= b { a } else { b }
}
