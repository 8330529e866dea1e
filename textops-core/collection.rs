//! Order-preserving operations over generic slices.

/// Returns every element satisfying `predicate`, in input order. The input
/// slice is left untouched.
pub fn filter<T: Clone>(items: &[T], predicate: impl Fn(&T) -> bool) -> Vec<T> {
  // Heuristic initial capacity; the exact hit count is unknown.
  let mut result = Vec::with_capacity(items.len() / 2);
  for item in items {
    if predicate(item) {
      result.push(item.clone());
    }
  }
  result
}

/// Membership under value equality. An empty slice never contains anything.
pub fn contains<T: PartialEq>(items: &[T], needle: &T) -> bool {
  items.iter().any(|item| item == needle)
}
