//! Process-wide tag key.
//!
//! The key selects which `#[tags(..)]` entry of a field is used for mapping. It is meant to be
//! configured once at startup, before any mapping runs.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

pub const DEFAULT_TAG: &str = "dto";

static TAG: Lazy<RwLock<Arc<str>>> = Lazy::new(|| RwLock::new(Arc::from(DEFAULT_TAG)));

/// Changes the active tag key.
///
/// # Panics
///
/// Panics if `name` is empty or only whitespace.
pub fn set_tag(name: &str) {
  let name = validate(name);
  tracing::debug!(tag = name, "tag key changed");
  *TAG.write() = Arc::from(name);
}

/// Returns the active tag key.
pub fn current_tag() -> Arc<str> {
  TAG.read().clone()
}

pub(crate) fn validate(name: &str) -> &str {
  if name.trim().is_empty() {
    panic!("empty tag name")
  }
  name
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_set_tag() {
    assert_eq!(&*current_tag(), DEFAULT_TAG);
    set_tag("tag_value");
    assert_eq!(&*current_tag(), "tag_value");
    set_tag(DEFAULT_TAG);
    assert_eq!(&*current_tag(), DEFAULT_TAG);
  }

  #[test]
  #[should_panic(expected = "empty tag name")]
  fn test_set_empty_tag() {
    set_tag("");
  }

  #[test]
  #[should_panic(expected = "empty tag name")]
  fn test_set_blank_tag() {
    set_tag(" \t ");
  }
}
