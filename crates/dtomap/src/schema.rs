use std::any::{Any, TypeId};
use std::fmt;

/// A compile-time description of one struct field.
///
/// Tables of `Field`s are generated by `#[derive(Mappable)]`, one entry per field in declaration
/// order.
#[derive(Clone, Copy)]
pub struct Field {
  name: &'static str,
  tags: &'static [(&'static str, &'static str)],
  writable: bool,
  type_id: fn() -> TypeId,
  type_name: fn() -> &'static str,
}

impl Field {
  pub const fn new(
    name: &'static str,
    tags: &'static [(&'static str, &'static str)],
    writable: bool,
    type_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
  ) -> Self {
    Self {
      name,
      tags,
      writable,
      type_id,
      type_name,
    }
  }

  /// Declared field name, without the `r#` prefix.
  pub fn name(&self) -> &'static str {
    self.name
  }

  pub fn tags(&self) -> &'static [(&'static str, &'static str)] {
    self.tags
  }

  /// Tag value stored under `key`, if the field carries one.
  pub fn tag(&self, key: &str) -> Option<&'static str> {
    self
      .tags
      .iter()
      .find(|(k, _)| *k == key)
      .map(|(_, value)| *value)
  }

  pub fn is_writable(&self) -> bool {
    self.writable
  }

  pub fn type_id(&self) -> TypeId {
    (self.type_id)()
  }

  pub fn type_name(&self) -> &'static str {
    (self.type_name)()
  }
}

impl fmt::Debug for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Field")
      .field("name", &self.name)
      .field("tags", &self.tags)
      .field("writable", &self.writable)
      .field("type", &self.type_name())
      .finish()
  }
}

/// Static field table of a struct.
pub trait Schema {
  const FIELDS: &'static [Field];
}

/// Type-erased field access used by the mapper.
///
/// Implemented by `#[derive(Mappable)]`. Indices refer to positions in [`Mappable::fields`].
pub trait Mappable: Any {
  fn fields(&self) -> &'static [Field];

  fn field_mut(&mut self, index: usize) -> Option<&mut dyn Any>;

  /// Copies field `index` into `slot`.
  ///
  /// Non-null `Box`/`Rc`/`Arc` chains are followed and the innermost value is copied into fresh
  /// pointers, `None` is copied as `None`. Returns `false` if `slot` has a different type or the
  /// field carries no tag.
  fn copy_field(&self, index: usize, slot: &mut dyn Any) -> bool;

  fn type_name(&self) -> &'static str;
}
