use crate::error::{Error, Result};
use crate::schema::Mappable;
use std::any::type_name;

/// One mapping source.
#[derive(Clone, Copy)]
pub enum Source<'a> {
  /// A struct passed by value.
  Value(&'a dyn Mappable),
  /// A single-level reference, `None` being the null reference. The second element is the
  /// reference type, reported when it is null.
  Reference(Option<&'a dyn Mappable>, &'static str),
}

impl<'a> Source<'a> {
  pub(crate) fn resolve(self, index: usize) -> Result<&'a dyn Mappable> {
    match self {
      Source::Value(value) => Ok(value),
      Source::Reference(Some(value), _) => Ok(value),
      Source::Reference(None, type_name) => Err(Error::InvalidSource { index, type_name }),
    }
  }
}

/// Conversion into a [`Source`].
///
/// Only struct values and single-level references convert; `&&T` does not.
pub trait IntoSource<'a> {
  fn into_source(self) -> Source<'a>;
}

impl<'a, T: Mappable> IntoSource<'a> for &'a T {
  fn into_source(self) -> Source<'a> {
    Source::Value(self)
  }
}

impl<'a, T: Mappable> IntoSource<'a> for Option<&'a T> {
  fn into_source(self) -> Source<'a> {
    Source::Reference(self.map(|v| v as &dyn Mappable), type_name::<Option<&T>>())
  }
}

impl<'a> IntoSource<'a> for Source<'a> {
  fn into_source(self) -> Source<'a> {
    self
  }
}

/// Conversion into a mutable destination handle.
pub trait IntoDestination<'a> {
  fn into_destination(self) -> Result<&'a mut dyn Mappable>;
}

impl<'a, T: Mappable> IntoDestination<'a> for &'a mut T {
  fn into_destination(self) -> Result<&'a mut dyn Mappable> {
    Ok(self)
  }
}

impl<'a, T: Mappable> IntoDestination<'a> for Option<&'a mut T> {
  fn into_destination(self) -> Result<&'a mut dyn Mappable> {
    match self {
      Some(dst) => Ok(dst),
      None => Err(Error::InvalidDestination {
        type_name: type_name::<Option<&mut T>>(),
      }),
    }
  }
}
