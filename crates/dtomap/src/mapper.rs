use crate::error::{Error, Result};
use crate::name::title_case;
use crate::schema::{Field, Mappable};
use crate::source::{IntoDestination, Source};
use crate::tag;
use std::sync::Arc;

/// Tag value marking a source field that is not mapped.
pub const SKIP_TAG: &str = "-";

/// How a destination field was found for a source tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
  /// The title-cased tag equals the field name: `field_name` -> `FieldName`.
  TitleCase,
  /// The raw tag equals the field name.
  RawName,
  /// The destination field carries the same tag.
  TagMatch,
}

/// Copies tagged fields from sources into a destination, reading tags under one key.
#[derive(Debug, Clone)]
pub struct Mapper {
  tag: Arc<str>,
}

impl Mapper {
  /// Creates a mapper reading tags under `tag`.
  ///
  /// # Panics
  ///
  /// Panics if `tag` is empty or only whitespace.
  pub fn new(tag: &str) -> Self {
    Self {
      tag: Arc::from(tag::validate(tag)),
    }
  }

  /// Creates a mapper bound to the current process-wide tag key.
  pub fn current() -> Self {
    Self {
      tag: tag::current_tag(),
    }
  }

  pub fn tag(&self) -> &str {
    &self.tag
  }

  /// Maps every field of every source into `dst`, sources in order.
  ///
  /// Stops at the first error. Fields already written are kept.
  pub fn map_into<'d, D>(&self, dst: D, sources: &[Source<'_>]) -> Result<()>
  where
    D: IntoDestination<'d>,
  {
    self.map_dyn(dst.into_destination()?, sources)
  }

  pub fn map_dyn(&self, dst: &mut dyn Mappable, sources: &[Source<'_>]) -> Result<()> {
    for (index, source) in sources.iter().enumerate() {
      let src = source.resolve(index)?;
      self.map_struct(dst, src)?;
    }
    Ok(())
  }

  fn map_struct(&self, dst: &mut dyn Mappable, src: &dyn Mappable) -> Result<()> {
    let targets = dst.fields();
    for (index, field) in src.fields().iter().enumerate() {
      let tag = match field.tag(&self.tag) {
        Some(tag) if !tag.is_empty() => tag,
        _ => {
          return Err(Error::MissingTag {
            key: self.tag.to_string(),
            field: field.name(),
          })
        }
      };

      if tag == SKIP_TAG {
        tracing::trace!(field = field.name(), "skipped");
        continue;
      }

      let (target_index, resolution) =
        resolve(targets, tag, &self.tag).ok_or(Error::FieldNotFound { tag })?;
      let target = &targets[target_index];

      if !target.is_writable() {
        return Err(Error::FieldNotWritable {
          tag,
          field: target.name(),
        });
      }

      let mismatch = Error::TypeMismatch {
        field: target.name(),
        source_type: field.type_name(),
        target_type: target.type_name(),
      };
      if target.type_id() != field.type_id() {
        return Err(mismatch);
      }

      let slot = dst.field_mut(target_index).ok_or(Error::FieldNotWritable {
        tag,
        field: target.name(),
      })?;
      if !src.copy_field(index, slot) {
        return Err(mismatch);
      }

      tracing::trace!(
        field = field.name(),
        target = target.name(),
        resolution = ?resolution,
        "copied"
      );
    }
    Ok(())
  }
}

impl Default for Mapper {
  fn default() -> Self {
    Self::current()
  }
}

/// Finds the destination field for `tag`.
///
/// Tries the title-cased tag as a field name, then the raw tag, then the first field whose tag
/// under `key` equals `tag`.
pub fn resolve(fields: &[Field], tag: &str, key: &str) -> Option<(usize, Resolution)> {
  let name = title_case(tag);
  if let Some(index) = fields.iter().position(|f| f.name() == name) {
    return Some((index, Resolution::TitleCase));
  }

  if let Some(index) = fields.iter().position(|f| f.name() == tag) {
    return Some((index, Resolution::RawName));
  }

  fields
    .iter()
    .position(|f| f.tag(key) == Some(tag))
    .map(|index| (index, Resolution::TagMatch))
}

/// Maps `sources` into `dst` using the current process-wide tag key.
pub fn map_into<'d, D>(dst: D, sources: &[Source<'_>]) -> Result<()>
where
  D: IntoDestination<'d>,
{
  Mapper::current().map_into(dst, sources)
}
