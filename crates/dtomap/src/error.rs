use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("cannot map into destination: {type_name}")]
  InvalidDestination { type_name: &'static str },
  #[error("cannot map source #{index}: {type_name} is a null reference")]
  InvalidSource {
    index: usize,
    type_name: &'static str,
  },
  #[error("empty `{key}` tag value for field: {field}")]
  MissingTag { key: String, field: &'static str },
  #[error("not found field: {tag}")]
  FieldNotFound { tag: &'static str },
  #[error("not writable field: {field} (tag `{tag}`)")]
  FieldNotWritable {
    tag: &'static str,
    field: &'static str,
  },
  #[error("incompatible types source {source_type} and target {target_type}")]
  TypeMismatch {
    field: &'static str,
    source_type: &'static str,
    target_type: &'static str,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
