use syn::{Attribute, Lit, Meta, MetaList, NestedMeta};
use thiserror::Error;

pub const ATTR_NAME: &str = "tags";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
  #[error("Expected: key = \"value\"")]
  InvalidSyntax,
  #[error("Tag value must be a string literal")]
  NotAString,
  #[error("Duplicate tag key `{0}`")]
  DuplicateKey(String),
}

/// `key = "value"` pairs collected from every `#[tags(..)]` attribute of a field.
#[derive(Debug, Default)]
pub struct TagList {
  pub entries: Vec<(String, String)>,
}

impl TagList {
  // #[tags(dto = "field_name", json = "fieldName")]
  pub fn extend_from_meta_list<'a>(
    &mut self,
    list: &'a MetaList,
  ) -> Result<(), (Error, &'a NestedMeta)> {
    for item in &list.nested {
      let (key, value) = parse_entry(item).map_err(|err| (err, item))?;
      if self.entries.iter().any(|(k, _)| *k == key) {
        return Err((Error::DuplicateKey(key), item));
      }
      self.entries.push((key, value));
    }
    Ok(())
  }
}

fn parse_entry(item: &NestedMeta) -> Result<(String, String), Error> {
  match item {
    NestedMeta::Meta(Meta::NameValue(ref v)) => {
      let key = v.path.get_ident().ok_or(Error::InvalidSyntax)?.to_string();
      match v.lit {
        Lit::Str(ref lit) => Ok((key, lit.value())),
        _ => Err(Error::NotAString),
      }
    }
    _ => Err(Error::InvalidSyntax),
  }
}

pub fn is_tags_attr(attr: &Attribute) -> bool {
  attr.path.is_ident(ATTR_NAME)
}

#[cfg(test)]
mod tests {
  use super::*;
  use syn::parse_quote;

  fn parse(list: MetaList) -> Result<Vec<(String, String)>, Error> {
    let mut tags = TagList::default();
    tags.extend_from_meta_list(&list).map_err(|(err, _)| err)?;
    Ok(tags.entries)
  }

  #[test]
  fn test_entries() {
    let entries = parse(parse_quote!(tags(dto = "field_t2", json = "fieldT2"))).unwrap();
    assert_eq!(
      entries,
      vec![
        ("dto".to_string(), "field_t2".to_string()),
        ("json".to_string(), "fieldT2".to_string()),
      ]
    );
  }

  #[test]
  fn test_empty_value() {
    let entries = parse(parse_quote!(tags(dto = ""))).unwrap();
    assert_eq!(entries, vec![("dto".to_string(), String::new())]);
  }

  #[test]
  fn test_errors() {
    assert_eq!(
      parse(parse_quote!(tags(dto = "a", dto = "b"))),
      Err(Error::DuplicateKey("dto".to_string()))
    );
    assert_eq!(parse(parse_quote!(tags(dto = 1))), Err(Error::NotAString));
    assert_eq!(parse(parse_quote!(tags(dto))), Err(Error::InvalidSyntax));
    assert_eq!(parse(parse_quote!(tags("dto"))), Err(Error::InvalidSyntax));
    assert_eq!(parse(parse_quote!(tags(a::b = "x"))), Err(Error::InvalidSyntax));
  }
}
