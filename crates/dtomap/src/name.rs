//! Tag to field name conversion.

/// Converts a tag into a capitalized field name.
///
/// `"fieldname"` becomes `"Fieldname"`, `"field_name"` becomes `"FieldName"`. Underscores and
/// spaces are dropped; a letter is capitalized when it starts the tag or follows a separator.
pub fn title_case(tag: &str) -> String {
  let mut out = String::with_capacity(tag.len());
  let mut word_start = true;
  for c in tag.chars() {
    if c == '_' || c == ' ' {
      word_start = true;
      continue;
    }
    if word_start {
      out.extend(c.to_uppercase());
    } else {
      out.push(c);
    }
    word_start = is_separator(c);
  }
  out
}

fn is_separator(c: char) -> bool {
  if c.is_ascii() {
    !c.is_ascii_alphanumeric()
  } else {
    c.is_whitespace()
  }
}
