//! # dtomap
//!
//! Copy tagged struct fields from several source structs into one transfer object.
//!
//! Every source field carries a tag under the active key (`dto` by default). The destination
//! field is found by, in order: the title-cased tag as a field name (`field_t2` -> `FieldT2`),
//! the raw tag as a field name, and a destination field carrying the same tag. Field types must
//! be identical. A `"-"` tag skips the field.
//!
//! # Example
//! ```
//!   use dtomap::{map_into, Mappable};
//!
//!   #[derive(Mappable)]
//!   struct Request {
//!     #[tags(dto = "field1")]
//!     pub field1: i32,
//!   }
//!
//!   #[derive(Mappable)]
//!   struct Session {
//!     #[tags(dto = "field_t2")]
//!     pub field2: i32,
//!   }
//!
//!   #[derive(Mappable)]
//!   struct Header {
//!     #[tags(dto = "custom_field3")]
//!     pub custom_field3: i32,
//!   }
//!
//!   #[derive(Mappable, Default)]
//!   #[allow(non_snake_case)]
//!   struct Dto {
//!     pub Field1: i32,
//!     pub FieldT2: i32,
//!     #[tags(dto = "custom_field3")]
//!     pub field3: i32,
//!   }
//!
//!   let mut dto = Dto::default();
//!   map_into!(
//!     &mut dto,
//!     &Request { field1: 1 },
//!     &Session { field2: 2 },
//!     Some(&Header { custom_field3: 3 })
//!   )
//!   .unwrap();
//!
//!   assert_eq!((dto.Field1, dto.FieldT2, dto.field3), (1, 2, 3));
//! ```

mod error;
mod mapper;
pub mod name;
mod schema;
mod source;
pub mod tag;

pub use dtomap_codegen::Mappable;
pub use error::{Error, Result};
pub use mapper::{map_into, resolve, Mapper, Resolution, SKIP_TAG};
pub use schema::{Field, Mappable, Schema};
pub use source::{IntoDestination, IntoSource, Source};
pub use tag::{current_tag, set_tag, DEFAULT_TAG};

/// Maps any number of sources into a destination with the current tag key.
///
/// Sources are `&T` or `Option<&T>` for `T: Mappable`, or prebuilt [`Source`]s.
#[macro_export]
macro_rules! map_into {
  ($dst:expr $(, $src:expr)* $(,)?) => {
    $crate::map_into(
      $dst,
      &[$($crate::IntoSource::into_source($src)),*],
    )
  };
}
