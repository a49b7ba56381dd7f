#![allow(non_snake_case)]

#[cfg(test)]
mod pointers;

use dtomap::Mappable;

#[derive(Mappable, Debug, Default, PartialEq)]
pub struct Dto {
  pub Field1: i32,
  pub FieldT2: i32,
  #[tags(dto = "custom_field3")]
  pub Field3: i32,
  pub Field4: i32,
  pub Field5: i32,
}
