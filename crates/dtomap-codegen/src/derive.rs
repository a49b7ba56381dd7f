use crate::copy::expand_copy;
use crate::tags::{is_tags_attr, TagList};
use proc_macro2::{Literal, TokenStream};
use proc_macro_error::{abort, abort_call_site, ResultExt};
use quote::{quote, ToTokens};
use syn::ext::IdentExt;
use syn::{parse_quote, Data, DeriveInput, Fields, GenericParam, Meta, Visibility};

#[derive(Debug)]
pub struct Derive {
  ident: syn::Ident,
  generics: syn::Generics,
  fields: Vec<StructField>,
}

impl Derive {
  pub fn from_derive_input(input: &DeriveInput) -> Self {
    let fields: Vec<StructField> = match input.data {
      Data::Struct(ref data) => match data.fields {
        Fields::Named(ref fields) => fields.named.iter().map(StructField::from_field).collect(),
        Fields::Unit => vec![],
        _ => abort!(data.fields, "Only support named fields."),
      },
      _ => {
        abort_call_site!("Only support struct.");
      }
    };

    if let Some(lifetime) = input.generics.lifetimes().next() {
      abort!(lifetime, "Lifetime parameters are not supported.");
    }

    // Field tables need `TypeId`, copies of tagged fields need `Clone`.
    let copies = fields.iter().any(StructField::is_source);
    let mut generics = input.generics.clone();
    for param in generics.params.iter_mut() {
      if let GenericParam::Type(ref mut param) = *param {
        param.bounds.push(parse_quote!('static));
        if copies {
          param.bounds.push(parse_quote!(::std::clone::Clone));
        }
      }
    }

    Self {
      ident: input.ident.clone(),
      generics,
      fields,
    }
  }
}

impl ToTokens for Derive {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let self_ident = &self.ident;
    let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

    let table_items: Vec<_> = self.fields.iter().map(StructField::table_tokens).collect();

    let indices: Vec<_> = (0..self.fields.len())
      .map(Literal::usize_unsuffixed)
      .collect();
    let idents: Vec<_> = self.fields.iter().map(|f| &f.ident).collect();
    // Untagged fields can only be written to, so they need no copy arm.
    let copy_arms: Vec<_> = self
      .fields
      .iter()
      .zip(indices.iter())
      .filter(|(field, _)| field.is_source())
      .map(|(field, index)| {
        let ty = &field.ty;
        let ident = &field.ident;
        let value = expand_copy(ty, quote! { self.#ident });
        quote! {
          #index => match slot.downcast_mut::<#ty>() {
            ::std::option::Option::Some(__slot) => {
              *__slot = #value;
              true
            }
            ::std::option::Option::None => false,
          }
        }
      })
      .collect();

    tokens.extend(quote! {
      impl #impl_generics ::dtomap::Schema for #self_ident #ty_generics #where_clause {
        const FIELDS: &'static [::dtomap::Field] = &[
          #(#table_items),*
        ];
      }

      impl #impl_generics ::dtomap::Mappable for #self_ident #ty_generics #where_clause {
        fn fields(&self) -> &'static [::dtomap::Field] {
          <Self as ::dtomap::Schema>::FIELDS
        }

        fn field_mut(&mut self, index: usize) -> ::std::option::Option<&mut dyn ::std::any::Any> {
          match index {
            #(#indices => ::std::option::Option::Some(&mut self.#idents),)*
            _ => ::std::option::Option::None,
          }
        }

        #[allow(unused_variables)]
        fn copy_field(&self, index: usize, slot: &mut dyn ::std::any::Any) -> bool {
          match index {
            #(#copy_arms,)*
            _ => false,
          }
        }

        fn type_name(&self) -> &'static str {
          ::std::any::type_name::<Self>()
        }
      }
    });
  }
}

#[derive(Debug)]
struct StructField {
  ident: syn::Ident,
  name: String,
  ty: syn::Type,
  writable: bool,
  tags: TagList,
}

impl StructField {
  fn from_field(field: &syn::Field) -> Self {
    let ident = match field.ident {
      Some(ref ident) => ident.clone(),
      None => abort!(field, "Only support named fields."),
    };

    let mut tags = TagList::default();
    for attr in field.attrs.iter().filter(|attr| is_tags_attr(attr)) {
      let meta = attr.parse_meta().unwrap_or_abort();
      match meta {
        // #[tags(dto = "..")]
        Meta::List(ref list) => {
          if let Err((err, item)) = tags.extend_from_meta_list(list) {
            abort!(item, "{}", err);
          }
        }
        // #[tags] or #[tags = ".."]
        _ => abort!(meta, r#"Expected: #[tags(key = "value")]"#),
      }
    }

    Self {
      name: ident.unraw().to_string(),
      ident,
      ty: field.ty.clone(),
      writable: matches!(field.vis, Visibility::Public(_)),
      tags,
    }
  }

  fn is_source(&self) -> bool {
    !self.tags.entries.is_empty()
  }

  // `::dtomap::Field::new(..)`
  fn table_tokens(&self) -> TokenStream {
    let name = &self.name;
    let ty = &self.ty;
    let writable = self.writable;
    let keys = self.tags.entries.iter().map(|(key, _)| key);
    let values = self.tags.entries.iter().map(|(_, value)| value);
    quote! {
      ::dtomap::Field::new(
        #name,
        &[#((#keys, #values)),*],
        #writable,
        ::std::any::TypeId::of::<#ty>,
        ::std::any::type_name::<#ty>,
      )
    }
  }
}
