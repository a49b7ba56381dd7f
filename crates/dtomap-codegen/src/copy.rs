use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{GenericArgument, PathArguments, Type};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Pointer {
  Box,
  Rc,
  Arc,
  Option,
}

/// Builds an expression copying the value at `place`, which has type `ty`.
///
/// Non-null pointer chains are followed and the innermost value cloned into fresh pointers;
/// `None` stays `None`. Pointers to unsized values (`str`, slices, trait objects) are cloned as
/// they are.
pub fn expand_copy(ty: &Type, place: TokenStream) -> TokenStream {
  expand(ty, place, 0)
}

fn expand(ty: &Type, place: TokenStream, depth: usize) -> TokenStream {
  match pointer_of(ty) {
    Some((Pointer::Box, inner)) => {
      let value = expand(inner, quote! { (*#place) }, depth);
      quote! { ::std::boxed::Box::new(#value) }
    }
    Some((Pointer::Rc, inner)) => {
      let value = expand(inner, quote! { (*#place) }, depth);
      quote! { ::std::rc::Rc::new(#value) }
    }
    Some((Pointer::Arc, inner)) => {
      let value = expand(inner, quote! { (*#place) }, depth);
      quote! { ::std::sync::Arc::new(#value) }
    }
    Some((Pointer::Option, inner)) if is_pointer(inner) => {
      let binding = format_ident!("__v{}", depth);
      let value = expand(inner, quote! { (*#binding) }, depth + 1);
      quote! {
        match #place {
          ::std::option::Option::Some(ref #binding) => ::std::option::Option::Some(#value),
          ::std::option::Option::None => ::std::option::Option::None,
        }
      }
    }
    _ => quote! { ::std::clone::Clone::clone(&#place) },
  }
}

fn is_pointer(ty: &Type) -> bool {
  match pointer_of(ty) {
    Some((Pointer::Option, inner)) => is_pointer(inner),
    Some(_) => true,
    None => false,
  }
}

// `Box<T>`, `std::rc::Rc<T>`, ... matched on the last path segment. `Box<str>` is not a chain.
fn pointer_of(ty: &Type) -> Option<(Pointer, &Type)> {
  let path = match ty {
    Type::Path(syn::TypePath { qself: None, ref path }) => path,
    Type::Group(syn::TypeGroup { ref elem, .. }) | Type::Paren(syn::TypeParen { ref elem, .. }) => {
      return pointer_of(elem)
    }
    _ => return None,
  };
  let segment = path.segments.last()?;
  let pointer = if segment.ident == "Box" {
    Pointer::Box
  } else if segment.ident == "Rc" {
    Pointer::Rc
  } else if segment.ident == "Arc" {
    Pointer::Arc
  } else if segment.ident == "Option" {
    Pointer::Option
  } else {
    return None;
  };
  match segment.arguments {
    PathArguments::AngleBracketed(ref args) if args.args.len() == 1 => match args.args[0] {
      GenericArgument::Type(ref inner) if pointer == Pointer::Option || !is_unsized(inner) => {
        Some((pointer, inner))
      }
      _ => None,
    },
    _ => None,
  }
}

fn is_unsized(ty: &Type) -> bool {
  match ty {
    Type::Slice(_) | Type::TraitObject(_) | Type::ImplTrait(_) => true,
    Type::Path(syn::TypePath { qself: None, ref path }) => path
      .segments
      .last()
      .map(|segment| segment.ident == "str" && segment.arguments.is_empty())
      .unwrap_or_default(),
    Type::Group(syn::TypeGroup { ref elem, .. }) | Type::Paren(syn::TypeParen { ref elem, .. }) => {
      is_unsized(elem)
    }
    _ => false,
  }
}
