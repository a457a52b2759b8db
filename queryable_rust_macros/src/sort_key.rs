use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr};

pub fn derive_sort_key(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let variants = match &input.data {
        Data::Enum(data_enum) => &data_enum.variants,
        _ => panic!("SortKey derive: `{}` must be an enum", name),
    };

    if variants.is_empty() {
        panic!("SortKey derive: enum `{}` has no variants", name);
    }

    let mut arms = Vec::new();
    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            panic!(
                "SortKey derive: variant `{}` must be a unit variant",
                variant.ident
            );
        }
        let ident = &variant.ident;
        let key = variant_key(variant);
        arms.push(quote! { Self::#ident => #key, });
    }

    let expanded = quote! {
        impl queryable_rust::SortKey for #name {
            fn key(&self) -> &'static str {
                match self {
                    #(#arms)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Attribute name for a variant: `#[sort_key(rename = "...")]` wins,
/// otherwise the snake_cased variant name.
fn variant_key(variant: &syn::Variant) -> String {
    for attr in &variant.attrs {
        if !attr.path().is_ident("sort_key") {
            continue;
        }

        let mut rename = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                rename = Some(value.value());
            }
            Ok(())
        });

        if let Some(key) = rename {
            return key;
        }
    }

    to_snake_case(&variant.ident.to_string())
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(ch.to_lowercase().next().unwrap());
        } else {
            result.push(ch);
        }
    }
    result
}
