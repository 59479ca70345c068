use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Expr, Fields, Lit, LitStr, Meta};

/// Derive macro that documents a struct's input fields.
///
/// For each named field it records:
/// - the field name as it appears on the wire (respects `#[serde(rename = "...")]`)
/// - the description taken from the field's doc comment
///
/// Generates an `input_fields() -> &'static [InputField]` method. The
/// `InputField` type must be in scope at the derive site.
#[proc_macro_derive(InputSchema, attributes(serde))]
pub fn derive_input_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => panic!("InputSchema only supports structs with named fields"),
        },
        _ => panic!("InputSchema only supports structs"),
    };

    let entries = fields.iter().map(|field| {
        let ident = field.ident.as_ref().unwrap().to_string();
        let wire_name = serde_rename(&field.attrs).unwrap_or(ident);
        let description = doc_comment(&field.attrs);
        quote! {
            InputField {
                name: #wire_name,
                description: #description,
            }
        }
    });

    let expanded = quote! {
        impl #name {
            /// Field documentation extracted from the struct definition
            pub fn input_fields() -> &'static [InputField] {
                static FIELDS: &[InputField] = &[
                    #(#entries),*
                ];
                FIELDS
            }
        }
    };

    TokenStream::from(expanded)
}

/// Extract `#[serde(rename = "...")]` from a field's attributes
fn serde_rename(attrs: &[syn::Attribute]) -> Option<String> {
    let mut rename = None;
    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                rename = Some(lit.value());
            } else if let Ok(value) = meta.value() {
                // consume values of other serde items so parsing continues
                let _: Expr = value.parse()?;
            }
            Ok(())
        });
    }
    rename
}

/// Join a field's doc comment lines into a single description
fn doc_comment(attrs: &[syn::Attribute]) -> String {
    attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(meta) = &attr.meta {
                if let Expr::Lit(expr_lit) = &meta.value {
                    if let Lit::Str(lit_str) = &expr_lit.lit {
                        return Some(lit_str.value().trim().to_string());
                    }
                }
            }
            None
        })
        .collect::<Vec<_>>()
        .join(" ")
}
