//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Visibility};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// `Bindable` derive macro
///
/// Implements `envbind::Bindable` for a struct with named fields: a static
/// descriptor table plus the assignment of converted values.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "PREFIX_")]`: Add prefix to all env var names
///
/// **Field-level**:
/// - `#[env = "NAME"]` or `#[env(name = "NAME")]`: Read from `NAME` instead of the field name
/// - `#[env = "-"]` or `#[env(skip)]`: Never bind this field
///
/// Private fields are never bound. Public, non-skipped fields must have a type
/// implementing `envbind::EnvField`.
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(Bindable, attributes(env))]
pub fn derive_bindable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    "Bindable only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "Bindable only supports structs with named fields",
            ));
        }
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Bindable does not support generic structs",
        ));
    }

    let prefix = StructAttrs::from_attrs(&input.attrs)?.prefix;

    let mut descriptors = Vec::with_capacity(fields.len());
    let mut assignments = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let field_type = &field.ty;
        let attrs = FieldAttrs::from_field(field)?;

        let name = field_ident.unraw().to_string();
        let tag = attrs.tag.unwrap_or_default();
        let visible = matches!(field.vis, Visibility::Public(_));
        let bound = visible && tag != "-";

        // Skipped fields may have any type, so their type is only recorded by name.
        let ty = if bound {
            quote! { <#field_type as ::envbind::EnvField>::FIELD_TYPE }
        } else {
            let type_name = quote!(#field_type).to_string().replace(' ', "");
            quote! { ::envbind::FieldType::Unsupported(#type_name) }
        };

        descriptors.push(quote! {
            ::envbind::FieldDescriptor {
                name: #name,
                ty: #ty,
                tag: #tag,
                visible: #visible,
            }
        });

        if bound {
            assignments.push(quote! {
                #index => {
                    self.#field_ident = <#field_type as ::envbind::EnvField>::from_value(value)?;
                    ::core::result::Result::Ok(())
                }
            });
        }
    }

    let struct_label = struct_name.to_string();

    Ok(quote! {
        impl ::envbind::Bindable for #struct_name {
            const PREFIX: &'static str = #prefix;

            fn fields() -> &'static [::envbind::FieldDescriptor] {
                const FIELDS: &[::envbind::FieldDescriptor] = &[
                    #(#descriptors),*
                ];
                FIELDS
            }

            #[allow(unused_variables)]
            fn assign(
                &mut self,
                index: usize,
                value: ::envbind::Value,
            ) -> ::core::result::Result<(), ::envbind::BindError> {
                match index {
                    #(#assignments)*
                    _ => ::core::result::Result::Err(::envbind::BindError::usage(
                        ::std::format!("{} has no bindable field #{}", #struct_label, index),
                    )),
                }
            }
        }
    })
}
