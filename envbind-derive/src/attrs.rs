//! Attribute parsing for `#[env ...]` annotations.

use syn::{Attribute, Expr, ExprLit, Field, Lit, Meta};

/// Tag value that excludes a field from binding.
const SKIP: &str = "-";

/// Parsed `#[env ...]` attributes from a struct field.
#[derive(Debug, Default, PartialEq)]
pub struct FieldAttrs {
    /// Annotation value: a variable name, or `-` to skip the field.
    ///
    /// If `None`, the field name is used as is.
    pub tag: Option<String>,
}

impl FieldAttrs {
    /// Extract `#[env = "NAME"]`, `#[env(name = "NAME")]` and `#[env(skip)]`.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in env_attrs(&field.attrs) {
            if let Meta::NameValue(nv) = &attr.meta {
                attrs.tag = Some(string_literal(&nv.value)?);
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    let value: syn::LitStr = meta.value()?.parse()?;
                    attrs.tag = Some(value.value());
                    return Ok(());
                }

                // skip
                if meta.path.is_ident("skip") {
                    attrs.tag = Some(SKIP.to_string());
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute"))
            })?;
        }

        Ok(attrs)
    }
}

/// Parsed `#[env(...)]` attributes from the struct itself.
#[derive(Debug, Default, PartialEq)]
pub struct StructAttrs {
    /// Prepended to every resolved variable name.
    pub prefix: String,
}

impl StructAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in env_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("prefix") {
                    let value: syn::LitStr = meta.value()?.parse()?;
                    parsed.prefix = value.value();
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level env attribute"))
            })?;
        }

        Ok(parsed)
    }
}

fn env_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("env"))
}

fn string_literal(expr: &Expr) -> syn::Result<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.value()),
        _ => Err(syn::Error::new_spanned(
            expr,
            "expected a string literal, e.g. #[env = \"NAME\"]",
        )),
    }
}
