//! Field descriptors: the static shape of a bindable record.

use std::borrow::Cow;
use std::fmt;

/// Annotation value that excludes a field from binding.
pub const SKIP: &str = "-";

/// Scalar kinds the binder knows how to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `String`
    Str,
    /// `Vec<u8>`, the raw bytes of the value
    Bytes,
    /// `i64`, parsed as base-10
    Int64,
    /// `f64`
    Float64,
    /// `bool`
    Bool,
}

impl Kind {
    /// Rust type name of the kind.
    pub const fn type_name(self) -> &'static str {
        match self {
            Kind::Str => "String",
            Kind::Bytes => "Vec<u8>",
            Kind::Int64 => "i64",
            Kind::Float64 => "f64",
            Kind::Bool => "bool",
        }
    }
}

/// Declared type of a record field, as far as the binder is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// A plain scalar field.
    Required(Kind),
    /// An `Option<_>` field; absent variables bind to `None`.
    Optional(Kind),
    /// A `Vec<T>` whose element type is not `u8`. Always rejected.
    Sequence(&'static str),
    /// Any other type. Always rejected.
    Unsupported(&'static str),
}

impl FieldType {
    /// Whether the binder can populate a field of this type.
    pub const fn is_supported(self) -> bool {
        matches!(self, FieldType::Required(_) | FieldType::Optional(_))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Required(kind) => f.write_str(kind.type_name()),
            FieldType::Optional(kind) => write!(f, "Option<{}>", kind.type_name()),
            FieldType::Sequence(element) => write!(f, "Vec<{element}>"),
            FieldType::Unsupported(name) => f.write_str(name),
        }
    }
}

/// One entry of a record's descriptor table.
///
/// Generated by `#[derive(Bindable)]`, or written by hand for records that
/// implement [`Bindable`](crate::Bindable) manually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as declared on the record.
    pub name: &'static str,
    /// Declared type of the field.
    pub ty: FieldType,
    /// Annotation value; empty when the field carries none.
    pub tag: &'static str,
    /// Whether the field is public.
    pub visible: bool,
}

impl FieldDescriptor {
    /// A public, untagged field.
    pub const fn new(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            tag: "",
            visible: true,
        }
    }

    /// Set the annotation value.
    pub const fn tag(mut self, tag: &'static str) -> Self {
        self.tag = tag;
        self
    }

    /// Mark the field as private.
    pub const fn private(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Whether the binder must leave this field alone.
    pub fn is_skipped(&self) -> bool {
        !self.visible || self.tag == SKIP
    }

    /// Environment variable this field is sourced from, or `None` when the
    /// field is skipped.
    ///
    /// The tag wins over the field name; `prefix` is prepended to either.
    pub fn key(&self, prefix: &str) -> Option<Cow<'static, str>> {
        if self.is_skipped() {
            return None;
        }
        let base = if self.tag.is_empty() {
            self.name
        } else {
            self.tag
        };
        if prefix.is_empty() {
            Some(Cow::Borrowed(base))
        } else {
            Some(Cow::Owned(format!("{prefix}{base}")))
        }
    }
}
