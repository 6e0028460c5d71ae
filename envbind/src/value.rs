//! Parsed values and the field types that accept them.

use crate::error::BindError;
use crate::field::{FieldType, Kind};

/// A converted environment value, ready to be assigned to a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value: an absent variable bound to an optional field or byte buffer.
    Null,
    /// Text, copied verbatim.
    Str(String),
    /// Raw bytes of the text.
    Bytes(Vec<u8>),
    /// A base-10 signed integer.
    Int64(i64),
    /// A floating point number.
    Float64(f64),
    /// A boolean.
    Bool(bool),
}

impl Value {
    fn describe(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Str(_) => "String",
            Value::Bytes(_) => "Vec<u8>",
            Value::Int64(_) => "i64",
            Value::Float64(_) => "f64",
            Value::Bool(_) => "bool",
        }
    }

    fn mismatch<T: EnvField>(self) -> BindError {
        BindError::usage(format!(
            "a {} value cannot be assigned to a field of type {}",
            self.describe(),
            T::FIELD_TYPE
        ))
    }
}

/// A Rust type that can be populated from an environment variable.
///
/// Implemented for `String`, `Vec<u8>`, `i64`, `f64`, `bool`, and the
/// `Option` of each. `Vec<T>` is accepted for any [`Element`] but only
/// `Vec<u8>` binds; other element types fail at bind time.
///
/// Deriving `Bindable` for a public field of any other type fails to compile:
///
/// ```compile_fail,E0277
/// use envbind::Bindable;
///
/// #[derive(Bindable)]
/// pub struct Canvas {
///     pub width: i32,
/// }
/// ```
///
/// Skipping the field makes it acceptable:
///
/// ```
/// use envbind::Bindable;
///
/// #[derive(Default, Bindable)]
/// pub struct Canvas {
///     #[env(skip)]
///     pub width: i32,
///     pub height: i64,
/// }
/// # let canvas = Canvas::from_snapshot(&envbind::Snapshot::from([("height", "4")])).unwrap();
/// # assert_eq!((canvas.width, canvas.height), (0, 4));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be bound from an environment variable",
    label = "unsupported field type",
    note = "supported types are String, Vec<u8>, i64, f64, bool and Option of each; \
            annotate the field with #[env(skip)] to leave it alone"
)]
pub trait EnvField: Sized {
    /// How the binder parses text for this type.
    const FIELD_TYPE: FieldType;

    /// Take the converted value.
    fn from_value(value: Value) -> Result<Self, BindError>;
}

impl EnvField for String {
    const FIELD_TYPE: FieldType = FieldType::Required(Kind::Str);

    fn from_value(value: Value) -> Result<Self, BindError> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(other.mismatch::<Self>()),
        }
    }
}

impl EnvField for i64 {
    const FIELD_TYPE: FieldType = FieldType::Required(Kind::Int64);

    fn from_value(value: Value) -> Result<Self, BindError> {
        match value {
            Value::Int64(n) => Ok(n),
            other => Err(other.mismatch::<Self>()),
        }
    }
}

impl EnvField for f64 {
    const FIELD_TYPE: FieldType = FieldType::Required(Kind::Float64);

    fn from_value(value: Value) -> Result<Self, BindError> {
        match value {
            Value::Float64(n) => Ok(n),
            other => Err(other.mismatch::<Self>()),
        }
    }
}

impl EnvField for bool {
    const FIELD_TYPE: FieldType = FieldType::Required(Kind::Bool);

    fn from_value(value: Value) -> Result<Self, BindError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(other.mismatch::<Self>()),
        }
    }
}

impl<T: Element> EnvField for Vec<T> {
    const FIELD_TYPE: FieldType = if T::IS_BYTE {
        FieldType::Required(Kind::Bytes)
    } else {
        FieldType::Sequence(T::NAME)
    };

    fn from_value(value: Value) -> Result<Self, BindError> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Bytes(bytes) => T::from_bytes(bytes).ok_or_else(|| {
                BindError::usage(format!("{} cannot hold raw bytes", Self::FIELD_TYPE))
            }),
            other => Err(other.mismatch::<Self>()),
        }
    }
}

macro_rules! impl_optional {
    ($($ty:ty => $kind:ident, $variant:ident;)*) => {
        $(
            impl EnvField for Option<$ty> {
                const FIELD_TYPE: FieldType = FieldType::Optional(Kind::$kind);

                fn from_value(value: Value) -> Result<Self, BindError> {
                    match value {
                        Value::Null => Ok(None),
                        Value::$variant(inner) => Ok(Some(inner)),
                        other => Err(other.mismatch::<Self>()),
                    }
                }
            }
        )*
    };
}

impl_optional! {
    String => Str, Str;
    Vec<u8> => Bytes, Bytes;
    i64 => Int64, Int64;
    f64 => Float64, Float64;
    bool => Bool, Bool;
}

/// Element type of a `Vec<T>` field.
///
/// Only `u8` can be bound; the other implementations exist so that such a
/// field is reported as an unsupported sequence when binding rather than
/// failing to compile.
pub trait Element: Sized {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// Whether this is the byte type.
    const IS_BYTE: bool = false;

    /// Reinterpret raw bytes as elements of this type.
    fn from_bytes(_bytes: Vec<u8>) -> Option<Vec<Self>> {
        None
    }
}

impl Element for u8 {
    const NAME: &'static str = "u8";
    const IS_BYTE: bool = true;

    fn from_bytes(bytes: Vec<u8>) -> Option<Vec<Self>> {
        Some(bytes)
    }
}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                const NAME: &'static str = stringify!($ty);
            }
        )*
    };
}

impl_element!(i8, i16, i32, i64, i128, isize, u16, u32, u64, u128, usize, f32, f64, bool, char, String);
