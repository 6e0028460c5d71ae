//! Error types for binding environment variables

/// Errors that can occur while binding environment variables into a record.
///
/// The first error aborts the bind. Fields processed before it keep their new
/// values; fields after it are left untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BindError {
    /// The record's descriptor table or field assignment was used incorrectly.
    ///
    /// `#[derive(Bindable)]` rules this out at compile time; it only occurs
    /// with hand-written [`Bindable`](crate::Bindable) implementations.
    #[error("invalid bind target: {message}")]
    Usage {
        /// Description of the misuse
        message: String,
    },

    /// A present value could not be converted into the field's type.
    #[error("cannot parse {value:?} into type {type_name} (environment variable '{key}')")]
    Parse {
        /// Environment variable the text was read from
        key: String,
        /// The offending literal text
        value: String,
        /// Declared type of the field, e.g. `i64` or `Option<bool>`
        type_name: String,
    },

    /// A required numeric or boolean field's environment variable is not set.
    #[error("environment variable '{key}' is not set; cannot parse into type {type_name}")]
    NotSet {
        /// Name of the missing environment variable
        key: String,
        /// Declared type of the field
        type_name: String,
    },

    /// The field's declared type (or sequence element type) cannot be bound.
    #[error("unsupported underlying type: {type_name} (field '{field}')")]
    Unsupported {
        /// Name of the field as declared on the record
        field: String,
        /// Name of the unsupported type
        type_name: String,
    },
}

impl BindError {
    /// Create a usage error (used by macro-generated code)
    #[doc(hidden)]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    pub(crate) fn parse(
        key: impl Into<String>,
        value: impl Into<String>,
        type_name: impl std::fmt::Display,
    ) -> Self {
        Self::Parse {
            key: key.into(),
            value: value.into(),
            type_name: type_name.to_string(),
        }
    }

    pub(crate) fn not_set(key: impl Into<String>, type_name: impl std::fmt::Display) -> Self {
        Self::NotSet {
            key: key.into(),
            type_name: type_name.to_string(),
        }
    }

    pub(crate) fn unsupported(field: impl Into<String>, type_name: impl std::fmt::Display) -> Self {
        Self::Unsupported {
            field: field.into(),
            type_name: type_name.to_string(),
        }
    }
}
