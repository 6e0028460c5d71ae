//! Bind environment variables to struct fields
//!
//! `envbind` populates the public fields of a struct from environment
//! variables. Each field's annotation selects the variable it is read from and
//! its declared type selects how the text is parsed.
//!
//! # Features
//!
//! - **Declarative**: descriptor tables generated with `#[derive(Bindable)]`
//! - **Injected environment**: bind from the live process environment or any
//!   [`Env`] implementation, such as an in-memory [`Snapshot`]
//! - **Empty is not missing**: a variable set to `""` is distinct from an
//!   unset one
//! - **Optional fields**: `Option<T>` fields bind to `None` when unset
//!
//! # Value Parsing
//!
//! | Field type | Unset | Set to `s` |
//! |---|---|---|
//! | `String` | `""` | `s` |
//! | `Vec<u8>` | empty | bytes of `s` |
//! | `i64` | error | base-10 integer |
//! | `f64` | error | float |
//! | `bool` | error | `1`, `0`, `t`, `f`, `true`, `false` (any case) |
//! | `Option<T>` | `None` | `Some(parsed)` |
//!
//! # Example
//!
//! ```rust
//! use envbind::{Bindable, Snapshot};
//!
//! #[derive(Debug, Default, Bindable)]
//! struct Config {
//!     #[env = "foo"]
//!     pub greeting: String,
//!     pub port: i64,
//!     pub ratio: Option<f64>,
//! }
//!
//! # fn main() -> Result<(), envbind::BindError> {
//! let env = Snapshot::from([("foo", "hello"), ("port", "342")]);
//! let config = Config::from_snapshot(&env)?;
//! assert_eq!(config.greeting, "hello");
//! assert_eq!(config.port, 342);
//! assert_eq!(config.ratio, None);
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[env = "NAME"]` or `#[env(name = "NAME")]`
//!
//! Read the field from `NAME` instead of the field's own name. Without an
//! annotation the field name is used exactly, case included.
//!
//! ## `#[env = "-"]` or `#[env(skip)]`
//!
//! Never bind the field. Private fields are always skipped.
//!
//! ```rust
//! # use envbind::{Bindable, Snapshot};
//! #[derive(Default, Bindable)]
//! pub struct Config {
//!     #[env(skip)]
//!     pub cache: Vec<String>,
//!     secret: String,
//! }
//! # let mut config = Config::default();
//! # envbind::bind(&mut config, &Snapshot::from([("secret", "x")])).unwrap();
//! # assert!(config.secret.is_empty());
//! ```
//!
//! ## `#[env(prefix = "APP_")]`
//!
//! On the struct: prepend `APP_` to every variable name.
//!
//! ```rust
//! # use envbind::{Bindable, Snapshot};
//! #[derive(Default, Bindable)]
//! #[env(prefix = "APP_")]
//! struct Config {
//!     // Loaded from APP_PORT
//!     #[env = "PORT"]
//!     pub port: Option<i64>,
//! }
//! # let config = Config::from_snapshot(&Snapshot::from([("APP_PORT", "80")])).unwrap();
//! # assert_eq!(config.port, Some(80));
//! ```

mod bind;
mod de;
mod env;
mod error;
mod field;
mod value;

pub use bind::{bind, from_env, Bindable};
pub use de::parse_bool;
pub use env::{Env, ProcessEnv, Snapshot};
pub use envbind_derive::Bindable;
pub use error::BindError;
pub use field::{FieldDescriptor, FieldType, Kind, SKIP};
pub use value::{Element, EnvField, Value};

// Re-export for callers of `from_env`
pub use anyhow;
