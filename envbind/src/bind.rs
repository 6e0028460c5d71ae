//! The binding routine.

use anyhow::Context;
use tracing::{debug, trace};

use crate::de::convert;
use crate::env::{Env, ProcessEnv};
use crate::error::BindError;
use crate::field::FieldDescriptor;
use crate::value::Value;

/// A record whose fields can be populated from environment variables.
///
/// Usually derived with `#[derive(Bindable)]`. A manual implementation
/// provides the descriptor table and assigns converted values by table index.
pub trait Bindable {
    /// Prepended to every resolved environment variable name.
    const PREFIX: &'static str = "";

    /// Descriptor of every field, in declaration order.
    fn fields() -> &'static [FieldDescriptor];

    /// Store `value` into the field at `index` of [`Bindable::fields`].
    ///
    /// Only called for fields the binder does not skip.
    fn assign(&mut self, index: usize, value: Value) -> Result<(), BindError>;

    /// Build a default record and bind `env` into it.
    fn from_snapshot<E: Env + ?Sized>(env: &E) -> Result<Self, BindError>
    where
        Self: Default + Sized,
    {
        let mut record = Self::default();
        bind(&mut record, env)?;
        Ok(record)
    }

    /// Build a default record and bind the process environment into it.
    ///
    /// # Errors
    ///
    /// - Required numeric or boolean variables are not set
    /// - Variable values cannot be parsed into the field types
    /// - A field type cannot be bound
    fn from_env() -> anyhow::Result<Self>
    where
        Self: Default + Sized,
    {
        let mut record = Self::default();
        from_env(&mut record)?;
        Ok(record)
    }
}

/// Populate every public, non-skipped field of `record` from `env`.
///
/// Fields are processed in declaration order and the first error is returned
/// as is. Fields bound before the error keep their new values.
pub fn bind<T, E>(record: &mut T, env: &E) -> Result<(), BindError>
where
    T: Bindable,
    E: Env + ?Sized,
{
    let fields = T::fields();
    validate(fields)?;
    debug!(
        record = std::any::type_name::<T>(),
        fields = fields.len(),
        "binding environment"
    );

    for (index, field) in fields.iter().enumerate() {
        let Some(key) = field.key(T::PREFIX) else {
            trace!(field = field.name, "skipping field");
            continue;
        };
        if !field.ty.is_supported() {
            return Err(BindError::unsupported(field.name, field.ty));
        }

        let raw = env.lookup(&key);
        debug!(field = field.name, key = %key, present = raw.is_some(), "binding field");
        let value = convert(raw, field.ty, field.name, &key)?;
        record.assign(index, value)?;
    }

    debug!(record = std::any::type_name::<T>(), "environment bound");
    Ok(())
}

/// Populate `record` from the live process environment.
///
/// # Errors
///
/// Returns the [`BindError`] of the first failing field, with context naming
/// the record type.
pub fn from_env<T: Bindable>(record: &mut T) -> anyhow::Result<()> {
    bind(record, &ProcessEnv).with_context(|| {
        format!(
            "failed to bind environment variables into {}",
            std::any::type_name::<T>()
        )
    })
}

fn validate(fields: &[FieldDescriptor]) -> Result<(), BindError> {
    if let Some(index) = fields.iter().position(|field| field.name.is_empty()) {
        return Err(BindError::usage(format!(
            "field descriptor #{index} has an empty name"
        )));
    }
    Ok(())
}
