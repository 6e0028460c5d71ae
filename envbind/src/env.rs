//! Environment accessors consumed by the binder.

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};

/// Read-only view over a set of environment variables.
///
/// A variable may be defined with an empty value; `exists` must report it as
/// present so that `""` is never confused with "not set".
pub trait Env {
    /// Whether `key` is defined, regardless of its value.
    fn exists(&self, key: &str) -> bool;

    /// Value of `key`, or an empty string when it is not defined.
    fn get(&self, key: &str) -> String;

    /// `Some(value)` when `key` is defined, `None` otherwise.
    ///
    /// Issues at most one `exists` and one `get`.
    fn lookup(&self, key: &str) -> Option<String> {
        if self.exists(key) {
            Some(self.get(key))
        } else {
            None
        }
    }
}

impl<E: Env + ?Sized> Env for &E {
    fn exists(&self, key: &str) -> bool {
        (**self).exists(key)
    }

    fn get(&self, key: &str) -> String {
        (**self).get(key)
    }

    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<S: BuildHasher> Env for HashMap<String, String, S> {
    fn exists(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn get(&self, key: &str) -> String {
        HashMap::get(self, key).cloned().unwrap_or_default()
    }
}

impl Env for BTreeMap<String, String> {
    fn exists(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn get(&self, key: &str) -> String {
        BTreeMap::get(self, key).cloned().unwrap_or_default()
    }
}

/// The live process environment, read at call time.
///
/// Values that are not valid Unicode are converted lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn exists(&self, key: &str) -> bool {
        env::var_os(key).is_some()
    }

    fn get(&self, key: &str) -> String {
        env::var_os(key)
            .map(|value| value.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn lookup(&self, key: &str) -> Option<String> {
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

/// A fixed, in-memory environment.
///
/// Serializes as a flat JSON object of string values, which makes it a
/// convenient fixture format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    vars: BTreeMap<String, String>,
}

impl Snapshot {
    /// An empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are converted lossily.
    pub fn capture() -> Self {
        env::vars_os()
            .map(|(key, value)| {
                (
                    key.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }

    /// Define `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(key.into(), value.into())
    }

    /// Undefine `key`.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    /// Number of defined variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variable is defined.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Names of all defined variables, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }
}

impl Env for Snapshot {
    fn exists(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    fn get(&self, key: &str) -> String {
        self.vars.get(key).cloned().unwrap_or_default()
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for Snapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Snapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(vars: [(K, V); N]) -> Self {
        vars.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for Snapshot {
    fn from(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }
}
