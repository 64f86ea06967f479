// env-rs: Typed Environment Variable Access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! A single environment variable with on-demand conversions.
//!
//! ```text
//! Entry { name, value }      derefs to str (value)
//!   as_bool      "1"/"yes"/"true" → Some(true), "0"/"no"/"false" → Some(false)
//!   as_int       i64   (EnvError::Parse on failure)
//!   as_float     f64   (EnvError::Parse on failure)
//!   as_list      split on PATH_LIST_SEPARATOR or a custom one
//!   as_path      PathBuf
//!   as_path_list Vec<PathBuf>
//!   as_json      serde_json::Value / parse_json::<T>()
//! ```
//!
//! Equality, ordering and hashing only look at the value; the name is metadata.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::path::PathBuf;

use crate::error::{EnvResult, ParseError};

/// Separator between items of a path list (`PATH`, `XDG_DATA_DIRS`, ...).
pub const PATH_LIST_SEPARATOR: &str = if cfg!(windows) { ";" } else { ":" };

/// An immutable environment variable name/value pair.
#[derive(Clone, Default, Serialize)]
pub struct Entry {
    name: String,
    value: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the blank entry handed out for missing variables.
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            name: String::new(),
            value: String::new(),
        }
    }

    /// Returns the variable name as it was looked up.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes the entry, returning the plain value.
    #[must_use]
    pub fn into_value(self) -> String {
        self.value
    }

    /// Interprets the value as a boolean.
    ///
    /// Digit strings are true when non-zero. `yes`/`true` and `no`/`false`
    /// match case-insensitively. Anything else, the empty string included,
    /// yields `None` rather than an error.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        let value = self.value.as_str();
        if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
            return Some(value.bytes().any(|b| b != b'0'));
        }

        if value.eq_ignore_ascii_case("yes") || value.eq_ignore_ascii_case("true") {
            Some(true)
        } else if value.eq_ignore_ascii_case("no") || value.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }

    /// Parses the value as an integer.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::Parse` if the value is not an integer literal.
    pub fn as_int(&self) -> EnvResult<i64> {
        self.value.trim().parse().map_err(|source| {
            ParseError::Integer {
                name: self.name.clone(),
                value: self.value.clone(),
                source,
            }
            .into()
        })
    }

    /// Parses the value as a float.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::Parse` if the value is not a float literal.
    pub fn as_float(&self) -> EnvResult<f64> {
        self.value.trim().parse().map_err(|source| {
            ParseError::Float {
                name: self.name.clone(),
                value: self.value.clone(),
                source,
            }
            .into()
        })
    }

    /// Splits the value on [`PATH_LIST_SEPARATOR`].
    #[must_use]
    pub fn as_list(&self) -> Vec<&str> {
        self.as_list_with(PATH_LIST_SEPARATOR)
    }

    /// Splits the value on a custom separator.
    ///
    /// Follows `str::split`: an empty value yields one empty item.
    #[must_use]
    pub fn as_list_with(&self, sep: &str) -> Vec<&str> {
        self.value.split(sep).collect()
    }

    /// Returns the value as a path. The path is not checked for existence.
    #[must_use]
    pub fn as_path(&self) -> PathBuf {
        PathBuf::from(&self.value)
    }

    #[must_use]
    pub fn as_path_list(&self) -> Vec<PathBuf> {
        self.as_path_list_with(PATH_LIST_SEPARATOR)
    }

    #[must_use]
    pub fn as_path_list_with(&self, sep: &str) -> Vec<PathBuf> {
        self.value.split(sep).map(PathBuf::from).collect()
    }

    /// Parses the value as JSON.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::Parse` if the value is not well-formed JSON.
    pub fn as_json(&self) -> EnvResult<serde_json::Value> {
        self.parse_json()
    }

    /// Deserializes the value as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::Parse` if the value is malformed or does not fit `T`.
    pub fn parse_json<T: DeserializeOwned>(&self) -> EnvResult<T> {
        serde_json::from_str(&self.value).map_err(|source| {
            ParseError::Json {
                name: self.name.clone(),
                value: self.value.clone(),
                source,
            }
            .into()
        })
    }
}

impl Deref for Entry {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl AsRef<str> for Entry {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Prints `NAME=value`, or nothing when the value is empty.
impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.value.is_empty() {
            Ok(())
        } else {
            write!(f, "{}={}", self.name, self.value)
        }
    }
}

impl From<Entry> for String {
    fn from(entry: Entry) -> Self {
        entry.value
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Entry {}

impl PartialEq<str> for Entry {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for Entry {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl PartialEq<String> for Entry {
    fn eq(&self, other: &String) -> bool {
        &self.value == other
    }
}

impl PartialEq<Entry> for str {
    fn eq(&self, other: &Entry) -> bool {
        self == other.value
    }
}

impl PartialEq<Entry> for &str {
    fn eq(&self, other: &Entry) -> bool {
        *self == other.value
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}
