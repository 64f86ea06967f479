// env-rs: Typed Environment Variable Access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                   EnvError (~24 bytes)
//!                          |
//!     +-------------+------+------+--------------+-------------+
//!     |             |             |              |             |
//!     v             v             v              v             v
//! KeyNotFound   Immutable    InvalidName   InvalidValue      Parse
//!  Box<str>     Box<str>      Box<str>       Box<str>   Box<ParseError>
//!
//! ParseError: Integer, Float, Json
//! ConfigError: InvalidValue, NotFound
//!
//! Library code returns EnvResult<T>; the binary and config
//! loading use anyhow-based Result<T>.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvError`].
pub type EnvResult<T> = std::result::Result<T, EnvError>;

/// Errors raised by environment lookups, mutations and conversions.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The requested variable does not exist.
    #[error("environment variable not found: {0}")]
    KeyNotFound(Box<str>),

    /// A write was attempted on a read-only environment.
    #[error("environment is read-only, cannot modify '{0}'")]
    Immutable(Box<str>),

    /// The name cannot be stored in the process environment (empty, or
    /// contains `=` or NUL).
    #[error("invalid environment variable name: {0:?}")]
    InvalidName(Box<str>),

    /// The value for the named variable contains a NUL byte.
    #[error("invalid value for environment variable '{0}': contains NUL")]
    InvalidValue(Box<str>),

    /// A value could not be converted to the requested type.
    #[error("parse error: {0}")]
    Parse(#[from] Box<ParseError>),
}

impl EnvError {
    /// Creates a [`EnvError::KeyNotFound`] for the given variable name.
    pub fn key_not_found(name: impl Into<String>) -> Self {
        Self::KeyNotFound(name.into().into_boxed_str())
    }

    /// Creates an [`EnvError::Immutable`] for the given variable name.
    pub fn immutable(name: impl Into<String>) -> Self {
        Self::Immutable(name.into().into_boxed_str())
    }

    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName(name.into().into_boxed_str())
    }

    pub fn invalid_value(name: impl Into<String>) -> Self {
        Self::InvalidValue(name.into().into_boxed_str())
    }

    /// Returns true if this is a missing-key error.
    #[must_use]
    pub const fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound(_))
    }

    /// Returns true if this is a read-only violation.
    #[must_use]
    pub const fn is_immutable(&self) -> bool {
        matches!(self, Self::Immutable(_))
    }

    /// Returns true if a name or value was rejected before writing.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::InvalidName(_) | Self::InvalidValue(_))
    }

    /// Returns true if this is a conversion failure.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<ParseError> for EnvError {
    fn from(err: ParseError) -> Self {
        Self::Parse(Box::new(err))
    }
}

// --- Parse Errors ---

/// Conversion failures for entry values.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Value is not a valid integer literal.
    #[error("{name}={value:?} is not a valid integer: {source}")]
    Integer {
        name: String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Value is not a valid float literal.
    #[error("{name}={value:?} is not a valid float: {source}")]
    Float {
        name: String,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Value is not valid JSON, or does not match the requested shape.
    #[error("{name}={value:?} is not valid JSON: {source}")]
    Json {
        name: String,
        value: String,
        #[source]
        source: serde_json::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {}", .0.display())]
    NotFound(std::path::PathBuf),
}
