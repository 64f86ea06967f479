// env-rs: Typed Environment Variable Access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment struct and lookup policy.
//!
//! # Architecture
//!
//! ```text
//! Environment
//! vars: BTreeMap<String, String>  (keys folded when insensitive)
//! source: Process | Mapping       (Process => set() writes through)
//!
//! attribute-style  get/set/delete        blank/none fallback, write-through
//! mapping-style    contains_key/get_item/insert/remove/len/keys/iter
//!                  always KeyNotFound on miss, never writes through
//! ```

use std::collections::BTreeMap;
use tracing::{debug, trace};

use super::types::{EnvOptions, EnvSource, Fallback, MissingKeyPolicy, fold_key};
use crate::core::entry::Entry;
use crate::error::{EnvError, EnvResult};

/// A view over a set of environment variables.
///
/// The variables are copied once at construction. Entries handed out by
/// lookups are independent copies and do not observe later writes.
#[derive(Debug, Clone)]
pub struct Environment {
    vars: BTreeMap<String, String>,
    source: EnvSource,
    sensitive: bool,
    policy: MissingKeyPolicy,
    readonly: bool,
}

impl Default for Environment {
    fn default() -> Self {
        Self::from_process(EnvOptions::default())
    }
}

impl Environment {
    /// Snapshots the live process environment.
    ///
    /// Names or values that are not valid UTF-8 are converted lossily.
    #[must_use]
    pub fn from_process(options: EnvOptions) -> Self {
        let vars = std::env::vars_os().map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        });
        Self::build(vars, EnvSource::Process, &options)
    }

    /// Creates an environment over an injected mapping.
    pub fn from_map<I, K, V>(vars: I, options: EnvOptions) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars.into_iter().map(|(k, v)| (k.into(), v.into()));
        Self::build(vars, EnvSource::Mapping, &options)
    }

    fn build(
        vars: impl Iterator<Item = (String, String)>,
        source: EnvSource,
        options: &EnvOptions,
    ) -> Self {
        let sensitive = options.sensitive();
        let vars: BTreeMap<String, String> = if sensitive {
            vars.collect()
        } else {
            vars.map(|(k, v)| (k.to_lowercase(), v)).collect()
        };

        debug!(
            count = vars.len(),
            ?source,
            sensitive,
            readonly = options.readonly(),
            "environment created"
        );

        Self {
            vars,
            source,
            sensitive,
            policy: options.missing_key_policy(),
            readonly: options.readonly(),
        }
    }

    #[must_use]
    pub const fn source(&self) -> EnvSource {
        self.source
    }

    #[must_use]
    pub const fn is_sensitive(&self) -> bool {
        self.sensitive
    }

    #[must_use]
    pub const fn is_readonly(&self) -> bool {
        self.readonly
    }

    #[must_use]
    pub const fn missing_key_policy(&self) -> MissingKeyPolicy {
        self.policy
    }

    // --- Attribute-style access ---

    /// Looks up a variable, applying the missing-key policy.
    ///
    /// - found: a fresh [`Entry`]
    /// - missing with `BLANKIFY`: the name is registered with an empty value
    ///   and a blank entry is returned, so repeated lookups agree
    /// - missing with `NONEIFY`: `Ok(None)`
    ///
    /// # Errors
    ///
    /// Returns `EnvError::KeyNotFound` if the variable is missing and neither
    /// fallback is enabled.
    pub fn get(&mut self, name: &str) -> EnvResult<Option<Entry>> {
        let key = fold_key(name, self.sensitive).into_owned();

        if let Some(value) = self.vars.get(&key) {
            return Ok(Some(Entry::new(name, value.as_str())));
        }

        match self.policy.fallback() {
            Fallback::Blank => {
                trace!(name = %key, "registering blank entry");
                self.vars.insert(key, String::new());
                Ok(Some(Entry::blank()))
            }
            Fallback::Nothing => Ok(None),
            Fallback::Fail => Err(EnvError::key_not_found(name)),
        }
    }

    /// Sets a variable.
    ///
    /// When the environment was built from the process environment, the
    /// value is also written to the live process environment so that child
    /// processes spawned afterwards see it.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::Immutable` if the environment is read-only,
    /// `EnvError::InvalidName` if the name is empty or contains `=` or NUL,
    /// and `EnvError::InvalidValue` if the value contains NUL. Nothing is
    /// written when an error is returned.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> EnvResult<()> {
        let value = value.into();
        self.ensure_writable(name)?;
        validate_pair(name, &value)?;

        if self.source == EnvSource::Process {
            debug!(name, "writing through to process environment");
            // SAFETY: this type is a single-threaded convenience layer; callers
            // must not mutate the environment while other threads read it.
            unsafe { std::env::set_var(name, &value) };
        }

        self.vars
            .insert(fold_key(name, self.sensitive).into_owned(), value);
        Ok(())
    }

    /// Removes a variable from this view. The process environment is untouched.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::Immutable` if the environment is read-only, or
    /// `EnvError::KeyNotFound` if the variable does not exist.
    pub fn delete(&mut self, name: &str) -> EnvResult<()> {
        self.remove(name).map(|_| ())
    }

    // --- Mapping-style access ---

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.vars.contains_key(fold_key(name, self.sensitive).as_ref())
    }

    /// Looks up a variable without any fallback.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::KeyNotFound` if the variable does not exist,
    /// regardless of the blankify/noneify policy.
    pub fn get_item(&self, name: &str) -> EnvResult<Entry> {
        self.vars
            .get(fold_key(name, self.sensitive).as_ref())
            .map(|value| Entry::new(name, value.as_str()))
            .ok_or_else(|| EnvError::key_not_found(name))
    }

    /// Stores a variable in this view only, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::Immutable` if the environment is read-only.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) -> EnvResult<Option<String>> {
        self.ensure_writable(name)?;
        Ok(self
            .vars
            .insert(fold_key(name, self.sensitive).into_owned(), value.into()))
    }

    /// Removes a variable from this view, returning its value.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::Immutable` if the environment is read-only, or
    /// `EnvError::KeyNotFound` if the variable does not exist.
    pub fn remove(&mut self, name: &str) -> EnvResult<String> {
        self.ensure_writable(name)?;
        self.vars
            .remove(fold_key(name, self.sensitive).as_ref())
            .ok_or_else(|| EnvError::key_not_found(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Returns an iterator over variable names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// Returns an iterator over variables in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns all variables as a plain map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.vars.clone()
    }

    // --- Helpers ---

    /// Returns every variable whose name starts with `prefix`.
    ///
    /// Names are matched as stored, so on a case-insensitive environment the
    /// prefix is folded too. With `lowercase` the returned names are lowercased.
    #[must_use]
    pub fn prefix(&self, prefix: &str, lowercase: bool) -> BTreeMap<String, String> {
        let prefix = fold_key(prefix, self.sensitive);
        self.vars
            .iter()
            .filter(|(key, _)| key.starts_with(prefix.as_ref()))
            .map(|(key, value)| {
                let key = if lowercase {
                    key.to_lowercase()
                } else {
                    key.clone()
                };
                (key, value.clone())
            })
            .collect()
    }

    /// Builds a map of output names to the values of the named variables.
    ///
    /// ```
    /// use env_rs::core::env::{EnvOptions, Environment};
    ///
    /// let env = Environment::from_map([("USER", "fred")], EnvOptions::default());
    /// let mapped = env.map([("username", "USER")])?;
    /// assert_eq!(mapped["username"], "fred");
    /// # Ok::<(), env_rs::error::EnvError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `EnvError::KeyNotFound` for the first source variable that does
    /// not exist.
    pub fn map<I, K, S>(&self, renames: I) -> EnvResult<BTreeMap<String, String>>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: AsRef<str>,
    {
        renames
            .into_iter()
            .map(|(output, source)| {
                let output: String = output.into();
                let entry = self.get_item(source.as_ref())?;
                Ok((output, entry.into_value()))
            })
            .collect()
    }

    fn ensure_writable(&self, name: &str) -> EnvResult<()> {
        if self.readonly {
            debug!(name, "rejected write to read-only environment");
            return Err(EnvError::immutable(name));
        }
        Ok(())
    }
}

/// Rejects pairs the OS environment cannot hold.
fn validate_pair(name: &str, value: &str) -> EnvResult<()> {
    if name.is_empty() || name.contains(['=', '\0']) {
        debug!(name, "rejected invalid variable name");
        return Err(EnvError::invalid_name(name));
    }
    if value.contains('\0') {
        debug!(name, "rejected value containing NUL");
        return Err(EnvError::invalid_value(name));
    }
    Ok(())
}
