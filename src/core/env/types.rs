// env-rs: Typed Environment Variable Access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! # Architecture
//!
//! ```text
//! EnvOptions: sensitive | blankify | noneify | readonly (bon builder)
//! MissingKeyPolicy: BLANKIFY > NONEIFY > KeyNotFound
//! EnvSource: Process (write-through) | Mapping (in-memory only)
//! fold_key: lowercase when insensitive (PATH == Path == path)
//! ```

use bitflags::bitflags;
use bon::Builder;
use std::borrow::Cow;

/// Returns whether variable names are case-sensitive on this platform.
///
/// Windows treats `PATH` and `Path` as the same variable; other platforms do not.
#[must_use]
pub const fn default_sensitive() -> bool {
    !cfg!(windows)
}

/// Folds a key according to the case policy.
pub(super) fn fold_key(key: &str, sensitive: bool) -> Cow<'_, str> {
    if sensitive {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(key.to_lowercase())
    }
}

bitflags! {
    /// What attribute-style lookup does when a variable is missing.
    ///
    /// With no flag set the lookup fails with `EnvError::KeyNotFound`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MissingKeyPolicy: u8 {
        /// Register and return a blank entry. Wins over `NONEIFY`.
        const BLANKIFY = 0x01;
        /// Return `None`.
        const NONEIFY = 0x02;
    }
}

/// Resolved behavior for a single missing-key lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Fallback {
    Blank,
    Nothing,
    Fail,
}

impl MissingKeyPolicy {
    pub(super) const fn fallback(self) -> Fallback {
        if self.contains(Self::BLANKIFY) {
            Fallback::Blank
        } else if self.contains(Self::NONEIFY) {
            Fallback::Nothing
        } else {
            Fallback::Fail
        }
    }
}

/// Where an environment's variables came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvSource {
    /// Snapshot of the live process environment; `set` writes through.
    Process,
    /// Injected mapping; writes stay in memory.
    Mapping,
}

/// Construction options for an `Environment`.
#[derive(Debug, Clone, Builder)]
pub struct EnvOptions {
    /// Case-sensitive name matching (platform default)
    #[builder(setters(name = with_sensitive), default = default_sensitive())]
    sensitive: bool,
    /// Return a blank entry for missing variables
    #[builder(setters(name = with_blankify), default = false)]
    blankify: bool,
    /// Return `None` for missing variables
    #[builder(setters(name = with_noneify), default = true)]
    noneify: bool,
    /// Reject all writes
    #[builder(setters(name = with_readonly), default = true)]
    readonly: bool,
}

impl Default for EnvOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl EnvOptions {
    #[must_use]
    pub const fn sensitive(&self) -> bool {
        self.sensitive
    }

    #[must_use]
    pub const fn blankify(&self) -> bool {
        self.blankify
    }

    #[must_use]
    pub const fn noneify(&self) -> bool {
        self.noneify
    }

    #[must_use]
    pub const fn readonly(&self) -> bool {
        self.readonly
    }

    /// Combines the blankify/noneify switches into a lookup policy.
    #[must_use]
    pub fn missing_key_policy(&self) -> MissingKeyPolicy {
        let mut policy = MissingKeyPolicy::empty();
        policy.set(MissingKeyPolicy::BLANKIFY, self.blankify);
        policy.set(MissingKeyPolicy::NONEIFY, self.noneify);
        policy
    }
}
