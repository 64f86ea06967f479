// env-rs: Typed Environment Variable Access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Environment (BTreeMap<String, String>, snapshot at construction)
//! Sources: current_env(), Environment::from_process(), Environment::from_map()
//! Ops: get/set/delete, contains_key/get_item/insert/remove, prefix/map
//! ```
//!
//! - **Case-insensitive on Windows** by default (`default_sensitive()`)
//! - **Snapshot**: outside changes after construction are not observed
//! - **Write-through**: `set` on a process-backed view updates the process

pub mod container;
pub mod types;

#[cfg(test)]
mod tests;

pub use container::Environment;
pub use types::{EnvOptions, EnvSource, MissingKeyPolicy, default_sensitive};

/// Captures the current process environment with default options.
///
/// Defaults: platform case policy, missing names yield `None`, read-only.
#[must_use]
pub fn current_env() -> Environment {
    Environment::from_process(EnvOptions::default())
}
