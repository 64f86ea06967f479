// env-rs: Typed Environment Variable Access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered settings loader for `envrs`.
//!
//! Sources are applied in the order they are added; the `ENVRS_*`
//! variables always go last, after every file and inline string.
//!
//! ```text
//! envrs.toml (optional) -> --config FILE -> inline TOML -> overrides -> ENVRS_*
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};

use super::Settings;
use crate::error::Result;

/// How a settings source was added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A file that must exist.
    File,
    /// A file that is skipped when absent.
    Optional,
    /// TOML passed as a string.
    Inline,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::File => "file",
            Self::Optional => "optional",
            Self::Inline => "string",
        })
    }
}

/// Collects TOML files, inline TOML and `<PREFIX>_*` variables into [`Settings`].
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    env_source: Option<HashMap<String, String>>,
    sources: Vec<(SourceKind, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
            env_prefix: None,
            env_source: None,
            sources: Vec::new(),
        }
    }

    /// Adds a TOML file; `build()` fails if it is missing.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.with_file(path.as_ref(), true)
    }

    /// Adds a TOML file that is ignored when it does not exist.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.with_file(path.as_ref(), false)
    }

    fn with_file(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);

        if required {
            self.sources.push((SourceKind::File, path.to_path_buf()));
        } else if path.exists() {
            self.sources.push((SourceKind::Optional, path.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources
            .push((SourceKind::Inline, PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<SECTION>_<KEY>` variables when building.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Uses the given variables instead of the process environment for the
    /// prefixed source.
    #[must_use]
    pub fn with_env_source(mut self, vars: HashMap<String, String>) -> Self {
        self.env_source = Some(vars);
        self
    }

    /// Forces a dotted key such as `environment.readonly` to a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the key path is malformed.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .with_context(|| format!("invalid override for '{key}'"))?;
        Ok(self)
    }

    /// Merges every source and deserializes the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a file is not valid
    /// TOML, or the merged values do not fit [`Settings`] (unknown keys
    /// included).
    pub fn build(self) -> Result<Settings> {
        let builder = match self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(&prefix)
                    .separator("_")
                    .try_parsing(true)
                    .source(self.env_source),
            ),
            None => self.builder,
        };

        let merged = builder.build().context("failed to read envrs settings")?;
        merged
            .try_deserialize()
            .context("invalid envrs settings")
    }

    /// Sources added so far, skipping optional files that were absent.
    #[must_use]
    pub fn sources(&self) -> &[(SourceKind, PathBuf)] {
        &self.sources
    }

    /// One numbered line per source, e.g. `1. [optional] envrs.toml`.
    #[must_use]
    pub fn format_sources(&self) -> Vec<String> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, (kind, path))| format!("{}. [{kind}] {}", i + 1, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
