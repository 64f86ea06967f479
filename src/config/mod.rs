// env-rs: Typed Environment Variable Access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for the `envrs` binary.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envrs.toml (cwd, optional)
//! 3. --config FILE
//! 4. ENVRS_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVRS_ENVIRONMENT_BLANKIFY=true  → environment.blankify = true
//! ENVRS_ENVIRONMENT_SENSITIVE=no   → environment.sensitive = false
//! ENVRS_LOG_LEVEL=4                → log.level = 4
//! ```

pub mod loader;


use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::env::EnvOptions;
use crate::error::{ConfigError, Result};
use crate::logging::LogLevel;

use loader::ConfigLoader;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Lookup policy for the environment view.
    pub environment: EnvironmentSettings,
    /// Logging options.
    pub log: LogSettings,
}

/// `[environment]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvironmentSettings {
    /// Case-sensitive names; unset means platform default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    pub blankify: bool,
    pub noneify: bool,
    pub readonly: bool,
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self {
            sensitive: None,
            blankify: false,
            noneify: true,
            readonly: true,
        }
    }
}

impl EnvironmentSettings {
    /// Converts the section into construction options.
    #[must_use]
    pub fn to_options(&self) -> EnvOptions {
        EnvOptions::builder()
            .maybe_with_sensitive(self.sensitive)
            .with_blankify(self.blankify)
            .with_noneify(self.noneify)
            .with_readonly(self.readonly)
            .build()
    }
}

/// `[log]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Console verbosity (0-6).
    pub level: LogLevel,
    /// Optional log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Write the log file as JSON lines.
    pub json: bool,
}

impl Settings {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use env_rs::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file_optional("envrs.toml")
    ///     .with_env_prefix("ENVRS")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist, or an error
    /// if it cannot be read, contains invalid TOML, or does not match the
    /// `Settings` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Settings` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }
}
