// env-rs: Typed Environment Variable Access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config file
//! --log-level N     ← Console verbosity (0-6)
//! --log-file FILE   ← Log file path
//! --insensitive     ← environment.sensitive = false
//! --sensitive       ← environment.sensitive = true
//! --blankify        ← environment.blankify = true
//! --no-noneify      ← environment.noneify = false
//!
//! Precedence: CLI flags > ENVRS_* > --config > envrs.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::Settings;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to an additional TOML configuration file.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Matches variable names case-insensitively.
    #[arg(short = 'I', long, conflicts_with = "sensitive")]
    pub insensitive: bool,

    /// Matches variable names case-sensitively.
    #[arg(long)]
    pub sensitive: bool,

    /// Treats missing variables as empty.
    #[arg(short = 'b', long)]
    pub blankify: bool,

    /// Fails on missing variables instead of printing nothing.
    #[arg(long = "no-noneify")]
    pub no_noneify: bool,
}

impl GlobalOptions {
    /// Applies command-line flags on top of loaded settings.
    pub fn apply_to(&self, settings: &mut Settings) {
        if self.insensitive {
            settings.environment.sensitive = Some(false);
        } else if self.sensitive {
            settings.environment.sensitive = Some(true);
        }

        if self.blankify {
            settings.environment.blankify = true;
        }

        if self.no_noneify {
            settings.environment.noneify = false;
        }

        if let Some(level) = self.log_level.and_then(crate::logging::LogLevel::from_u8) {
            settings.log.level = level;
        }

        if let Some(file) = &self.log_file {
            settings.log.file = Some(file.clone());
        }
    }
}
