// env-rs: Typed Environment Variable Access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for `envrs` using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envrs [global options] <command>
//! get NAME [--as KIND] [--sep S]
//! list [--json]
//! prefix PREFIX [--keep-case] [--json]
//! map OUT=SRC...
//! version
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// A simpler interface to environment variables.
#[derive(Debug, Parser)]
#[command(
    name = "envrs",
    author,
    version,
    about = "Typed access to environment variables",
    long_about = "env-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads the process environment and prints variables, optionally\n\
                  converted to booleans, numbers, lists, paths or JSON.",
    after_help = "CONFIG FILES:\n\n\
                  envrs reads `envrs.toml` from the current directory if present,\n\
                  then the file given with --config, then ENVRS_* variables such as\n\
                  ENVRS_ENVIRONMENT_BLANKIFY=true. Command-line flags win."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Prints a single variable.
    Get(GetArgs),

    /// Lists all variables.
    List(ListArgs),

    /// Lists variables whose names start with a prefix.
    Prefix(PrefixArgs),

    /// Prints variables under new names.
    Map(MapArgs),
}

/// Conversion applied by `get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Conversion {
    /// Raw string value.
    #[default]
    Str,
    Bool,
    Int,
    Float,
    /// One item per line.
    List,
    Path,
    /// One path per line.
    PathList,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Variable name.
    pub name: String,

    /// Converts the value before printing.
    #[arg(short = 'a', long = "as", value_enum, default_value_t = Conversion::Str)]
    pub conversion: Conversion,

    /// List separator for `list` and `path-list` (defaults to the platform path separator).
    #[arg(short = 's', long = "sep", value_name = "SEP")]
    pub separator: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Prints a JSON object instead of NAME=value lines.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct PrefixArgs {
    /// Name prefix to match.
    pub prefix: String,

    /// Keeps names as stored instead of lowercasing them.
    #[arg(short = 'k', long = "keep-case")]
    pub keep_case: bool,

    /// Prints a JSON object instead of NAME=value lines.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct MapArgs {
    /// Pairs of OUTPUT=SOURCE names.
    #[arg(value_name = "OUT=SRC", required = true, value_parser = parse_rename)]
    pub renames: Vec<(String, String)>,

    /// Prints a JSON object instead of NAME=value lines.
    #[arg(long)]
    pub json: bool,
}

/// Parses an `OUT=SRC` pair.
fn parse_rename(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((out, src)) if !out.is_empty() && !src.is_empty() => {
            Ok((out.to_string(), src.to_string()))
        }
        _ => Err(format!("expected OUT=SRC, got '{s}'")),
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
