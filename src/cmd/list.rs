// env-rs: Typed Environment Variable Access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List, prefix and map command implementations.

use std::io::Write;

use super::write_pairs;
use crate::cli::{ListArgs, MapArgs, PrefixArgs};
use crate::core::env::Environment;
use crate::error::Result;

/// Prints every variable in sorted order.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn run_list_command<W: Write>(args: &ListArgs, env: &Environment, out: &mut W) -> Result<()> {
    write_pairs(out, &env.to_map(), args.json)
}

/// Prints the variables whose names start with the prefix.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn run_prefix_command<W: Write>(
    args: &PrefixArgs,
    env: &Environment,
    out: &mut W,
) -> Result<()> {
    let found = env.prefix(&args.prefix, !args.keep_case);
    write_pairs(out, &found, args.json)
}

/// Prints source variables under their new names.
///
/// # Errors
///
/// Returns an error if a source variable is missing or output cannot be written.
pub fn run_map_command<W: Write>(args: &MapArgs, env: &Environment, out: &mut W) -> Result<()> {
    let mapped = env.map(args.renames.iter().map(|(o, s)| (o.as_str(), s.as_str())))?;
    write_pairs(out, &mapped, args.json)
}
