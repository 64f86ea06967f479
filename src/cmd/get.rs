// env-rs: Typed Environment Variable Access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Get command implementation.

use std::io::Write;
use tracing::debug;

use crate::cli::{Conversion, GetArgs};
use crate::core::entry::{Entry, PATH_LIST_SEPARATOR};
use crate::core::env::Environment;
use crate::error::Result;

/// Prints one variable, converted as requested.
///
/// Returns `Ok(false)` without printing when the variable is missing and the
/// environment returns `None`, or when a boolean conversion is indeterminate.
///
/// # Errors
///
/// Returns an error if the lookup fails, the conversion fails, or output
/// cannot be written.
pub fn run_get_command<W: Write>(
    args: &GetArgs,
    env: &mut Environment,
    out: &mut W,
) -> Result<bool> {
    let Some(entry) = env.get(&args.name)? else {
        debug!(name = %args.name, "variable not set");
        return Ok(false);
    };

    let sep = args.separator.as_deref().unwrap_or(PATH_LIST_SEPARATOR);
    write_converted(&entry, args.conversion, sep, out)
}

fn write_converted<W: Write>(
    entry: &Entry,
    conversion: Conversion,
    sep: &str,
    out: &mut W,
) -> Result<bool> {
    match conversion {
        Conversion::Str => writeln!(out, "{entry}")?,
        Conversion::Bool => match entry.as_bool() {
            Some(value) => writeln!(out, "{value}")?,
            None => {
                debug!(name = entry.name(), "value is not a recognized boolean");
                return Ok(false);
            }
        },
        Conversion::Int => writeln!(out, "{}", entry.as_int()?)?,
        Conversion::Float => writeln!(out, "{}", entry.as_float()?)?,
        Conversion::List => {
            for item in entry.as_list_with(sep) {
                writeln!(out, "{item}")?;
            }
        }
        Conversion::Path => writeln!(out, "{}", entry.as_path().display())?,
        Conversion::PathList => {
            for path in entry.as_path_list_with(sep) {
                writeln!(out, "{}", path.display())?;
            }
        }
        Conversion::Json => {
            serde_json::to_writer_pretty(&mut *out, &entry.as_json()?)?;
            writeln!(out)?;
        }
    }
    Ok(true)
}
