// env-rs: Typed Environment Variable Access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> writer (stdout in main)
//!   get, list, prefix, map
//! ```
//!
//! Handlers take the output writer explicitly so tests can capture it.

pub mod get;
pub mod list;


use std::collections::BTreeMap;
use std::io::Write;

use crate::error::Result;

/// Writes a map as `NAME=value` lines or a pretty JSON object.
pub(crate) fn write_pairs<W: Write>(
    out: &mut W,
    pairs: &BTreeMap<String, String>,
    json: bool,
) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, pairs)?;
        writeln!(out)?;
    } else {
        for (name, value) in pairs {
            writeln!(out, "{name}={value}")?;
        }
    }
    Ok(())
}
