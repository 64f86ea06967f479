// env-rs: Typed Environment Variable Access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment access.
//!
//! ```text
//!          core
//!            |
//!     +------+------+
//!     v             v
//!    env          entry
//!     |             |
//! Environment     Entry
//! EnvOptions    as_bool/as_int/as_float
//! MissingKey    as_list/as_path/as_json
//! ```

pub mod entry;
pub mod env;
