// env-rs: Typed Environment Variable Access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |           get / list / prefix / map
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  envrs.toml, ENVRS_* vars |
//!              '-------------+-------------'
//!                            v
//!   +-----------------------------------------+
//!   |  core   Environment (env), Entry        |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use env_rs::core::env::{EnvOptions, Environment};
//!
//! let mut env = Environment::from_map(
//!     [("STATUS", "5150"), ("READY", "no")],
//!     EnvOptions::default(),
//! );
//!
//! let status = env.get("STATUS")?.expect("set above");
//! assert_eq!(status.as_int()?, 5150);
//! assert_eq!(env.get("READY")?.and_then(|e| e.as_bool()), Some(false));
//! assert!(env.get("MISSING")?.is_none());
//! # Ok::<(), env_rs::error::EnvError>(())
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
