// env-rs: Typed Environment Variable Access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Settings --> Logging --> Environment --> Command Dispatch
//!   Get | List | Prefix | Map | Version
//! ```

use anyhow::Context;
use std::io::Write;
use std::process::ExitCode;

use env_rs::cli::global::GlobalOptions;
use env_rs::cli::{self, Command};
use env_rs::cmd::get::run_get_command;
use env_rs::cmd::list::{run_list_command, run_map_command, run_prefix_command};
use env_rs::config::Settings;
use env_rs::config::loader::ConfigLoader;
use env_rs::core::env::Environment;
use env_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;
use tracing::debug;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let (settings, sources) = match load_settings(&cli.global) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&settings);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    for source in &sources {
        debug!("config source {source}");
    }

    dispatch_command(&cli, &settings)
}

fn build_log_config(settings: &Settings) -> LogConfig {
    LogConfig::builder()
        .with_console_level(settings.log.level)
        .maybe_with_log_file(settings.log.file.clone())
        .with_json_file(settings.log.json)
        .build()
}

fn dispatch_command(cli: &cli::Cli, settings: &Settings) -> ExitCode {
    let mut env = Environment::from_process(settings.environment.to_options());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Some(Command::Version) => handle_version_command(&mut out),
        Some(Command::Get(args)) => run_get_command(args, &mut env, &mut out),
        Some(Command::List(args)) => run_list_command(args, &env, &mut out).map(|()| true),
        Some(Command::Prefix(args)) => run_prefix_command(args, &env, &mut out).map(|()| true),
        Some(Command::Map(args)) => run_map_command(args, &env, &mut out).map(|()| true),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    let flushed = out.flush().context("failed to write to stdout");
    let result = result.and_then(|ok| flushed.map(|()| ok));

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command<W: Write>(out: &mut W) -> env_rs::error::Result<bool> {
    writeln!(out, "{}", env!("CARGO_PKG_VERSION"))?;
    Ok(true)
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional("envrs.toml");
    if let Some(path) = &global.config {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix("ENVRS")
}

fn load_settings(global: &GlobalOptions) -> env_rs::error::Result<(Settings, Vec<String>)> {
    let loader = build_config_loader(global);
    let sources = loader.format_sources();
    let mut settings = loader.build()?;
    global.apply_to(&mut settings);
    Ok((settings, sources))
}
