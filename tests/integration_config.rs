// env-rs: Typed Environment Variable Access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Settings module with realistic TOML configurations.

use env_rs::config::Settings;
use env_rs::core::env::Environment;
use std::io::Write;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty() {
    let settings = Settings::parse("").unwrap();
    assert!(settings.environment.noneify);
    assert!(settings.environment.readonly);
    assert_eq!(settings.environment.sensitive, None);
}

#[test]
fn config_parse_full() {
    let toml = r#"
[environment]
sensitive = true
blankify = true
noneify = false
readonly = false

[log]
level = 3
file = "envrs.log"
"#;
    let settings = Settings::parse(toml).unwrap();
    assert_eq!(
        serde_json::to_value(&settings).unwrap(),
        serde_json::json!({
            "environment": {
                "sensitive": true,
                "blankify": true,
                "noneify": false,
                "readonly": false,
            },
            "log": {"level": 3, "file": "envrs.log", "json": false},
        })
    );
}

#[test]
fn config_parse_invalid_toml() {
    assert!(Settings::parse("[environment\nblankify = ").is_err());
}

// =============================================================================
// Settings drive the environment
// =============================================================================

#[test]
fn config_options_drive_lookup_policy() {
    let settings = Settings::parse("[environment]\nsensitive = false\nblankify = true\n").unwrap();
    let mut env = Environment::from_map([("HOME", "/home/fred")], settings.environment.to_options());

    assert_eq!(env.get("home").unwrap().unwrap(), "/home/fred");
    assert_eq!(env.get("missing").unwrap().unwrap(), "");
    assert!(env.set("HOME", "/tmp").unwrap_err().is_immutable());
}

#[test]
fn config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("envrs.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[log]\nlevel = 0\njson = true").unwrap();

    let settings = Settings::from_file(&path).unwrap();
    assert_eq!(settings.log.level.as_u8(), 0);
    assert!(settings.log.json);
}
