// env-rs: Typed Environment Variable Access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use super::current_env;
use crate::core::entry::Entry;
use crate::core::env::container::Environment;
use crate::core::env::types::{EnvOptions, EnvSource, MissingKeyPolicy, default_sensitive};

fn variables() -> Vec<(&'static str, &'static str)> {
    vec![
        ("EMPTY", ""),
        ("JSON_DATA", r#"{"one":1, "two":2, "three":3}"#),
        ("PI", "3.14"),
        ("READY", "no"),
        ("STATUS", "5150"),
        ("USER", "fred"),
        ("XDG_DATA_DIRS", "/usr/local/share:/usr/share"),
        ("XDG_SESSION_ID", "c1"),
        ("XDG_SESSION_TYPE", "x11"),
        ("OTHER_VAR", "x"),
    ]
}

fn options() -> EnvOptions {
    EnvOptions::builder().with_sensitive(true).build()
}

#[test]
fn test_default_options() {
    let opts = EnvOptions::default();
    assert_eq!(opts.sensitive(), default_sensitive());
    assert!(!opts.blankify());
    assert!(opts.noneify());
    assert!(opts.readonly());
    assert_eq!(opts.missing_key_policy(), MissingKeyPolicy::NONEIFY);
}

#[test]
fn test_default_sensitive_by_platform() {
    assert_eq!(default_sensitive(), !cfg!(windows));
}

#[test]
fn test_get_found() {
    let mut env = Environment::from_map(variables(), options());
    let user = env.get("USER").unwrap().unwrap();

    assert_eq!(user, "fred");
    assert_eq!(user.name(), "USER");
    assert_eq!(env.source(), EnvSource::Mapping);
}

#[test]
fn test_get_missing_noneify() {
    let mut env = Environment::from_map(variables(), options());
    assert!(env.get("user").unwrap().is_none());
    assert!(!env.contains_key("user"));
}

#[test]
fn test_get_missing_fails_without_fallback() {
    let opts = EnvOptions::builder()
        .with_sensitive(true)
        .with_noneify(false)
        .build();
    let mut env = Environment::from_map(variables(), opts);

    let err = env.get("USERZ").unwrap_err();
    assert!(err.is_key_not_found());
    insta::assert_snapshot!(err.to_string(), @"environment variable not found: USERZ");
}

#[test]
fn test_get_missing_blankify_is_stable() {
    let opts = EnvOptions::builder()
        .with_sensitive(true)
        .with_blankify(true)
        .build();
    let mut env = Environment::from_map(variables(), opts);
    let before = env.len();

    let first = env.get("USERZ").unwrap().unwrap();
    assert_eq!(first, Entry::blank());
    assert_eq!(first.name(), "");
    assert!(env.contains_key("USERZ"));
    assert_eq!(env.len(), before + 1);

    let second = env.get("USERZ").unwrap().unwrap();
    assert_eq!(first, second);
    assert_eq!(env.len(), before + 1);
}

#[test]
fn test_blankify_registers_on_readonly_view() {
    let opts = EnvOptions::builder()
        .with_sensitive(true)
        .with_blankify(true)
        .with_readonly(true)
        .build();
    let mut env = Environment::from_map(variables(), opts);
    assert!(env.is_readonly());

    // Registration by lookup is allowed; explicit writes are still rejected
    assert_eq!(env.get("USERZ").unwrap(), Some(Entry::blank()));
    assert_eq!(env.get_item("USERZ").unwrap(), "");
    assert!(env.set("USERZ", "x").unwrap_err().is_immutable());
    assert!(env.remove("USERZ").unwrap_err().is_immutable());
}

#[test]
fn test_blankify_takes_precedence_over_noneify() {
    let opts = EnvOptions::builder()
        .with_sensitive(true)
        .with_blankify(true)
        .with_noneify(true)
        .build();
    assert_eq!(
        opts.missing_key_policy(),
        MissingKeyPolicy::BLANKIFY | MissingKeyPolicy::NONEIFY
    );

    let mut env = Environment::from_map(variables(), opts);
    assert_eq!(env.get("NOPE").unwrap(), Some(Entry::blank()));
}

#[test]
fn test_insensitive_folds_keys() {
    let opts = EnvOptions::builder().with_sensitive(false).build();
    let mut env = Environment::from_map(variables(), opts);

    let upper = env.get("USER").unwrap().unwrap();
    let lower = env.get("user").unwrap().unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper, "fred");
    assert!(env.contains_key("User"));
    assert!(env.keys().all(|k| k == k.to_lowercase()));
}

#[test]
fn test_attribute_and_mapping_lookup_agree() {
    for sensitive in [true, false] {
        let opts = EnvOptions::builder().with_sensitive(sensitive).build();
        let mut env = Environment::from_map(variables(), opts);
        for (name, value) in variables() {
            let attr = env.get(name).unwrap().unwrap();
            let item = env.get_item(name).unwrap();
            assert_eq!(attr, item);
            assert_eq!(item, value);
        }
    }
}

#[test]
fn test_get_item_ignores_fallback_policy() {
    let opts = EnvOptions::builder()
        .with_sensitive(true)
        .with_blankify(true)
        .build();
    let env = Environment::from_map(variables(), opts);

    assert!(env.get_item("MISSING").unwrap_err().is_key_not_found());
    assert!(!env.contains_key("MISSING"));
}

#[test]
fn test_contains_empty_value() {
    let mut env = Environment::from_map(variables(), options());
    assert!(env.contains_key("EMPTY"));
    assert!(!env.contains_key("MISSING"));

    let empty = env.get("EMPTY").unwrap().unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_readonly_rejects_mutation() {
    let mut env = Environment::from_map(variables(), options());
    let snapshot = env.to_map();

    assert!(env.set("READY", "yes").unwrap_err().is_immutable());
    assert!(env.insert("NEW", "1").unwrap_err().is_immutable());
    assert!(env.delete("READY").unwrap_err().is_immutable());
    assert!(env.remove("USER").unwrap_err().is_immutable());

    assert_eq!(env.to_map(), snapshot);
}

#[test]
fn test_writable_mapping() {
    let opts = EnvOptions::builder()
        .with_sensitive(true)
        .with_readonly(false)
        .build();
    let mut env = Environment::from_map(variables(), opts);

    assert_eq!(env.get("READY").unwrap().unwrap(), "no");
    env.set("READY", "yes").unwrap();
    assert_eq!(env.get("READY").unwrap().unwrap(), "yes");

    env.set("MÖTLEY", "Crüe").unwrap();
    insta::assert_snapshot!(format!("{:?}", env.get("MÖTLEY").unwrap().unwrap()), @"MÖTLEY=Crüe");

    assert_eq!(env.insert("READY", "maybe").unwrap().as_deref(), Some("yes"));
    assert_eq!(env.remove("READY").unwrap(), "maybe");
    assert!(env.get("READY").unwrap().is_none());

    assert!(env.delete("READY").unwrap_err().is_key_not_found());
}

#[test]
fn test_mapping_writes_do_not_touch_process() {
    let name = "ENV_RS_TEST_MAPPING_ONLY";
    let opts = EnvOptions::builder().with_readonly(false).build();
    let mut env = Environment::from_map(Vec::<(String, String)>::new(), opts);

    env.set(name, "value").unwrap();
    assert!(env.contains_key(name));
    assert!(std::env::var(name).is_err());
}

#[test]
fn test_entry_does_not_observe_later_writes() {
    let opts = EnvOptions::builder()
        .with_sensitive(true)
        .with_readonly(false)
        .build();
    let mut env = Environment::from_map(variables(), opts);

    let before = env.get("USER").unwrap().unwrap();
    env.set("USER", "barney").unwrap();
    assert_eq!(before, "fred");
    assert_eq!(env.get_item("USER").unwrap(), "barney");
}

#[test]
fn test_prefix() {
    let env = Environment::from_map(variables(), options());

    let raw = env.prefix("XDG_", false);
    assert_eq!(
        raw.keys().collect::<Vec<_>>(),
        vec!["XDG_DATA_DIRS", "XDG_SESSION_ID", "XDG_SESSION_TYPE"]
    );
    assert_eq!(raw["XDG_SESSION_TYPE"], "x11");

    let lowered = env.prefix("XDG_SESSION", true);
    assert_eq!(
        serde_json::to_value(&lowered).unwrap(),
        serde_json::json!({"xdg_session_id": "c1", "xdg_session_type": "x11"})
    );

    assert!(env.prefix("NOPE_", true).is_empty());
}

#[test]
fn test_prefix_insensitive_folds_prefix() {
    let opts = EnvOptions::builder().with_sensitive(false).build();
    let env = Environment::from_map(variables(), opts);

    let found = env.prefix("XDG_", false);
    assert_eq!(found.len(), 3);
    assert!(found.contains_key("xdg_data_dirs"));
}

#[test]
fn test_map() {
    let env = Environment::from_map(variables(), options());

    let mapped = env.map([("username", "USER"), ("kind", "XDG_SESSION_TYPE")]).unwrap();
    assert_eq!(
        serde_json::to_value(&mapped).unwrap(),
        serde_json::json!({"username": "fred", "kind": "x11"})
    );

    let err = env.map([("username", "USERZ")]).unwrap_err();
    assert!(err.is_key_not_found());
}

#[test]
fn test_iteration_is_sorted() {
    let env = Environment::from_map([("B", "2"), ("A", "1"), ("C", "3")], options());

    assert_eq!(env.len(), 3);
    assert!(!env.is_empty());
    assert_eq!(env.keys().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    assert_eq!(
        env.iter().collect::<Vec<_>>(),
        vec![("A", "1"), ("B", "2"), ("C", "3")]
    );
}

#[test]
fn test_current_env() {
    // Behavioral test - PATH should exist
    let env = current_env();
    assert_eq!(env.source(), EnvSource::Process);
    assert!(env.is_readonly());
    assert!(
        env.contains_key("PATH") || env.contains_key("Path"),
        "PATH should exist in current environment"
    );
}

#[test]
fn test_process_write_through() {
    let name = "ENV_RS_TEST_WRITE_THROUGH";
    let opts = EnvOptions::builder().with_readonly(false).build();
    let mut env = Environment::from_process(opts);

    env.set(name, "on").unwrap();
    assert_eq!(std::env::var(name).as_deref(), Ok("on"));
    assert_eq!(env.get_item(name).unwrap(), "on");

    // Deletion only affects the view
    env.delete(name).unwrap();
    assert!(!env.contains_key(name));
    assert_eq!(std::env::var(name).as_deref(), Ok("on"));
}

#[test]
fn test_process_set_rejects_invalid_pairs() {
    let opts = EnvOptions::builder().with_readonly(false).build();
    let mut env = Environment::from_process(opts);
    let before = env.to_map();

    let err = env.set("", "x").unwrap_err();
    assert!(err.is_invalid());
    assert_eq!(err.to_string(), r#"invalid environment variable name: """#);

    let err = env.set("A=B", "x").unwrap_err();
    assert!(err.is_invalid());
    assert_eq!(err.to_string(), r#"invalid environment variable name: "A=B""#);

    assert!(env.set("NUL\0NAME", "x").unwrap_err().is_invalid());

    let name = "ENV_RS_TEST_NUL_VALUE";
    let err = env.set(name, "a\0b").unwrap_err();
    assert!(err.is_invalid());
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for environment variable 'ENV_RS_TEST_NUL_VALUE': contains NUL"
    );

    assert_eq!(env.to_map(), before);
    assert!(std::env::var_os(name).is_none());
}

#[test]
fn test_mapping_set_rejects_invalid_pairs() {
    let opts = EnvOptions::builder()
        .with_sensitive(true)
        .with_readonly(false)
        .build();
    let mut env = Environment::from_map(variables(), opts);

    assert!(env.set("A=B", "x").unwrap_err().is_invalid());
    assert!(env.set("OK", "a\0b").unwrap_err().is_invalid());
    assert!(!env.contains_key("A=B"));
    assert!(!env.contains_key("OK"));
}
