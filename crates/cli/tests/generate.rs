//! End-to-end tests for config generation

use clap::Parser;
use gitcfg::{Cli, generate_config};
use gitcfg_config::Identity;
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn identity(home: &Path) -> Identity {
    Identity {
        home: home.to_path_buf(),
        name: "Ada".into(),
        email: "ada@example.com".into(),
        nick: "ada".into(),
    }
}

fn write_aliases(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("aliases");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_empty_alias_file_ends_with_alias_header() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let aliases = write_aliases(work.path(), "");

    let path = generate_config(&identity(home.path()), &aliases).unwrap();
    assert_eq!(path, home.path().join(".gitconfig"));

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(
        &lines[..4],
        ["[user]", "\tname = Ada", "\temail = ada@example.com", "\tusername = ada"]
    );
    assert_eq!(lines.last(), Some(&"[alias]"));
    assert!(content.ends_with("[alias]\n"));
}

#[test]
fn test_aliases_appended_after_settings() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let aliases = write_aliases(
        work.path(),
        "co = checkout\n# full comment line\n\nst = status # show changes\n",
    );

    let path = generate_config(&identity(home.path()), &aliases).unwrap();
    let content = fs::read_to_string(path).unwrap();

    assert!(
        content.ends_with("[diff]\n\ttool = nvimdiff\n[alias]\n\tco = checkout\n\tst = status\n"),
        "unexpected tail:\n{content}"
    );
    assert!(content.contains("[color \"status\"]\n\tadded = green\n"));
    assert!(content.contains("\trebase = true\n"));
    assert!(content.contains("\tquotepath = false\n"));
}

#[test]
fn test_missing_alias_file_leaves_target_untouched() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let target = home.path().join(".gitconfig");
    fs::write(&target, "[user]\n\tname = Old\n").unwrap();

    let err = generate_config(&identity(home.path()), &work.path().join("aliases")).unwrap_err();
    assert!(
        err.to_string().contains("Failed to read alias file"),
        "unexpected error: {err:#}"
    );
    assert_eq!(fs::read_to_string(&target).unwrap(), "[user]\n\tname = Old\n");
}

#[test]
fn test_unwritable_home_reports_path() {
    let work = TempDir::new().unwrap();
    let aliases = write_aliases(work.path(), "co = checkout\n");
    let home = work.path().join("no-such-home");

    let err = generate_config(&identity(&home), &aliases).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("no-such-home"), "unexpected error: {msg}");
}

#[test]
#[serial]
fn test_output_independent_of_other_environment() {
    let home_a = TempDir::new().unwrap();
    let home_b = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let aliases = write_aliases(work.path(), "lg = log --oneline\n");

    let a = generate_config(&identity(home_a.path()), &aliases).unwrap();
    let b = temp_env::with_vars(
        [("EDITOR", Some("nano")), ("GIT_AUTHOR_NAME", Some("Someone"))],
        || generate_config(&identity(home_b.path()), &aliases).unwrap(),
    );

    assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
}

#[test]
#[serial]
fn test_run_fails_before_touching_target() {
    let home = TempDir::new().unwrap();
    let target = home.path().join(".gitconfig");
    fs::write(&target, "keep me\n").unwrap();
    let home_str = home.path().to_str().unwrap();

    temp_env::with_vars(
        [
            ("HOME", Some(home_str)),
            ("NAME", Some("Ada")),
            ("EMAIL", None),
            ("NICK", None),
        ],
        || {
            let cli = Cli::parse_from(["gitcfg"]);
            let err = gitcfg::run(&cli).unwrap_err();
            assert_eq!(
                err.to_string(),
                "The environment variables EMAIL, NICK are missing!"
            );
        },
    );

    assert_eq!(fs::read_to_string(&target).unwrap(), "keep me\n");
}

#[test]
#[serial]
fn test_run_does_not_create_target_when_variable_missing() {
    let home = TempDir::new().unwrap();
    let target = home.path().join(".gitconfig");
    let home_str = home.path().to_str().unwrap();

    temp_env::with_vars(
        [
            ("HOME", Some(home_str)),
            ("NAME", Some("Ada")),
            ("EMAIL", Some("ada@example.com")),
            ("NICK", None),
        ],
        || {
            let cli = Cli::parse_from(["gitcfg"]);
            let err = gitcfg::run(&cli).unwrap_err();
            assert_eq!(err.to_string(), "The environment variable NICK is missing!");
        },
    );

    assert!(!target.exists());
}
