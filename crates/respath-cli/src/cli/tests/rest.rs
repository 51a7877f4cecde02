//! Tests for config, date and the global overrides.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_config() {
    match parse(&["respath", "config"]) {
        CliCommand::Config { path } => assert!(!path),
        _ => panic!("expected Config"),
    }
}

#[test]
fn cli_parse_config_path() {
    match parse(&["respath", "config", "--path"]) {
        CliCommand::Config { path } => assert!(path),
        _ => panic!("expected Config with --path"),
    }
}

#[test]
fn cli_parse_date() {
    match parse(&["respath", "date", "2024-03-05T14:30:00", "--date-only"]) {
        CliCommand::Date { date, date_only } => {
            assert_eq!(date, "2024-03-05T14:30:00");
            assert!(date_only);
        }
        _ => panic!("expected Date"),
    }
}

#[test]
fn cli_global_overrides_after_subcommand() {
    let cli = Cli::try_parse_from([
        "respath",
        "resolve",
        "a.png",
        "--config",
        "/tmp/respath.toml",
        "--org-code",
        "ORG9",
        "--blob",
        "true",
    ])
    .unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/respath.toml")));
    assert_eq!(cli.org_code.as_deref(), Some("ORG9"));
    assert_eq!(cli.blob, Some(true));
}

#[test]
fn cli_blob_flag_needs_bool() {
    assert!(Cli::try_parse_from(["respath", "--blob", "maybe", "config"]).is_err());
}

#[test]
fn cli_overrides_default_to_none() {
    let cli = Cli::try_parse_from(["respath", "config"]).unwrap();
    assert!(cli.config.is_none());
    assert!(cli.org_code.is_none());
    assert!(cli.blob.is_none());
}
