// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use crate::cli::resolve::OutputFormat;
use crate::cli::{Cli, Command};
use crate::variant::BuildVariant;
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["variant", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_resolve_defaults() {
    let cli = Cli::try_parse_from(["variant", "resolve", "release"]).unwrap();
    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve command");
    };
    assert_eq!(args.variant, BuildVariant::Release);
    assert_eq!(args.format, OutputFormat::Text);
    assert!(!args.signing.allow_debug_signing);
}

#[test]
fn test_parse_resolve_gradle_with_override() {
    let cli = Cli::try_parse_from([
        "variant",
        "resolve",
        "Release",
        "--format",
        "gradle",
        "--allow-debug-signing",
    ])
    .unwrap();
    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve command");
    };
    assert_eq!(args.variant, BuildVariant::Release);
    assert_eq!(args.format, OutputFormat::Gradle);
    assert!(args.signing.allow_debug_signing);
}

#[test]
fn test_parse_unknown_variant_rejected() {
    let err = Cli::try_parse_from(["variant", "resolve", "profile"]).unwrap_err();
    assert!(
        err.to_string().contains("unknown build variant 'profile'"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_parse_build_config_output() {
    let cli =
        Cli::try_parse_from(["variant", "build-config", "debug", "-o", "gen/BuildConfig.java"])
            .unwrap();
    let Some(Command::BuildConfig(args)) = cli.command else {
        panic!("expected build-config command");
    };
    assert_eq!(args.variant, BuildVariant::Debug);
    assert_eq!(args.output, Some(PathBuf::from("gen/BuildConfig.java")));
}

#[test]
fn test_parse_build_config_output_dir() {
    let cli = Cli::try_parse_from(["variant", "build-config", "release", "--output-dir", "gen"])
        .unwrap();
    let Some(Command::BuildConfig(args)) = cli.command else {
        panic!("expected build-config command");
    };
    assert_eq!(args.output_dir, Some(PathBuf::from("gen")));
    assert!(args.output.is_none());
}

#[test]
fn test_build_config_output_and_output_dir_conflict() {
    assert!(
        Cli::try_parse_from([
            "variant",
            "build-config",
            "debug",
            "-o",
            "BuildConfig.java",
            "-d",
            "gen",
        ])
        .is_err()
    );
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "variant",
        "-l",
        "5",
        "-c",
        "base.toml",
        "-c",
        "ci.toml",
        "-k",
        "android/key.properties",
        "-s",
        "android.min_sdk=24",
        "credentials",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("base.toml"), PathBuf::from("ci.toml")]
    );
    assert!(matches!(cli.command, Some(Command::Credentials)));
    assert_eq!(
        cli.global.to_config_overrides(),
        vec![
            "android.min_sdk=24",
            "global.output_log_level=5",
            "global.file_log_level=5",
            "signing.key_properties=android/key.properties",
        ]
    );
}

#[test]
fn test_file_log_level_overrides_log_level() {
    let cli =
        Cli::try_parse_from(["variant", "-l", "2", "--file-log-level", "4", "options"]).unwrap();
    let overrides = cli.global.to_config_overrides();
    assert!(overrides.contains(&"global.output_log_level=2".to_string()));
    assert!(overrides.contains(&"global.file_log_level=4".to_string()));
}

#[test]
fn test_log_level_out_of_range_rejected() {
    assert!(Cli::try_parse_from(["variant", "-l", "7", "options"]).is_err());
}

#[test]
fn test_no_command() {
    let cli = Cli::try_parse_from(["variant"]).unwrap();
    assert!(cli.command.is_none());
}
