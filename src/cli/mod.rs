// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for variant-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! variant [global options] <command>
//! resolve <debug|release> [--format text|json|gradle] [--allow-debug-signing]
//! build-config <debug|release> [--output FILE | --output-dir DIR] [--allow-debug-signing]
//! credentials
//! options
//! configs
//! version
//! ```

pub mod global;
pub mod resolve;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::resolve::{BuildConfigArgs, ResolveArgs};
use clap::{Parser, Subcommand};

/// Android Build Variant Resolver
///
/// Resolves signing, minification and `BuildConfig` flags for Android
/// release/debug builds.
#[derive(Debug, Parser)]
#[command(
    name = "variant",
    author,
    version,
    about = "Android Build Variant Resolver",
    long_about = "variant-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Resolves the signing configuration, minification settings and\n\
                  compile-time flags of an Android build variant.\n\n\
                  `variant resolve release --format gradle` prints the injected\n\
                  signing properties for the release build. See\n\
                  `variant <command> --help` for more information about a command.",
    after_help = "SIGNING:\n\n\
                  Release credentials are read from `key.properties` (keys keyAlias,\n\
                  keyPassword, storeFile, storePassword). When the file is missing,\n\
                  a release build falls back to the debug keystore; variant refuses\n\
                  to emit such a build unless --allow-debug-signing is given.\n\n\
                  CONFIG FILES:\n\n\
                  variant loads `variant.toml` from the current directory if present,\n\
                  then every --config file in order, then VARIANT_* environment\n\
                  variables, then --set overrides."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the configuration files that were loaded.
    Configs,

    /// Resolves the policy of a build variant.
    Resolve(ResolveArgs),

    /// Generates the `BuildConfig` class of a build variant.
    #[command(name = "build-config")]
    BuildConfig(BuildConfigArgs),

    /// Validates `key.properties` and prints a redacted summary.
    Credentials,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
