// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the variant commands.
//!
//! ```text
//! resolve <VARIANT> [--format text|json|gradle] [--allow-debug-signing]
//! build-config <VARIANT> [--output FILE | --output-dir DIR] [--allow-debug-signing]
//! ```

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::variant::BuildVariant;

/// Output format of `resolve`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned `key = value` lines, secrets hidden.
    #[default]
    Text,
    /// Pretty JSON, secrets hidden.
    Json,
    /// `-Pandroid.injected.signing.*` properties, secrets included.
    Gradle,
}

/// Override for the fail-closed debug signing check.
#[derive(Debug, Clone, Default, Args)]
pub struct SigningOverrideArgs {
    /// Accept a release build signed with the debug keystore when
    /// key.properties is missing. Such an artifact must not be distributed.
    #[arg(long = "allow-debug-signing")]
    pub allow_debug_signing: bool,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Build variant (debug or release).
    #[arg(value_name = "VARIANT")]
    pub variant: BuildVariant,

    /// Output format.
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub signing: SigningOverrideArgs,
}

/// Arguments for the `build-config` command.
#[derive(Debug, Clone, Args)]
pub struct BuildConfigArgs {
    /// Build variant (debug or release).
    #[arg(value_name = "VARIANT")]
    pub variant: BuildVariant,

    /// Writes the class to FILE instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Writes the class under DIR at its package path,
    /// e.g. DIR/com/example/app/BuildConfig.java.
    #[arg(short = 'd', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub signing: SigningOverrideArgs,
}
