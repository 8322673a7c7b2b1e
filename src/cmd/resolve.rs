// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `resolve` and `build-config` command implementations.

use std::path::PathBuf;

use anyhow::bail;

use crate::cli::resolve::{BuildConfigArgs, OutputFormat, ResolveArgs};
use crate::cmd::resolve_checked_policy;
use crate::config::Config;
use crate::config::types::ProjectConfig;
use crate::error::Result;
use crate::render;

/// Main handler for the resolve command.
///
/// # Errors
///
/// Returns an error if the policy cannot be resolved or rendered.
pub fn run_resolve_command(args: &ResolveArgs, config: &Config) -> Result<()> {
    let policy =
        resolve_checked_policy(args.variant, config, args.signing.allow_debug_signing)?;

    match args.format {
        OutputFormat::Text => {
            for line in render::text(&policy, config) {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", render::json(&policy, config)?),
        OutputFormat::Gradle => {
            for line in render::gradle(&policy, config) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Main handler for the build-config command.
///
/// # Errors
///
/// Returns an error if `BuildConfig` generation is disabled, the policy
/// cannot be resolved, or the output file cannot be written.
pub fn run_build_config_command(args: &BuildConfigArgs, config: &Config) -> Result<()> {
    if !config.android.build_config {
        bail!("BuildConfig generation is disabled (android.build_config = false)");
    }

    let policy =
        resolve_checked_policy(args.variant, config, args.signing.allow_debug_signing)?;
    let source = render::build_config::render(&policy, &config.project);

    match build_config_target(args, &config.project) {
        Some(path) => {
            render::write_file(&path, &source)?;
            tracing::info!(path = %path.display(), "wrote BuildConfig");
        }
        None => print!("{source}"),
    }
    Ok(())
}

/// File the class is written to, or `None` for stdout.
#[must_use]
pub fn build_config_target(args: &BuildConfigArgs, project: &ProjectConfig) -> Option<PathBuf> {
    args.output.clone().or_else(|| {
        args.output_dir
            .as_ref()
            .map(|dir| dir.join(render::build_config::relative_path(&project.namespace)))
    })
}
