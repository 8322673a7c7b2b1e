// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Credentials command implementation for variant-rs.

use anyhow::Context;

use crate::config::Config;
use crate::error::Result;
use crate::signing::{HIDDEN, SigningCredentials, resolve_credentials};

/// Main handler for the credentials command.
///
/// # Errors
///
/// Returns an error if `key.properties` exists but is malformed.
pub fn run_credentials_command(config: &Config) -> Result<()> {
    for line in credentials_summary(config)? {
        println!("{line}");
    }
    Ok(())
}

/// Redacted description of the signing credentials.
///
/// # Errors
///
/// Returns an error if `key.properties` exists but is malformed.
pub fn credentials_summary(config: &Config) -> Result<Vec<String>> {
    let path = &config.signing.key_properties;
    let credentials = resolve_credentials(path)
        .with_context(|| format!("cannot trust signing inputs from {}", path.display()))?;

    let Some(credentials) = credentials else {
        tracing::warn!(
            path = %path.display(),
            "release builds will fall back to debug signing"
        );
        return Ok(vec![format!(
            "no signing credentials ({} not found)",
            path.display()
        )]);
    };

    Ok(describe(&credentials, config))
}

fn describe(credentials: &SigningCredentials, config: &Config) -> Vec<String> {
    let store_file = credentials.resolved_store_file(&config.project.module_dir);
    if !store_file.exists() {
        tracing::warn!(
            store_file = %store_file.display(),
            "keystore referenced by storeFile does not exist"
        );
    }

    vec![
        format!("source        = {}", config.signing.key_properties.display()),
        format!("keyAlias      = {}", credentials.key_alias()),
        format!("keyPassword   = {HIDDEN}"),
        format!("storeFile     = {}", store_file.display()),
        format!("storePassword = {HIDDEN}"),
    ]
}
