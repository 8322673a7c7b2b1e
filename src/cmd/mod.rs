// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   resolve, build-config, credentials, options, configs
//! ```

pub mod config;
pub mod credentials;
pub mod resolve;


use anyhow::Context;

use crate::config::Config;
use crate::error::Result;
use crate::signing::resolve_credentials;
use crate::variant::{BuildVariant, VariantPolicy, enforce_signing, resolve_policy};

/// Load credentials, resolve the policy for `variant` and apply the
/// fail-closed signing check.
///
/// `allow_debug_signing` is OR-ed with `signing.allow_debug_signing`.
///
/// # Errors
///
/// Returns an error if `key.properties` is malformed, or if a release build
/// would fall back to debug signing without an override.
pub fn resolve_checked_policy(
    variant: BuildVariant,
    config: &Config,
    allow_debug_signing: bool,
) -> Result<VariantPolicy> {
    let key_properties = &config.signing.key_properties;
    let credentials = resolve_credentials(key_properties).with_context(|| {
        format!(
            "cannot trust signing inputs from {}",
            key_properties.display()
        )
    })?;

    let policy = resolve_policy(variant, credentials)
        .with_proguard_files(config.release.proguard_files.iter().cloned());

    enforce_signing(
        &policy,
        allow_debug_signing || config.signing.allow_debug_signing,
        key_properties,
    )?;

    tracing::info!(
        variant = %policy.variant(),
        signing = policy.signing().describe(),
        minify = policy.minify(),
        "resolved build variant"
    );
    Ok(policy)
}
