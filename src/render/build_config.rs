// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `BuildConfig.java` generation.
//!
//! Produces the same class shape the Android Gradle plugin generates, so
//! application code can read `BuildConfig.ENABLE_DEBUG_LOGGING`.

use std::fmt::Write as _;
use std::path::PathBuf;

use crate::config::types::ProjectConfig;
use crate::variant::{BuildVariant, VariantPolicy};

/// Source path of the class relative to the generated-sources root,
/// e.g. `com/example/app/BuildConfig.java`.
#[must_use]
pub fn relative_path(namespace: &str) -> PathBuf {
    let mut path: PathBuf = namespace.split('.').collect();
    path.push("BuildConfig.java");
    path
}

/// Render the class for `policy`.
#[must_use]
pub fn render(policy: &VariantPolicy, project: &ProjectConfig) -> String {
    let variant = policy.variant();
    let mut out = String::new();

    out.push_str("/**\n * Automatically generated file. DO NOT MODIFY\n */\n");
    let _ = writeln!(out, "package {};", project.namespace);
    out.push('\n');
    out.push_str("public final class BuildConfig {\n");
    let _ = writeln!(
        out,
        "  public static final boolean DEBUG = {};",
        variant == BuildVariant::Debug
    );
    let _ = writeln!(
        out,
        "  public static final String APPLICATION_ID = \"{}\";",
        java_escape(&project.application_id)
    );
    let _ = writeln!(
        out,
        "  public static final String BUILD_TYPE = \"{}\";",
        variant.as_str()
    );
    let _ = writeln!(
        out,
        "  public static final int VERSION_CODE = {};",
        project.version_code
    );
    let _ = writeln!(
        out,
        "  public static final String VERSION_NAME = \"{}\";",
        java_escape(&project.version_name)
    );

    if !policy.build_config_fields().is_empty() {
        let _ = writeln!(out, "  // Field from build type: {variant}");
        for field in policy.build_config_fields() {
            let _ = writeln!(
                out,
                "  public static final {} {} = {};",
                field.java_type, field.name, field.value
            );
        }
    }

    out.push_str("}\n");
    out
}

fn java_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(escaped, "\\u{:04x}", u32::from(c));
            }
            c => escaped.push(c),
        }
    }
    escaped
}
