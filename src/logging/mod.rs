// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `tracing` setup for the `variant` binary.
//!
//! ```text
//! [global] ──> LogConfig::from_global ──> init_logging
//!                                             |
//!                       +---------------------+----------------------+
//!                       v                                            v
//!             stderr, ANSI, no time                 log_file (optional, plain text)
//!             output_log_level                      file_log_level, non_blocking
//!                                                                    |
//!                                                     LogGuard flushes on drop
//!
//! 0 off  1 error  2 warn  3 info  4 debug  5 trace  6 trace incl. dependencies
//! ```
//!
//! stdout is reserved for `resolve` and `build-config` output, so nothing is
//! logged there.

use std::path::{Path, PathBuf};

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::types::GlobalConfig;
use crate::error::{ConfigError, Result};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Verbosity from 0 (off) to 6, as written in `[global]` and `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogLevel(u8);

impl Default for LogLevel {
    fn default() -> Self {
        Self::INFO
    }
}

impl LogLevel {
    pub const SILENT: Self = Self(0);
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);
    pub const TRACE: Self = Self(5);
    pub const DUMP: Self = Self(6);

    /// # Errors
    ///
    /// `ConfigError::InvalidValue` for anything above 6.
    pub fn new(level: u8) -> std::result::Result<Self, ConfigError> {
        Self::from_u8(level).ok_or_else(|| ConfigError::InvalidValue {
            section: "global".to_string(),
            key: "log_level".to_string(),
            message: format!("log level must be 0-6, got {level}"),
        })
    }

    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        if level <= 6 { Some(Self(level)) } else { None }
    }

    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// `EnvFilter` directives. Below DUMP, dependencies stay at WARN.
    #[must_use]
    pub const fn to_filter_string(self) -> &'static str {
        match self.0 {
            0 => "off",
            1 => "error",
            2 => "warn",
            3 => "warn,variant_rs=info,variant=info",
            4 => "warn,variant_rs=debug,variant=debug",
            5 => "warn,variant_rs=trace,variant=trace",
            _ => "trace",
        }
    }

    fn filter(self) -> EnvFilter {
        EnvFilter::new(self.to_filter_string())
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Self::new(u8::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}

/// Where log events go and how much of them.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::INFO)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::TRACE)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file))]
    log_file: Option<PathBuf>,
    /// Print module paths on the console.
    #[builder(setters(name = with_show_target), default = false)]
    show_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    /// Logging as configured by the `[global]` section. Module paths are
    /// shown on the console from TRACE upwards.
    #[must_use]
    pub fn from_global(global: &GlobalConfig) -> Self {
        Self::builder()
            .with_console_level(global.output_log_level)
            .with_file_level(global.file_log_level)
            .maybe_with_log_file(global.log_file.clone())
            .with_show_target(global.output_log_level >= LogLevel::TRACE)
            .build()
    }
}

/// Keep alive until exit; dropping it flushes the log file.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file or its directory cannot be created.
///
/// # Example
///
/// ```no_run
/// use variant_rs::logging::{init_logging, LogConfig, LogLevel};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::WARN)
///     .with_log_file("variant.log".into())
///     .build();
/// let _guard = init_logging(&config)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let mut layers = vec![console_layer(config)];

    let file_guard = match &config.log_file {
        Some(path) => {
            let (layer, guard) = file_layer(path, config.file_level)?;
            layers.push(layer);
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry().with(layers).init();

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

fn console_layer(config: &LogConfig) -> BoxedLayer {
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.show_target)
        .without_time()
        .with_filter(config.console_level.filter())
        .boxed()
}

fn file_layer(path: &Path, level: LogLevel) -> Result<(BoxedLayer, WorkerGuard)> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_filter(level.filter())
        .boxed();
    Ok((layer, guard))
}

#[cfg(test)]
mod tests;
