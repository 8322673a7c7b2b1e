// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use super::{LogConfig, LogLevel};
use crate::config::types::GlobalConfig;

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    let err = LogLevel::new(7).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_level' in section '[global]': log level must be 0-6, got 7"
    );
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    assert_eq!(filters[0], "off");
    assert_eq!(filters[2], "warn");
    assert!(filters[3].contains("variant_rs=info"));
    assert_eq!(filters[6], "trace");
}

#[test]
fn test_log_level_ordering() {
    assert!(LogLevel::SILENT < LogLevel::WARN);
    assert!(LogLevel::TRACE < LogLevel::DUMP);
    assert_eq!(u8::from(LogLevel::DEBUG), 4);
    assert_eq!(LogLevel::try_from(2).ok(), Some(LogLevel::WARN));
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level, LogLevel::INFO);
    assert_eq!(config.file_level, LogLevel::TRACE);
    assert!(config.log_file.is_none());
    assert!(!config.show_target);
}

#[test]
fn test_log_config_from_global() {
    let global = GlobalConfig {
        output_log_level: LogLevel::TRACE,
        file_log_level: LogLevel::DEBUG,
        log_file: Some(PathBuf::from("logs/variant.log")),
    };
    let config = LogConfig::from_global(&global);
    assert_eq!(config.console_level, LogLevel::TRACE);
    assert_eq!(config.file_level, LogLevel::DEBUG);
    assert_eq!(config.log_file, Some(PathBuf::from("logs/variant.log")));
    assert!(config.show_target);

    let quiet = LogConfig::from_global(&GlobalConfig {
        output_log_level: LogLevel::WARN,
        ..global
    });
    assert!(!quiet.show_target);
}

#[test]
fn test_log_level_serde() {
    let level: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(level, LogLevel::DEBUG);
    assert!(serde_json::from_str::<LogLevel>("9").is_err());
    assert_eq!(serde_json::to_string(&LogLevel::WARN).unwrap(), "2");
}
