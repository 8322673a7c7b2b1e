// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Resolve | BuildConfig | Credentials | Options | Configs | Version
//! ```

use std::process::ExitCode;

use variant_rs::cli::global::GlobalOptions;
use variant_rs::cli::{self, Command};
use variant_rs::cmd::config::{run_configs_command, run_options_command};
use variant_rs::cmd::credentials::run_credentials_command;
use variant_rs::cmd::resolve::{run_build_config_command, run_resolve_command};
use variant_rs::config::loader::ConfigLoader;
use variant_rs::config::{Config, DEFAULT_CONFIG_FILE};
use variant_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let loaded_files = loader.format_loaded_files();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&LogConfig::from_global(&config.global)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config, &loaded_files)
}

fn dispatch_command(cli: &cli::Cli, config: &Config, loaded_files: &[String]) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => Ok(()),
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Configs) => {
            run_configs_command(loaded_files);
            Ok(())
        }
        Some(Command::Resolve(args)) => run_resolve_command(args, config),
        Some(Command::BuildConfig(args)) => run_build_config_command(args, config),
        Some(Command::Credentials) => run_credentials_command(config),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> variant_rs::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix("VARIANT");
    for assignment in global.to_config_overrides() {
        loader = loader.set_assignment(&assignment)?;
    }
    Ok(loader)
}
