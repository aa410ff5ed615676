// modlist-rs: Thunderstore Mod List Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> AppContext --> Command Dispatch
//!   Options | Games | Mods | Install | Favourite | Profiles
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use modlist_rs::cli::global::GlobalOptions;
use modlist_rs::cli::{self, Command};
use modlist_rs::cmd::AppContext;
use modlist_rs::cmd::favourite::run_favourite_command;
use modlist_rs::cmd::games::run_games_command;
use modlist_rs::cmd::install::run_install_command;
use modlist_rs::cmd::mods::run_mods_command;
use modlist_rs::cmd::options::run_options_command;
use modlist_rs::cmd::profiles::run_profiles_command;
use modlist_rs::config::loader::ConfigLoader;
use modlist_rs::config::Config;
use modlist_rs::config::paths::{CONFIG_FILE_NAME, default_data_dir};
use modlist_rs::logging::{LogConfig, LogGuard, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let (config, config_files) = match load_config(&cli.global) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard: LogGuard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, config, &config_files).await
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .with_json_file(config.global.json_log)
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: Config, config_files: &[String]) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => Ok(()),
        Some(Command::Options) => {
            run_options_command(&config, config_files);
            Ok(())
        }
        Some(command) => match AppContext::load(config).await {
            Ok(ctx) => match command {
                Command::Games => {
                    run_games_command(&ctx);
                    Ok(())
                }
                Command::Mods(args) => run_mods_command(args, &ctx).await,
                Command::Install(args) => run_install_command(args, &ctx).await,
                Command::Favourite(args) => run_favourite_command(args, &ctx).await,
                Command::Profiles(args) => run_profiles_command(args, &ctx).await,
                Command::Version | Command::Options => Ok(()),
            },
            Err(e) => Err(e),
        },
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

/// Data dir from `--data-dir`, else the platform default.
fn data_dir_hint(global: &GlobalOptions) -> Option<PathBuf> {
    global.data_dir.clone().or_else(default_data_dir)
}

fn build_config_loader(global: &GlobalOptions) -> modlist_rs::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if let Some(dir) = data_dir_hint(global) {
        loader = loader.add_toml_file_optional(dir.join(CONFIG_FILE_NAME));
    }
    loader = loader.add_toml_file_optional(CONFIG_FILE_NAME);
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader = loader.with_env_prefix("MODLIST");
    for (key, value) in global.to_config_overrides()? {
        loader = loader.set(&key, value)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> modlist_rs::error::Result<(Config, Vec<String>)> {
    let loader = build_config_loader(global)?;
    let files = loader.format_loaded_files();
    Ok((loader.build()?, files))
}
