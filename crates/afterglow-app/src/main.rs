use std::process::ExitCode;

use afterglow_app::platform::PlatformDirs;
use afterglow_app::snapshot::run_snapshot;
use afterglow_app::window;
use afterglow_config::{CliArgs, Command, Config};
use clap::Parser;
use tracing::{error, info, warn};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let dirs = match PlatformDirs::resolve_and_create() {
        Ok(dirs) => dirs,
        Err(e) => {
            eprintln!("Failed to initialize platform directories: {e}");
            return ExitCode::FAILURE;
        }
    };
    let config_dir = args.config.clone().unwrap_or_else(|| dirs.config_dir.clone());

    let (mut config, load_error) = match Config::load_or_create(&config_dir) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    config.apply_cli_overrides(&args);

    afterglow_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    if let Some(e) = load_error {
        warn!("Using default config, {}: {e}", config_dir.display());
    }
    info!(config = %config_dir.display(), logs = %dirs.log_dir.display(), "Afterglow starting");

    match args.command {
        Some(Command::Snapshot(ref snapshot)) => {
            let settings = config.snapshot_settings(snapshot);
            if let Err(e) = run_snapshot(&settings) {
                error!("Snapshot failed: {e}");
                return ExitCode::FAILURE;
            }
        }
        None => match window::run(config) {
            Ok(app) if app.failure().is_some() => return ExitCode::FAILURE,
            Ok(_) => {}
            Err(e) => {
                error!("Event loop failed: {e}");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
