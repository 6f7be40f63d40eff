//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::Config;
use crate::config::SnapshotConfig;

/// Animated sunset over layered mountains.
///
/// Flags override values loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "afterglow", version)]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Start in fullscreen.
    #[arg(long)]
    pub fullscreen: Option<bool>,

    /// Present with vsync.
    #[arg(long)]
    pub vsync: Option<bool>,

    /// Log filter (error, warn, info, debug, trace, or a full directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Render one frame on the CPU and write it as PNG.
    Snapshot(SnapshotArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct SnapshotArgs {
    /// Scene time in seconds.
    #[arg(long)]
    pub time: Option<f32>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    /// Output PNG path.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(fs) = args.fullscreen {
            self.window.fullscreen = fs;
        }
        if let Some(vsync) = args.vsync {
            self.window.vsync = vsync;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }

    /// Snapshot settings with any flags from `args` applied.
    pub fn snapshot_settings(&self, args: &SnapshotArgs) -> SnapshotConfig {
        SnapshotConfig {
            width: args.width.unwrap_or(self.snapshot.width),
            height: args.height.unwrap_or(self.snapshot.height),
            time: args.time.unwrap_or(self.snapshot.time),
            output: args
                .output
                .clone()
                .unwrap_or_else(|| self.snapshot.output.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1920),
            vsync: Some(false),
            log_level: Some("debug".to_string()),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.window.width, 1920);
        assert!(!config.window.vsync);
        assert_eq!(config.debug.log_level, "debug");
        assert_eq!(config.window.height, 720);
    }

    #[test]
    fn test_cli_no_override() {
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_snapshot_subcommand() {
        let args = CliArgs::try_parse_from([
            "afterglow",
            "--log-level",
            "warn",
            "snapshot",
            "--time",
            "12.5",
            "--width",
            "320",
            "-o",
            "out.png",
        ])
        .unwrap();
        assert_eq!(args.log_level.as_deref(), Some("warn"));
        assert_eq!(
            args.command,
            Some(Command::Snapshot(SnapshotArgs {
                time: Some(12.5),
                width: Some(320),
                height: None,
                output: Some(PathBuf::from("out.png")),
            }))
        );
    }

    #[test]
    fn test_snapshot_settings_fall_back_to_config() {
        let mut config = Config::default();
        config.snapshot.height = 480;
        let settings = config.snapshot_settings(&SnapshotArgs {
            width: Some(640),
            ..Default::default()
        });
        assert_eq!(settings.width, 640);
        assert_eq!(settings.height, 480);
        assert_eq!(settings.time, 0.0);
        assert_eq!(settings.output, PathBuf::from("afterglow.png"));
    }

    #[test]
    fn test_parse_without_subcommand() {
        let args = CliArgs::try_parse_from(["afterglow", "--fullscreen", "true"]).unwrap();
        assert_eq!(args.fullscreen, Some(true));
        assert!(args.command.is_none());
    }
}
