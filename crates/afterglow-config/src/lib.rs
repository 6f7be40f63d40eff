//! Runtime settings for the afterglow viewer.
//!
//! Settings persist to `config.ron` in the platform config directory. Every
//! section is `#[serde(default)]`, so files written by older or newer builds
//! still load. Command-line flags override the file.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, Command, SnapshotArgs};
pub use config::{
    CONFIG_FILE_NAME, Config, DebugConfig, PowerPreference, RenderConfig, SnapshotConfig,
    WindowConfig,
};
pub use error::ConfigError;
