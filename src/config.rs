use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::settings::types::Overrides;

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub manifest: Option<PathBuf>,
    pub no_env: bool,
    pub check: bool,
    pub stdout: bool,
    pub emit: Option<PathBuf>,
    pub overrides: Overrides,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        let cli = Cli::parse();
        Ok(Config {
            manifest: cli.manifest.map(PathBuf::from),
            no_env: cli.no_env,
            check: cli.check,
            stdout: cli.stdout,
            emit: cli.emit.map(PathBuf::from),
            overrides: Overrides {
                version: cli.fw_version,
                display: cli.display,
                serial_debug: cli.serial_debug,
                scroll_logo: cli.scroll_logo,
            },
        })
    }
}
