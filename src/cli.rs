//! Command-line argument parsing for the interactive card session
//!
//! Flags override the values loaded from `config.yaml`.

use clap::Parser;
use std::path::PathBuf;

use crate::config::BingoConfig;
use crate::model::ReachPolicy;

/// Fill in a bingo card, then play it
#[derive(Parser, Debug, Default)]
#[command(name = "bingo", version, about = "Fill in a bingo card, then play it")]
pub struct CliArgs {
    /// Read config from this file instead of ~/.config/bingo-card/config.yaml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Theme id (classic, midnight) or path to a theme YAML
    #[arg(short, long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Font used for exported images
    #[arg(long, value_name = "FILE")]
    pub font: Option<PathBuf>,

    /// Directory exports are written to
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Do not report lines that are one mark short
    #[arg(long)]
    pub no_reach: bool,

    /// Read commands from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Print JSON snapshots instead of the table view
    #[arg(long)]
    pub json: bool,

    /// List available themes and exit
    #[arg(long)]
    pub list_themes: bool,
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub config: BingoConfig,
    /// Command script; `None` reads stdin
    pub script: Option<PathBuf>,
    pub json: bool,
}

impl CliArgs {
    /// Load the config file this invocation points at
    pub fn load_config(&self) -> BingoConfig {
        match &self.config {
            Some(path) => BingoConfig::load_or_default(path),
            None => BingoConfig::load(),
        }
    }

    /// Merge flags over `base`
    pub fn into_config(self, base: BingoConfig) -> StartupConfig {
        let mut config = base;
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(font) = self.font {
            config.font_path = Some(font);
        }
        if let Some(dir) = self.out_dir {
            config.export_dir = Some(dir);
        }
        if self.no_reach {
            config.reach = ReachPolicy::Ignore;
        }

        StartupConfig {
            config,
            script: self.script,
            json: self.json,
        }
    }
}
