//! CLI for the respath resource URL resolver.

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use respath_core::config::{self, ResolverConfig};
use std::path::PathBuf;

use commands::{run_config, run_date, run_resolve, OutputFormat};

/// Top-level CLI for respath.
#[derive(Debug, Parser)]
#[command(name = "respath")]
#[command(about = "respath: resolve raw content paths into resource URLs", long_about = None)]
pub struct Cli {
    /// Read configuration from this TOML file instead of the XDG config file.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the organization code from the config file.
    #[arg(long, global = true, value_name = "CODE")]
    pub org_code: Option<String>,

    /// Override whether blob (CDN) storage is enabled.
    #[arg(long, global = true, value_name = "BOOL", action = ArgAction::Set)]
    pub blob: Option<bool>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve one or more raw content paths.
    Resolve {
        /// Raw paths as delivered by the content service.
        #[arg(required = true)]
        paths: Vec<String>,

        /// Resolve the thumbnail variant instead of the full asset.
        #[arg(long)]
        thumbnail: bool,

        /// Also print the detected path shape and any warning.
        #[arg(long)]
        explain: bool,

        /// Print resolutions as a JSON array.
        #[arg(long, conflicts_with = "explain")]
        json: bool,
    },

    /// Show the effective configuration.
    Config {
        /// Print only the config file location.
        #[arg(long)]
        path: bool,
    },

    /// Format a content date with the configured date format.
    Date {
        /// Date as delivered by the content service.
        date: String,

        /// Omit the time of day even when the input has one.
        #[arg(long)]
        date_only: bool,
    },
}

impl Cli {
    /// Loads the config file (explicit or XDG) and applies command-line overrides.
    fn load_config(&self) -> Result<ResolverConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        if let Some(org_code) = &self.org_code {
            cfg.org_code = org_code.clone();
        }
        if let Some(blob) = self.blob {
            cfg.blob_enabled = blob;
        }
        tracing::debug!("effective config: {:?}", cfg);
        Ok(cfg)
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = cli.load_config()?;

        match cli.command {
            CliCommand::Resolve {
                paths,
                thumbnail,
                explain,
                json,
            } => {
                let format = OutputFormat::from_flags(explain, json);
                run_resolve(cfg, &paths, thumbnail, format)?;
            }
            CliCommand::Config { path } => run_config(&cfg, cli.config.as_deref(), path)?,
            CliCommand::Date { date, date_only } => run_date(&cfg, &date, !date_only),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
