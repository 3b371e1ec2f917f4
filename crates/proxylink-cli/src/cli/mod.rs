//! CLI for proxylink.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use proxylink_core::config;

use commands::{run_build, run_resolve, run_theme};

/// Top-level CLI for proxylink.
#[derive(Debug, Parser)]
#[command(name = "proxylink")]
#[command(about = "proxylink: build and resolve download proxy links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build the proxy link for a target URL.
    Build {
        /// Target URL (a dropped slash in `http:/` or `https:/` is repaired).
        url: String,
        /// Origin to prefix the display URL with (defaults to `origin` in config.toml).
        #[arg(long)]
        origin: Option<String>,
    },

    /// Recover and validate the target URL from a proxy request path.
    Resolve {
        /// Request path, e.g. `/https://example.com/file.zip`.
        path: String,
        /// Raw query string of the request, without the leading `?`.
        #[arg(long)]
        query: Option<String>,
    },

    /// Show or change the light/dark theme.
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Status)]
        action: ThemeAction,
        /// Local hour to evaluate auto mode at (defaults to now).
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    /// Print the current theme (auto mode re-checks the clock).
    Status,
    /// Flip light/dark and turn auto mode off.
    Toggle,
    /// Turn auto mode on or off.
    Auto,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Build { url, origin } => {
                let origin = origin.as_deref().unwrap_or(&cfg.origin);
                run_build(&url, origin)?;
            }
            CliCommand::Resolve { path, query } => run_resolve(&cfg, &path, query.as_deref())?,
            CliCommand::Theme { action, hour } => run_theme(&cfg, action, hour)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
