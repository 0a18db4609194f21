//! Command-line interface definitions.
//!
//! Defines the CLI structure for the captureorder binary using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::error::Result;
use crate::infrastructure::config::Config;

/// Capture orders into MongoDB/CosmosDB and announce them over AMQP
#[derive(Parser, Debug)]
#[command(name = "captureorder")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the captureorder CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Persist one order and publish its notification
    Submit(SubmitArgs),

    /// Show which store and queue the environment selects, without connecting
    Check(ConfigPathArg),
}

/// Optional configuration file shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct ConfigPathArg {
    /// TOML file with tunables; connection strings always come from the environment
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl ConfigPathArg {
    /// Load the file when given, otherwise defaults, plus the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Ok(Config::from_env()),
        }
    }
}

/// Arguments for `captureorder submit`.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Customer e-mail address
    #[arg(long)]
    pub email: String,

    /// Customer's preferred language
    #[arg(long, default_value = "")]
    pub language: String,

    /// Order total
    #[arg(long, default_value = "0")]
    pub total: Decimal,

    /// Where the order came from; blank or "string" uses SOURCE
    #[arg(long, default_value = "")]
    pub source: String,

    /// Requested status (always stored as Open)
    #[arg(long, default_value = "")]
    pub status: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[command(flatten)]
    pub config: ConfigPathArg,
}
