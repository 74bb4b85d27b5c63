//! Command-line arguments.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sentiment_core::{Config, MalformedPolicy, OutputFormat};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Classify a live text stream by sentiment.
#[derive(Debug, Parser)]
#[command(name = "stream-sentiment", version, about)]
pub struct Cli {
    /// JSON configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Search term to register before streaming (repeatable).
    #[arg(short, long = "term")]
    pub terms: Vec<String>,

    /// Log and drop malformed lines instead of stopping.
    #[arg(long)]
    pub skip_malformed: bool,

    /// Stop after this many records.
    #[arg(long)]
    pub max_records: Option<u64>,

    /// Idle read timeout in seconds.
    #[arg(long)]
    pub read_timeout_secs: Option<u64>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Load the config file (or defaults) and apply flag overrides.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => Config::default(),
        };

        if !self.terms.is_empty() {
            config.rules.search_terms = self.terms.clone();
        }
        if self.skip_malformed {
            config.pipeline.malformed = MalformedPolicy::Skip;
        }
        if self.max_records.is_some() {
            config.pipeline.max_records = self.max_records;
        }
        if self.read_timeout_secs.is_some() {
            config.stream.read_timeout_secs = self.read_timeout_secs;
        }
        if let Some(format) = self.format {
            config.pipeline.output = format.into();
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }

    /// Default log filter for the verbosity level.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
