//! Command line argument parsing for the Phrasebook CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::engine::EngineConfig;
use crate::error::Result;

/// Phrasebook - resolve what a user meant and answer it
#[derive(Parser, Debug, Clone)]
#[command(name = "phrasebook")]
#[command(about = "A small conversational intent-resolution engine")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PhrasebookArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PhrasebookArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Answer utterances read from stdin, one per line
    Chat(ChatArgs),

    /// Answer a single utterance
    Resolve(ResolveArgs),

    /// Answer every line of a file in parallel
    Batch(BatchArgs),

    /// Load the catalog, train the classifier and report statistics
    Validate(ValidateArgs),
}

impl Command {
    /// Engine options shared by every command.
    pub fn engine_args(&self) -> &EngineArgs {
        match self {
            Command::Chat(args) => &args.engine,
            Command::Resolve(args) => &args.engine,
            Command::Batch(args) => &args.engine,
            Command::Validate(args) => &args.engine,
        }
    }
}

/// Catalog and engine options
#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    /// Bot configuration file (JSON with "intents" and "failure_phrases")
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Engine settings file (JSON with "matcher" and "classifier" sections)
    #[arg(long, value_name = "FILE", env = "PHRASEBOOK_ENGINE_CONFIG")]
    pub engine_config: Option<PathBuf>,

    /// Similarity threshold for example matching (lower is stricter)
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Disable the fallback classifier; unmatched input gets a failure phrase
    #[arg(long)]
    pub no_classifier: bool,
}

impl EngineArgs {
    /// Engine settings from the optional file with command line overrides applied.
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.engine_config {
            Some(path) => EngineConfig::load(path)?,
            None => EngineConfig::default(),
        };
        if let Some(threshold) = self.threshold {
            config = config.with_threshold(threshold);
        }
        if self.no_classifier {
            config = config.without_classifier();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Arguments for the interactive loop
#[derive(Args, Debug, Clone)]
pub struct ChatArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Seed for response selection (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for a one-shot resolution
#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Utterance to answer
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Seed for response selection (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for batch resolution
#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// File with one utterance per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Base seed; line i uses seed + i
    #[arg(long, default_value = "0")]
    pub seed: u64,
}

/// Arguments for validation
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
