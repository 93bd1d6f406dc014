//! CLI command definitions for the `padmood` binary.
//!
//! Uses clap derive macros for argument parsing. Every mood command takes the
//! last known state explicitly; nothing is stored between invocations.

pub mod config;
pub mod mood;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Decay PAD mood states and render them as prompt context.
#[derive(Parser)]
#[command(name = "padmood", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors (`--json` still prints).
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Data directory holding config.toml (defaults to $PADMOOD_DATA_DIR or ~/.padmood).
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decay a mood state forward in time.
    Decay {
        #[command(flatten)]
        input: StateInput,

        /// Instant to decay to (RFC 3339). Defaults to now.
        #[arg(long, value_parser = parse_timestamp)]
        at: Option<DateTime<Utc>>,
    },

    /// Render the prompt injection text for a mood state.
    Inject {
        #[command(flatten)]
        input: StateInput,
    },

    /// Decay a mood state, then render the injection text for the result.
    Refresh {
        #[command(flatten)]
        input: StateInput,

        /// Instant to decay to (RFC 3339). Defaults to now.
        #[arg(long, value_parser = parse_timestamp)]
        at: Option<DateTime<Utc>>,
    },

    /// Show the baseline state all moods decay toward.
    Baseline,

    /// Show the effective decay configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// How command results should be printed.
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_flags(self.json, self.quiet)
    }
}

/// How a command prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Pretty-printed JSON on stdout.
    Json,
    /// Styled text (tables, injection text).
    Styled,
    /// Nothing on stdout; errors still surface.
    Quiet,
}

impl OutputMode {
    /// `--json` takes precedence over `--quiet`.
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        match (json, quiet) {
            (true, _) => Self::Json,
            (false, true) => Self::Quiet,
            (false, false) => Self::Styled,
        }
    }
}

/// Where to read the input mood state from.
#[derive(Args)]
pub struct StateInput {
    /// Mood state as inline JSON, a path to a JSON file, or `-` for stdin.
    #[arg(long, short = 's')]
    pub state: String,
}

/// Parse an RFC 3339 timestamp and normalize it to UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}
