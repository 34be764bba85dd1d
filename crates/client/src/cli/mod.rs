//! CLI command definitions.

pub mod events;
pub mod health;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the lexscopic API.
#[derive(Debug, Parser)]
#[command(name = "lexscopic-client")]
#[command(about = "CLI client for the lexscopic API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "LEXSCOPIC_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse and submit event listings.
    Events(events::EventsCommand),
    /// Show the tag lookup table.
    Tags,
    /// Server health checks.
    Health(health::HealthCommand),
}
