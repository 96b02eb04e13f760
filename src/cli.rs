use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Colored summary and per-block listing
    Terminal,
    /// Full report as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "readable")]
#[command(about = "Readability analyzer for content preview documents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a preview document and report per-block reading levels
    Analyze {
        /// Path to a JSON document tree
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Localized label strings as a JSON file
        #[arg(long)]
        labels: Option<PathBuf>,

        /// Show only the N hardest blocks
        #[arg(long)]
        top: Option<usize>,
    },

    /// Print raw text statistics for a plain-text file
    Stats {
        /// Path to a text file
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },
}
