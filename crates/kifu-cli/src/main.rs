//! Kifu CLI - Bundle Staging and Validation Tool
//!
//! Features:
//! - Build descriptor validation
//! - Static asset staging into the output directory
//! - Output directory cleanup

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod output;

/// Kifu CLI - Bundle staging toolkit
#[derive(Parser)]
#[command(name = "kifu-cli")]
#[command(version)]
#[command(about = "Bundle staging and validation for the Kifu desktop shell", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a build descriptor
    Check {
        /// Path to the descriptor
        #[arg(default_value = "bundle.toml")]
        descriptor: PathBuf,
    },

    /// Stage the bundle into its output directory
    Stage {
        /// Path to the descriptor
        #[arg(default_value = "bundle.toml")]
        descriptor: PathBuf,
    },

    /// Remove the staged output directory
    Clean {
        /// Path to the descriptor
        #[arg(default_value = "bundle.toml")]
        descriptor: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(level).init();

    match cli.command {
        Commands::Check { descriptor } => {
            commands::check(&descriptor, &cli.format)?;
        }
        Commands::Stage { descriptor } => {
            commands::stage(&descriptor, &cli.format)?;
        }
        Commands::Clean { descriptor } => {
            commands::clean(&descriptor)?;
        }
    }

    Ok(())
}
