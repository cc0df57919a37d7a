//! Output formatting for CLI

use console::style;
use kifu_core::{BuildDescriptor, StageReport};
use serde::Serialize;
use std::path::Path;

/// Output format options
pub enum OutputFormat {
    Text,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

fn print_json<T: Serialize>(data: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
    );
}

/// Report a descriptor that passed validation
pub fn print_check(path: &Path, descriptor: &BuildDescriptor, format: &str) {
    match OutputFormat::from(format) {
        OutputFormat::Json => print_json(descriptor),
        OutputFormat::Text => {
            println!("{} {}", style("ok:").green().bold(), path.display());
            println!("  Entry:   {}", descriptor.entry.display());
            println!("  Output:  {}", descriptor.bundle_path().display());
            println!("  Profile: {}", descriptor.profile);
            for rule in &descriptor.copy {
                println!("  Copy:    {}", rule.from.display());
            }
        }
    }
}

/// Report a completed staging run
pub fn print_stage(report: &StageReport, format: &str) {
    match OutputFormat::from(format) {
        OutputFormat::Json => print_json(report),
        OutputFormat::Text => {
            println!(
                "{} {} files -> {} ({} bytes)",
                style("staged:").green().bold(),
                report.artifacts.len(),
                report.output_dir.display(),
                report.total_bytes()
            );
            for artifact in &report.artifacts {
                println!("  {}", artifact.dest.display());
            }
        }
    }
}
