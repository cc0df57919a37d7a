//! CLI command implementations

use console::style;
use kifu_core::BuildDescriptor;
use std::path::Path;

use crate::output;

/// Validate a build descriptor
pub fn check(descriptor_path: &Path, format: &str) -> anyhow::Result<()> {
    let descriptor = BuildDescriptor::load(descriptor_path)?;

    match descriptor.validate() {
        Ok(()) => {
            output::print_check(descriptor_path, &descriptor, format);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", style("error:").red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Stage the bundle into its output directory
pub fn stage(descriptor_path: &Path, format: &str) -> anyhow::Result<()> {
    let descriptor = BuildDescriptor::load(descriptor_path)?;
    let report = descriptor.stage()?;

    output::print_stage(&report, format);
    Ok(())
}

/// Remove the staged output directory
pub fn clean(descriptor_path: &Path) -> anyhow::Result<()> {
    let descriptor = BuildDescriptor::load(descriptor_path)?;
    descriptor.clean()?;

    println!(
        "{} removed {}",
        style("clean:").green().bold(),
        descriptor.output.dir.display()
    );
    Ok(())
}
