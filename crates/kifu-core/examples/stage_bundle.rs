//! Bundle staging example
//!
//! Loads the repository descriptor and stages `www/` into `dist/`.
//!
//! Run with: cargo run -p kifu-core --example stage_bundle

use kifu_core::BuildDescriptor;
use std::path::Path;

fn main() -> kifu_core::Result<()> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let descriptor = BuildDescriptor::load(root.join("bundle.toml"))?;

    println!("Kifu Core - Staging Example");
    println!("===========================\n");

    println!("Descriptor:");
    println!("  Entry:    {}", descriptor.entry.display());
    println!("  Output:   {}", descriptor.bundle_path().display());
    println!("  Profile:  {}", descriptor.profile);
    println!("  Copies:   {}", descriptor.copy.len());
    println!();

    let report = descriptor.stage()?;

    println!("Staged {} files ({} bytes):", report.artifacts.len(), report.total_bytes());
    for artifact in &report.artifacts {
        println!("  {} -> {}", artifact.source.display(), artifact.dest.display());
    }

    Ok(())
}
