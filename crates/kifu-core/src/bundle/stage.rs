//! Asset staging
//!
//! Executes a build descriptor against the filesystem: the script entry is
//! placed at the output target and every copy rule's source is staged
//! unmodified next to it. Module resolution, minification and the rest of
//! a bundler's pipeline are delegated to external tooling; staging only
//! moves bytes.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::BuildDescriptor;
use crate::{Error, Result};

/// One file placed by staging
#[derive(Debug, Clone, Serialize)]
pub struct StagedArtifact {
    /// Where the file came from
    pub source: PathBuf,
    /// Where it landed
    pub dest: PathBuf,
    /// File size in bytes
    pub bytes: u64,
}

/// Outcome of a staging run
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    /// The populated output directory
    pub output_dir: PathBuf,
    /// Every file placed, entry first
    pub artifacts: Vec<StagedArtifact>,
}

impl StageReport {
    /// Total bytes staged
    pub fn total_bytes(&self) -> u64 {
        self.artifacts.iter().map(|a| a.bytes).sum()
    }
}

impl BuildDescriptor {
    /// Stage the bundle into the output directory.
    ///
    /// Re-staging overwrites whatever is already there.
    pub fn stage(&self) -> Result<StageReport> {
        self.validate()?;

        fs::create_dir_all(&self.output.dir)?;
        info!(
            profile = %self.profile,
            dir = %self.output.dir.display(),
            "staging bundle"
        );

        let mut artifacts = Vec::with_capacity(self.copy.len() + 1);
        artifacts.push(place(&self.entry, &self.bundle_path())?);

        for rule in &self.copy {
            let name = rule.from.file_name().ok_or_else(|| {
                Error::invalid(format!(
                    "copy source has no file name: {}",
                    rule.from.display()
                ))
            })?;
            artifacts.push(place(&rule.from, &self.output.dir.join(name))?);
        }

        Ok(StageReport {
            output_dir: self.output.dir.clone(),
            artifacts,
        })
    }

    /// Remove the output directory and everything staged into it
    pub fn clean(&self) -> Result<()> {
        if !self.output.dir.exists() {
            debug!(dir = %self.output.dir.display(), "nothing to clean");
            return Ok(());
        }
        fs::remove_dir_all(&self.output.dir).map_err(|source| Error::Clean {
            path: self.output.dir.clone(),
            source,
        })?;
        info!(dir = %self.output.dir.display(), "output directory removed");
        Ok(())
    }
}

fn place(from: &Path, to: &Path) -> Result<StagedArtifact> {
    let bytes = fs::copy(from, to).map_err(|source| Error::Stage {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    debug!(from = %from.display(), to = %to.display(), bytes, "staged");
    Ok(StagedArtifact {
        source: from.to_path_buf(),
        dest: to.to_path_buf(),
        bytes,
    })
}
