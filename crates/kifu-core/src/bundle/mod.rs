//! Build descriptor: the static declaration the staging tool consumes
//!
//! A descriptor names one script entry file, one output target, an
//! enumerated build profile, and the copy rules that stage static files
//! unmodified next to the script. It has no runtime behavior of its own;
//! it shapes what the shell later loads.

mod stage;

pub use stage::{StageReport, StagedArtifact};

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Build profile selected by the descriptor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildProfile {
    /// Non-optimizing profile: the entry is staged as-is
    #[default]
    Development,
    /// Staging is identical; optimization is delegated to external tooling
    Release,
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildProfile::Development => write!(f, "development"),
            BuildProfile::Release => write!(f, "release"),
        }
    }
}

/// Output target: one file in one directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
    /// Output directory
    pub dir: PathBuf,
    /// File name the staged entry takes inside the output directory
    pub filename: String,
}

/// Stage one static file unmodified into the output directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyRule {
    /// Source file, relative to the descriptor's own directory
    pub from: PathBuf,
}

/// Build descriptor for one bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildDescriptor {
    /// Script entry file
    pub entry: PathBuf,
    /// Output target
    pub output: OutputSpec,
    /// Build profile
    #[serde(default)]
    pub profile: BuildProfile,
    /// Static asset copy rules
    #[serde(default)]
    pub copy: Vec<CopyRule>,
}

impl BuildDescriptor {
    /// Load a descriptor from disk.
    ///
    /// Relative paths in the descriptor resolve against the descriptor's
    /// own directory, so a descriptor behaves the same from any working
    /// directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::DescriptorRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut descriptor: BuildDescriptor =
            toml::from_str(&text).map_err(|source| Error::DescriptorParse {
                path: path.to_path_buf(),
                source,
            })?;
        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            descriptor.resolve(base);
        }
        Ok(descriptor)
    }

    /// Anchor relative paths at `base`
    fn resolve(&mut self, base: &Path) {
        anchor(&mut self.entry, base);
        anchor(&mut self.output.dir, base);
        for rule in &mut self.copy {
            anchor(&mut rule.from, base);
        }
    }

    /// Check the declarations against the filesystem
    pub fn validate(&self) -> Result<()> {
        if self.entry.as_os_str().is_empty() {
            return Err(Error::invalid("entry path is empty"));
        }
        if self.output.dir.as_os_str().is_empty() {
            return Err(Error::invalid("output directory is empty"));
        }
        if self.output.filename.is_empty() {
            return Err(Error::invalid("output filename is empty"));
        }
        if !self.entry.is_file() {
            return Err(Error::MissingSource {
                path: self.entry.clone(),
            });
        }
        for rule in &self.copy {
            if !rule.from.is_file() {
                return Err(Error::MissingSource {
                    path: rule.from.clone(),
                });
            }
        }
        Ok(())
    }

    /// Path the staged script entry takes
    pub fn bundle_path(&self) -> PathBuf {
        self.output.dir.join(&self.output.filename)
    }

    /// Path of the staged HTML entry point, if a copy rule stages one
    pub fn page_path(&self) -> Option<PathBuf> {
        self.copy
            .iter()
            .filter_map(|rule| {
                let is_page = rule
                    .from
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
                    .unwrap_or(false);
                if is_page {
                    rule.from.file_name()
                } else {
                    None
                }
            })
            .map(|name| self.output.dir.join(name))
            .next()
    }
}

fn anchor(path: &mut PathBuf, base: &Path) {
    if path.is_relative() {
        *path = base.join(&*path);
    }
}
