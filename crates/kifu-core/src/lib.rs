//! Kifu Core - Desktop Shell Library for Kifu
//!
//! This crate provides the non-GUI half of the Kifu desktop shell:
//! - Window configuration for the native host window
//! - Build descriptor parsing and validation
//! - Static asset staging into the bundle output directory
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                     Kifu Core                       │
//! ├─────────────────────────────────────────────────────┤
//! │                                                     │
//! │  ┌──────────────┐         ┌──────────────┐          │
//! │  │    Window    │         │    Build     │          │
//! │  │    Config    │         │  Descriptor  │          │
//! │  └──────┬───────┘         └──────┬───────┘          │
//! │         │                        │                  │
//! │    kifu-shell              ┌─────┴──────┐           │
//! │    (native window)         │   Staging  │           │
//! │                            │ (kifu-cli) │           │
//! │                            └────────────┘           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The window configuration feeds the `kifu-shell` launcher; the build
//! descriptor feeds the `kifu-cli` staging tool. The two never interact at
//! runtime: the descriptor's output directory is the filesystem contract
//! between them.

pub mod bundle;
pub mod error;
pub mod window;

pub use bundle::{BuildDescriptor, BuildProfile, CopyRule, OutputSpec, StageReport, StagedArtifact};
pub use error::{Error, Result};
pub use window::{ShellConfig, WindowConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the shell library with default configuration
pub fn init() {
    tracing::info!(version = VERSION, "Kifu Core initialized");
}
