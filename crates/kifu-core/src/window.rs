//! Window configuration for the desktop shell
//!
//! One window per launch, fixed dimensions, no validation: the values here
//! are compile-time literals handed to the windowing framework as-is.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default window edge, logical pixels. The board is square.
pub const DEFAULT_WINDOW_EDGE: u32 = 900;

/// Main window configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    /// Grant the loaded page direct access to host-level APIs.
    ///
    /// This is a trust decision, not a default: content loaded into the
    /// window can call back into the host process when this is set. Only
    /// locally staged bundles are ever loaded, which is why the shell ships
    /// with it enabled. The launcher logs a warning whenever it is on.
    pub host_api_access: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_EDGE,
            height: DEFAULT_WINDOW_EDGE,
            host_api_access: true,
        }
    }
}

impl WindowConfig {
    /// Inner size as the windowing framework expects it
    pub fn inner_size(&self) -> (f64, f64) {
        (f64::from(self.width), f64::from(self.height))
    }
}

/// Everything the launcher consumes: the window record plus the content
/// source inside the staged bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// Content source, relative to the staged bundle root. Handed to the
    /// window byte-for-byte and never checked for existence; a missing
    /// artifact renders as the webview's own failure page.
    pub artifact: PathBuf,
    /// Open the inspection panel after the load is issued
    pub devtools: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            artifact: PathBuf::from("index.html"),
            devtools: true,
        }
    }
}

impl ShellConfig {
    /// Window title
    pub fn title(&self) -> &'static str {
        "Kifu"
    }
}
