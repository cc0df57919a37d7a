//! Main window construction

use kifu_core::ShellConfig;
use tauri::{App, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

/// Build the single top-level window over the staged bundle.
///
/// The artifact path is handed to the webview exactly as configured; if
/// nothing is staged there, the webview renders its own failure page and
/// the process keeps running.
pub fn create_main_window(app: &mut App, config: &ShellConfig) -> tauri::Result<WebviewWindow> {
    if config.window.host_api_access {
        // Trust decision: the staged page may call host-level APIs.
        tracing::warn!("host API bridge enabled for loaded content");
    }

    let (width, height) = config.window.inner_size();
    let window = WebviewWindowBuilder::new(
        app,
        "main",
        WebviewUrl::App(config.artifact.clone()),
    )
    .title(config.title())
    .inner_size(width, height)
    .build()?;

    tracing::debug!(
        artifact = %config.artifact.display(),
        width,
        height,
        "main window created"
    );

    Ok(window)
}
