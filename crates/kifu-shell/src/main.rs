//! Kifu Shell - Desktop Window Host
//!
//! Opens one native window over the locally staged board bundle: build the
//! window, point it at the bundle, open the inspection panel. The ready
//! signal, content loading and failure rendering belong to the windowing
//! framework.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use kifu_core::ShellConfig;

mod window;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,kifu_shell=debug,kifu_core=debug".to_string()),
        )
        .init();

    tracing::info!(version = kifu_core::VERSION, "Starting Kifu");

    tauri::Builder::default()
        .setup(|app| {
            let config = ShellConfig::default();
            let main_window = window::create_main_window(app, &config)?;

            // Inspection panel opens after the load has been issued;
            // neither is awaited.
            if config.devtools {
                main_window.open_devtools();
            }

            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running Kifu");
}
