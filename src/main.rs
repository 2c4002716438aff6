//! Disk Jockey - macOS Menu Bar
//!
//! Status bar icon with an About / Settings / Quit menu. Each selection is
//! published on the event bus for the window presenters to pick up.

#![deny(clippy::all)]

#[cfg(target_os = "macos")]
mod app;
mod config;
mod error;
mod events;
mod menubar;
mod settings;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::Config;
use error::AppError;
use events::EventBus;

fn main() {
    // Load .env file (if present) before anything else
    if let Err(e) = dotenvy::dotenv() {
        // .env file is optional - only log if it's not a "file not found" error
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            let e = AppError::from(e);
            eprintln!("{}", e.user_message());
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    info!("Starting {} v{}", config.app.name, env!("CARGO_PKG_VERSION"));

    let runtime = match build_runtime() {
        Ok(rt) => rt,
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    };

    let event_bus = Arc::new(EventBus::new());
    runtime.spawn(events::run_listener(event_bus.subscribe()));

    run_menu_bar(&config, event_bus);
}

/// Initialize tracing/logging.
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    match settings::init_log_directory(&config.logging.log_dir) {
        Ok(path) => info!("Log directory: {}", path.display()),
        Err(e) => tracing::warn!("Could not create log directory: {}", e),
    }
}

/// Runtime for the event listener; the UI stays on the main thread.
fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")
}

/// Set up NSApplication and the status item, then run the event loop.
#[cfg(target_os = "macos")]
fn run_menu_bar(config: &Config, event_bus: Arc<EventBus>) {
    use app::delegate::AppDelegate;
    use menubar::builder::MenuBar;
    use menubar::controller::MenuBarController;
    use objc2::runtime::ProtocolObject;
    use objc2_app_kit::{NSApplication, NSApplicationActivationPolicy};
    use objc2_foundation::MainThreadMarker;

    // AppKit must run on the main thread
    let Some(mtm) = MainThreadMarker::new() else {
        error!("Menu bar must be started from the main thread");
        return;
    };

    let ns_app = NSApplication::sharedApplication(mtm);

    // Menu bar only, no dock icon
    ns_app.setActivationPolicy(NSApplicationActivationPolicy::Accessory);

    let delegate = AppDelegate::new(mtm);
    ns_app.setDelegate(Some(ProtocolObject::from_ref(&*delegate)));

    let controller = MenuBarController::new(event_bus);
    let _menu_bar = MenuBar::init(mtm, &config.status_item, controller);

    info!("Starting application event loop");

    // Blocks until the app quits
    unsafe {
        ns_app.run();
    }
}

#[cfg(not(target_os = "macos"))]
fn run_menu_bar(_config: &Config, _event_bus: Arc<EventBus>) {
    tracing::warn!("The menu bar is only supported on macOS");
}
