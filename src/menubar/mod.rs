//! Menu bar UI components.
//!
//! Provides the status bar icon, its dropdown menu and the controller that
//! turns menu selections into events.

// Off macOS the controller is only driven by tests.
#![cfg_attr(not(target_os = "macos"), allow(dead_code))]

#[cfg(target_os = "macos")]
pub mod builder;
pub mod controller;
#[cfg(target_os = "macos")]
pub mod delegate;
pub mod model;
pub mod state;
