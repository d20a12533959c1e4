//! Core application setup and state management.
//!
//! Builds the Bevy app, defines the intro lifecycle and the frame loop
//! ordering, and configures the window for native and WASM targets.

/// Application setup and plugin configuration.
///
/// Registers resources, the loading and director plugins, and the frame loop systems.
pub mod app_setup;

/// Intro lifecycle states and the ordered frame loop system sets.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
