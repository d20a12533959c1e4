//! Compile-time settings shared by the intro scene engine.
//!
//! Runtime overrides live in `intro_manifest.json`; every value here is the
//! fallback used when the manifest omits a field.

/// Asset paths, object placements and particle field layout.
pub mod scene;

/// Durations, poses and deferrals of the scripted intro sequence.
pub mod timeline;

/// Camera lens, parallax response, environment lighting and debug panel range.
pub mod render_settings;
