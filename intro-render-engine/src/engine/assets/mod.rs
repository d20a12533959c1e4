//! Asset handles and runtime configuration for the intro scene.
//!
//! Handles the JSON manifest that overrides the compile-time settings and the
//! resources that remember which handles and entities belong to the scene.

/// Runtime manifest deserialised from `intro_manifest.json`.
pub mod intro_manifest;

/// Asset handles requested by the loaders and the loaded scene state.
pub mod scene_assets;
