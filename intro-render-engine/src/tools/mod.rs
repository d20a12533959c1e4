//! Developer tooling layered over the intro scene.
//!
//! The debug panel is only spawned when the page is opened with the debug
//! location fragment, so production visitors never see it.

/// Position sliders for the two models (native bevy_ui panel).
///
/// Bound live to the model transforms; tweens and sliders write the same value.
pub mod debug_panel;
