//! Camera rig with pointer-driven parallax.
//!
//! The rig entity carries the parallax offset; the camera is its child so the
//! director can tween the camera's local pose without fighting the parallax.

/// Camera rig spawning and the damped parallax system.
pub mod parallax_camera;
