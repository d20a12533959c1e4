//! Static scene content built around the two models.
//!
//! Everything here is spawned once: the backdrop, the particle field, the fade
//! overlay parented to the camera, scene-wide light and the environment cubemap.

/// Textured half-cylinder backdrop, viewed from inside.
pub mod background;

/// Equirectangular EXR to cubemap projection for image-based lighting.
pub mod environment;

pub mod lighting;

/// Black camera-parented plane faded out by the intro.
pub mod overlay;

/// Seeded additive sprite field.
pub mod particles;
