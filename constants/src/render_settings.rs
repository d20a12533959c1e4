/// Vertical field of view, degrees.
pub const CAMERA_FOV_DEGREES: f32 = 35.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START_Z: f32 = 70.0;

/// Scale applied to the normalised cursor offset before it becomes a camera target.
pub const PARALLAX_SCALE: f32 = 0.5;
/// Exponential smoothing rate of the camera rig, per second.
pub const PARALLAX_RATE: f32 = 5.0;

pub const ENVIRONMENT_INTENSITY: f32 = 900.0;
/// Edge length of each face of the cubemap built from the equirectangular map.
pub const ENVIRONMENT_FACE_SIZE: u32 = 256;

pub const DEBUG_FRAGMENT: &str = "#debug";
pub const DEBUG_SLIDER_MIN: f32 = -50.0;
pub const DEBUG_SLIDER_MAX: f32 = 50.0;
