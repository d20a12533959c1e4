use bevy::math::Vec3;

/// Frames rendered between the readiness gate firing and the first tween sample.
pub const STARTUP_DEFERRAL_FRAMES: u32 = 2;

pub const OVERLAY_FADE_SECS: f32 = 3.0;
pub const SEQUENCE_SECS: f32 = 7.0;

/// Wall-clock delay before the page element is revealed. Not tied to the sequence.
pub const REVEAL_DELAY_SECS: f32 = 12.0;

pub const STATIC_MODEL_START_X: f32 = 35.0;
pub const STATIC_MODEL_END_X: f32 = -35.0;
pub const STATIC_MODEL_HEIGHT: f32 = 5.0;
pub const STATIC_MODEL_SPIN_RADIANS: f32 = 13.0;

pub const CAMERA_START_POSITION: Vec3 = Vec3::new(-20.8, 6.78, 28.0);
pub const CAMERA_END_POSITION: Vec3 = Vec3::new(-39.0, 7.7, 11.9);

/// Intrinsic XYZ Euler angles, radians.
pub const CAMERA_START_ROTATION: Vec3 = Vec3::new(-0.32, -0.91, -0.25);
pub const CAMERA_END_ROTATION: Vec3 = Vec3::new(-0.2, -0.13, -0.02);
