use bevy::math::Vec3;

pub const MANIFEST_PATH: &str = "intro_manifest.json";

pub const STATIC_MODEL_PATH: &str = "models/axe.glb";
pub const ANIMATED_MODEL_PATH: &str = "models/animated-kratos.glb";
pub const ENVIRONMENT_MAP_PATH: &str = "textures/solitude_night_1k.exr";
pub const BACKGROUND_TEXTURE_PATH: &str = "pictures/background-gow.png";
pub const PARTICLE_TEXTURE_PATH: &str = "textures/star_04.png";

/// Resting place of the animated model; only `x` is exposed on the debug panel.
pub const ANIMATED_MODEL_POSITION: Vec3 = Vec3::new(40.0, -20.0, -15.0);

/// Base colour applied to every mesh of the animated model (`#333333`).
pub const ANIMATED_MODEL_TINT: [u8; 3] = [0x33, 0x33, 0x33];

/// Open half-cylinder wrapped behind the scene.
pub const BACKGROUND_RADIUS: f32 = 300.0;
pub const BACKGROUND_HEIGHT: f32 = 500.0;
pub const BACKGROUND_SEGMENTS: u32 = 32;
pub const BACKGROUND_POSITION: Vec3 = Vec3::new(20.0, -10.0, -40.0);
pub const BACKGROUND_YAW: f32 = std::f32::consts::PI * 0.35;

/// Black plane parented to the camera that hides the scene until the intro starts.
pub const OVERLAY_SIZE: f32 = 2.0;
pub const OVERLAY_DISTANCE: f32 = 1.0;

pub const PARTICLE_COUNT: usize = 50_000;
/// Edge length of the cube the particles are scattered in, centred on the origin.
pub const PARTICLE_SPREAD: f32 = 100.0;
pub const PARTICLE_SIZE: f32 = 0.5;
pub const PARTICLE_COLOUR: [u8; 3] = [0xff, 0x22, 0x22];

/// `#404040`
pub const AMBIENT_COLOUR: [u8; 3] = [0x40, 0x40, 0x40];
pub const AMBIENT_BRIGHTNESS: f32 = 400.0;

/// Page element revealed by the fixed-delay timer.
pub const REVEAL_ELEMENT_ID: &str = "div1";

/// Seed of the particle scatter so every load shows the same field.
pub const PARTICLE_SEED: u64 = 0x5eed_0f_57a2;
