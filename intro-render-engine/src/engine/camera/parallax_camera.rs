use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use constants::render_settings;

use crate::engine::scene::overlay::spawn_fade_overlay;
use crate::engine::systems::cursor::CursorOffset;
use crate::engine::systems::frame_clock::FrameClock;

/// Parent of the camera; moved by the parallax system only.
#[derive(Component)]
pub struct CameraRig;

/// The scene camera; its local pose is driven by the intro tweens.
#[derive(Component)]
pub struct IntroCamera;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ParallaxSettings {
    /// Multiplier from normalised cursor offset to world units.
    pub scale: f32,
    /// Exponential smoothing rate per second.
    pub rate: f32,
}

impl Default for ParallaxSettings {
    fn default() -> Self {
        Self {
            scale: render_settings::PARALLAX_SCALE,
            rate: render_settings::PARALLAX_RATE,
        }
    }
}

/// Rig position the cursor asks for. Screen y grows downward, world y upward.
pub fn parallax_target(cursor: Vec2, scale: f32) -> Vec2 {
    Vec2::new(cursor.x * scale, -cursor.y * scale)
}

/// First-order exponential approach of `current` toward `target`. The blend
/// factor stays in `[0, 1)` for any delta, so the result never overshoots.
pub fn damp_towards(current: Vec2, target: Vec2, rate: f32, delta: f32) -> Vec2 {
    let alpha = 1.0 - (-rate * delta.max(0.0)).exp();
    current + (target - current) * alpha
}

pub fn spawn_camera_rig(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> Entity {
    let projection = Projection::Perspective(PerspectiveProjection {
        fov: render_settings::CAMERA_FOV_DEGREES.to_radians(),
        near: render_settings::CAMERA_NEAR,
        far: render_settings::CAMERA_FAR,
        ..default()
    });

    let rig = commands
        .spawn((CameraRig, Name::new("CameraRig"), Transform::default(), Visibility::default()))
        .id();

    let camera = commands
        .spawn((
            IntroCamera,
            Name::new("IntroCamera"),
            Camera3d::default(),
            projection,
            Tonemapping::AcesFitted,
            Transform::from_xyz(0.0, 0.0, render_settings::CAMERA_START_Z),
        ))
        .id();

    let overlay = spawn_fade_overlay(commands, meshes, materials);
    commands.entity(camera).add_child(overlay);
    commands.entity(rig).add_child(camera);
    camera
}

/// Ease the rig toward the cursor target. Runs every frame in every state.
pub fn apply_camera_parallax(
    clock: Res<FrameClock>,
    cursor: Res<CursorOffset>,
    settings: Res<ParallaxSettings>,
    mut rigs: Query<&mut Transform, With<CameraRig>>,
) {
    let target = parallax_target(cursor.offset(), settings.scale);
    for mut transform in &mut rigs {
        let next = damp_towards(
            transform.translation.truncate(),
            target,
            settings.rate,
            clock.delta(),
        );
        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}
