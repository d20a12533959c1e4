use bevy::prelude::*;
use constants::scene;

/// Black plane in front of the camera; its opacity is the first intro tween.
#[derive(Component)]
pub struct FadeOverlay;

/// Spawn the overlay at full opacity. The caller parents it to the camera.
pub fn spawn_fade_overlay(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> Entity {
    let material = materials.add(StandardMaterial {
        base_color: Color::BLACK,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands
        .spawn((
            FadeOverlay,
            Name::new("FadeOverlay"),
            Mesh3d(meshes.add(Rectangle::new(scene::OVERLAY_SIZE, scene::OVERLAY_SIZE))),
            MeshMaterial3d(material),
            Transform::from_xyz(0.0, 0.0, -scene::OVERLAY_DISTANCE),
        ))
        .id()
}
