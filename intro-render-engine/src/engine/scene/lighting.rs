use bevy::prelude::*;
use constants::scene;

pub fn ambient_light() -> AmbientLight {
    let [r, g, b] = scene::AMBIENT_COLOUR;
    AmbientLight {
        color: Color::srgb_u8(r, g, b),
        brightness: scene::AMBIENT_BRIGHTNESS,
        ..default()
    }
}

/// Ambient fill plus a transparent clear so the page shows through until the
/// background is drawn. Image-based light is added once the environment map loads.
pub fn configure_lighting(commands: &mut Commands) {
    commands.insert_resource(ambient_light());
    commands.insert_resource(ClearColor(Color::NONE));
}
