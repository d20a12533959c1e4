use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::engine::camera::parallax_camera::IntroCamera;

/// Size of the render surface in logical pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Width over height; 1.0 while the surface has no height.
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Apply the latest resize to the viewport and the camera projection before
/// the frame renders.
pub fn handle_window_resize(
    mut resized: EventReader<WindowResized>,
    mut viewport: ResMut<Viewport>,
    mut projections: Query<&mut Projection, With<IntroCamera>>,
) {
    let Some(event) = resized.read().last() else {
        return;
    };

    viewport.resize(event.width, event.height);
    for mut projection in &mut projections {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = viewport.aspect();
        }
    }
}
