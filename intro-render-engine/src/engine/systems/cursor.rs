use bevy::prelude::*;

/// Latest pointer position relative to the window centre, each axis in
/// `[-0.5, 0.5]` with y growing downward. Overwritten by every move.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct CursorOffset(Vec2);

impl CursorOffset {
    pub fn new(offset: Vec2) -> Self {
        Self(offset)
    }

    pub fn offset(&self) -> Vec2 {
        self.0
    }
}

/// Normalise a window-space pointer position. `None` for a degenerate window.
pub fn pointer_offset(position: Vec2, window_size: Vec2) -> Option<Vec2> {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return None;
    }
    Some(position / window_size - Vec2::splat(0.5))
}

pub fn track_cursor(
    mut cursor_moved: EventReader<CursorMoved>,
    windows: Query<&Window>,
    mut cursor: ResMut<CursorOffset>,
) {
    for event in cursor_moved.read() {
        let Ok(window) = windows.get(event.window) else {
            continue;
        };
        if let Some(offset) = pointer_offset(event.position, window.size()) {
            *cursor = CursorOffset::new(offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_of_window_is_zero() {
        let offset = pointer_offset(Vec2::new(640.0, 360.0), Vec2::new(1280.0, 720.0));
        assert_eq!(offset, Some(Vec2::ZERO));
    }

    #[test]
    fn corners_map_to_half_extents() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(pointer_offset(Vec2::ZERO, size), Some(Vec2::splat(-0.5)));
        assert_eq!(pointer_offset(size, size), Some(Vec2::splat(0.5)));
    }

    #[test]
    fn degenerate_window_is_ignored() {
        assert_eq!(pointer_offset(Vec2::new(10.0, 10.0), Vec2::new(0.0, 600.0)), None);
    }

    #[test]
    fn last_move_in_a_frame_wins() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<CursorMoved>()
            .init_resource::<CursorOffset>()
            .add_systems(Update, track_cursor);
        let window = app.world_mut().spawn(Window::default()).id();
        let size = app.world().get::<Window>(window).unwrap().size();

        for position in [Vec2::ZERO, size * 0.75] {
            app.world_mut().send_event(CursorMoved {
                window,
                position,
                delta: None,
            });
        }
        app.update();

        let offset = app.world().resource::<CursorOffset>().offset();
        assert!((offset - Vec2::splat(0.25)).length() < 1e-5);
    }
}
