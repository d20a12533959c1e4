use bevy::prelude::*;

/// Lifecycle of the intro. There is no way back to `Loading` and no error state.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum IntroState {
    #[default]
    Loading,
    /// Both models are in; waiting a fixed number of frames for the first paint.
    Starting,
    Animating,
    /// Every tween has completed and the final pose is held.
    Idle,
}

/// Fixed per-frame ordering. Rendering follows in the engine's own schedule.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameLoopSet {
    Clock,
    Input,
    Director,
    Tweens,
    Playback,
    Parallax,
}

/// Chain the frame loop sets inside `Update`.
pub fn configure_frame_loop(app: &mut App) {
    app.configure_sets(
        Update,
        (
            FrameLoopSet::Clock,
            FrameLoopSet::Input,
            FrameLoopSet::Director,
            FrameLoopSet::Tweens,
            FrameLoopSet::Playback,
            FrameLoopSet::Parallax,
        )
            .chain(),
    );
}
