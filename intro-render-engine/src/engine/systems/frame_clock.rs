use bevy::prelude::*;

/// Monotonic frame clock owned by the frame loop. `delta` is the time between
/// the two most recent ticks and is never negative.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct FrameClock {
    elapsed: f32,
    previous_elapsed: f32,
    delta: f32,
}

impl FrameClock {
    /// Record a new elapsed time and return the delta since the previous tick.
    /// The first tick measures from zero.
    pub fn tick(&mut self, elapsed: f32) -> f32 {
        let delta = elapsed - self.previous_elapsed;
        self.delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.previous_elapsed = elapsed;
        self.elapsed = elapsed;
        self.delta
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }
}

/// First step of every frame: sample the wall clock.
pub fn advance_frame_clock(time: Res<Time<Real>>, mut clock: ResMut<FrameClock>) {
    clock.tick(time.elapsed_secs());
}
