use bevy::prelude::*;

use crate::engine::core::app_state::IntroState;

/// The two loads the intro waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetStream {
    StaticModel,
    AnimatedModel,
}

/// Sent by a model loader once its scene instance is in the world.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetStreamReady(pub AssetStream);

/// Loading milestones plus the readiness gate.
///
/// The model flags are set once and never cleared. `started` is the gate's
/// own guard, so the start action fires on exactly one `mark_ready` call
/// whatever the order or repetition of the completion signals.
#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub environment_loaded: bool,
    pub(super) static_model_ready: bool,
    pub(super) animated_model_ready: bool,
    pub(super) started: bool,
}

impl LoadingProgress {
    /// Record a completed stream. Returns `true` on the single call that
    /// finds both streams ready while the gate is still closed.
    pub fn mark_ready(&mut self, stream: AssetStream) -> bool {
        match stream {
            AssetStream::StaticModel => self.static_model_ready = true,
            AssetStream::AnimatedModel => self.animated_model_ready = true,
        }

        if self.started || !self.all_ready() {
            return false;
        }
        self.started = true;
        true
    }

    pub fn is_ready(&self, stream: AssetStream) -> bool {
        match stream {
            AssetStream::StaticModel => self.static_model_ready,
            AssetStream::AnimatedModel => self.animated_model_ready,
        }
    }

    pub fn all_ready(&self) -> bool {
        self.static_model_ready && self.animated_model_ready
    }
}

/// Feed completion events into the gate and leave `Loading` when it opens.
pub fn run_readiness_gate(
    mut events: EventReader<AssetStreamReady>,
    mut progress: ResMut<LoadingProgress>,
    mut next_state: ResMut<NextState<IntroState>>,
) {
    for AssetStreamReady(stream) in events.read() {
        if progress.is_ready(*stream) {
            debug!("{:?} reported ready again", stream);
        } else {
            info!("✓ {:?} ready", stream);
        }
        if progress.mark_ready(*stream) {
            info!("→ All models ready, starting intro");
            next_state.set(IntroState::Starting);
        }
    }
}
