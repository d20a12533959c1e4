//! Asset loading pipeline and the readiness gate.
//!
//! The manifest is read first; it triggers the backdrop, particles, environment
//! map and animated model. The environment map in turn triggers the static
//! model. Both models report through `AssetStreamReady` into the gate.

use bevy::prelude::*;

use crate::engine::core::app_state::{FrameLoopSet, IntroState};

/// Environment map conversion and the static model request that follows it.
pub mod environment_loader;

/// One-shot logging of failed loads.
pub mod failures;

/// Manifest request and the scene loads it starts.
pub mod manifest_loader;

/// Model spawning and scene-instance-ready observers.
pub mod model_loader;

/// Loading milestones and the two-stream readiness gate.
pub mod progress;

use environment_loader::check_environment_loading;
use failures::report_failed_loads;
use manifest_loader::{ManifestLoader, load_manifest_system};
use progress::{AssetStreamReady, LoadingProgress, run_readiness_gate};

pub struct IntroLoadingPlugin;

impl Plugin for IntroLoadingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LoadingProgress>()
            .init_resource::<ManifestLoader>()
            .add_event::<AssetStreamReady>()
            .add_systems(
                Update,
                (
                    (load_manifest_system, check_environment_loading, report_failed_loads)
                        .chain()
                        .in_set(FrameLoopSet::Input),
                    run_readiness_gate
                        .in_set(FrameLoopSet::Director)
                        .run_if(in_state(IntroState::Loading)),
                ),
            );
    }
}
