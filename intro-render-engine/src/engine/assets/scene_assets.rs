use bevy::asset::UntypedAssetId;
use bevy::prelude::*;

use crate::engine::animation::playback::ClipPlayback;

/// Handles of every asset requested by the loaders. Defaults to empty handles
/// until the manifest has been read.
#[derive(Resource, Default)]
pub struct IntroAssets {
    pub environment_map: Handle<Image>,
    pub static_model: Handle<Scene>,
    pub animated_model: Handle<Scene>,
    pub animated_clip: Handle<AnimationClip>,
    pub background_texture: Handle<Image>,
    pub particle_texture: Handle<Image>,
}

impl IntroAssets {
    /// Handles worth watching for load failures, labelled for logs.
    pub fn tracked(&self) -> [(&'static str, UntypedAssetId); 6] {
        [
            ("environment map", self.environment_map.id().untyped()),
            ("static model", self.static_model.id().untyped()),
            ("animated model", self.animated_model.id().untyped()),
            ("animation clip", self.animated_clip.id().untyped()),
            ("background texture", self.background_texture.id().untyped()),
            ("particle texture", self.particle_texture.id().untyped()),
        ]
    }
}

/// Skeletal animation bound to the animated model: the entity carrying the
/// engine's `AnimationPlayer`, the graph node to drive and our playback clock.
#[derive(Debug, Clone)]
pub struct SkeletalAnimation {
    pub player: Entity,
    pub node: AnimationNodeIndex,
    pub clip: Handle<AnimationClip>,
    pub playback: ClipPlayback,
}

/// Objects produced by the loaders. Each field is written once when its asset
/// arrives and read by the frame loop afterwards.
#[derive(Resource, Default)]
pub struct SceneState {
    pub static_model: Option<Entity>,
    pub animated_model: Option<Entity>,
    pub animation: Option<SkeletalAnimation>,
}
